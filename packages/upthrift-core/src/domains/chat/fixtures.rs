//! Mock conversations shown in the chat list.

use super::models::Conversation;
use crate::common::ConversationId;

fn conversation(
    id: u128,
    name: &str,
    last_message: &str,
    time: &str,
    avatar_url: &str,
    unread: bool,
    item: &str,
) -> Conversation {
    Conversation {
        id: ConversationId::from_u128(id),
        name: name.to_string(),
        last_message: last_message.to_string(),
        time: time.to_string(),
        avatar_url: avatar_url.to_string(),
        unread,
        item: item.to_string(),
    }
}

pub fn mock_conversations() -> Vec<Conversation> {
    vec![
        conversation(
            1,
            "Sarah Johnson",
            "Is the vintage jacket still available?",
            "2m ago",
            "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=100&h=100&fit=crop&crop=face",
            true,
            "Vintage Denim Jacket",
        ),
        conversation(
            2,
            "Mike Chen",
            "Thank you for the sweater! It fits perfectly.",
            "1h ago",
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100&h=100&fit=crop&crop=face",
            false,
            "Cozy Sweater",
        ),
        conversation(
            3,
            "Emma Davis",
            "When can I pick up the dress?",
            "3h ago",
            "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=100&h=100&fit=crop&crop=face",
            true,
            "Summer Dress",
        ),
        conversation(
            4,
            "Alex Rivera",
            "Great! See you tomorrow at 3 PM.",
            "1d ago",
            "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop&crop=face",
            false,
            "Designer Jeans",
        ),
    ]
}
