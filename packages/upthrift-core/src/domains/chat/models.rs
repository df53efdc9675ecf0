use serde::{Deserialize, Serialize};

use crate::common::ConversationId;
use crate::domains::listings::Listing;

/// A row in the conversation list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: ConversationId,
    /// Contributor display name. Also the key used to find a conversation
    /// when opening a chat from a listing.
    pub name: String,
    pub last_message: String,
    /// Relative time as displayed ("2m ago").
    pub time: String,
    #[serde(rename = "avatar")]
    pub avatar_url: String,
    pub unread: bool,
    /// Title of the item the conversation is about.
    pub item: String,
}

/// "Open chat about this listing with this contributor."
#[derive(Debug, Clone, PartialEq)]
pub struct ChatContext {
    pub listing: Listing,
    pub contributor_name: String,
}

impl ChatContext {
    pub fn for_listing(listing: Listing) -> Self {
        let contributor_name = listing.contributor.name.clone();
        Self {
            listing,
            contributor_name,
        }
    }
}

/// The conversation currently shown in the chat view.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveConversation {
    pub id: ConversationId,
    pub name: String,
    pub avatar_url: String,
    /// Listing the member tapped "I'm Interested!" on, if any.
    pub context_listing: Option<Listing>,
}

impl ActiveConversation {
    pub fn from_conversation(conversation: &Conversation) -> Self {
        Self {
            id: conversation.id,
            name: conversation.name.clone(),
            avatar_url: conversation.avatar_url.clone(),
            context_listing: None,
        }
    }

    /// Link to the context listing, if there is one.
    pub fn listing_link(&self, origin: &str) -> Option<String> {
        self.context_listing
            .as_ref()
            .map(|listing| listing.share_link(origin))
    }

    /// The message pre-filled for the member to send.
    pub fn prefilled_message(&self, origin: &str) -> String {
        match &self.context_listing {
            Some(listing) => format!(
                "Hi! I'm interested in your {}. Here's the listing: {}",
                listing.title,
                listing.share_link(origin)
            ),
            None => "Hi! I'm interested in your item.".to_string(),
        }
    }
}
