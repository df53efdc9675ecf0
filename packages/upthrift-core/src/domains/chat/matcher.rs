//! Resolve "chat about this listing" into a conversation.

use tracing::debug;

use super::models::{ActiveConversation, ChatContext, Conversation};
use crate::common::ConversationId;

/// Find the conversation with the listing's contributor, or start a new one.
///
/// Conversations are matched on contributor display name, so two different
/// contributors sharing a name land in the same conversation.
// TODO: key conversations by contributor id once listings carry one.
pub fn open_chat(conversations: &[Conversation], context: &ChatContext) -> ActiveConversation {
    match conversations
        .iter()
        .find(|conversation| conversation.name == context.contributor_name)
    {
        Some(existing) => {
            debug!(conversation_id = %existing.id, "Attaching listing to existing conversation");
            ActiveConversation {
                context_listing: Some(context.listing.clone()),
                ..ActiveConversation::from_conversation(existing)
            }
        }
        None => {
            let id = ConversationId::new();
            debug!(conversation_id = %id, contributor = %context.contributor_name, "Starting new conversation");
            ActiveConversation {
                id,
                name: context.contributor_name.clone(),
                avatar_url: context.listing.contributor.avatar_url.clone(),
                context_listing: Some(context.listing.clone()),
            }
        }
    }
}

/// Conversations whose contributor name or item contains `term`, ignoring case.
pub fn search_conversations<'a>(conversations: &'a [Conversation], term: &str) -> Vec<&'a Conversation> {
    let term = term.to_lowercase();
    conversations
        .iter()
        .filter(|conversation| {
            conversation.name.to_lowercase().contains(&term)
                || conversation.item.to_lowercase().contains(&term)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ListingId;
    use crate::domains::chat::fixtures::mock_conversations;
    use crate::domains::listings::seed::embedded_listings;

    #[test]
    fn existing_contributor_reuses_conversation() {
        let conversations = mock_conversations();
        let listing = embedded_listings().unwrap().remove(0);
        assert_eq!(listing.contributor.name, "Sarah Johnson");

        let active = open_chat(&conversations, &ChatContext::for_listing(listing.clone()));

        assert_eq!(active.id, conversations[0].id);
        assert_eq!(active.name, "Sarah Johnson");
        assert_eq!(active.context_listing, Some(listing));
    }

    #[test]
    fn unknown_contributor_gets_fresh_conversation() {
        let conversations = mock_conversations();
        let listing = embedded_listings()
            .unwrap()
            .into_iter()
            .find(|l| l.id == ListingId::new(80))
            .unwrap();

        let first = open_chat(&conversations, &ChatContext::for_listing(listing.clone()));
        let second = open_chat(&conversations, &ChatContext::for_listing(listing.clone()));

        assert_eq!(first.name, "Echo Lee");
        assert_eq!(first.avatar_url, listing.contributor.avatar_url);
        assert!(conversations.iter().all(|c| c.id != first.id));
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn prefilled_message_links_listing() {
        let listing = embedded_listings().unwrap().remove(0);
        let active = open_chat(&mock_conversations(), &ChatContext::for_listing(listing));

        assert_eq!(
            active.prefilled_message("https://upthrift.app"),
            "Hi! I'm interested in your Vintage Denim Jacket. Here's the listing: https://upthrift.app/#listing-1"
        );
    }

    #[test]
    fn search_matches_name_or_item_case_insensitively() {
        let conversations = mock_conversations();

        let by_name: Vec<&str> = search_conversations(&conversations, "mike")
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(by_name, vec!["Mike Chen"]);

        let by_item: Vec<&str> = search_conversations(&conversations, "DRESS")
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(by_item, vec!["Emma Davis"]);

        assert_eq!(search_conversations(&conversations, "").len(), 4);
        assert!(search_conversations(&conversations, "tuxedo").is_empty());
    }
}
