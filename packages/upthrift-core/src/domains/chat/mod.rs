pub mod fixtures;
pub mod matcher;
pub mod models;

pub use fixtures::mock_conversations;
pub use matcher::{open_chat, search_conversations};
pub use models::{ActiveConversation, ChatContext, Conversation};
