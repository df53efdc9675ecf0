pub mod id;
pub mod ids;
pub mod pagination;

pub use ids::{ContributionId, ConversationId, Id, ListingId, MessageId};
pub use pagination::{paginate, Page, DEFAULT_PAGE_SIZE};
