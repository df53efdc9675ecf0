//! Typed ID definitions for domain entities.
//!
//! Listings keep the integer ids of the seed fixture; conversations use UUIDs
//! so a synthesized conversation can never collide with a fixture one.
//!
//! ```rust
//! use upthrift_core::common::{ConversationId, ListingId};
//!
//! let listing = ListingId::new(7);
//! let chat = ConversationId::new();
//! assert_eq!(listing.get(), 7);
//! assert_ne!(chat, ConversationId::new());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

pub use super::id::Id;

/// Identifier of a listing. Unique and stable for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(u64);

impl ListingId {
    pub const fn new(id: u64) -> Self {
        ListingId(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ListingId {
    fn from(id: u64) -> Self {
        ListingId(id)
    }
}

/// Identifier of a support transcript message. Monotonic within a transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(u64);

impl MessageId {
    pub const fn new(id: u64) -> Self {
        MessageId(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    pub const fn next(self) -> Self {
        MessageId(self.0 + 1)
    }
}

impl Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Marker for chat conversations.
pub struct Conversation;

/// Marker for contributions posted during the session.
pub struct Contribution;

pub type ConversationId = Id<Conversation>;

pub type ContributionId = Id<Contribution>;
