//! Typed UUID wrapper.
//!
//! `Id<T>` wraps a v4 `Uuid` tagged with an entity marker, so a
//! `ConversationId` can never be passed where a `ContributionId` is expected.
//!
//! ```rust
//! use upthrift_core::common::{ContributionId, ConversationId};
//!
//! let chat = ConversationId::new();
//! let item = ContributionId::new();
//! assert_ne!(chat.as_uuid(), item.as_uuid());
//!
//! // Compile error:
//! // let wrong: ContributionId = chat;
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;
use uuid::Uuid;

#[repr(transparent)]
pub struct Id<T>(Uuid, PhantomData<fn() -> T>);

impl<T> Id<T> {
    /// Generate a fresh random (v4) id.
    pub fn new() -> Self {
        Self(Uuid::new_v4(), PhantomData)
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid, PhantomData)
    }

    /// Fixed id, for fixtures.
    pub const fn from_u128(value: u128) -> Self {
        Self(Uuid::from_u128(value), PhantomData)
    }

    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?, PhantomData))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

// Manual impls: derives would put bounds on the marker type.

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.0)
    }
}

impl<T> Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<T> FromStr for Id<T> {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Uuid::deserialize(deserializer).map(Self::from_uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Thing;

    #[test]
    fn fresh_ids_differ() {
        assert_ne!(Id::<Thing>::new(), Id::<Thing>::new());
    }

    #[test]
    fn display_and_parse_agree() {
        let id = Id::<Thing>::from_u128(42);
        let parsed: Id<Thing> = id.to_string().parse().unwrap();

        assert_eq!(parsed, id);
        assert_eq!(id.to_string(), "00000000-0000-0000-0000-00000000002a");
    }

    #[test]
    fn serializes_as_bare_uuid() {
        let id = Id::<Thing>::from_u128(1);
        let json = serde_json::to_string(&id).unwrap();

        assert_eq!(json, "\"00000000-0000-0000-0000-000000000001\"");
        assert_eq!(serde_json::from_str::<Id<Thing>>(&json).unwrap(), id);
    }
}
