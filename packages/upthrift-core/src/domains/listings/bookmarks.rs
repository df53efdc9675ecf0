use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::common::ListingId;

/// The listings a member has saved. Membership only; order is irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkSet {
    ids: HashSet<ListingId>,
}

impl BookmarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: ListingId) -> bool {
        self.ids.contains(&id)
    }

    /// Add `id` if absent, remove it if present. Returns whether it is now bookmarked.
    pub fn toggle(&mut self, id: ListingId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ListingId> + '_ {
        self.ids.iter().copied()
    }
}

impl FromIterator<ListingId> for BookmarkSet {
    fn from_iter<I: IntoIterator<Item = ListingId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

/// Value-style toggle: returns the bookmark set with `id` flipped.
pub fn toggle_bookmark(mut bookmarks: BookmarkSet, id: ListingId) -> BookmarkSet {
    bookmarks.toggle(id);
    bookmarks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut bookmarks = BookmarkSet::new();
        let id = ListingId::new(3);

        assert!(bookmarks.toggle(id));
        assert!(bookmarks.contains(id));
        assert!(!bookmarks.toggle(id));
        assert!(bookmarks.is_empty());
    }

    #[test]
    fn toggle_bookmark_twice_is_identity() {
        let original: BookmarkSet = [1, 5, 9].into_iter().map(ListingId::new).collect();

        let once = toggle_bookmark(original.clone(), ListingId::new(5));
        assert_eq!(once.len(), 2);

        let twice = toggle_bookmark(once, ListingId::new(5));
        assert_eq!(twice, original);
    }
}
