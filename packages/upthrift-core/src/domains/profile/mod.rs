//! The signed-in member's profile. There is no account backend, so the
//! profile is a fixed fixture.

use serde::{Deserialize, Serialize};

use crate::domains::listings::Contributor;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    pub items_contributed: u32,
    pub items_collected: u32,
    pub rating: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub location: String,
    #[serde(rename = "avatar")]
    pub avatar_url: String,
    pub bio: String,
    pub stats: ProfileStats,
}

impl UserProfile {
    /// The member as shown on listings they contribute.
    pub fn as_contributor(&self) -> Contributor {
        Contributor {
            name: self.name.clone(),
            avatar_url: self.avatar_url.replace("w=200&h=200", "w=100&h=100"),
            rating: self.stats.rating,
            total_donations: self.stats.items_contributed + 1,
        }
    }

    /// Contributed count including items posted this session.
    pub fn items_contributed_with(&self, session_contributions: usize) -> usize {
        self.stats.items_contributed as usize + session_contributions
    }
}

pub fn current_user() -> UserProfile {
    UserProfile {
        name: "Jessica Thompson".into(),
        location: "Brooklyn, NY".into(),
        avatar_url: "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=200&h=200&fit=crop&crop=face".into(),
        bio: "Sustainable fashion lover sharing preloved clothes with the community! 🌱".into(),
        stats: ProfileStats {
            items_contributed: 23,
            items_collected: 15,
            rating: 4.9,
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Contributed,
    Collected,
}

impl ActivityKind {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Contributed => "Contributed",
            ActivityKind::Collected => "Collected",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activity {
    pub kind: ActivityKind,
    pub item: &'static str,
    pub date: &'static str,
}

pub const RECENT_ACTIVITY: &[Activity] = &[
    Activity {
        kind: ActivityKind::Contributed,
        item: "Vintage Denim Jacket",
        date: "2 days ago",
    },
    Activity {
        kind: ActivityKind::Collected,
        item: "Cozy Sweater",
        date: "1 week ago",
    },
    Activity {
        kind: ActivityKind::Contributed,
        item: "Summer Dress",
        date: "2 weeks ago",
    },
];

pub const SETTINGS_LINKS: &[&str] = &[
    "Account Settings",
    "Notification Preferences",
    "Privacy Settings",
    "Help & Support",
    "About UpThrift",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contributor_view_counts_the_new_donation() {
        let contributor = current_user().as_contributor();

        assert_eq!(contributor.name, "Jessica Thompson");
        assert_eq!(contributor.total_donations, 24);
        assert_eq!(contributor.rating_label(), "4.9");
        assert!(contributor.avatar_url.contains("w=100&h=100"));
    }

    #[test]
    fn contributed_count_includes_session_items() {
        assert_eq!(current_user().items_contributed_with(2), 25);
    }
}
