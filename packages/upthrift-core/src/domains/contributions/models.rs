use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::ContributionId;
use crate::domains::listings::{Contributor, Size};

/// Cover image used when a contribution has no photos.
pub const DEFAULT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1544966503-7cc5ac882d5f?w=400&h=400&fit=crop";

pub const SUCCESS_NOTICE: &str =
    "Contribution posted successfully! Your item is now available for others to collect.";

/// An item the member posted during this session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    pub id: ContributionId,
    pub title: String,
    pub description: String,
    pub size: Size,
    pub color: String,
    pub style: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub condition: String,
    pub location: String,
    /// Cover image; the first photo.
    #[serde(rename = "image")]
    pub image_url: String,
    pub images: Vec<String>,
    /// Miles, 1 to 5.
    pub distance: u32,
    pub contributor: Contributor,
    pub contributed_at: DateTime<Utc>,
}
