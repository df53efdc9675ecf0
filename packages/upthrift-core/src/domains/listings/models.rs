use serde::{Deserialize, Serialize};
use std::fmt;

use crate::common::ListingId;

/// Garment size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Size {
    XS,
    S,
    M,
    L,
    XL,
    XXL,
}

impl Size {
    pub fn label(&self) -> &'static str {
        match self {
            Size::XS => "XS",
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
            Size::XL => "XL",
            Size::XXL => "XXL",
        }
    }

    pub fn variants() -> &'static [Size] {
        &[Size::XS, Size::S, Size::M, Size::L, Size::XL, Size::XXL]
    }

    /// Parse a select-box value. Empty or unknown values yield `None`.
    pub fn from_label(label: &str) -> Option<Size> {
        Size::variants().iter().copied().find(|size| size.label() == label)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The member who posted a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contributor {
    pub name: String,
    #[serde(rename = "avatar")]
    pub avatar_url: String,
    /// 0.0 to 5.0
    pub rating: f32,
    pub total_donations: u32,
}

impl Contributor {
    /// Initials for the avatar fallback ("Sarah Johnson" -> "SJ").
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }

    /// Rating with one decimal, as shown on the listing detail.
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.rating)
    }
}

/// A single shareable clothing item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    #[serde(rename = "image")]
    pub image_url: String,
    pub location: String,
    pub size: Size,
    pub style: String,
    pub color: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Miles from the viewer, never negative.
    pub distance: f64,
    pub contributor: Contributor,
}

impl Listing {
    /// Shareable link used in the chat pre-filled message.
    pub fn share_link(&self, origin: &str) -> String {
        format!("{}/#listing-{}", origin.trim_end_matches('/'), self.id)
    }

    /// Distance chip text ("2mi").
    pub fn distance_label(&self) -> String {
        format!("{}mi", trim_number(self.distance))
    }
}

/// Render whole numbers without a fractional part (2.0 -> "2", 2.5 -> "2.5").
pub(crate) fn trim_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contributor(name: &str) -> Contributor {
        Contributor {
            name: name.to_string(),
            avatar_url: String::new(),
            rating: 4.75,
            total_donations: 3,
        }
    }

    #[test]
    fn initials_take_first_letter_of_each_word() {
        assert_eq!(contributor("Sarah Johnson").initials(), "SJ");
        assert_eq!(contributor("Mary Ann  Lee").initials(), "MAL");
    }

    #[test]
    fn rating_label_has_one_decimal() {
        assert_eq!(contributor("Sam Lee").rating_label(), "4.8");
    }

    #[test]
    fn size_labels_round_trip() {
        for size in Size::variants() {
            assert_eq!(Size::from_label(size.label()), Some(*size));
        }
        assert_eq!(Size::from_label(""), None);
    }

    #[test]
    fn share_link_ignores_trailing_slash() {
        let listing = Listing {
            id: ListingId::new(12),
            title: "Rain Coat".into(),
            image_url: String::new(),
            location: "Queens, NY".into(),
            size: Size::M,
            style: "Casual".into(),
            color: "Yellow".into(),
            kind: "Jacket".into(),
            distance: 4.0,
            contributor: contributor("Ana Cruz"),
        };

        assert_eq!(
            listing.share_link("https://upthrift.app/"),
            "https://upthrift.app/#listing-12"
        );
        assert_eq!(listing.distance_label(), "4mi");
    }
}
