//! Feed filter criteria and the stable filter over listings.

use serde::{Deserialize, Serialize};

use super::bookmarks::BookmarkSet;
use super::models::Listing;
use super::options::{MAX_RADIUS_MILES, MIN_RADIUS_MILES};

/// Attribute filters that hold a single exact-match value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterField {
    Style,
    Color,
    Type,
}

impl FilterField {
    pub fn label(&self) -> &'static str {
        match self {
            FilterField::Style => "Style",
            FilterField::Color => "Color",
            FilterField::Type => "Clothing Type",
        }
    }

    pub fn variants() -> &'static [FilterField] {
        &[FilterField::Style, FilterField::Color, FilterField::Type]
    }
}

/// The active filter state applied to the listing set.
///
/// Empty strings and `None` both mean "no filter" for the attribute fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub style: Option<String>,
    pub color: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Maximum distance in miles; `None` disables the radius check.
    pub radius: Option<u32>,
    pub show_favorites_only: bool,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            style: None,
            color: None,
            kind: None,
            radius: Some(MAX_RADIUS_MILES),
            show_favorites_only: false,
        }
    }
}

impl FilterCriteria {
    /// Criteria that let every listing through.
    pub fn unrestricted() -> Self {
        Self {
            radius: None,
            ..Self::default()
        }
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = non_empty(style.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = non_empty(color.into());
        self
    }

    pub fn with_type(mut self, kind: impl Into<String>) -> Self {
        self.kind = non_empty(kind.into());
        self
    }

    pub fn with_radius(mut self, radius: Option<u32>) -> Self {
        self.radius = radius;
        self
    }

    pub fn favorites_only(mut self, enabled: bool) -> Self {
        self.show_favorites_only = enabled;
        self
    }

    /// Current value of an attribute filter, `None` when inactive.
    pub fn value(&self, field: FilterField) -> Option<&str> {
        let slot = match field {
            FilterField::Style => &self.style,
            FilterField::Color => &self.color,
            FilterField::Type => &self.kind,
        };
        slot.as_deref().filter(|v| !v.is_empty())
    }

    /// Select `value` for `field`; selecting the active value clears it.
    pub fn toggle(&mut self, field: FilterField, value: &str) {
        let next = if self.value(field) == Some(value) {
            None
        } else {
            non_empty(value.to_string())
        };

        match field {
            FilterField::Style => self.style = next,
            FilterField::Color => self.color = next,
            FilterField::Type => self.kind = next,
        }
    }

    /// Set the slider radius, clamped to the slider range.
    pub fn set_radius(&mut self, miles: u32) {
        self.radius = Some(miles.clamp(MIN_RADIUS_MILES, MAX_RADIUS_MILES));
    }

    pub fn toggle_favorites_only(&mut self) {
        self.show_favorites_only = !self.show_favorites_only;
    }

    /// Labels for the chips above the grid, in display order.
    ///
    /// The radius is not a chip; it is always visible on the slider.
    pub fn active_chips(&self) -> Vec<String> {
        let mut chips = Vec::new();
        if self.show_favorites_only {
            chips.push("Favorites Only".to_string());
        }
        for field in FilterField::variants() {
            if let Some(value) = self.value(*field) {
                chips.push(value.to_string());
            }
        }
        chips
    }

    /// Whether `listing` passes every active criterion.
    pub fn matches(&self, listing: &Listing, bookmarks: &BookmarkSet) -> bool {
        if self.show_favorites_only && !bookmarks.contains(listing.id) {
            return false;
        }
        if let Some(radius) = self.radius {
            if listing.distance > f64::from(radius) {
                return false;
            }
        }
        if let Some(style) = self.value(FilterField::Style) {
            if listing.style != style {
                return false;
            }
        }
        if let Some(color) = self.value(FilterField::Color) {
            if listing.color != color {
                return false;
            }
        }
        if let Some(kind) = self.value(FilterField::Type) {
            if listing.kind != kind {
                return false;
            }
        }
        true
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Stable filter: the listings passing `criteria`, in their original order.
pub fn filter<'a>(
    listings: &'a [Listing],
    criteria: &FilterCriteria,
    bookmarks: &BookmarkSet,
) -> Vec<&'a Listing> {
    listings
        .iter()
        .filter(|listing| criteria.matches(listing, bookmarks))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ListingId;
    use crate::domains::listings::models::{Contributor, Size};

    fn listing(id: u64, style: &str, color: &str, kind: &str, distance: f64) -> Listing {
        Listing {
            id: ListingId::new(id),
            title: format!("Item {id}"),
            image_url: String::new(),
            location: "Brooklyn, NY".into(),
            size: Size::M,
            style: style.into(),
            color: color.into(),
            kind: kind.into(),
            distance,
            contributor: Contributor {
                name: "Sam Lee".into(),
                avatar_url: String::new(),
                rating: 4.5,
                total_donations: 1,
            },
        }
    }

    #[test]
    fn toggle_same_value_clears_field() {
        let mut criteria = FilterCriteria::default();

        criteria.toggle(FilterField::Style, "Casual");
        assert_eq!(criteria.value(FilterField::Style), Some("Casual"));

        criteria.toggle(FilterField::Style, "Formal");
        assert_eq!(criteria.value(FilterField::Style), Some("Formal"));

        criteria.toggle(FilterField::Style, "Formal");
        assert_eq!(criteria.value(FilterField::Style), None);
    }

    #[test]
    fn empty_string_is_no_filter() {
        let criteria = FilterCriteria::default().with_color("");
        assert_eq!(criteria.color, None);

        let raw = FilterCriteria {
            color: Some(String::new()),
            ..FilterCriteria::default()
        };
        assert!(raw.matches(&listing(1, "Casual", "Red", "Shirt", 3.0), &BookmarkSet::new()));
    }

    #[test]
    fn radius_is_inclusive() {
        let criteria = FilterCriteria::default().with_radius(Some(5));
        let bookmarks = BookmarkSet::new();

        assert!(criteria.matches(&listing(1, "Casual", "Red", "Shirt", 5.0), &bookmarks));
        assert!(!criteria.matches(&listing(2, "Casual", "Red", "Shirt", 5.5), &bookmarks));
    }

    #[test]
    fn set_radius_clamps_to_slider_range() {
        let mut criteria = FilterCriteria::default();

        criteria.set_radius(0);
        assert_eq!(criteria.radius, Some(1));

        criteria.set_radius(40);
        assert_eq!(criteria.radius, Some(25));
    }

    #[test]
    fn criteria_combine_with_and() {
        let listings = vec![
            listing(1, "Casual", "Blue", "Shirt", 2.0),
            listing(2, "Casual", "Red", "Shirt", 2.0),
            listing(3, "Formal", "Blue", "Shirt", 2.0),
            listing(4, "Casual", "Blue", "Jeans", 2.0),
        ];
        let criteria = FilterCriteria::default()
            .with_style("Casual")
            .with_color("Blue");

        let ids: Vec<u64> = filter(&listings, &criteria, &BookmarkSet::new())
            .iter()
            .map(|l| l.id.get())
            .collect();

        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn favorites_only_uses_bookmarks() {
        let listings = vec![
            listing(1, "Casual", "Blue", "Shirt", 2.0),
            listing(2, "Casual", "Red", "Shirt", 2.0),
        ];
        let criteria = FilterCriteria::default().favorites_only(true);
        let bookmarks: BookmarkSet = [ListingId::new(2)].into_iter().collect();

        let result = filter(&listings, &criteria, &bookmarks);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, ListingId::new(2));
    }

    #[test]
    fn active_chips_follow_display_order() {
        let mut criteria = FilterCriteria::default()
            .with_type("Shoes")
            .with_style("Sporty");
        criteria.toggle_favorites_only();

        assert_eq!(
            criteria.active_chips(),
            vec!["Favorites Only", "Sporty", "Shoes"]
        );
    }
}
