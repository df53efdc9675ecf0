//! The feed's listing catalog.
//!
//! Holds the immutable seed, the active and baseline criteria, the bookmark
//! set and the current page. The presentation layer renders `visible_page()` and forwards
//! user actions through the `on_*` callbacks.

use std::sync::Arc;
use tracing::debug;

use super::bookmarks::BookmarkSet;
use super::filter::{filter, FilterCriteria};
use super::models::Listing;
use crate::common::pagination::{clamp_page, paginate};
use crate::common::{ListingId, Page, DEFAULT_PAGE_SIZE};

#[derive(Debug, Clone, PartialEq)]
pub struct ListingCatalog {
    listings: Arc<[Listing]>,
    criteria: FilterCriteria,
    /// What "Clear All" returns to.
    baseline: FilterCriteria,
    bookmarks: BookmarkSet,
    page: usize,
    page_size: usize,
}

impl ListingCatalog {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self::with_page_size(listings, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(listings: Vec<Listing>, page_size: usize) -> Self {
        Self {
            listings: listings.into(),
            criteria: FilterCriteria::default(),
            baseline: FilterCriteria::default(),
            bookmarks: BookmarkSet::new(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Start from custom default criteria (e.g. a configured radius).
    /// Clearing the filters returns to these.
    pub fn with_criteria(mut self, criteria: FilterCriteria) -> Self {
        self.baseline = criteria.clone();
        self.criteria = criteria;
        self
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn baseline_criteria(&self) -> &FilterCriteria {
        &self.baseline
    }

    pub fn bookmarks(&self) -> &BookmarkSet {
        &self.bookmarks
    }

    pub fn is_bookmarked(&self, id: ListingId) -> bool {
        self.bookmarks.contains(id)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Listings passing the current criteria, in seed order.
    pub fn filtered(&self) -> Vec<&Listing> {
        filter(&self.listings, &self.criteria, &self.bookmarks)
    }

    /// The page the feed should render.
    pub fn visible_page(&self) -> Page<&Listing> {
        paginate(&self.filtered(), self.page, self.page_size)
    }

    pub fn total_pages(&self) -> usize {
        self.visible_page().total_pages
    }

    // ------------------------------------------------------------------------
    // Presentation callbacks
    // ------------------------------------------------------------------------

    /// Replace the criteria. The current page is reset to 1.
    pub fn on_filter_change(&mut self, criteria: FilterCriteria) {
        debug!(?criteria, "Feed criteria changed");
        self.criteria = criteria;
        self.page = 1;
    }

    /// Drop every filter, back to the baseline criteria.
    pub fn on_filters_cleared(&mut self) {
        self.on_filter_change(self.baseline.clone());
    }

    /// Jump to `page`, clamped to the available range.
    pub fn on_page_change(&mut self, page: usize) {
        let count = self.filtered().len();
        self.page = clamp_page(page, count, self.page_size);
        debug!(requested = page, page = self.page, "Feed page changed");
    }

    pub fn next_page(&mut self) {
        self.on_page_change(self.page.saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.on_page_change(self.page.saturating_sub(1));
    }

    /// Flip a bookmark. Returns whether the listing is now bookmarked.
    ///
    /// With favorites-only active the filtered set can shrink, so the page is
    /// clamped again afterwards.
    pub fn on_bookmark_toggle(&mut self, id: ListingId) -> bool {
        let bookmarked = self.bookmarks.toggle(id);
        debug!(listing_id = %id, bookmarked, "Bookmark toggled");
        self.clamp_current_page();
        bookmarked
    }

    /// Look up a listing for the detail view.
    pub fn on_select_listing(&self, id: ListingId) -> Option<&Listing> {
        self.listings.iter().find(|listing| listing.id == id)
    }

    fn clamp_current_page(&mut self) {
        let count = self.filtered().len();
        self.page = clamp_page(self.page, count, self.page_size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::listings::seed::embedded_listings;

    fn catalog() -> ListingCatalog {
        ListingCatalog::new(embedded_listings().unwrap())
    }

    fn ids(page: &Page<&Listing>) -> Vec<u64> {
        page.items.iter().map(|l| l.id.get()).collect()
    }

    #[test]
    fn seed_has_five_pages() {
        let catalog = catalog();
        let page = catalog.visible_page();

        assert_eq!(page.total_pages, 5);
        assert_eq!(ids(&page), (1..=16).collect::<Vec<_>>());
    }

    #[test]
    fn last_page_holds_items_65_to_80() {
        let mut catalog = catalog();
        catalog.on_page_change(5);

        assert_eq!(ids(&catalog.visible_page()), (65..=80).collect::<Vec<_>>());
    }

    #[test]
    fn filter_change_resets_page() {
        let mut catalog = catalog();
        catalog.on_page_change(4);
        assert_eq!(catalog.page(), 4);

        catalog.on_filter_change(FilterCriteria::default().with_type("Shoes"));
        assert_eq!(catalog.page(), 1);
        assert_eq!(catalog.total_pages(), 1);
    }

    #[test]
    fn clearing_filters_returns_to_baseline() {
        let baseline = FilterCriteria::default().with_radius(Some(10));
        let mut catalog = catalog().with_criteria(baseline.clone());

        let mut edited = baseline.clone().with_style("Vintage").favorites_only(true);
        edited.set_radius(3);
        catalog.on_filter_change(edited);
        catalog.on_filters_cleared();

        assert_eq!(catalog.criteria(), &baseline);
        assert_eq!(catalog.criteria().radius, Some(10));
        assert!(catalog.criteria().active_chips().is_empty());
        assert_eq!(catalog.page(), 1);
    }

    #[test]
    fn next_and_previous_stay_in_range() {
        let mut catalog = catalog();

        catalog.previous_page();
        assert_eq!(catalog.page(), 1);

        for _ in 0..10 {
            catalog.next_page();
        }
        assert_eq!(catalog.page(), 5);
    }

    #[test]
    fn unbookmarking_in_favorites_view_clamps_page() {
        let mut catalog = ListingCatalog::with_page_size(embedded_listings().unwrap(), 2);
        for id in 1..=3 {
            catalog.on_bookmark_toggle(ListingId::new(id));
        }
        catalog.on_filter_change(FilterCriteria::default().favorites_only(true));
        catalog.on_page_change(2);
        assert_eq!(ids(&catalog.visible_page()), vec![3]);

        catalog.on_bookmark_toggle(ListingId::new(3));

        assert_eq!(catalog.page(), 1);
        assert_eq!(ids(&catalog.visible_page()), vec![1, 2]);
    }

    #[test]
    fn select_listing_finds_by_id() {
        let catalog = catalog();

        let listing = catalog.on_select_listing(ListingId::new(80)).unwrap();
        assert_eq!(listing.title, "Fedora Hat");
        assert!(catalog.on_select_listing(ListingId::new(999)).is_none());
    }
}
