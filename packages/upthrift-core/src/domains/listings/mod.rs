pub mod bookmarks;
pub mod catalog;
pub mod filter;
pub mod models;
pub mod options;
pub mod seed;

pub use bookmarks::{toggle_bookmark, BookmarkSet};
pub use catalog::ListingCatalog;
pub use filter::{filter, FilterCriteria, FilterField};
pub use models::{Contributor, Listing, Size};
pub use seed::{load_listings, parse_listings};
