//! Reusable UI components

mod bottom_nav;
mod filters_modal;
mod listing_card;
mod listing_modal;
mod message_bubble;
mod notice;
mod pagination;

pub use bottom_nav::*;
pub use filters_modal::*;
pub use listing_card::*;
pub use listing_modal::*;
pub use message_bubble::*;
pub use notice::*;
pub use pagination::*;
