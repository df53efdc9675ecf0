pub mod form;
pub mod models;

pub use form::{ContributionForm, MAX_PHOTOS, PICKUP_LOCATION};
pub use models::{Contribution, DEFAULT_IMAGE_URL, SUCCESS_NOTICE};
