// UpThrift - Core
//
// Domain logic for the UpThrift clothing-sharing app. Everything here is pure,
// in-memory state: the web front-end renders it and feeds user actions back in
// as events through the application machine.

pub mod common;
pub mod config;
pub mod domains;
pub mod error;
pub mod machines;

pub use config::*;
pub use error::{CatalogError, ContributionError, FieldError};
