//! Error types for the core crate.
//!
//! Form validation never propagates past the form that produced it: each
//! `FieldError` renders as the inline message shown under its input.

use thiserror::Error;

use crate::common::ListingId;

/// Failures while loading the listing seed.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Malformed listing seed: {0}")]
    Seed(#[from] serde_json::Error),

    #[error("Could not read listing seed from {path}: {source}")]
    SeedFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Duplicate listing id {0} in seed")]
    DuplicateListingId(ListingId),
}

/// A single invalid form field. The `Display` text is the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    // Sign-up
    #[error("Please enter your full name")]
    MissingName,

    #[error("Please enter your first and last name")]
    IncompleteName,

    #[error("Please enter your zipcode")]
    MissingZipcode,

    #[error("Please enter a valid 5-digit zipcode")]
    InvalidZipcode,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please enter a valid phone number")]
    InvalidPhone,

    // Contribution
    #[error("Please enter a title for your item")]
    MissingTitle,

    #[error("Please select a {0}")]
    MissingSelection(&'static str),

    #[error("Please add at least one photo to continue")]
    MissingPhoto,
}

/// Why a contribution could not be accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContributionError {
    #[error("{} field(s) need attention", .0.len())]
    Invalid(Vec<FieldError>),

    #[error("You can add at most {max} photos")]
    TooManyPhotos { max: usize },
}
