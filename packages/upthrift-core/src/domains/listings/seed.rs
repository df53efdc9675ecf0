//! Static listing seed.
//!
//! The 80 fixture listings ship inside the crate; a JSON file with the same
//! shape can replace them through `Config::seed_path`.

use std::collections::HashSet;
use tracing::info;

use super::models::Listing;
use crate::config::Config;
use crate::error::CatalogError;

const EMBEDDED_SEED: &str = include_str!("../../../data/listings.json");

/// Parse a JSON array of listings, rejecting duplicate ids.
pub fn parse_listings(json: &str) -> Result<Vec<Listing>, CatalogError> {
    let listings: Vec<Listing> = serde_json::from_str(json)?;

    let mut seen = HashSet::with_capacity(listings.len());
    for listing in &listings {
        if !seen.insert(listing.id) {
            return Err(CatalogError::DuplicateListingId(listing.id));
        }
    }

    Ok(listings)
}

/// The listings embedded in the crate.
pub fn embedded_listings() -> Result<Vec<Listing>, CatalogError> {
    parse_listings(EMBEDDED_SEED)
}

/// Load the seed named by `config`, or the embedded one.
pub fn load_listings(config: &Config) -> Result<Vec<Listing>, CatalogError> {
    let listings = match &config.seed_path {
        Some(path) => {
            let json = std::fs::read_to_string(path).map_err(|source| CatalogError::SeedFile {
                path: path.display().to_string(),
                source,
            })?;
            parse_listings(&json)?
        }
        None => embedded_listings()?,
    };

    info!(count = listings.len(), "Listing seed loaded");
    Ok(listings)
}
