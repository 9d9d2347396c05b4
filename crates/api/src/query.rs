//! Shared query parameter types for API handlers.
//!
//! Listing parameters stay raw strings here: the normalizer in
//! `dealhub_core::listing` absorbs malformed values (defaulting page and
//! sort) instead of the extractor rejecting the request with a 400.

use serde::Deserialize;

/// Raw query parameters for the global store listing
/// (`?page=&search=&category=&sort=`).
#[derive(Debug, Deserialize)]
pub struct StoreListingParams {
    pub page: Option<String>,
    pub search: Option<String>,
    pub category: Option<String>,
    pub sort: Option<String>,
}

/// Raw query parameters for a category-scoped store listing
/// (`?page=&search=&sort=`). The category comes from the path.
#[derive(Debug, Deserialize)]
pub struct CategoryStoresParams {
    pub page: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
}
