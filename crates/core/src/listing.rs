//! Catalog listing contract: query normalization and pagination math.
//!
//! This module lives in `core` (zero internal deps) so the repository and
//! API layers share one definition of how raw query parameters become a
//! filtered, sorted, paginated result set.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Page sizes
// ---------------------------------------------------------------------------

/// Stores per page on the global store listing.
pub const STORE_PAGE_SIZE: i64 = 20;

/// Stores per page on a category-scoped store listing.
pub const CATEGORY_STORE_PAGE_SIZE: i64 = 12;

// ---------------------------------------------------------------------------
// Sort keys
// ---------------------------------------------------------------------------

/// How a store listing is ordered.
///
/// `Name` sorts ascending by lowercased store name. `Deals` sorts descending
/// by the store's count of non-expired deals, ties broken by id ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Deals,
}

impl SortKey {
    /// Parse a raw `sort` parameter. Anything outside the closed set
    /// falls back to `Name`; malformed input is never an error.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("deals") => SortKey::Deals,
            _ => SortKey::Name,
        }
    }
}

// ---------------------------------------------------------------------------
// Listing descriptor
// ---------------------------------------------------------------------------

/// Normalized, validated pagination/filter/sort parameters for one listing
/// query. Constructed per request from untrusted strings, then read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    /// 1-based page number, always >= 1.
    pub page: i64,
    /// Fixed per listing context (12 or 20), never user-supplied.
    pub page_size: i64,
    /// Case-insensitive substring filter on store name. `None` means the
    /// predicate is omitted entirely; an empty parameter normalizes to
    /// `None` rather than an always-true substring match.
    pub search: Option<String>,
    pub sort: SortKey,
    /// Exact-match filter on the owning category's slug.
    pub category_slug: Option<String>,
}

impl ListingQuery {
    /// Build a descriptor from raw query parameters.
    pub fn normalize(
        page: Option<&str>,
        search: Option<&str>,
        category: Option<&str>,
        sort: Option<&str>,
        page_size: i64,
    ) -> Self {
        Self {
            page: normalize_page(page),
            page_size,
            search: normalize_term(search),
            sort: SortKey::parse(sort),
            category_slug: normalize_term(category),
        }
    }

    /// Row offset for the current page.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.page_size
    }
}

/// Parse a raw `page` parameter.
///
/// Missing, non-numeric, zero and negative values all resolve to page 1.
/// No upper bound is applied here; pages past the end of the result set
/// yield an empty page downstream, not an error.
pub fn normalize_page(raw: Option<&str>) -> i64 {
    match raw.and_then(|s| s.parse::<i64>().ok()) {
        Some(page) if page >= 1 => page,
        _ => 1,
    }
}

/// Normalize an optional filter term: absent and empty are equivalent.
fn normalize_term(raw: Option<&str>) -> Option<String> {
    match raw {
        Some(term) if !term.is_empty() => Some(term.to_string()),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Pagination metadata
// ---------------------------------------------------------------------------

/// Total page count for a result set.
///
/// Zero matching rows means zero pages; any requested page is then simply
/// "no results".
pub fn total_pages(total_count: i64, page_size: i64) -> i64 {
    (total_count + page_size - 1) / page_size
}

/// Whether previous/next page links are valid for the current page.
///
/// Out-of-range pages are not clamped here: a request past the last page
/// reports `has_previous = true`, `has_next = false` over an empty page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageNav {
    pub has_previous: bool,
    pub has_next: bool,
}

impl PageNav {
    pub fn new(page: i64, total_pages: i64) -> Self {
        Self {
            has_previous: page > 1,
            has_next: page < total_pages,
        }
    }
}

// ---------------------------------------------------------------------------
// Search patterns
// ---------------------------------------------------------------------------

/// Turn a search term into an ILIKE pattern matching it as a literal
/// substring: `\`, `%` and `_` are escaped, then the term is wrapped
/// in wildcards.
pub fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
