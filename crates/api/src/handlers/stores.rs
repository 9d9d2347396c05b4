//! Handlers for the `/stores` resource.
//!
//! The listing handler is the catalog query pipeline end to end: raw
//! params are normalized into a descriptor, the page fetch and total count
//! run concurrently, and the pagination metadata is derived from both.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use dealhub_core::discount::{days_until_expiration, discount_label};
use dealhub_core::error::CoreError;
use dealhub_core::listing::{total_pages, ListingQuery, PageNav, STORE_PAGE_SIZE};
use dealhub_core::types::Timestamp;
use dealhub_db::models::category::Category;
use dealhub_db::models::deal::Deal;
use dealhub_db::models::store::{Store, StoreListItem};
use dealhub_db::repositories::StoreRepo;

use crate::error::{AppError, AppResult};
use crate::query::StoreListingParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response payloads
// ---------------------------------------------------------------------------

/// One page of stores plus its pagination metadata.
#[derive(Debug, Serialize)]
pub struct StoreListing {
    pub stores: Vec<StoreListItem>,
    pub total_count: i64,
    pub current_page: i64,
    pub total_pages: i64,
    pub page_size: i64,
    #[serde(flatten)]
    pub nav: PageNav,
}

/// Assemble the listing payload from a page of rows and the total count.
pub(crate) fn listing_payload(
    stores: Vec<StoreListItem>,
    total_count: i64,
    query: &ListingQuery,
) -> StoreListing {
    let pages = total_pages(total_count, query.page_size);
    StoreListing {
        stores,
        total_count,
        current_page: query.page,
        total_pages: pages,
        page_size: query.page_size,
        nav: PageNav::new(query.page, pages),
    }
}

/// A deal decorated with its display-ready values.
#[derive(Debug, Serialize)]
pub struct DealView {
    #[serde(flatten)]
    pub deal: Deal,
    pub discount_label: String,
    pub days_until_expiration: Option<i64>,
}

impl DealView {
    fn new(deal: Deal, now: Timestamp) -> Self {
        let label = discount_label(
            deal.deal_type,
            deal.discount_percentage,
            deal.discount_amount,
        );
        let days = days_until_expiration(deal.expiration_date, now);
        Self {
            deal,
            discount_label: label,
            days_until_expiration: days,
        }
    }
}

/// Store detail: the store, its category, and its deals split into active
/// and expired groups by the stored `is_expired` flag.
#[derive(Debug, Serialize)]
pub struct StoreDetail {
    #[serde(flatten)]
    pub store: Store,
    pub category: Category,
    pub active_deals: Vec<DealView>,
    pub expired_deals: Vec<DealView>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/stores?page=&search=&category=&sort=
///
/// Global store listing, 20 per page.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<StoreListingParams>,
) -> AppResult<impl IntoResponse> {
    let query = ListingQuery::normalize(
        params.page.as_deref(),
        params.search.as_deref(),
        params.category.as_deref(),
        params.sort.as_deref(),
        STORE_PAGE_SIZE,
    );

    // Page fetch and total count have no ordering dependency; if either
    // fails the whole request fails.
    let (stores, total_count) = tokio::try_join!(
        StoreRepo::list(&state.pool, &query),
        StoreRepo::count(&state.pool, &query)
    )?;

    Ok(Json(DataResponse {
        data: listing_payload(stores, total_count, &query),
    }))
}

/// GET /api/v1/stores/{slug}
///
/// Store detail with deals grouped by the stored expiry flag, each carrying
/// a discount label and expiration countdown.
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let detail = StoreRepo::find_by_slug_with_deals(&state.pool, &slug)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Store",
            key: slug,
        }))?;

    let now = Utc::now();
    let (active, expired): (Vec<_>, Vec<_>) =
        detail.deals.into_iter().partition(|deal| !deal.is_expired);

    Ok(Json(DataResponse {
        data: StoreDetail {
            store: detail.store,
            category: detail.category,
            active_deals: active.into_iter().map(|d| DealView::new(d, now)).collect(),
            expired_deals: expired.into_iter().map(|d| DealView::new(d, now)).collect(),
        },
    }))
}
