//! Handlers for the `/categories` resource.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use dealhub_core::error::CoreError;
use dealhub_core::listing::{ListingQuery, CATEGORY_STORE_PAGE_SIZE};
use dealhub_db::models::category::{Category, CategoryWithStoreCount};
use dealhub_db::repositories::{CategoryRepo, StoreRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::stores::{listing_payload, StoreListing};
use crate::query::CategoryStoresParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// All categories with store counts, plus the featured subset.
#[derive(Debug, Serialize)]
pub struct CategoryListing {
    pub categories: Vec<CategoryWithStoreCount>,
    pub featured: Vec<CategoryWithStoreCount>,
}

/// A category-scoped store listing, 12 per page.
#[derive(Debug, Serialize)]
pub struct CategoryStores {
    pub category: Category,
    #[serde(flatten)]
    pub listing: StoreListing,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/categories
///
/// List all categories with their store counts, name ascending.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list_with_store_counts(&state.pool).await?;
    let featured = categories.iter().filter(|c| c.featured).cloned().collect();
    Ok(Json(DataResponse {
        data: CategoryListing {
            categories,
            featured,
        },
    }))
}

/// GET /api/v1/categories/{slug}/stores?page=&search=&sort=
///
/// Stores within one category. An unknown slug is a 404, never an
/// empty-but-valid listing.
pub async fn list_stores(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<CategoryStoresParams>,
) -> AppResult<impl IntoResponse> {
    let category = CategoryRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            key: slug,
        }))?;

    let query = ListingQuery::normalize(
        params.page.as_deref(),
        params.search.as_deref(),
        Some(category.slug.as_str()),
        params.sort.as_deref(),
        CATEGORY_STORE_PAGE_SIZE,
    );

    let (stores, total_count) = tokio::try_join!(
        StoreRepo::list(&state.pool, &query),
        StoreRepo::count(&state.pool, &query)
    )?;

    Ok(Json(DataResponse {
        data: CategoryStores {
            category,
            listing: listing_payload(stores, total_count, &query),
        },
    }))
}
