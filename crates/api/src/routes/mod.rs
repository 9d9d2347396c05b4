pub mod categories;
pub mod deals;
pub mod health;
pub mod stores;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /stores                          global store listing (paginated)
/// /stores/{slug}                   store detail with grouped deals
///
/// /categories                      all categories with store counts
/// /categories/{slug}/stores        category-scoped store listing
///
/// /deals/{id}/use                  record one deal use (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/stores", stores::router())
        .nest("/categories", categories::router())
        .nest("/deals", deals::router())
}
