//! Route definitions for the store catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::stores;
use crate::state::AppState;

/// Routes mounted at `/stores`.
///
/// ```text
/// GET /           -> list
/// GET /{slug}     -> get_by_slug
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(stores::list))
        .route("/{slug}", get(stores::get_by_slug))
}
