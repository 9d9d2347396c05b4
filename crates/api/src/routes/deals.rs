//! Route definitions for deals.

use axum::routing::post;
use axum::Router;

use crate::handlers::deals;
use crate::state::AppState;

/// Routes mounted at `/deals`.
///
/// ```text
/// POST /{id}/use   -> record_use
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}/use", post(deals::record_use))
}
