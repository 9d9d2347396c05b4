//! Handlers for the `/deals` resource.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use dealhub_core::error::CoreError;
use dealhub_core::types::DbId;
use dealhub_db::repositories::DealRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Response payload for a usage-counter bump.
#[derive(Debug, Serialize)]
pub struct DealUsage {
    pub usage_count: i32,
}

/// POST /api/v1/deals/{id}/use
///
/// Record one use of a deal (code copied / link followed) and return the
/// new counter value. The counter accumulates; there is no reset.
pub async fn record_use(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let usage_count = DealRepo::increment_usage(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Deal",
            key: id.to_string(),
        }))?;

    Ok(Json(DataResponse {
        data: DealUsage { usage_count },
    }))
}
