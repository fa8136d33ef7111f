//! Bulk CSV import endpoint.

use axum::Json;
use axum::extract::State;

use crate::error::{ApiError, ApiResult};
use crate::import::{ImportOutcome, ImportSummary, run_import};
use crate::state::AppState;

/// POST /api/v1/vehicles/import — raw CSV text body.
///
/// Responds 400 when the file yields no candidates or any candidate
/// fails validation (no writes in either case); otherwise 200 with
/// the per-batch success/failure counts. Callers should refresh their
/// vehicle list after a completed batch regardless of the counts.
pub async fn import_vehicles(
    State(state): State<AppState>,
    body: String,
) -> ApiResult<Json<ImportSummary>> {
    match run_import(state.store.as_ref(), &body).await {
        ImportOutcome::NoData => Err(ApiError::BadRequest(
            "no valid vehicle data found in CSV".into(),
        )),
        ImportOutcome::Rejected { invalid } => Err(ApiError::BadRequest(format!(
            "{invalid} vehicles have invalid or missing required data"
        ))),
        ImportOutcome::Completed(summary) => Ok(Json(summary)),
    }
}
