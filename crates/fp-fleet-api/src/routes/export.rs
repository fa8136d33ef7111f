//! CSV export endpoint.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use fp_csv_tools::vehicles_to_csv;

use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/v1/vehicles/export — the full fleet as CSV text.
///
/// Re-fetches the vehicle set so the export always reflects current
/// storage, not a cached list.
pub async fn export_vehicles(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let vehicles = state.store.list_all().await?;
    let csv = vehicles_to_csv(&vehicles);
    tracing::debug!(rows = vehicles.len(), "exported vehicle CSV");
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"vehicles.csv\"",
            ),
        ],
        csv,
    ))
}
