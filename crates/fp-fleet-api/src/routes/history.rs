//! Vehicle history endpoints.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;

use fp_vehicle::{NewHistoryEntry, VehicleHistory, VehicleStatus};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// GET /api/v1/vehicles/:id/history — history rows, newest first.
pub async fn list_history(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Vec<VehicleHistory>>> {
    if state.store.get(id).await?.is_none() {
        return Err(ApiError::NotFound(format!("vehicle {id} not found")));
    }
    Ok(Json(state.store.history_for(id).await?))
}

/// Request body for appending a history entry. The vehicle id comes
/// from the path, id and timestamp from the store.
#[derive(Debug, Deserialize)]
pub struct HistoryRequest {
    #[serde(default)]
    pub status: VehicleStatus,
    pub location_lat: Option<f64>,
    pub location_lng: Option<f64>,
    pub odo_reading: Option<i64>,
    pub soc: Option<i32>,
    pub details: Option<serde_json::Value>,
}

/// POST /api/v1/vehicles/:id/history — append one history row.
pub async fn add_history(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<HistoryRequest>,
) -> ApiResult<(StatusCode, Json<VehicleHistory>)> {
    let entry = NewHistoryEntry {
        vehicle_id: id,
        status: request.status,
        location_lat: request.location_lat,
        location_lng: request.location_lng,
        odo_reading: request.odo_reading,
        soc: request.soc,
        details: request.details,
    };
    let row = state.store.append_history(&entry).await?;
    tracing::debug!(vehicle_id = id, entry_id = row.id, "history entry appended");
    Ok((StatusCode::CREATED, Json(row)))
}
