//! Vehicle CRUD endpoints.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use fp_vehicle::{Vehicle, VehicleDraft, VehicleUpdate, validate_draft};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// GET /api/v1/vehicles — the full fleet, ordered by vehicle label.
pub async fn list_vehicles(State(state): State<AppState>) -> ApiResult<Json<Vec<Vehicle>>> {
    Ok(Json(state.store.list_all().await?))
}

/// GET /api/v1/vehicles/live — ACTIVE vehicles, newest-updated first.
pub async fn live_vehicles(State(state): State<AppState>) -> ApiResult<Json<Vec<Vehicle>>> {
    Ok(Json(state.store.list_live().await?))
}

/// GET /api/v1/vehicles/:id — one vehicle.
pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Vehicle>> {
    state
        .store
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("vehicle {id} not found")))
}

/// POST /api/v1/vehicles — create one vehicle from a draft.
///
/// The draft runs through the shared validator first; validation
/// errors never reach the store.
pub async fn create_vehicle(
    State(state): State<AppState>,
    Json(draft): Json<VehicleDraft>,
) -> ApiResult<(StatusCode, Json<Vehicle>)> {
    let errors = validate_draft(&draft);
    if !errors.is_empty() {
        return Err(ApiError::BadRequest(errors.join("; ")));
    }

    let vehicle = state.store.create(&draft).await?;
    tracing::info!(id = vehicle.id, vehicle_id = %vehicle.vehicle_id, "vehicle created");
    Ok((StatusCode::CREATED, Json(vehicle)))
}

/// PUT /api/v1/vehicles/:id — patch the named fields.
pub async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<VehicleUpdate>,
) -> ApiResult<Json<Vehicle>> {
    let vehicle = state.store.update(id, &patch).await?;
    tracing::info!(id, "vehicle updated");
    Ok(Json(vehicle))
}

/// DELETE /api/v1/vehicles/:id.
///
/// Deleting an id that matches nothing is reported as 404 rather than
/// silent success.
pub async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<serde_json::Value>> {
    let deleted = state.store.delete(id).await?;
    if !deleted {
        return Err(ApiError::NotFound(format!("vehicle {id} not found")));
    }
    tracing::info!(id, "vehicle deleted");
    Ok(Json(serde_json::json!({ "success": true })))
}
