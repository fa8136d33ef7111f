use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::vehicle::VehicleStatus;

/// One append-only history row for a vehicle.
///
/// History entries are write-once: they record a status or telemetry
/// change at a point in time and are never mutated afterwards. Queries
/// return them newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleHistory {
    /// Storage-assigned identifier.
    pub id: i64,
    /// The vehicle this entry belongs to (numeric `Vehicle.id`).
    pub vehicle_id: i64,
    pub status: VehicleStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_lng: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub odo_reading: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soc: Option<i32>,
    /// Storage-assigned entry timestamp.
    pub timestamp: DateTime<Utc>,
    /// Free-form structured payload (alerts, driver notes, etc.).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// A history entry as submitted by a caller; the store assigns
/// `id` and `timestamp`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewHistoryEntry {
    pub vehicle_id: i64,
    #[serde(default)]
    pub status: VehicleStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_lng: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub odo_reading: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soc: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
