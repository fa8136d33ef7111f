//! Vehicle persistence abstraction.
//!
//! [`VehicleStore`] is the capability set the rest of the service is
//! written against: CRUD over vehicles plus append-only history.
//! Two implementations exist: [`postgres::PgVehicleStore`] for
//! production and [`memory::MemoryVehicleStore`] for tests and
//! database-less development.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use fp_vehicle::{NewHistoryEntry, Vehicle, VehicleDraft, VehicleHistory, VehicleUpdate};

/// Errors surfaced by a vehicle store.
///
/// `Backend` carries the underlying storage message verbatim; callers
/// surface it to the user rather than translating it.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Backend(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => StoreError::NotFound(e.to_string()),
            other => StoreError::Backend(other.to_string()),
        }
    }
}

/// Convenience alias.
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence operations for vehicles and their history.
#[async_trait]
pub trait VehicleStore: Send + Sync {
    /// Fetch the full vehicle set, ordered by `vehicle_id` ascending.
    /// No pagination — the whole set comes back in one call.
    async fn list_all(&self) -> StoreResult<Vec<Vehicle>>;

    /// Fetch vehicles with status ACTIVE, most-recently-updated first.
    async fn list_live(&self) -> StoreResult<Vec<Vehicle>>;

    /// Fetch one vehicle by its storage id.
    async fn get(&self, id: i64) -> StoreResult<Option<Vehicle>>;

    /// Insert one vehicle; returns the persisted record including the
    /// storage-assigned id and timestamps.
    async fn create(&self, draft: &VehicleDraft) -> StoreResult<Vehicle>;

    /// Patch the named (Some) fields only; returns the updated record.
    async fn update(&self, id: i64, patch: &VehicleUpdate) -> StoreResult<Vehicle>;

    /// Remove one vehicle. The flag says whether a row actually matched.
    async fn delete(&self, id: i64) -> StoreResult<bool>;

    /// Fetch history entries for a vehicle, newest first.
    async fn history_for(&self, vehicle_id: i64) -> StoreResult<Vec<VehicleHistory>>;

    /// Append one history row; the store assigns id and timestamp.
    async fn append_history(&self, entry: &NewHistoryEntry) -> StoreResult<VehicleHistory>;
}
