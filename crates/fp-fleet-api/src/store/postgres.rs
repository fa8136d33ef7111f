//! PostgreSQL-backed vehicle store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use fp_vehicle::{
    NewHistoryEntry, Vehicle, VehicleDraft, VehicleHistory, VehicleStatus, VehicleUpdate,
};

use super::{StoreError, StoreResult, VehicleStore};

/// Vehicle row as stored; `status` stays a string until the domain
/// boundary (the CHECK constraint keeps it one of the four values).
#[derive(Debug, sqlx::FromRow)]
struct VehicleRow {
    id: i64,
    vehicle_id: String,
    depot: String,
    odo_reading: Option<i64>,
    soc: Option<i32>,
    imei_no: String,
    registration_no: String,
    chassis_no: String,
    engine_no: String,
    device_make: Option<String>,
    last_heartbeat: Option<DateTime<Utc>>,
    status: String,
    remarks: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<VehicleRow> for Vehicle {
    fn from(row: VehicleRow) -> Self {
        Vehicle {
            id: row.id,
            vehicle_id: row.vehicle_id,
            depot: row.depot,
            odo_reading: row.odo_reading,
            soc: row.soc,
            imei_no: row.imei_no,
            registration_no: row.registration_no,
            chassis_no: row.chassis_no,
            engine_no: row.engine_no,
            device_make: row.device_make,
            last_heartbeat: row.last_heartbeat,
            status: VehicleStatus::parse_lenient(&row.status),
            remarks: row.remarks,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct HistoryRow {
    id: i64,
    vehicle_id: i64,
    status: String,
    location_lat: Option<f64>,
    location_lng: Option<f64>,
    odo_reading: Option<i64>,
    soc: Option<i32>,
    timestamp: DateTime<Utc>,
    details: Option<serde_json::Value>,
}

impl From<HistoryRow> for VehicleHistory {
    fn from(row: HistoryRow) -> Self {
        VehicleHistory {
            id: row.id,
            vehicle_id: row.vehicle_id,
            status: VehicleStatus::parse_lenient(&row.status),
            location_lat: row.location_lat,
            location_lng: row.location_lng,
            odo_reading: row.odo_reading,
            soc: row.soc,
            timestamp: row.timestamp,
            details: row.details,
        }
    }
}

/// Vehicle store over a PostgreSQL pool.
pub struct PgVehicleStore {
    pool: PgPool,
}

impl PgVehicleStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to PostgreSQL and apply migrations.
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        tracing::info!("running database migrations");
        sqlx::raw_sql(include_str!("../../migrations/001_vehicles.sql"))
            .execute(&pool)
            .await?;
        sqlx::raw_sql(include_str!("../../migrations/002_vehicle_history.sql"))
            .execute(&pool)
            .await?;
        tracing::info!("migrations complete");

        Ok(Self { pool })
    }
}

#[async_trait]
impl VehicleStore for PgVehicleStore {
    async fn list_all(&self) -> StoreResult<Vec<Vehicle>> {
        let rows =
            sqlx::query_as::<_, VehicleRow>("SELECT * FROM vehicles ORDER BY vehicle_id ASC")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(Vehicle::from).collect())
    }

    async fn list_live(&self) -> StoreResult<Vec<Vehicle>> {
        let rows = sqlx::query_as::<_, VehicleRow>(
            "SELECT * FROM vehicles WHERE status = 'ACTIVE' ORDER BY updated_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Vehicle::from).collect())
    }

    async fn get(&self, id: i64) -> StoreResult<Option<Vehicle>> {
        let row = sqlx::query_as::<_, VehicleRow>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Vehicle::from))
    }

    async fn create(&self, draft: &VehicleDraft) -> StoreResult<Vehicle> {
        let row = sqlx::query_as::<_, VehicleRow>(
            "INSERT INTO vehicles (vehicle_id, depot, odo_reading, soc, imei_no,
                 registration_no, chassis_no, engine_no, device_make, last_heartbeat,
                 status, remarks)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING *",
        )
        .bind(draft.vehicle_id.as_deref().unwrap_or_default())
        .bind(draft.depot.as_deref().unwrap_or_default())
        .bind(draft.odo_reading)
        .bind(draft.soc)
        .bind(draft.imei_no.as_deref().unwrap_or_default())
        .bind(draft.registration_no.as_deref().unwrap_or_default())
        .bind(draft.chassis_no.as_deref().unwrap_or_default())
        .bind(draft.engine_no.as_deref().unwrap_or_default())
        .bind(draft.device_make.as_deref())
        .bind(draft.last_heartbeat)
        .bind(draft.status.as_str())
        .bind(draft.remarks.as_deref())
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into())
    }

    async fn update(&self, id: i64, patch: &VehicleUpdate) -> StoreResult<Vehicle> {
        let row = sqlx::query_as::<_, VehicleRow>(
            "UPDATE vehicles SET
                 vehicle_id      = COALESCE($2, vehicle_id),
                 depot           = COALESCE($3, depot),
                 odo_reading     = COALESCE($4, odo_reading),
                 soc             = COALESCE($5, soc),
                 imei_no         = COALESCE($6, imei_no),
                 registration_no = COALESCE($7, registration_no),
                 chassis_no      = COALESCE($8, chassis_no),
                 engine_no       = COALESCE($9, engine_no),
                 device_make     = COALESCE($10, device_make),
                 last_heartbeat  = COALESCE($11, last_heartbeat),
                 status          = COALESCE($12, status),
                 remarks         = COALESCE($13, remarks),
                 updated_at      = now()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(patch.vehicle_id.as_deref())
        .bind(patch.depot.as_deref())
        .bind(patch.odo_reading)
        .bind(patch.soc)
        .bind(patch.imei_no.as_deref())
        .bind(patch.registration_no.as_deref())
        .bind(patch.chassis_no.as_deref())
        .bind(patch.engine_no.as_deref())
        .bind(patch.device_make.as_deref())
        .bind(patch.last_heartbeat)
        .bind(patch.status.map(|s| s.as_str()))
        .bind(patch.remarks.as_deref())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Vehicle::from)
            .ok_or_else(|| StoreError::NotFound(format!("vehicle {id} not found")))
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn history_for(&self, vehicle_id: i64) -> StoreResult<Vec<VehicleHistory>> {
        let rows = sqlx::query_as::<_, HistoryRow>(
            "SELECT * FROM vehicle_history
             WHERE vehicle_id = $1
             ORDER BY timestamp DESC, id DESC",
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(VehicleHistory::from).collect())
    }

    async fn append_history(&self, entry: &NewHistoryEntry) -> StoreResult<VehicleHistory> {
        let row = sqlx::query_as::<_, HistoryRow>(
            "INSERT INTO vehicle_history (vehicle_id, status, location_lat, location_lng,
                 odo_reading, soc, details)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING *",
        )
        .bind(entry.vehicle_id)
        .bind(entry.status.as_str())
        .bind(entry.location_lat)
        .bind(entry.location_lng)
        .bind(entry.odo_reading)
        .bind(entry.soc)
        .bind(entry.details.as_ref())
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into())
    }
}
