//! In-memory vehicle store for tests and database-less development.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use fp_vehicle::{
    NewHistoryEntry, Vehicle, VehicleDraft, VehicleHistory, VehicleStatus, VehicleUpdate,
};

use super::{StoreError, StoreResult, VehicleStore};

/// `RwLock`-guarded maps with monotonically increasing ids, mirroring
/// the ordering guarantees of the PostgreSQL store.
pub struct MemoryVehicleStore {
    inner: RwLock<Inner>,
}

struct Inner {
    vehicles: BTreeMap<i64, Vehicle>,
    history: Vec<VehicleHistory>,
    next_vehicle_id: i64,
    next_history_id: i64,
}

impl MemoryVehicleStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                vehicles: BTreeMap::new(),
                history: Vec::new(),
                next_vehicle_id: 1,
                next_history_id: 1,
            }),
        }
    }

    /// Create a store seeded with three vehicles for development and
    /// route tests.
    pub fn with_sample_fleet() -> Self {
        let now = Utc::now();
        let mut vehicles = BTreeMap::new();
        for (id, (label, depot, imei, reg, status, soc)) in [
            (
                "EV-001",
                "Pune Central",
                "356938035643809",
                "MH12AB1001",
                VehicleStatus::Active,
                Some(82),
            ),
            (
                "EV-002",
                "Pune Central",
                "356938035643810",
                "MH12AB1002",
                VehicleStatus::Inactive,
                Some(37),
            ),
            (
                "EV-003",
                "Nagpur East",
                "356938035643811",
                "MH31CD2003",
                VehicleStatus::Charging,
                Some(64),
            ),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, v)| (i as i64 + 1, v))
        {
            vehicles.insert(
                id,
                Vehicle {
                    id,
                    vehicle_id: label.into(),
                    depot: depot.into(),
                    odo_reading: Some(10_000 * id),
                    soc,
                    imei_no: imei.into(),
                    registration_no: reg.into(),
                    chassis_no: format!("CH{id:04}"),
                    engine_no: format!("EN{id:04}"),
                    device_make: Some("Teltonika".into()),
                    last_heartbeat: Some(now),
                    status,
                    remarks: None,
                    created_at: now,
                    updated_at: now,
                },
            );
        }

        Self {
            inner: RwLock::new(Inner {
                next_vehicle_id: vehicles.len() as i64 + 1,
                vehicles,
                history: Vec::new(),
                next_history_id: 1,
            }),
        }
    }
}

impl Default for MemoryVehicleStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VehicleStore for MemoryVehicleStore {
    async fn list_all(&self) -> StoreResult<Vec<Vehicle>> {
        let inner = self.inner.read().await;
        let mut vehicles: Vec<Vehicle> = inner.vehicles.values().cloned().collect();
        vehicles.sort_by(|a, b| a.vehicle_id.cmp(&b.vehicle_id));
        Ok(vehicles)
    }

    async fn list_live(&self) -> StoreResult<Vec<Vehicle>> {
        let inner = self.inner.read().await;
        let mut vehicles: Vec<Vehicle> = inner
            .vehicles
            .values()
            .filter(|v| v.status == VehicleStatus::Active)
            .cloned()
            .collect();
        vehicles.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(b.id.cmp(&a.id)));
        Ok(vehicles)
    }

    async fn get(&self, id: i64) -> StoreResult<Option<Vehicle>> {
        let inner = self.inner.read().await;
        Ok(inner.vehicles.get(&id).cloned())
    }

    async fn create(&self, draft: &VehicleDraft) -> StoreResult<Vehicle> {
        let mut inner = self.inner.write().await;
        let id = inner.next_vehicle_id;
        inner.next_vehicle_id += 1;
        let now = Utc::now();
        let vehicle = Vehicle {
            id,
            vehicle_id: draft.vehicle_id.clone().unwrap_or_default(),
            depot: draft.depot.clone().unwrap_or_default(),
            odo_reading: draft.odo_reading,
            soc: draft.soc,
            imei_no: draft.imei_no.clone().unwrap_or_default(),
            registration_no: draft.registration_no.clone().unwrap_or_default(),
            chassis_no: draft.chassis_no.clone().unwrap_or_default(),
            engine_no: draft.engine_no.clone().unwrap_or_default(),
            device_make: draft.device_make.clone(),
            last_heartbeat: draft.last_heartbeat,
            status: draft.status,
            remarks: draft.remarks.clone(),
            created_at: now,
            updated_at: now,
        };
        inner.vehicles.insert(id, vehicle.clone());
        Ok(vehicle)
    }

    async fn update(&self, id: i64, patch: &VehicleUpdate) -> StoreResult<Vehicle> {
        let mut inner = self.inner.write().await;
        let vehicle = inner
            .vehicles
            .get_mut(&id)
            .ok_or_else(|| StoreError::NotFound(format!("vehicle {id} not found")))?;

        if let Some(v) = &patch.vehicle_id {
            vehicle.vehicle_id = v.clone();
        }
        if let Some(v) = &patch.depot {
            vehicle.depot = v.clone();
        }
        if let Some(v) = patch.odo_reading {
            vehicle.odo_reading = Some(v);
        }
        if let Some(v) = patch.soc {
            vehicle.soc = Some(v);
        }
        if let Some(v) = &patch.imei_no {
            vehicle.imei_no = v.clone();
        }
        if let Some(v) = &patch.registration_no {
            vehicle.registration_no = v.clone();
        }
        if let Some(v) = &patch.chassis_no {
            vehicle.chassis_no = v.clone();
        }
        if let Some(v) = &patch.engine_no {
            vehicle.engine_no = v.clone();
        }
        if let Some(v) = &patch.device_make {
            vehicle.device_make = Some(v.clone());
        }
        if let Some(v) = patch.last_heartbeat {
            vehicle.last_heartbeat = Some(v);
        }
        if let Some(v) = patch.status {
            vehicle.status = v;
        }
        if let Some(v) = &patch.remarks {
            vehicle.remarks = Some(v.clone());
        }
        vehicle.updated_at = Utc::now();

        Ok(vehicle.clone())
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        let mut inner = self.inner.write().await;
        Ok(inner.vehicles.remove(&id).is_some())
    }

    async fn history_for(&self, vehicle_id: i64) -> StoreResult<Vec<VehicleHistory>> {
        let inner = self.inner.read().await;
        let mut entries: Vec<VehicleHistory> = inner
            .history
            .iter()
            .filter(|h| h.vehicle_id == vehicle_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
        Ok(entries)
    }

    async fn append_history(&self, entry: &NewHistoryEntry) -> StoreResult<VehicleHistory> {
        let mut inner = self.inner.write().await;
        if !inner.vehicles.contains_key(&entry.vehicle_id) {
            return Err(StoreError::NotFound(format!(
                "vehicle {} not found",
                entry.vehicle_id
            )));
        }
        let id = inner.next_history_id;
        inner.next_history_id += 1;
        let row = VehicleHistory {
            id,
            vehicle_id: entry.vehicle_id,
            status: entry.status,
            location_lat: entry.location_lat,
            location_lng: entry.location_lng,
            odo_reading: entry.odo_reading,
            soc: entry.soc,
            timestamp: Utc::now(),
            details: entry.details.clone(),
        };
        inner.history.push(row.clone());
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(label: &str, status: VehicleStatus) -> VehicleDraft {
        VehicleDraft {
            vehicle_id: Some(label.into()),
            imei_no: Some("123456789012345".into()),
            registration_no: Some("MH12AB1234".into()),
            chassis_no: Some("CH001".into()),
            engine_no: Some("EN001".into()),
            status,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let store = MemoryVehicleStore::new();
        let a = store.create(&draft("EV-1", VehicleStatus::Active)).await.unwrap();
        let b = store.create(&draft("EV-2", VehicleStatus::Active)).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn list_all_orders_by_vehicle_label() {
        let store = MemoryVehicleStore::new();
        store.create(&draft("EV-B", VehicleStatus::Active)).await.unwrap();
        store.create(&draft("EV-A", VehicleStatus::Inactive)).await.unwrap();
        let all = store.list_all().await.unwrap();
        assert_eq!(all[0].vehicle_id, "EV-A");
        assert_eq!(all[1].vehicle_id, "EV-B");
    }

    #[tokio::test]
    async fn list_live_filters_active_only() {
        let store = MemoryVehicleStore::with_sample_fleet();
        let live = store.list_live().await.unwrap();
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].status, VehicleStatus::Active);
    }

    #[tokio::test]
    async fn update_patches_named_fields_only() {
        let store = MemoryVehicleStore::new();
        let created = store.create(&draft("EV-1", VehicleStatus::Inactive)).await.unwrap();
        let patch = VehicleUpdate {
            soc: Some(55),
            status: Some(VehicleStatus::Active),
            ..Default::default()
        };
        let updated = store.update(created.id, &patch).await.unwrap();
        assert_eq!(updated.soc, Some(55));
        assert_eq!(updated.status, VehicleStatus::Active);
        // untouched fields survive
        assert_eq!(updated.vehicle_id, "EV-1");
        assert_eq!(updated.imei_no, "123456789012345");
    }

    #[tokio::test]
    async fn update_missing_vehicle_is_not_found() {
        let store = MemoryVehicleStore::new();
        let err = store.update(99, &VehicleUpdate::default()).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_reports_whether_row_matched() {
        let store = MemoryVehicleStore::new();
        let created = store.create(&draft("EV-1", VehicleStatus::Active)).await.unwrap();
        assert!(store.delete(created.id).await.unwrap());
        assert!(!store.delete(created.id).await.unwrap());
    }

    #[tokio::test]
    async fn history_returns_newest_first() {
        let store = MemoryVehicleStore::new();
        let v = store.create(&draft("EV-1", VehicleStatus::Active)).await.unwrap();
        for soc in [90, 80, 70] {
            store
                .append_history(&NewHistoryEntry {
                    vehicle_id: v.id,
                    status: VehicleStatus::Active,
                    soc: Some(soc),
                    ..Default::default()
                })
                .await
                .unwrap();
        }
        let history = store.history_for(v.id).await.unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].soc, Some(70));
        assert_eq!(history[2].soc, Some(90));
    }

    #[tokio::test]
    async fn history_for_unknown_vehicle_is_not_found_on_append() {
        let store = MemoryVehicleStore::new();
        let err = store
            .append_history(&NewHistoryEntry {
                vehicle_id: 42,
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }
}
