use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Operational status of a vehicle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VehicleStatus {
    Active,
    #[default]
    Inactive,
    Maintenance,
    Charging,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Maintenance => "MAINTENANCE",
            Self::Charging => "CHARGING",
        }
    }

    /// Lenient parse used by the CSV pipeline.
    ///
    /// Case-insensitive; anything unrecognized (or empty) falls back to
    /// `Inactive`, the default status for imported rows.
    pub fn parse_lenient(s: &str) -> Self {
        let s = s.trim();
        if s.eq_ignore_ascii_case("ACTIVE") {
            Self::Active
        } else if s.eq_ignore_ascii_case("MAINTENANCE") {
            Self::Maintenance
        } else if s.eq_ignore_ascii_case("CHARGING") {
            Self::Charging
        } else {
            Self::Inactive
        }
    }
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted vehicle record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    /// Storage-assigned numeric identifier.
    pub id: i64,
    /// User-facing fleet label (e.g., "EV-042").
    pub vehicle_id: String,
    /// Home depot name.
    pub depot: String,
    /// Odometer reading in kilometres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub odo_reading: Option<i64>,
    /// State of charge, 0–100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soc: Option<i32>,
    /// 15-digit telematics device identifier.
    pub imei_no: String,
    pub registration_no: String,
    pub chassis_no: String,
    pub engine_no: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_make: Option<String>,
    /// Last heartbeat received from the telematics device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_heartbeat: Option<DateTime<Utc>>,
    pub status: VehicleStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An unvalidated candidate record.
///
/// This is the shape produced by the CSV parser and accepted by the
/// create endpoint: textual fields may be absent, numeric fields have
/// already been coerced (unparseable input becomes `None`). A draft
/// only becomes a [`Vehicle`] once the validator accepts it and a
/// store persists it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VehicleDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub odo_reading: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soc: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imei_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chassis_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_make: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_heartbeat: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: VehicleStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

/// Partial update for an existing vehicle.
///
/// Absent fields are left untouched by `update`; there is no way to
/// null out an already-set optional column through this patch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VehicleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub odo_reading: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soc: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imei_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chassis_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_make: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_heartbeat: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<VehicleStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serialization() {
        assert_eq!(
            serde_json::to_string(&VehicleStatus::Active).unwrap(),
            r#""ACTIVE""#
        );
        assert_eq!(
            serde_json::to_string(&VehicleStatus::Maintenance).unwrap(),
            r#""MAINTENANCE""#
        );
    }

    #[test]
    fn status_parse_lenient() {
        assert_eq!(VehicleStatus::parse_lenient("ACTIVE"), VehicleStatus::Active);
        assert_eq!(
            VehicleStatus::parse_lenient("charging"),
            VehicleStatus::Charging
        );
        assert_eq!(
            VehicleStatus::parse_lenient(" Maintenance "),
            VehicleStatus::Maintenance
        );
    }

    #[test]
    fn unknown_status_falls_back_to_inactive() {
        assert_eq!(VehicleStatus::parse_lenient(""), VehicleStatus::Inactive);
        assert_eq!(
            VehicleStatus::parse_lenient("PARKED"),
            VehicleStatus::Inactive
        );
    }

    #[test]
    fn default_status_is_inactive() {
        assert_eq!(VehicleStatus::default(), VehicleStatus::Inactive);
        let draft: VehicleDraft = serde_json::from_str("{}").unwrap();
        assert_eq!(draft.status, VehicleStatus::Inactive);
    }

    #[test]
    fn draft_roundtrip() {
        let draft = VehicleDraft {
            vehicle_id: Some("EV-001".into()),
            imei_no: Some("123456789012345".into()),
            soc: Some(80),
            status: VehicleStatus::Active,
            ..Default::default()
        };
        let json = serde_json::to_string(&draft).unwrap();
        let back: VehicleDraft = serde_json::from_str(&json).unwrap();
        assert_eq!(back.vehicle_id.as_deref(), Some("EV-001"));
        assert_eq!(back.soc, Some(80));
        assert_eq!(back.status, VehicleStatus::Active);
        assert!(back.odo_reading.is_none());
    }

    #[test]
    fn update_defaults_to_all_none() {
        let patch: VehicleUpdate = serde_json::from_str("{}").unwrap();
        assert!(patch.vehicle_id.is_none());
        assert!(patch.status.is_none());
        assert!(patch.soc.is_none());
    }
}
