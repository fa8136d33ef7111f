//! Fixed-layout CSV export of vehicle records.

use chrono::SecondsFormat;

use fp_vehicle::Vehicle;

/// Column order of the exported file. Import recognizes every one of
/// these headers, so an exported file can be re-imported as-is.
pub const EXPORT_HEADERS: [&str; 12] = [
    "Vehicle ID",
    "Depot",
    "ODO Reading",
    "SoC",
    "IMEI No.",
    "Registration No.",
    "Chassis No.",
    "Engine No.",
    "Device Make",
    "Last Heartbeat",
    "Status",
    "Remarks",
];

/// Serialize vehicles to CSV text.
///
/// Every cell is double-quote wrapped with internal quotes doubled;
/// missing optional values render as empty strings.
pub fn vehicles_to_csv(vehicles: &[Vehicle]) -> String {
    let mut out = String::new();
    out.push_str(&EXPORT_HEADERS.join(","));
    out.push('\n');

    for v in vehicles {
        let cells = [
            v.vehicle_id.clone(),
            v.depot.clone(),
            v.odo_reading.map(|n| n.to_string()).unwrap_or_default(),
            v.soc.map(|n| n.to_string()).unwrap_or_default(),
            v.imei_no.clone(),
            v.registration_no.clone(),
            v.chassis_no.clone(),
            v.engine_no.clone(),
            v.device_make.clone().unwrap_or_default(),
            v.last_heartbeat
                .map(|ts| ts.to_rfc3339_opts(SecondsFormat::Secs, true))
                .unwrap_or_default(),
            v.status.to_string(),
            v.remarks.clone().unwrap_or_default(),
        ];
        let row: Vec<String> = cells.iter().map(|c| quote(c)).collect();
        out.push_str(&row.join(","));
        out.push('\n');
    }

    out
}

fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use fp_vehicle::VehicleStatus;

    fn sample_vehicle() -> Vehicle {
        Vehicle {
            id: 1,
            vehicle_id: "EV-001".into(),
            depot: "Pune".into(),
            odo_reading: Some(42_000),
            soc: Some(76),
            imei_no: "123456789012345".into(),
            registration_no: "MH12AB1234".into(),
            chassis_no: "CH001".into(),
            engine_no: "EN001".into(),
            device_make: Some("Teltonika".into()),
            last_heartbeat: Some(Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap()),
            status: VehicleStatus::Active,
            remarks: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn header_line_is_fixed() {
        let csv = vehicles_to_csv(&[]);
        assert_eq!(
            csv,
            "Vehicle ID,Depot,ODO Reading,SoC,IMEI No.,Registration No.,\
             Chassis No.,Engine No.,Device Make,Last Heartbeat,Status,Remarks\n"
        );
    }

    #[test]
    fn cells_are_quoted() {
        let csv = vehicles_to_csv(&[sample_vehicle()]);
        let row = csv.lines().nth(1).unwrap();
        assert!(row.starts_with("\"EV-001\",\"Pune\",\"42000\",\"76\""));
        assert!(row.contains("\"ACTIVE\""));
    }

    #[test]
    fn missing_optionals_render_empty() {
        let mut v = sample_vehicle();
        v.odo_reading = None;
        v.device_make = None;
        v.last_heartbeat = None;
        let csv = vehicles_to_csv(&[v]);
        let row = csv.lines().nth(1).unwrap();
        assert!(row.contains("\"\",\"76\""));
        assert!(row.ends_with("\"ACTIVE\",\"\""));
    }

    #[test]
    fn internal_quotes_are_doubled() {
        let mut v = sample_vehicle();
        v.remarks = Some("driver said \"ok\"".into());
        let csv = vehicles_to_csv(&[v]);
        assert!(csv.contains("\"driver said \"\"ok\"\"\""));
    }

    #[test]
    fn one_row_per_vehicle() {
        let csv = vehicles_to_csv(&[sample_vehicle(), sample_vehicle()]);
        assert_eq!(csv.lines().count(), 3);
    }
}
