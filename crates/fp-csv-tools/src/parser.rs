//! Line-oriented CSV parsing into candidate vehicle records.

use chrono::{DateTime, Utc};

use fp_vehicle::{VehicleDraft, VehicleStatus};

use crate::fields::map_header;

/// Parse raw CSV text into candidate vehicle drafts.
///
/// The first line is the header row; header cells are trimmed and
/// lower-cased before alias mapping, and unmapped columns are ignored.
/// Data rows are split on commas — there is no quoted-comma handling —
/// and a row whose cell count does not match the header count is
/// dropped. Cells that are fully wrapped in double quotes (as produced
/// by the exporter) are unwrapped.
///
/// Unparseable numeric cells null the field rather than dropping the
/// row, and a missing status defaults to `INACTIVE`. The parse itself
/// never fails: malformed input just yields fewer drafts.
pub fn parse_vehicles(text: &str) -> Vec<VehicleDraft> {
    let mut lines = text.split('\n');
    let Some(header_line) = lines.next() else {
        return Vec::new();
    };

    let headers: Vec<Option<&'static str>> = header_line
        .split(',')
        .map(|cell| map_header(cell.trim().to_lowercase().as_str()))
        .collect();

    let mut drafts = Vec::new();

    for (offset, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let cells: Vec<String> = line.split(',').map(|cell| unquote(cell.trim())).collect();
        if cells.len() != headers.len() {
            tracing::debug!(
                line = offset + 2,
                cells = cells.len(),
                expected = headers.len(),
                "dropping row with mismatched cell count"
            );
            continue;
        }

        let mut draft = VehicleDraft::default();
        for (field, value) in headers.iter().zip(cells) {
            if let Some(field) = field {
                assign_field(&mut draft, field, value);
            }
        }
        drafts.push(draft);
    }

    drafts
}

fn assign_field(draft: &mut VehicleDraft, field: &str, value: String) {
    match field {
        "vehicle_id" => draft.vehicle_id = non_empty(value),
        "depot" => draft.depot = non_empty(value),
        "odo_reading" => draft.odo_reading = value.trim().parse::<i64>().ok(),
        "soc" => draft.soc = value.trim().parse::<i32>().ok(),
        "imei_no" => draft.imei_no = non_empty(value),
        "registration_no" => draft.registration_no = non_empty(value),
        "chassis_no" => draft.chassis_no = non_empty(value),
        "engine_no" => draft.engine_no = non_empty(value),
        "device_make" => draft.device_make = non_empty(value),
        "last_heartbeat" => {
            draft.last_heartbeat = DateTime::parse_from_rfc3339(value.trim())
                .ok()
                .map(|dt| dt.with_timezone(&Utc));
        }
        "status" => draft.status = VehicleStatus::parse_lenient(&value),
        "remarks" => draft.remarks = non_empty(value),
        _ => {}
    }
}

/// Strip a fully quote-wrapped cell and collapse doubled quotes.
fn unquote(cell: &str) -> String {
    if cell.len() >= 2 && cell.starts_with('"') && cell.ends_with('"') {
        cell[1..cell.len() - 1].replace("\"\"", "\"")
    } else {
        cell.to_string()
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
