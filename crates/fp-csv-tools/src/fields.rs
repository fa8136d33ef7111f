//! Header-to-field mapping for vehicle CSV imports.

/// Map a header cell to its canonical field name.
///
/// The input is expected to be trimmed and lower-cased already (the
/// parser does this for every header cell). Several human-readable
/// aliases map to the same field; unknown headers return `None` and
/// their column is ignored during import.
pub fn map_header(header: &str) -> Option<&'static str> {
    match header {
        "vehicle id" => Some("vehicle_id"),
        "depot" => Some("depot"),
        "odo reading" => Some("odo_reading"),
        "soc" => Some("soc"),
        "imei no" | "imei no." | "imei" => Some("imei_no"),
        "registration no" | "registration no." | "registration" => Some("registration_no"),
        "chassis no" | "chassis no." | "chassis" => Some("chassis_no"),
        "engine no" | "engine no." | "engine" => Some("engine_no"),
        "device make" => Some("device_make"),
        "last heartbeat" => Some("last_heartbeat"),
        "status" => Some("status"),
        "remarks" => Some("remarks"),
        _ => None,
    }
}
