//! Required-field validation for candidate vehicle records.
//!
//! Shared by the bulk CSV import (which rejects the whole batch if any
//! row fails) and the single-record create flow.

use std::sync::LazyLock;

use regex::Regex;

use crate::vehicle::VehicleDraft;

static RE_IMEI: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{15}$").unwrap());

/// Validate a candidate record, returning human-readable error messages.
///
/// An empty list means the draft is acceptable for persistence. Checks
/// run in a fixed order (required fields first, then IMEI format), so
/// the result is deterministic for a given input.
pub fn validate_draft(draft: &VehicleDraft) -> Vec<String> {
    let mut errors = Vec::new();

    if is_missing(&draft.imei_no) {
        errors.push("IMEI No. is required".to_string());
    }
    if is_missing(&draft.chassis_no) {
        errors.push("Chassis No. is required".to_string());
    }
    if is_missing(&draft.engine_no) {
        errors.push("Engine No. is required".to_string());
    }
    if is_missing(&draft.registration_no) {
        errors.push("Registration No. is required".to_string());
    }

    if let Some(imei) = &draft.imei_no
        && !imei.trim().is_empty()
        && !RE_IMEI.is_match(imei.trim())
    {
        errors.push("IMEI No. must be exactly 15 digits".to_string());
    }

    errors
}

fn is_missing(field: &Option<String>) -> bool {
    match field {
        None => true,
        Some(s) => s.trim().is_empty(),
    }
}
