//! Bulk CSV import orchestration.
//!
//! Validation is all-or-nothing: a single invalid row rejects the
//! whole batch before any write. The write phase is not: every row is
//! attempted sequentially and failures are counted per row, never
//! aborting the batch.

use serde::Serialize;

use fp_csv_tools::parse_vehicles;
use fp_vehicle::validate_draft;

use crate::store::VehicleStore;

/// Per-batch success/failure accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub success: usize,
    pub failures: usize,
}

/// Result of one bulk import attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// The CSV produced zero candidate records; nothing was written.
    NoData,
    /// At least one candidate failed validation; nothing was written.
    Rejected { invalid: usize },
    /// All candidates passed validation and every row was attempted.
    Completed(ImportSummary),
}

/// Parse, validate, and persist a CSV batch.
///
/// Writes happen one at a time, awaited in order, so the counters are
/// deterministic and a slow backend sees at most one in-flight insert.
/// There is no retry, timeout, or cancellation at this layer.
pub async fn run_import(store: &dyn VehicleStore, csv_text: &str) -> ImportOutcome {
    let drafts = parse_vehicles(csv_text);
    if drafts.is_empty() {
        return ImportOutcome::NoData;
    }

    let invalid = drafts
        .iter()
        .filter(|d| !validate_draft(d).is_empty())
        .count();
    if invalid > 0 {
        tracing::info!(invalid, total = drafts.len(), "rejecting import batch");
        return ImportOutcome::Rejected { invalid };
    }

    let mut success = 0;
    let mut failures = 0;
    for draft in &drafts {
        match store.create(draft).await {
            Ok(_) => success += 1,
            Err(e) => {
                tracing::warn!(
                    vehicle_id = draft.vehicle_id.as_deref().unwrap_or(""),
                    error = %e,
                    "failed to add vehicle"
                );
                failures += 1;
            }
        }
    }

    tracing::info!(success, failures, "bulk import finished");
    ImportOutcome::Completed(ImportSummary { success, failures })
}
