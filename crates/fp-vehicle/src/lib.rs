//! Shared vehicle domain types for FleetPulse.
//!
//! Defines the persisted `Vehicle` entity, the unvalidated `VehicleDraft`
//! candidate record produced by CSV parsing and form submission, the
//! `VehicleUpdate` partial patch, append-only `VehicleHistory` rows, and
//! the required-field validator shared by the single-record and bulk
//! import flows.

pub mod history;
pub mod validate;
pub mod vehicle;

pub use history::{NewHistoryEntry, VehicleHistory};
pub use validate::validate_draft;
pub use vehicle::{Vehicle, VehicleDraft, VehicleStatus, VehicleUpdate};
