//! CSV tools for FleetPulse vehicle data.
//!
//! Provides the import pipeline (header alias mapping and line-oriented
//! row parsing into candidate [`fp_vehicle::VehicleDraft`] records) and
//! the fixed-layout CSV exporter. The parser is deliberately simple:
//! rows are split on commas without quoted-comma handling, and rows
//! whose cell count does not match the header are dropped.

pub mod export;
pub mod fields;
pub mod parser;

pub use export::{EXPORT_HEADERS, vehicles_to_csv};
pub use fields::map_header;
pub use parser::parse_vehicles;
