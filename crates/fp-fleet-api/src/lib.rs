//! FleetPulse vehicle operations API — library crate.
//!
//! Re-exports all modules so the binary (`main.rs`) and external
//! crates (e.g. `fp-e2e-tests`) can access internal types like
//! `AppState`, `build_router`, and the `VehicleStore` implementations.

pub mod config;
pub mod error;
pub mod import;
pub mod routes;
pub mod state;
pub mod store;
