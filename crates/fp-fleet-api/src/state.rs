//! Shared application state for the Axum server.

use std::sync::Arc;

use crate::store::VehicleStore;
use crate::store::memory::MemoryVehicleStore;

/// Shared application state, cloneable into every handler.
///
/// The store is held behind a trait object so the same router runs
/// against PostgreSQL in production and the in-memory store in tests.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn VehicleStore>,
}

impl AppState {
    /// Create state backed by the given store.
    pub fn with_store(store: Arc<dyn VehicleStore>) -> Self {
        Self { store }
    }

    /// Create state over an empty in-memory store (for tests).
    pub fn in_memory() -> Self {
        Self {
            store: Arc::new(MemoryVehicleStore::new()),
        }
    }

    /// Create state with sample vehicles for development / tests.
    pub fn with_sample_fleet() -> Self {
        Self {
            store: Arc::new(MemoryVehicleStore::with_sample_fleet()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::in_memory()
    }
}
