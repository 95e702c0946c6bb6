//! Server state management.

use std::sync::Arc;

use jeeves_core::Motor;
use tokio::sync::Mutex;

/// Shared application state.
///
/// The motor sits behind a mutex so that inputs are resolved one at a time.
/// Facts reported by `/health` are copied out so they never wait on the lock.
#[derive(Clone)]
pub struct AppState {
    pub motor: Arc<Mutex<Motor>>,
    pub store_provider: String,
    pub research_enabled: bool,
}

impl AppState {
    /// Create the state around an assembled motor.
    pub fn new(motor: Motor, research_enabled: bool) -> Self {
        let store_provider = motor.memory().store().provider_name().to_string();
        Self {
            motor: Arc::new(Mutex::new(motor)),
            store_provider,
            research_enabled,
        }
    }
}
