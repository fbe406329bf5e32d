// General imports
use std::sync::Arc;

// mod imports
use acquire_core::api::{EvaluationBackend, HttpBackend, LocalBackend};

// Backend URL
// need to change this to an environmental variable
//  to better stay in sync with the server url.
pub const ADDR_BACKEND: &str = "http://127.0.0.1:4000";

/// When false the app runs entirely offline against the seeded data.
pub const CONNECTED: bool = false;

/// Every submission and refresh goes through this seam.
pub fn evaluation_backend() -> Arc<dyn EvaluationBackend> {
    if CONNECTED {
        Arc::new(HttpBackend::new(ADDR_BACKEND))
    } else {
        Arc::new(LocalBackend::default())
    }
}
