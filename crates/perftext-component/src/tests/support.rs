//! Shared fakes for component tests.

use std::sync::{Arc, Mutex};

use perftext_host::{register_ui_manager, HostUiManager, MeasureRequest, ServiceRegistry};

/// Fake host manager that records every request and replays a fixed response.
pub struct RecordingUiManager {
    response: Option<i64>,
    requests: Mutex<Vec<MeasureRequest>>,
}

impl RecordingUiManager {
    pub fn replying(response: i64) -> Self {
        Self {
            response: Some(response),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn silent() -> Self {
        Self {
            response: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<MeasureRequest> {
        self.requests.lock().expect("request log poisoned").clone()
    }
}

impl HostUiManager for RecordingUiManager {
    fn measure(&self, request: &MeasureRequest) -> Option<i64> {
        self.requests
            .lock()
            .expect("request log poisoned")
            .push(request.clone());
        self.response
    }
}

/// Builds a registry with `manager` stored under the well-known key.
pub fn registry_with(manager: Arc<RecordingUiManager>) -> Arc<ServiceRegistry> {
    let registry = Arc::new(ServiceRegistry::new());
    register_ui_manager(&registry, manager);
    registry
}
