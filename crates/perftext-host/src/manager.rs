//! The synchronous RPC seam to the host UI manager.

use std::sync::Arc;

use crate::{MeasureRequest, ServiceRegistry};

/// Well-known registry key under which the framework stores the host UI
/// manager handle.
pub const UI_MANAGER_SERVICE_KEY: &str = "HostUiManager";

/// Host-side object that measures components out of band.
///
/// One call is one blocking round trip across the runtime boundary. There is
/// no cancellation or timeout at this layer; a stalled host stalls layout.
/// Implementations must be safe for concurrent calls, since several nodes
/// share one handle.
pub trait HostUiManager: Send + Sync {
    /// Measures the component described by `request`.
    ///
    /// Returns the packed width/height on success, or `None` when the host
    /// produced no measurement (see [`crate::MeasureError::Unmeasured`]).
    fn measure(&self, request: &MeasureRequest) -> Option<i64>;
}

/// Registers `manager` under [`UI_MANAGER_SERVICE_KEY`].
///
/// Framework-side setup; must run before any node is created.
pub fn register_ui_manager(registry: &ServiceRegistry, manager: Arc<dyn HostUiManager>) {
    registry.insert(UI_MANAGER_SERVICE_KEY, Arc::new(manager));
}

/// Fetches the host UI manager handle, if one is registered.
pub fn ui_manager(registry: &ServiceRegistry) -> Option<Arc<dyn HostUiManager>> {
    registry.get::<Arc<dyn HostUiManager>>(UI_MANAGER_SERVICE_KEY)
}
