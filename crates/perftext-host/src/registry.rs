//! Keyed lookup of long-lived host service handles.

use std::any::Any;
use std::sync::{Arc, RwLock};

use rustc_hash::FxHashMap;

/// Read-mostly map of host-side service handles.
///
/// The surrounding framework populates the registry once, before any node is
/// created; afterwards it is only read. Handles outlive every node and bridge
/// that refers to them, so the registry never tears anything down. The
/// registry is always passed explicitly as a capability, never reached
/// through global state, so tests can substitute fake services.
#[derive(Default)]
pub struct ServiceRegistry {
    services: RwLock<FxHashMap<&'static str, Arc<dyn Any + Send + Sync>>>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a service handle under `key`, replacing any previous entry.
    pub fn insert(&self, key: &'static str, service: Arc<dyn Any + Send + Sync>) {
        self.services
            .write()
            .expect("service registry lock poisoned")
            .insert(key, service);
    }

    /// Looks up the handle stored under `key`, downcast to `T`.
    ///
    /// Returns `None` both when the key is absent and when the stored handle
    /// has a different type; the latter is logged since it means two parts of
    /// the framework disagree about the entry.
    pub fn get<T: Any + Clone>(&self, key: &str) -> Option<T> {
        let services = self
            .services
            .read()
            .expect("service registry lock poisoned");
        let entry = services.get(key)?;
        let handle = entry.downcast_ref::<T>();
        if handle.is_none() {
            log::warn!("service registry entry `{key}` has an unexpected type");
        }
        handle.cloned()
    }

    /// Returns true if a handle is stored under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.services
            .read()
            .expect("service registry lock poisoned")
            .contains_key(key)
    }
}

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod tests;
