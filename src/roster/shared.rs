//! Shared roster handle
//!
//! For callers that hand one manager to several threads.

use std::sync::Arc;

use parking_lot::Mutex;

use super::RosterManager;

/// Cloneable handle serializing access to one `RosterManager`
///
/// Each `with` call holds the lock for the whole closure, so an operation
/// never interleaves with another.
#[derive(Debug, Clone)]
pub struct SharedRoster {
    inner: Arc<Mutex<RosterManager>>,
}

impl SharedRoster {
    pub fn new(manager: RosterManager) -> Self {
        Self {
            inner: Arc::new(Mutex::new(manager)),
        }
    }

    /// Run `f` with exclusive access to the manager
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut RosterManager) -> R,
    {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }

    /// Take the manager back once every other handle is dropped
    pub fn try_unwrap(self) -> Result<RosterManager, Self> {
        Arc::try_unwrap(self.inner)
            .map(|mutex| mutex.into_inner())
            .map_err(|inner| Self { inner })
    }
}
