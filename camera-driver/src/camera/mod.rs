//! Camera state store.
//!
//! One [`CameraState`] exists per process. Every connection task holds a
//! clone of the handle, and all reads and writes go through a single mutex
//! so that status and last error are always observed together.
//!
//! Device control is simulated: [`CameraState::start`] moves straight to
//! `Running` without talking to the camera at the configured address.

use parking_lot::Mutex;
use std::sync::Arc;
use strum::{AsRefStr, Display};

use crate::error::Result;
use crate::tracing::prelude::*;

/// Operational status of the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum CameraStatus {
    #[default]
    Stopped,
    Running,
    /// Reserved for a failed device operation; no current path sets it.
    Error,
}

/// Consistent copy of the camera state taken under the lock.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CameraSnapshot {
    pub status: CameraStatus,
    /// Empty when no error is recorded
    pub last_error: String,
}

/// Shared handle to the process-wide camera state.
#[derive(Debug, Clone, Default)]
pub struct CameraState {
    inner: Arc<Mutex<CameraSnapshot>>,
}

impl CameraState {
    /// Create a store in the `Stopped` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the camera.
    ///
    /// Always transitions to `Running` and clears the last error, whatever
    /// the prior state. Idempotent under concurrent callers.
    pub fn start(&self) -> Result<()> {
        let mut state = self.inner.lock();
        let previous = state.status;
        state.status = CameraStatus::Running;
        state.last_error.clear();
        drop(state);

        debug!(%previous, "Camera started");
        Ok(())
    }

    /// Snapshot the current status and last error.
    pub fn status(&self) -> CameraSnapshot {
        self.inner.lock().clone()
    }
}
