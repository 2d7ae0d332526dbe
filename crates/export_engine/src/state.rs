//! Single-flight export state
//!
//! At most one export may be in flight process-wide. The state is an explicit
//! `Idle | Exporting` value transitioned atomically at entry and exit; it is
//! never exposed for direct mutation. Release happens through an RAII guard,
//! so every exit path - success or failure - returns the state to idle.
//!
//! There is no timeout: a collaborator that never completes leaves the state
//! at `Exporting` indefinitely.

use crate::ExportError;
use std::sync::atomic::{AtomicU8, Ordering};

const IDLE: u8 = 0;
const EXPORTING: u8 = 1;

/// The orchestrator's export state
#[derive(Debug, Default)]
pub struct ExportState(AtomicU8);

impl ExportState {
    /// Create a new idle state
    pub fn new() -> Self {
        Self::default()
    }

    /// Transition `Idle -> Exporting`, failing fast if already exporting
    pub fn try_begin(&self) -> Result<ExportGuard<'_>, ExportError> {
        self.0
            .compare_exchange(IDLE, EXPORTING, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| ExportGuard(self))
            .map_err(|_| ExportError::ExportInProgress)
    }

    /// Check whether an export is in flight
    pub fn is_exporting(&self) -> bool {
        self.0.load(Ordering::Acquire) == EXPORTING
    }
}

/// RAII guard holding the `Exporting` state; dropping it returns to `Idle`
#[derive(Debug)]
pub struct ExportGuard<'a>(&'a ExportState);

impl Drop for ExportGuard<'_> {
    fn drop(&mut self) {
        self.0 .0.store(IDLE, Ordering::Release);
    }
}
