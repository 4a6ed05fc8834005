// src/services/op_guard.rs
//
// RAII busy-flag guard for per-operation overlap protection.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{AppError, AppResult};

/// Holds a busy flag for the duration of one logical operation.
///
/// Acquisition fails with `OperationInProgress` when the flag is already
/// set. The flag clears when the guard drops, on success and on every error
/// path alike. A hung request keeps its guard alive, so the flag stays set
/// until the transport gives up (no timeouts of our own, per the contract).
pub(crate) struct OpGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> OpGuard<'a> {
    pub(crate) fn acquire(flag: &'a AtomicBool, name: &'static str) -> AppResult<Self> {
        if flag
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(AppError::OperationInProgress(name));
        }
        Ok(Self { flag })
    }
}

impl Drop for OpGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}
