//! Liveness flag for async work started by a mounted view.
//!
//! A page spawns its fetch with `spawn_local` and clears the flag from
//! `on_cleanup`. Every state write that follows an `.await` goes through
//! `run_if_active`, so a response arriving after navigation is dropped
//! instead of touching disposed signals.

#[cfg(test)]
#[path = "active_flag_test.rs"]
mod active_flag_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared "view still mounted" flag. Clones observe the same state.
#[derive(Clone, Debug)]
pub struct ActiveFlag(Arc<AtomicBool>);

impl ActiveFlag {
    #[must_use]
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// Mark the owning view as torn down. Idempotent.
    pub fn deactivate(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Run `f` only while the view is mounted. Returns whether it ran.
    pub fn run_if_active(&self, f: impl FnOnce()) -> bool {
        if !self.is_active() {
            return false;
        }
        f();
        true
    }
}

impl Default for ActiveFlag {
    fn default() -> Self {
        Self::new()
    }
}
