//! Trailing-edge debounce utility
//!
//! Collapses bursts of scheduled values into a single callback invocation:
//! each `schedule` cancels the previous timer and arms a new one, so only
//! the last value before a quiet period is delivered. This is the piece
//! that keeps per-keystroke search input from rescanning the catalog on
//! every character.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;

/// Debounces values delivered to a callback
///
/// The callback runs on a spawned task after the configured delay, unless
/// a newer value supersedes it first. Dropping the debouncer cancels any
/// timer still pending.
pub struct Debouncer<T: Send + 'static> {
    delay: Duration,
    callback: Arc<dyn Fn(T) + Send + Sync>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Create a debouncer with the given quiet interval and callback
    pub fn new(delay: Duration, callback: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            delay,
            callback: Arc::new(callback),
            pending: Mutex::new(None),
        }
    }

    /// Schedule a value, superseding any value scheduled earlier
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&self, value: T) {
        self.cancel();

        let callback = Arc::clone(&self.callback);
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback(value);
        });

        *self.lock_pending() = Some(handle);
    }

    /// Cancel the pending value, if any
    pub fn cancel(&self) {
        if let Some(handle) = self.lock_pending().take() {
            handle.abort();
        }
    }

    fn lock_pending(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        match self.pending.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<T: Send + 'static> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}
