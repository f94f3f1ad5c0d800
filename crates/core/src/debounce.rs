//! Single-slot debounce scheduler for live validation.
//!
//! The validators themselves are synchronous; editing surfaces call them
//! on every keystroke, so invocations are coalesced here: scheduling a
//! new call cancels any pending one, and at most one call fires per
//! debounce window per [`Debouncer`].

use std::sync::Mutex;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

/// Coalesces rapid-fire validation requests into one deferred call.
pub struct Debouncer {
    window: Duration,
    pending: Mutex<Option<CancellationToken>>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: Mutex::new(None),
        }
    }

    /// Schedule `task` to run after the debounce window elapses,
    /// replacing any previously scheduled call that has not yet fired.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&self, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let token = CancellationToken::new();
        let previous = {
            let mut pending = self.pending.lock().expect("debouncer lock poisoned");
            pending.replace(token.clone())
        };
        if let Some(previous) = previous {
            previous.cancel();
        }

        let window = self.window;
        tokio::spawn(async move {
            tokio::select! {
                () = token.cancelled() => {}
                () = tokio::time::sleep(window) => task(),
            }
        });
    }

    /// Cancel any pending scheduled call without replacing it.
    pub fn cancel(&self) {
        if let Some(token) = self.pending.lock().expect("debouncer lock poisoned").take() {
            token.cancel();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
