//! Last-write-wins debouncing for interactive search.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Holds at most one pending action: scheduling a new one cancels whatever
/// is still waiting out its quiet period, so a burst of queries issues a
/// single search for the final one.
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedule `action` to run after the quiet period, replacing any
    /// action still pending.
    pub fn schedule<F, Fut>(&mut self, action: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send,
    {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action().await;
        }));
    }

    /// Wait for the last scheduled action, if one is still pending.
    pub async fn flush(&mut self) {
        if let Some(pending) = self.pending.take() {
            // An aborted task resolves with a cancellation error; both
            // outcomes mean there is nothing left to wait for.
            let _ = pending.await;
        }
    }
}
