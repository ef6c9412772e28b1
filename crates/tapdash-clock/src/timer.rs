//! The round timer: at most one scheduled end-of-window wakeup.
//!
//! Each room owns one `RoundTimer`. Arming it replaces whatever was armed
//! before — the previous task is aborted first, so two pending wakeups for
//! the same room can never coexist. The armed future is expected to push an
//! end-of-round command into the room's own command channel, which makes
//! the expiry just another serialized event rather than a privileged path.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::trace;

/// A cancellable, replaceable one-shot timer.
#[derive(Debug, Default)]
pub struct RoundTimer {
    task: Option<JoinHandle<()>>,
}

impl RoundTimer {
    pub fn new() -> Self {
        Self { task: None }
    }

    /// Schedules `on_fire` to run once after `delay`, cancelling any
    /// previously armed wakeup.
    pub fn arm<F>(&mut self, delay: Duration, on_fire: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.disarm();
        trace!(delay_ms = delay.as_millis() as u64, "round timer armed");
        self.task = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            on_fire.await;
        }));
    }

    /// Cancels the armed wakeup, if any. Idempotent.
    pub fn disarm(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            trace!("round timer disarmed");
        }
    }

    /// Whether a wakeup is currently scheduled (or has fired and not been
    /// replaced — the handle is kept until the next arm/disarm).
    pub fn is_armed(&self) -> bool {
        self.task.is_some()
    }
}

impl Drop for RoundTimer {
    fn drop(&mut self) {
        self.disarm();
    }
}
