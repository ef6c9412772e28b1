//! Clock authority and round timer for Tapdash.
//!
//! Every fairness-critical decision in the coordinator — the start instant,
//! the end instant, whether a score tick landed inside the window — is made
//! against one clock: the server's. Clients never contribute timestamps.
//!
//! [`Clock`] is a trait so tests can substitute [`ManualClock`] and place
//! "now" exactly on a window boundary; production uses [`SystemClock`].
//! [`RoundTimer`] schedules the single end-of-window wakeup per room.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

mod timer;

pub use timer::RoundTimer;

/// The single source of truth for "now".
///
/// Returns unix epoch milliseconds. Implementations must be cheap — the
/// room layer reads the clock on every score tick.
pub trait Clock: Send + Sync + 'static {
    fn now_ms(&self) -> u64;
}

/// Wall-clock [`Clock`], backed by the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// A settable [`Clock`] for tests.
///
/// Lets a test pin "now" to an exact millisecond — e.g. precisely on a
/// window boundary — without sleeping.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_ms: AtomicU64,
}

impl ManualClock {
    pub fn new(now_ms: u64) -> Self {
        Self {
            now_ms: AtomicU64::new(now_ms),
        }
    }

    /// Sets the current time. May move backwards; the room layer treats a
    /// pre-window "now" the same as any other out-of-window instant.
    pub fn set(&self, now_ms: u64) {
        self.now_ms.store(now_ms, Ordering::SeqCst);
    }

    /// Advances the current time by `delta_ms`.
    pub fn advance(&self, delta_ms: u64) {
        self.now_ms.fetch_add(delta_ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms.load(Ordering::SeqCst)
    }
}
