//! The seam between rooms and whatever aggregates finished rounds.

use tapdash_protocol::RoundResults;

/// Receives each room's Result Record the moment its window closes.
///
/// The room actor calls this synchronously while Ended is being entered, so
/// implementations must be short and non-blocking (the leaderboard locks a
/// mutex and appends). Implementing this as a trait keeps the room layer
/// ignorant of the aggregator and lets tests capture records directly.
pub trait ResultsSink: Send + Sync + 'static {
    fn record(&self, results: &RoundResults);
}

/// Discards every record. Useful for rooms whose results nobody retains.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ResultsSink for NullSink {
    fn record(&self, _results: &RoundResults) {}
}
