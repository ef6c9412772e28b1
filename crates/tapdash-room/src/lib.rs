//! Room lifecycle management for Tapdash.
//!
//! Each room runs as an isolated Tokio task (actor model) owning its
//! roster, scores, and window timestamps. All transitions for a room —
//! client events and the end-of-window wakeup alike — arrive on the same
//! command channel, so they are serialized per room by construction and a
//! half-applied transition cannot be observed.
//!
//! # Key types
//!
//! - [`RoomRegistry`] — lazily creates rooms, never deletes them
//! - [`RoomHandle`] — send commands to a running room actor
//! - [`Phase`] — the Lobby → Running → Ended lifecycle
//! - [`ResultsSink`] — where finished rounds are published
//! - [`compute`] — the pure ranking function

use std::fmt;

mod error;
mod phase;
mod registry;
mod results;
mod room;
mod sink;

pub use error::RoomError;
pub use phase::{Phase, RoomConfig};
pub use registry::RoomRegistry;
pub use results::compute;
pub use room::{EventSink, Participant, RoomHandle, RoomSnapshot, RoundWindow};
pub use sink::{NullSink, ResultsSink};

/// Opaque handle identifying one client connection.
///
/// Issued by the gateway when a socket is accepted and attached to every
/// event from that socket. The room layer uses it only to match events to
/// roster entries (and to tear an entry down on disconnect) — it confers
/// no ownership and is never sent on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnId(u64);

impl ConnId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn into_inner(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ConnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "conn-{}", self.0)
    }
}
