//! Room configuration and lifecycle phase.

// ---------------------------------------------------------------------------
// RoomConfig
// ---------------------------------------------------------------------------

/// Configuration for a room instance.
///
/// One config is shared by every room the registry spawns; all rooms run
/// the same window length.
#[derive(Debug, Clone)]
pub struct RoomConfig {
    /// Length of the scoring window in milliseconds.
    pub round_ms: u64,

    /// Guard delay added to the timer (not to the authoritative end time)
    /// to absorb scheduler jitter. Kept small so the client-perceived
    /// window stays fair.
    pub end_guard_ms: u64,

    /// Command channel depth for each room actor.
    pub channel_size: usize,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            round_ms: 15_000,
            end_guard_ms: 10,
            channel_size: 64,
        }
    }
}

// ---------------------------------------------------------------------------
// Phase
// ---------------------------------------------------------------------------

/// The lifecycle phase of a room.
///
/// ```text
/// Lobby → Running → Ended
///             ↖______/        (replay: a finished room may start again)
/// ```
///
/// - **Lobby**: accepting joins, no scoring.
/// - **Running**: the scoring window is open; joins are rejected.
/// - **Ended**: scoring closed, results published. `start` may re-enter
///   Running with the surviving roster; joins stay rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Lobby,
    Running,
    Ended,
}

impl Phase {
    /// Returns `true` if the room is accepting new players.
    pub fn is_joinable(&self) -> bool {
        matches!(self, Self::Lobby)
    }

    /// Returns `true` if the scoring window is open.
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }

    /// Returns `true` if a round may start from this phase.
    pub fn can_start(&self) -> bool {
        !self.is_running()
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lobby => write!(f, "Lobby"),
            Self::Running => write!(f, "Running"),
            Self::Ended => write!(f, "Ended"),
        }
    }
}
