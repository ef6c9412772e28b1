//! Core wire types for Tapdash.
//!
//! Every type here has an exact JSON shape that the browser client depends
//! on: event tags are kebab-case (`"score-tick"`), field names camelCase
//! (`"displayName"`). The tests at the bottom pin those shapes down.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// The opaque string key identifying a room.
///
/// Rooms are created lazily on first reference. Payloads may omit the key
/// entirely, in which case the well-known default room is used — the demo
/// client never sends one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomKey(String);

impl RoomKey {
    /// Key of the well-known default room used when a payload omits `roomId`.
    pub const DEFAULT: &'static str = "main";

    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The default room.
    pub fn main() -> Self {
        Self(Self::DEFAULT.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RoomKey {
    fn default() -> Self {
        Self::main()
    }
}

impl fmt::Display for RoomKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An opaque, server-generated player identifier, unique within its room.
///
/// Clients echo this back in `score-tick` payloads; they never mint one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Inbound events (client → server)
// ---------------------------------------------------------------------------

/// A named action sent by a client.
///
/// `join` and `start` are acknowledged with a matching ack event.
/// `score-tick` is fire-and-forget: a late or spoofed tap must not learn
/// why it was dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum ClientEvent {
    /// Enter a room's lobby under a display name.
    Join {
        display_name: String,
        #[serde(default)]
        room_id: Option<RoomKey>,
    },

    /// Open the scoring window for a room.
    Start {
        #[serde(default)]
        room_id: Option<RoomKey>,
    },

    /// One scoring tap. No acknowledgement; invalid ticks vanish silently.
    ScoreTick {
        #[serde(default)]
        room_id: Option<RoomKey>,
        player_id: PlayerId,
    },

    /// Request the cross-room leaderboard view.
    Leaderboard,
}

// ---------------------------------------------------------------------------
// Result records
// ---------------------------------------------------------------------------

/// One player's line in a ranked result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreLine {
    pub player_id: PlayerId,
    pub display_name: String,
    pub score: u64,
}

/// The immutable ranked outcome of one completed round.
///
/// Snapshotted exactly once when a room's window closes. `scores` is sorted
/// non-increasing by score, ties broken by join order; `winner` is the top
/// line, or `None` only when the roster was empty at end time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResults {
    pub room_id: RoomKey,
    pub start_time: u64,
    pub end_time: u64,
    pub duration_ms: u64,
    pub scores: Vec<ScoreLine>,
    pub winner: Option<ScoreLine>,
}

// ---------------------------------------------------------------------------
// Leaderboard view
// ---------------------------------------------------------------------------

/// One entry in the flattened cross-room top list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopEntry {
    pub display_name: String,
    pub score: u64,
    pub room_id: RoomKey,
    /// Completion timestamp of the round this score came from (unix ms).
    pub timestamp: u64,
}

/// The read-only leaderboard query result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardView {
    pub top: Vec<TopEntry>,
    pub recent_rounds: Vec<RoundResults>,
}

// ---------------------------------------------------------------------------
// Outbound events (server → client)
// ---------------------------------------------------------------------------

/// A roster line carried by `roster-update` broadcasts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub player_id: PlayerId,
    pub display_name: String,
}

/// Everything the server sends: acknowledgements to the requesting
/// connection, and room-scoped broadcasts to every member.
///
/// `startTime`/`endTime` are authoritative server timestamps (unix ms);
/// clients must derive their countdowns from the `round-start` payload, not
/// from local clocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum ServerEvent {
    // -- Acknowledgements --
    /// Reply to `join`: the generated player id.
    JoinAck {
        ok: bool,
        player_id: PlayerId,
        room_id: RoomKey,
    },

    /// Reply to `start`: the authoritative start instant and window length.
    StartAck {
        ok: bool,
        room_id: RoomKey,
        start_time: u64,
        duration_ms: u64,
    },

    /// Negative reply to `join` or `start`. `error` is one of the stable
    /// code strings (`username_required`, `game_already_started`,
    /// `already_running`, `no_players`, `internal_error`).
    ErrorAck { ok: bool, error: String },

    // -- Broadcasts --
    /// The room's membership changed.
    RosterUpdate {
        room_id: RoomKey,
        players: Vec<RosterEntry>,
    },

    /// The scoring window opened.
    RoundStart {
        room_id: RoomKey,
        start_time: u64,
        duration_ms: u64,
    },

    /// A player's score changed.
    ScoreUpdate {
        room_id: RoomKey,
        player_id: PlayerId,
        score: u64,
    },

    /// The window closed; final ranked results.
    RoundResults(RoundResults),

    // -- Query replies --
    /// Reply to a `leaderboard` query.
    Leaderboard(LeaderboardView),
}

impl ServerEvent {
    /// Shorthand for a negative acknowledgement.
    pub fn error_ack(code: impl Into<String>) -> Self {
        Self::ErrorAck {
            ok: false,
            error: code.into(),
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
