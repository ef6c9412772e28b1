//! Wire protocol for Tapdash.
//!
//! This crate defines everything that travels between a client and the
//! coordinator:
//!
//! - **Types** ([`ClientEvent`], [`ServerEvent`], [`RoundResults`], etc.) —
//!   the named events and their payloads.
//! - **Codec** ([`to_json`], [`from_json`]) — JSON encoding helpers.
//! - **Errors** ([`ProtocolError`]) — what can go wrong while encoding or
//!   decoding.
//!
//! The protocol layer knows nothing about rooms, clocks, or connections —
//! it only describes message shapes. The room layer consumes decoded
//! [`ClientEvent`]s and produces [`ServerEvent`]s; how those bytes move is
//! the gateway's business.

mod codec;
mod error;
mod types;

pub use codec::{from_json, to_json};
pub use error::ProtocolError;
pub use types::{
    ClientEvent, LeaderboardView, PlayerId, RoomKey, RosterEntry,
    RoundResults, ScoreLine, ServerEvent, TopEntry,
};
