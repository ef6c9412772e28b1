//! Unified error type for the Tapdash server.

use tapdash_protocol::ProtocolError;
use tapdash_room::RoomError;

/// Top-level error wrapping every layer the server touches.
///
/// The `#[from]` variants let the `?` operator lift sub-crate errors
/// automatically.
#[derive(Debug, thiserror::Error)]
pub enum TapdashError {
    /// Socket-level failure (bind, accept, read, write).
    #[error("transport error: {0}")]
    Io(#[from] std::io::Error),

    /// WebSocket-level failure (upgrade, frame).
    #[error("websocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    /// Wire encode/decode failure.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// Room operation failure.
    #[error(transparent)]
    Room(#[from] RoomError),
}
