//! Error types for the room layer.

use tapdash_protocol::RoomKey;

/// Errors surfaced to clients through `join`/`start` acknowledgements.
///
/// Score ticks and disconnects never produce one of these — invalid
/// instances are dropped silently inside the actor.
#[derive(Debug, thiserror::Error)]
pub enum RoomError {
    /// `join` arrived with an empty or whitespace-only display name.
    #[error("display name is required")]
    NameRequired,

    /// `join` arrived while the room was not in the lobby.
    #[error("room {0} has already started")]
    AlreadyStarted(RoomKey),

    /// `start` arrived while a round was already running.
    #[error("room {0} is already running a round")]
    AlreadyRunning(RoomKey),

    /// `start` arrived with an empty roster.
    #[error("room {0} has no players")]
    NoPlayers(RoomKey),

    /// The room's command channel is closed or the reply was dropped.
    #[error("room {0} is unavailable")]
    Unavailable(RoomKey),
}

impl RoomError {
    /// The stable wire code carried in `error-ack` payloads.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NameRequired => "username_required",
            Self::AlreadyStarted(_) => "game_already_started",
            Self::AlreadyRunning(_) => "already_running",
            Self::NoPlayers(_) => "no_players",
            Self::Unavailable(_) => "internal_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_codes_are_stable() {
        let room = RoomKey::main;
        assert_eq!(RoomError::NameRequired.code(), "username_required");
        assert_eq!(
            RoomError::AlreadyStarted(room()).code(),
            "game_already_started"
        );
        assert_eq!(RoomError::AlreadyRunning(room()).code(), "already_running");
        assert_eq!(RoomError::NoPlayers(room()).code(), "no_players");
        assert_eq!(RoomError::Unavailable(room()).code(), "internal_error");
    }

    #[test]
    fn test_messages_name_the_room() {
        let err = RoomError::NoPlayers(RoomKey::new("quick"));
        assert!(err.to_string().contains("quick"));
    }
}
