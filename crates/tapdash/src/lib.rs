//! # Tapdash
//!
//! Server-authoritative multiplayer tap-race backend.
//!
//! Players join named rooms over WebSocket, a round opens a fixed scoring
//! window timed by the server's clock, taps inside the window score one
//! point each, and the server publishes ranked results when the window
//! closes. Finished rounds feed a bounded cross-room leaderboard.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tapdash::prelude::*;
//!
//! # async fn run() -> Result<(), TapdashError> {
//! let server = TapdashServer::builder()
//!     .bind("0.0.0.0:8080")
//!     .build()
//!     .await?;
//! server.run().await
//! # }
//! ```

mod error;
mod gateway;
mod server;

pub use error::TapdashError;
pub use server::{LEADERBOARD_VIEW_SIZE, TapdashServer, TapdashServerBuilder};

pub mod prelude {
    //! Everything needed to stand up a server.

    pub use crate::{TapdashError, TapdashServer, TapdashServerBuilder};
    pub use tapdash_clock::{Clock, ManualClock, SystemClock};
    pub use tapdash_leaderboard::SharedLeaderboard;
    pub use tapdash_protocol::{
        ClientEvent, LeaderboardView, PlayerId, RoomKey, RoundResults,
        ServerEvent,
    };
    pub use tapdash_room::{RoomConfig, RoomError};
}
