//! `TapdashServer` builder and accept loop.
//!
//! Ties the layers together: WebSocket transport → protocol → rooms →
//! leaderboard. Each accepted connection gets its own handler task; each
//! room runs as its own actor task.

use std::net::SocketAddr;
use std::sync::Arc;

use tapdash_clock::{Clock, SystemClock};
use tapdash_leaderboard::SharedLeaderboard;
use tapdash_room::{RoomConfig, RoomRegistry};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use crate::TapdashError;
use crate::gateway::handle_connection;

/// How many entries a `leaderboard` query returns in each list.
pub const LEADERBOARD_VIEW_SIZE: usize = 10;

/// Shared server state, cheaply cloned into each connection task.
///
/// The registry lock is held only for the room-map lookup; all room traffic
/// goes through cloned handles outside the lock.
pub(crate) struct ServerState {
    pub(crate) registry: Mutex<RoomRegistry>,
    pub(crate) leaderboard: SharedLeaderboard,
}

/// Builder for configuring and starting a Tapdash server.
///
/// # Example
///
/// ```rust,ignore
/// use tapdash::prelude::*;
///
/// let server = TapdashServer::builder()
///     .bind("0.0.0.0:8080")
///     .build()
///     .await?;
/// server.run().await
/// ```
pub struct TapdashServerBuilder {
    bind_addr: String,
    room_config: RoomConfig,
    leaderboard_capacity: usize,
    clock: Arc<dyn Clock>,
}

impl TapdashServerBuilder {
    pub fn new() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".to_string(),
            room_config: RoomConfig::default(),
            leaderboard_capacity: tapdash_leaderboard::DEFAULT_CAPACITY,
            clock: Arc::new(SystemClock),
        }
    }

    /// Sets the address to bind the server to.
    pub fn bind(mut self, addr: &str) -> Self {
        self.bind_addr = addr.to_string();
        self
    }

    /// Sets the per-room configuration (window length, end guard).
    pub fn room_config(mut self, config: RoomConfig) -> Self {
        self.room_config = config;
        self
    }

    /// Sets how many finished rounds the leaderboard retains.
    pub fn leaderboard_capacity(mut self, capacity: usize) -> Self {
        self.leaderboard_capacity = capacity;
        self
    }

    /// Replaces the wall clock. Tests substitute a manual clock here.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Binds the listener and assembles the server.
    pub async fn build(self) -> Result<TapdashServer, TapdashError> {
        let listener = TcpListener::bind(&self.bind_addr).await?;
        tracing::info!(addr = %self.bind_addr, "Tapdash server listening");

        let leaderboard =
            SharedLeaderboard::with_capacity(self.leaderboard_capacity);
        let registry = RoomRegistry::new(
            self.room_config,
            self.clock,
            Arc::new(leaderboard.clone()),
        );

        let state = Arc::new(ServerState {
            registry: Mutex::new(registry),
            leaderboard,
        });

        Ok(TapdashServer { listener, state })
    }
}

impl Default for TapdashServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A running Tapdash server.
///
/// Call [`run()`](Self::run) to start accepting connections.
pub struct TapdashServer {
    listener: TcpListener,
    state: Arc<ServerState>,
}

impl TapdashServer {
    pub fn builder() -> TapdashServerBuilder {
        TapdashServerBuilder::new()
    }

    /// Returns the local address the server is bound to.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Runs the accept loop until the process is terminated.
    ///
    /// Each incoming connection is upgraded to WebSocket and served by its
    /// own handler task; a failed upgrade only costs that connection.
    pub async fn run(self) -> Result<(), TapdashError> {
        tracing::info!("Tapdash server running");

        loop {
            match self.listener.accept().await {
                Ok((stream, addr)) => {
                    let state = Arc::clone(&self.state);
                    tokio::spawn(async move {
                        if let Err(e) =
                            handle_connection(stream, addr, state).await
                        {
                            tracing::debug!(
                                %addr,
                                error = %e,
                                "connection ended with error"
                            );
                        }
                    });
                }
                Err(e) => {
                    tracing::error!(error = %e, "accept failed");
                }
            }
        }
    }
}
