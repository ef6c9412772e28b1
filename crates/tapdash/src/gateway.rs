//! Per-connection handler: WebSocket upgrade, event decoding, and routing.
//!
//! Each accepted connection gets its own Tokio task running this handler.
//! Outbound traffic — acks and room broadcasts alike — funnels through one
//! unbounded channel drained by a writer task, so a room actor never blocks
//! on a slow socket and per-connection ordering is preserved.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use futures_util::{SinkExt, StreamExt};
use tapdash_protocol::{ClientEvent, ServerEvent, from_json, to_json};
use tapdash_room::{ConnId, EventSink, RoomHandle};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message;

use crate::TapdashError;
use crate::server::{LEADERBOARD_VIEW_SIZE, ServerState};

/// Counter for generating unique connection IDs.
static NEXT_CONN_ID: AtomicU64 = AtomicU64::new(1);

/// Handles a single connection from upgrade to close.
pub(crate) async fn handle_connection(
    stream: TcpStream,
    addr: SocketAddr,
    state: Arc<ServerState>,
) -> Result<(), TapdashError> {
    let ws = tokio_tungstenite::accept_async(stream).await?;
    let conn = ConnId::new(NEXT_CONN_ID.fetch_add(1, Ordering::Relaxed));
    tracing::debug!(%conn, %addr, "accepted WebSocket connection");

    let (mut ws_tx, mut ws_rx) = ws.split();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<ServerEvent>();

    // Writer task: drains the event channel onto the socket. Ends when the
    // last sender (this handler's copy plus any roster entry) is gone.
    let writer = tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            let text = match to_json(&event) {
                Ok(text) => text,
                Err(e) => {
                    tracing::error!(error = %e, "failed to encode event");
                    continue;
                }
            };
            if ws_tx.send(Message::Text(text.into())).await.is_err() {
                break;
            }
        }
        let _ = ws_tx.close().await;
    });

    let mut ctx = ConnCtx {
        conn,
        state,
        event_tx,
        joined: None,
    };

    while let Some(msg) = ws_rx.next().await {
        let text = match msg {
            Ok(Message::Text(text)) => text,
            Ok(Message::Close(_)) => break,
            Ok(_) => continue, // skip ping/pong/binary
            Err(e) => {
                tracing::debug!(%conn, error = %e, "recv error");
                break;
            }
        };

        let event: ClientEvent = match from_json(&text) {
            Ok(event) => event,
            Err(e) => {
                tracing::debug!(%conn, error = %e, "undecodable client event");
                ctx.send(ServerEvent::error_ack("internal_error"));
                continue;
            }
        };

        ctx.dispatch(event).await;
    }

    // Leaving the roster drops the room's sink clone; together with `ctx`
    // going away that lets the writer task drain and exit.
    if let Some((room, player_id)) = ctx.joined.take() {
        tracing::info!(%conn, %player_id, room = %room.room_id(), "connection closed");
        room.drop_conn(conn).await;
    } else {
        tracing::debug!(%conn, "connection closed");
    }
    drop(ctx);

    let _ = writer.await;
    Ok(())
}

/// Per-connection routing state.
struct ConnCtx {
    conn: ConnId,
    state: Arc<ServerState>,
    event_tx: EventSink,
    /// Set after a successful join; one room membership per connection.
    joined: Option<(RoomHandle, tapdash_protocol::PlayerId)>,
}

impl ConnCtx {
    /// Queues an event for this connection. A gone writer means the socket
    /// is closing; nothing left to tell it.
    fn send(&self, event: ServerEvent) {
        let _ = self.event_tx.send(event);
    }

    async fn dispatch(&mut self, event: ClientEvent) {
        match event {
            ClientEvent::Join {
                display_name,
                room_id,
            } => {
                let key = room_id.unwrap_or_default();

                // A connection lives in at most one room; joining a
                // different room implicitly leaves the current one. A join
                // targeting the current room keeps the membership until the
                // room decides (a success replaces the roster entry, a
                // rejection must leave it standing so disconnect teardown
                // still reaches it).
                let mut prev = self.joined.take();
                if let Some((room, _)) = &prev {
                    if room.room_id() != &key {
                        room.drop_conn(self.conn).await;
                        prev = None;
                    }
                }

                let room = {
                    let mut registry = self.state.registry.lock().await;
                    registry.get_or_create(&key)
                };

                match room
                    .join(display_name, self.conn, self.event_tx.clone())
                    .await
                {
                    Ok(player_id) => {
                        self.send(ServerEvent::JoinAck {
                            ok: true,
                            player_id: player_id.clone(),
                            room_id: key,
                        });
                        self.joined = Some((room, player_id));
                    }
                    Err(e) => {
                        self.send(ServerEvent::error_ack(e.code()));
                        self.joined = prev;
                    }
                }
            }

            ClientEvent::Start { room_id } => {
                let key = room_id.unwrap_or_default();
                let room = {
                    let mut registry = self.state.registry.lock().await;
                    registry.get_or_create(&key)
                };

                match room.start().await {
                    Ok(window) => self.send(ServerEvent::StartAck {
                        ok: true,
                        room_id: key,
                        start_time: window.start_time,
                        duration_ms: window.duration_ms,
                    }),
                    Err(e) => self.send(ServerEvent::error_ack(e.code())),
                }
            }

            ClientEvent::ScoreTick { room_id, player_id } => {
                let key = room_id.unwrap_or_default();
                // Ticks into rooms that were never created go nowhere.
                let room = {
                    let registry = self.state.registry.lock().await;
                    registry.get(&key)
                };
                if let Some(room) = room {
                    room.score_tick(player_id, self.conn).await;
                }
            }

            ClientEvent::Leaderboard => {
                let view = self.state.leaderboard.view(LEADERBOARD_VIEW_SIZE);
                self.send(ServerEvent::Leaderboard(view));
            }
        }
    }
}
