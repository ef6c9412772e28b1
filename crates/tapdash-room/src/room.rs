//! Room actor: an isolated Tokio task that owns one room's state.
//!
//! Everything that can mutate a room — joins, starts, score ticks,
//! disconnects, and the timer's end-of-window wakeup — arrives as a
//! [`RoomCommand`] on one mpsc channel and is applied by the actor loop one
//! at a time. That is the whole concurrency story: per-room mutual
//! exclusion with no locks, and the timer expiry is an ordinary command
//! with no privileged access to state.

use std::sync::Arc;
use std::time::Duration;

use tapdash_clock::{Clock, RoundTimer};
use tapdash_protocol::{
    PlayerId, RoomKey, RosterEntry, RoundResults, ScoreLine, ServerEvent,
};
use tokio::sync::{mpsc, oneshot};

use crate::{ConnId, Phase, ResultsSink, RoomConfig, RoomError, results};

/// Channel on which a room delivers broadcasts to one member's connection.
///
/// This is the outbound contract: the room knows nothing about sockets,
/// only that each roster entry has somewhere to push [`ServerEvent`]s.
/// Sends to a gone receiver are silently dropped.
pub type EventSink = mpsc::UnboundedSender<ServerEvent>;

/// One roster entry. Slice order is join order.
pub struct Participant {
    pub player_id: PlayerId,
    pub display_name: String,
    /// Back-reference matching future events to this entry; never an owner.
    pub conn: ConnId,
    pub score: u64,
    pub(crate) sink: EventSink,
}

/// The authoritative window returned by a successful `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundWindow {
    pub start_time: u64,
    pub duration_ms: u64,
}

/// Commands sent to a room actor through its channel.
pub(crate) enum RoomCommand {
    /// Add a player to the lobby.
    Join {
        display_name: String,
        conn: ConnId,
        sink: EventSink,
        reply: oneshot::Sender<Result<PlayerId, RoomError>>,
    },

    /// Open the scoring window.
    Start {
        reply: oneshot::Sender<Result<RoundWindow, RoomError>>,
    },

    /// One scoring tap. Fire-and-forget; invalid ticks vanish.
    ScoreTick { player_id: PlayerId, conn: ConnId },

    /// A connection went away; remove its roster entry if any.
    Drop { conn: ConnId },

    /// The round timer fired. `round` guards against stale wakeups from a
    /// round that has since been replaced by a replay.
    EndRound { round: u64 },

    /// Request a diagnostic snapshot.
    Snapshot {
        reply: oneshot::Sender<RoomSnapshot>,
    },
}

/// A point-in-time view of room state, for diagnostics and tests.
#[derive(Debug, Clone)]
pub struct RoomSnapshot {
    pub room_id: RoomKey,
    pub phase: Phase,
    pub round: u64,
    pub start_time: Option<u64>,
    pub end_time: Option<u64>,
    /// Roster in join order with current scores.
    pub players: Vec<ScoreLine>,
    /// The live round's published results, if this room has Ended and not
    /// yet been restarted. The leaderboard's archived copy is independent.
    pub last_results: Option<RoundResults>,
}

/// Handle to a running room actor. Cheap to clone.
#[derive(Clone)]
pub struct RoomHandle {
    room_id: RoomKey,
    sender: mpsc::Sender<RoomCommand>,
}

impl RoomHandle {
    pub fn room_id(&self) -> &RoomKey {
        &self.room_id
    }

    /// Joins the room's lobby; returns the generated player id.
    pub async fn join(
        &self,
        display_name: impl Into<String>,
        conn: ConnId,
        sink: EventSink,
    ) -> Result<PlayerId, RoomError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(RoomCommand::Join {
                display_name: display_name.into(),
                conn,
                sink,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RoomError::Unavailable(self.room_id.clone()))?;
        reply_rx
            .await
            .map_err(|_| RoomError::Unavailable(self.room_id.clone()))?
    }

    /// Opens the scoring window; returns the authoritative start/duration.
    pub async fn start(&self) -> Result<RoundWindow, RoomError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(RoomCommand::Start { reply: reply_tx })
            .await
            .map_err(|_| RoomError::Unavailable(self.room_id.clone()))?;
        reply_rx
            .await
            .map_err(|_| RoomError::Unavailable(self.room_id.clone()))?
    }

    /// Enqueues a score tick. Never acknowledged: a tick that cannot be
    /// enqueued is indistinguishable from one rejected inside the room.
    pub async fn score_tick(&self, player_id: PlayerId, conn: ConnId) {
        let _ = self
            .sender
            .send(RoomCommand::ScoreTick { player_id, conn })
            .await;
    }

    /// Notifies the room that a connection is gone.
    pub async fn drop_conn(&self, conn: ConnId) {
        let _ = self.sender.send(RoomCommand::Drop { conn }).await;
    }

    /// Fetches a diagnostic snapshot.
    pub async fn snapshot(&self) -> Result<RoomSnapshot, RoomError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(RoomCommand::Snapshot { reply: reply_tx })
            .await
            .map_err(|_| RoomError::Unavailable(self.room_id.clone()))?;
        reply_rx
            .await
            .map_err(|_| RoomError::Unavailable(self.room_id.clone()))
    }
}

/// The internal room actor state. Runs inside a Tokio task.
struct RoomActor {
    room_id: RoomKey,
    phase: Phase,
    config: RoomConfig,
    /// Round generation, bumped on every successful start. The armed timer
    /// carries the value it was armed for; mismatched EndRounds are stale.
    round: u64,
    start_time: Option<u64>,
    end_time: Option<u64>,
    roster: Vec<Participant>,
    last_results: Option<RoundResults>,
    clock: Arc<dyn Clock>,
    results_sink: Arc<dyn ResultsSink>,
    timer: RoundTimer,
    /// Sender side of our own channel, cloned into the armed timer so its
    /// expiry re-enters the actor as a serialized command.
    self_tx: mpsc::Sender<RoomCommand>,
    receiver: mpsc::Receiver<RoomCommand>,
}

impl RoomActor {
    /// Runs the actor loop until every handle (and the timer) is gone.
    async fn run(mut self) {
        tracing::info!(room = %self.room_id, "room actor started");

        while let Some(cmd) = self.receiver.recv().await {
            match cmd {
                RoomCommand::Join {
                    display_name,
                    conn,
                    sink,
                    reply,
                } => {
                    let result = self.handle_join(display_name, conn, sink);
                    let _ = reply.send(result);
                }
                RoomCommand::Start { reply } => {
                    let result = self.handle_start();
                    let _ = reply.send(result);
                }
                RoomCommand::ScoreTick { player_id, conn } => {
                    self.handle_score_tick(player_id, conn);
                }
                RoomCommand::Drop { conn } => {
                    self.handle_drop(conn);
                }
                RoomCommand::EndRound { round } => {
                    self.handle_end_round(round);
                }
                RoomCommand::Snapshot { reply } => {
                    let _ = reply.send(self.snapshot());
                }
            }
        }

        tracing::info!(room = %self.room_id, "room actor stopped");
    }

    fn handle_join(
        &mut self,
        display_name: String,
        conn: ConnId,
        sink: EventSink,
    ) -> Result<PlayerId, RoomError> {
        if !self.phase.is_joinable() {
            return Err(RoomError::AlreadyStarted(self.room_id.clone()));
        }
        let display_name = display_name.trim().to_string();
        if display_name.is_empty() {
            return Err(RoomError::NameRequired);
        }

        // One roster entry per connection: a re-join replaces the old entry.
        if let Some(pos) = self.roster.iter().position(|p| p.conn == conn) {
            let old = self.roster.remove(pos);
            tracing::debug!(
                room = %self.room_id,
                %conn,
                player = %old.player_id,
                "re-join replaces prior roster entry"
            );
        }

        let player_id = self.generate_player_id();
        self.roster.push(Participant {
            player_id: player_id.clone(),
            display_name,
            conn,
            score: 0,
            sink,
        });

        tracing::info!(
            room = %self.room_id,
            player = %player_id,
            players = self.roster.len(),
            "player joined"
        );
        self.broadcast_roster();

        Ok(player_id)
    }

    fn handle_start(&mut self) -> Result<RoundWindow, RoomError> {
        if !self.phase.can_start() {
            return Err(RoomError::AlreadyRunning(self.room_id.clone()));
        }
        if self.roster.is_empty() {
            return Err(RoomError::NoPlayers(self.room_id.clone()));
        }

        // Fresh round: stale scores from a prior run must never leak in.
        for p in &mut self.roster {
            p.score = 0;
        }
        self.last_results = None;
        self.round += 1;

        let start_time = self.clock.now_ms();
        let end_time = start_time + self.config.round_ms;
        self.start_time = Some(start_time);
        self.end_time = Some(end_time);
        self.phase = Phase::Running;

        tracing::info!(
            room = %self.room_id,
            round = self.round,
            start_time,
            end_time,
            players = self.roster.len(),
            "round started"
        );

        self.broadcast(ServerEvent::RoundStart {
            room_id: self.room_id.clone(),
            start_time,
            duration_ms: self.config.round_ms,
        });

        // Re-arming aborts any previously scheduled wakeup, so at most one
        // timer is ever live for this room.
        let round = self.round;
        let tx = self.self_tx.clone();
        self.timer.arm(
            Duration::from_millis(self.config.round_ms + self.config.end_guard_ms),
            async move {
                let _ = tx.send(RoomCommand::EndRound { round }).await;
            },
        );

        Ok(RoundWindow {
            start_time,
            duration_ms: self.config.round_ms,
        })
    }

    /// Applies one tap, or silently drops it. Validity is decided solely by
    /// the server clock at the instant of processing — client timestamps
    /// play no part, and no rejection reason ever reaches the sender.
    fn handle_score_tick(&mut self, player_id: PlayerId, conn: ConnId) {
        if !self.phase.is_running() {
            tracing::trace!(room = %self.room_id, %player_id, "tick outside Running, ignoring");
            return;
        }
        let (Some(start), Some(end)) = (self.start_time, self.end_time) else {
            return;
        };
        let now = self.clock.now_ms();
        if now < start || now > end {
            tracing::trace!(room = %self.room_id, %player_id, now, "tick outside window, ignoring");
            return;
        }

        let Some(p) = self
            .roster
            .iter_mut()
            .find(|p| p.player_id == player_id)
        else {
            tracing::trace!(room = %self.room_id, %player_id, "tick from unknown player, ignoring");
            return;
        };
        if p.conn != conn {
            tracing::trace!(
                room = %self.room_id,
                %player_id,
                "tick with mismatched connection handle, ignoring"
            );
            return;
        }

        p.score += 1;
        let score = p.score;
        let player_id = p.player_id.clone();

        self.broadcast(ServerEvent::ScoreUpdate {
            room_id: self.room_id.clone(),
            player_id,
            score,
        });
    }

    fn handle_drop(&mut self, conn: ConnId) {
        let Some(pos) = self.roster.iter().position(|p| p.conn == conn) else {
            return;
        };
        let gone = self.roster.remove(pos);
        tracing::info!(
            room = %self.room_id,
            player = %gone.player_id,
            players = self.roster.len(),
            "player disconnected"
        );
        // A room with zero remaining players sits idle; it is not auto-ended.
        self.broadcast_roster();
    }

    fn handle_end_round(&mut self, round: u64) {
        if round != self.round {
            tracing::debug!(
                room = %self.room_id,
                stale = round,
                current = self.round,
                "stale end-of-round wakeup, ignoring"
            );
            return;
        }
        if !self.phase.is_running() {
            // Already Ended — endNow is idempotent.
            return;
        }
        let (Some(start), Some(end)) = (self.start_time, self.end_time) else {
            return;
        };

        self.phase = Phase::Ended;
        self.timer.disarm();

        let results = results::compute(&self.room_id, start, end, &self.roster);
        self.last_results = Some(results.clone());

        tracing::info!(
            room = %self.room_id,
            round = self.round,
            winner = results
                .winner
                .as_ref()
                .map(|w| w.display_name.as_str())
                .unwrap_or("-"),
            "round ended"
        );

        self.broadcast(ServerEvent::RoundResults(results.clone()));
        self.results_sink.record(&results);
    }

    /// Generates a fresh player id, unique within this room.
    fn generate_player_id(&self) -> PlayerId {
        use rand::Rng;
        loop {
            let bytes: [u8; 6] = rand::rng().random();
            let id = format!(
                "p-{}",
                bytes
                    .iter()
                    .map(|b| format!("{b:02x}"))
                    .collect::<String>()
            );
            if !self.roster.iter().any(|p| p.player_id.as_str() == id) {
                return PlayerId::new(id);
            }
        }
    }

    /// Delivers `event` to every current room member. Gone receivers are
    /// skipped silently.
    fn broadcast(&self, event: ServerEvent) {
        for p in &self.roster {
            let _ = p.sink.send(event.clone());
        }
    }

    fn broadcast_roster(&self) {
        let players = self
            .roster
            .iter()
            .map(|p| RosterEntry {
                player_id: p.player_id.clone(),
                display_name: p.display_name.clone(),
            })
            .collect();
        self.broadcast(ServerEvent::RosterUpdate {
            room_id: self.room_id.clone(),
            players,
        });
    }

    fn snapshot(&self) -> RoomSnapshot {
        RoomSnapshot {
            room_id: self.room_id.clone(),
            phase: self.phase,
            round: self.round,
            start_time: self.start_time,
            end_time: self.end_time,
            players: self
                .roster
                .iter()
                .map(|p| ScoreLine {
                    player_id: p.player_id.clone(),
                    display_name: p.display_name.clone(),
                    score: p.score,
                })
                .collect(),
            last_results: self.last_results.clone(),
        }
    }
}

/// Spawns a new room actor task and returns a handle to communicate with it.
pub(crate) fn spawn_room(
    room_id: RoomKey,
    config: RoomConfig,
    clock: Arc<dyn Clock>,
    results_sink: Arc<dyn ResultsSink>,
) -> RoomHandle {
    let (tx, rx) = mpsc::channel(config.channel_size);

    let actor = RoomActor {
        room_id: room_id.clone(),
        phase: Phase::Lobby,
        config,
        round: 0,
        start_time: None,
        end_time: None,
        roster: Vec::new(),
        last_results: None,
        clock,
        results_sink,
        timer: RoundTimer::new(),
        self_tx: tx.clone(),
        receiver: rx,
    };

    tokio::spawn(actor.run());

    RoomHandle {
        room_id,
        sender: tx,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NullSink;
    use std::sync::Mutex;
    use tapdash_clock::ManualClock;

    struct CaptureSink(Mutex<Vec<RoundResults>>);

    impl CaptureSink {
        fn new() -> Arc<Self> {
            Arc::new(Self(Mutex::new(Vec::new())))
        }

        fn recorded(&self) -> Vec<RoundResults> {
            self.0.lock().unwrap().clone()
        }
    }

    impl ResultsSink for CaptureSink {
        fn record(&self, results: &RoundResults) {
            self.0.lock().unwrap().push(results.clone());
        }
    }

    fn actor(
        clock: Arc<ManualClock>,
        results_sink: Arc<dyn ResultsSink>,
    ) -> RoomActor {
        let (tx, rx) = mpsc::channel(8);
        RoomActor {
            room_id: RoomKey::new("test-room"),
            phase: Phase::Lobby,
            config: RoomConfig::default(),
            round: 0,
            start_time: None,
            end_time: None,
            roster: Vec::new(),
            last_results: None,
            clock,
            results_sink,
            timer: RoundTimer::new(),
            self_tx: tx,
            receiver: rx,
        }
    }

    fn join(actor: &mut RoomActor, name: &str, conn: ConnId) -> PlayerId {
        let (sink, _rx) = mpsc::unbounded_channel();
        actor.handle_join(name.to_string(), conn, sink).unwrap()
    }

    fn score_of(actor: &RoomActor, player_id: &PlayerId) -> u64 {
        actor
            .roster
            .iter()
            .find(|p| &p.player_id == player_id)
            .map(|p| p.score)
            .unwrap()
    }

    #[tokio::test]
    async fn test_score_tick_at_start_and_end_boundaries_count() {
        let clock = Arc::new(ManualClock::new(1_000));
        let mut actor = actor(clock.clone(), Arc::new(NullSink));
        let conn = ConnId::new(1);
        let player = join(&mut actor, "ada", conn);
        actor.handle_start().unwrap();

        // now == start_time
        actor.handle_score_tick(player.clone(), conn);
        assert_eq!(score_of(&actor, &player), 1);

        // now == end_time, still inside the window
        clock.set(1_000 + RoomConfig::default().round_ms);
        actor.handle_score_tick(player.clone(), conn);
        assert_eq!(score_of(&actor, &player), 2);
    }

    #[tokio::test]
    async fn test_score_tick_one_ms_after_end_ignored() {
        let clock = Arc::new(ManualClock::new(1_000));
        let mut actor = actor(clock.clone(), Arc::new(NullSink));
        let conn = ConnId::new(1);
        let player = join(&mut actor, "ada", conn);
        actor.handle_start().unwrap();

        clock.set(1_000 + RoomConfig::default().round_ms + 1);
        actor.handle_score_tick(player.clone(), conn);
        assert_eq!(score_of(&actor, &player), 0);
    }

    #[tokio::test]
    async fn test_score_tick_in_lobby_ignored() {
        let clock = Arc::new(ManualClock::new(1_000));
        let mut actor = actor(clock.clone(), Arc::new(NullSink));
        let conn = ConnId::new(1);
        let player = join(&mut actor, "ada", conn);

        actor.handle_score_tick(player.clone(), conn);
        assert_eq!(score_of(&actor, &player), 0);
    }

    #[tokio::test]
    async fn test_score_tick_one_ms_before_start_ignored() {
        let clock = Arc::new(ManualClock::new(1_000));
        let mut actor = actor(clock.clone(), Arc::new(NullSink));
        let conn = ConnId::new(1);
        let player = join(&mut actor, "ada", conn);
        actor.handle_start().unwrap();

        // The round is Running but the clock reads just before the window.
        clock.set(999);
        actor.handle_score_tick(player.clone(), conn);
        assert_eq!(score_of(&actor, &player), 0);
    }

    #[tokio::test]
    async fn test_score_tick_wrong_conn_ignored() {
        let clock = Arc::new(ManualClock::new(1_000));
        let mut actor = actor(clock.clone(), Arc::new(NullSink));
        let player = join(&mut actor, "ada", ConnId::new(1));
        actor.handle_start().unwrap();

        actor.handle_score_tick(player.clone(), ConnId::new(99));
        assert_eq!(score_of(&actor, &player), 0);
    }

    #[tokio::test]
    async fn test_score_tick_unknown_player_ignored() {
        let clock = Arc::new(ManualClock::new(1_000));
        let mut actor = actor(clock.clone(), Arc::new(NullSink));
        join(&mut actor, "ada", ConnId::new(1));
        actor.handle_start().unwrap();

        actor.handle_score_tick(PlayerId::new("p-nobody"), ConnId::new(1));
    }

    #[tokio::test]
    async fn test_join_rejected_once_started() {
        let clock = Arc::new(ManualClock::new(1_000));
        let mut actor = actor(clock.clone(), Arc::new(NullSink));
        join(&mut actor, "ada", ConnId::new(1));
        actor.handle_start().unwrap();

        let (sink, _rx) = mpsc::unbounded_channel();
        let err = actor
            .handle_join("grace".to_string(), ConnId::new(2), sink)
            .unwrap_err();
        assert!(matches!(err, RoomError::AlreadyStarted(_)));
    }

    #[tokio::test]
    async fn test_join_blank_name_rejected() {
        let clock = Arc::new(ManualClock::new(1_000));
        let mut actor = actor(clock.clone(), Arc::new(NullSink));

        let (sink, _rx) = mpsc::unbounded_channel();
        let err = actor
            .handle_join("   ".to_string(), ConnId::new(1), sink)
            .unwrap_err();
        assert!(matches!(err, RoomError::NameRequired));
    }

    #[tokio::test]
    async fn test_join_same_conn_replaces_entry() {
        let clock = Arc::new(ManualClock::new(1_000));
        let mut actor = actor(clock.clone(), Arc::new(NullSink));
        let conn = ConnId::new(1);
        let first = join(&mut actor, "ada", conn);
        let second = join(&mut actor, "ada-2", conn);

        assert_eq!(actor.roster.len(), 1);
        assert_ne!(first, second);
        assert_eq!(actor.roster[0].display_name, "ada-2");
    }

    #[tokio::test]
    async fn test_start_no_players_rejected() {
        let clock = Arc::new(ManualClock::new(1_000));
        let mut actor = actor(clock.clone(), Arc::new(NullSink));
        let err = actor.handle_start().unwrap_err();
        assert!(matches!(err, RoomError::NoPlayers(_)));
    }

    #[tokio::test]
    async fn test_start_while_running_rejected() {
        let clock = Arc::new(ManualClock::new(1_000));
        let mut actor = actor(clock.clone(), Arc::new(NullSink));
        join(&mut actor, "ada", ConnId::new(1));
        actor.handle_start().unwrap();

        let err = actor.handle_start().unwrap_err();
        assert!(matches!(err, RoomError::AlreadyRunning(_)));
    }

    #[tokio::test]
    async fn test_end_round_publishes_and_records() {
        let clock = Arc::new(ManualClock::new(1_000));
        let capture = CaptureSink::new();
        let mut actor = actor(clock.clone(), capture.clone());
        let conn_a = ConnId::new(1);
        let conn_b = ConnId::new(2);
        let ada = join(&mut actor, "ada", conn_a);
        let grace = join(&mut actor, "grace", conn_b);
        actor.handle_start().unwrap();

        for _ in 0..5 {
            actor.handle_score_tick(ada.clone(), conn_a);
        }
        for _ in 0..3 {
            actor.handle_score_tick(grace.clone(), conn_b);
        }
        actor.handle_end_round(1);

        assert_eq!(actor.phase, Phase::Ended);
        let results = actor.last_results.clone().unwrap();
        assert_eq!(results.start_time, 1_000);
        assert_eq!(results.end_time, 1_000 + RoomConfig::default().round_ms);
        assert_eq!(results.winner.as_ref().unwrap().display_name, "ada");
        assert_eq!(results.scores[0].score, 5);
        assert_eq!(results.scores[1].score, 3);

        let recorded = capture.recorded();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0], results);
    }

    #[tokio::test]
    async fn test_end_round_stale_generation_ignored() {
        let clock = Arc::new(ManualClock::new(1_000));
        let mut actor = actor(clock.clone(), Arc::new(NullSink));
        join(&mut actor, "ada", ConnId::new(1));
        actor.handle_start().unwrap();
        actor.handle_end_round(1);
        actor.handle_start().unwrap();

        // Wakeup armed for round 1 arrives after round 2 began.
        actor.handle_end_round(1);
        assert_eq!(actor.phase, Phase::Running);
        assert_eq!(actor.round, 2);
    }

    #[tokio::test]
    async fn test_end_round_idempotent() {
        let clock = Arc::new(ManualClock::new(1_000));
        let capture = CaptureSink::new();
        let mut actor = actor(clock.clone(), capture.clone());
        join(&mut actor, "ada", ConnId::new(1));
        actor.handle_start().unwrap();
        actor.handle_end_round(1);
        actor.handle_end_round(1);

        assert_eq!(capture.recorded().len(), 1);
    }

    #[tokio::test]
    async fn test_restart_resets_scores_and_clears_results() {
        let clock = Arc::new(ManualClock::new(1_000));
        let mut actor = actor(clock.clone(), Arc::new(NullSink));
        let conn = ConnId::new(1);
        let player = join(&mut actor, "ada", conn);
        actor.handle_start().unwrap();
        actor.handle_score_tick(player.clone(), conn);
        actor.handle_end_round(1);
        assert!(actor.last_results.is_some());

        clock.set(50_000);
        let window = actor.handle_start().unwrap();
        assert_eq!(actor.round, 2);
        assert_eq!(window.start_time, 50_000);
        assert_eq!(score_of(&actor, &player), 0);
        assert!(actor.last_results.is_none());
    }

    #[tokio::test]
    async fn test_drop_removes_roster_entry() {
        let clock = Arc::new(ManualClock::new(1_000));
        let mut actor = actor(clock.clone(), Arc::new(NullSink));
        let conn = ConnId::new(1);
        join(&mut actor, "ada", conn);
        join(&mut actor, "grace", ConnId::new(2));

        actor.handle_drop(conn);
        assert_eq!(actor.roster.len(), 1);
        assert_eq!(actor.roster[0].display_name, "grace");

        // Unknown connection is a no-op.
        actor.handle_drop(ConnId::new(42));
        assert_eq!(actor.roster.len(), 1);
    }
}
