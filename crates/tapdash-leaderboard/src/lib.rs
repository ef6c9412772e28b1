//! Bounded cross-room leaderboard.
//!
//! Every finished round across every room is archived here as an immutable
//! [`RoundResults`] snapshot. Memory stays bounded: once `capacity` rounds
//! are held, recording another evicts the oldest, and any top score that
//! lived only in the evicted round disappears with it. The top list is
//! always derived fresh from whatever rounds are currently retained.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tapdash_protocol::{LeaderboardView, RoundResults, TopEntry};
use tapdash_room::ResultsSink;

/// Default number of round snapshots retained.
pub const DEFAULT_CAPACITY: usize = 50;

/// The leaderboard store. Not thread-safe on its own; see
/// [`SharedLeaderboard`] for the handle the rest of the system uses.
pub struct Leaderboard {
    /// Retained rounds, oldest first.
    rounds: VecDeque<RoundResults>,
    capacity: usize,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// A zero capacity retains nothing; every record is evicted immediately.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rounds: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Archives one finished round, evicting the oldest if at capacity.
    pub fn record(&mut self, results: RoundResults) {
        while self.rounds.len() >= self.capacity {
            if let Some(evicted) = self.rounds.pop_front() {
                tracing::debug!(
                    room = %evicted.room_id,
                    end_time = evicted.end_time,
                    "evicting oldest round from leaderboard"
                );
            } else {
                // capacity == 0
                return;
            }
        }
        self.rounds.push_back(results);
    }

    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// The best individual scores across all retained rounds, highest
    /// first. Ties rank the earlier-completed round first. A player who
    /// appears in several retained rounds contributes one entry per round.
    pub fn top_n(&self, n: usize) -> Vec<TopEntry> {
        let mut entries: Vec<TopEntry> = self
            .rounds
            .iter()
            .flat_map(|round| {
                round.scores.iter().map(|line| TopEntry {
                    display_name: line.display_name.clone(),
                    score: line.score,
                    room_id: round.room_id.clone(),
                    timestamp: round.end_time,
                })
            })
            .collect();
        // Stable sort keeps earlier rounds ahead on equal scores because
        // `rounds` is ordered oldest first.
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(n);
        entries
    }

    /// The most recently completed rounds, newest first.
    pub fn recent_rounds(&self, n: usize) -> Vec<RoundResults> {
        self.rounds.iter().rev().take(n).cloned().collect()
    }

    /// The combined query result served to clients.
    pub fn view(&self, n: usize) -> LeaderboardView {
        LeaderboardView {
            top: self.top_n(n),
            recent_rounds: self.recent_rounds(n),
        }
    }
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::new()
    }
}

/// Cheap-to-clone shared handle over the leaderboard store.
///
/// Implements [`ResultsSink`] so room actors can archive finished rounds
/// without depending on this crate's types.
#[derive(Clone)]
pub struct SharedLeaderboard {
    inner: Arc<Mutex<Leaderboard>>,
}

impl SharedLeaderboard {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Leaderboard::with_capacity(capacity))),
        }
    }

    pub fn view(&self, n: usize) -> LeaderboardView {
        match self.inner.lock() {
            Ok(board) => board.view(n),
            Err(poisoned) => poisoned.into_inner().view(n),
        }
    }

    pub fn round_count(&self) -> usize {
        match self.inner.lock() {
            Ok(board) => board.round_count(),
            Err(poisoned) => poisoned.into_inner().round_count(),
        }
    }
}

impl Default for SharedLeaderboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultsSink for SharedLeaderboard {
    fn record(&self, results: &RoundResults) {
        match self.inner.lock() {
            Ok(mut board) => board.record(results.clone()),
            Err(poisoned) => poisoned.into_inner().record(results.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tapdash_protocol::{PlayerId, RoomKey, ScoreLine};

    fn line(name: &str, score: u64) -> ScoreLine {
        ScoreLine {
            player_id: PlayerId::new(format!("p-{name}")),
            display_name: name.to_string(),
            score,
        }
    }

    fn round(room: &str, end_time: u64, scores: Vec<ScoreLine>) -> RoundResults {
        let winner = scores.first().cloned();
        RoundResults {
            room_id: RoomKey::new(room),
            start_time: end_time - 15_000,
            end_time,
            duration_ms: 15_000,
            scores,
            winner,
        }
    }

    #[test]
    fn test_record_retains_round() {
        let mut board = Leaderboard::new();
        board.record(round("main", 15_000, vec![line("ada", 5)]));
        assert_eq!(board.round_count(), 1);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut board = Leaderboard::with_capacity(2);
        board.record(round("main", 15_000, vec![line("ada", 99)]));
        board.record(round("main", 30_000, vec![line("grace", 5)]));
        board.record(round("main", 45_000, vec![line("linus", 3)]));

        assert_eq!(board.round_count(), 2);
        // ada's 99 lived only in the evicted round and is gone.
        let top = board.top_n(10);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].display_name, "grace");
        assert_eq!(top[1].display_name, "linus");
    }

    #[test]
    fn test_zero_capacity_retains_nothing() {
        let mut board = Leaderboard::with_capacity(0);
        board.record(round("main", 15_000, vec![line("ada", 5)]));
        assert_eq!(board.round_count(), 0);
        assert!(board.top_n(10).is_empty());
    }

    #[test]
    fn test_top_n_flattens_across_rooms() {
        let mut board = Leaderboard::new();
        board.record(round("alpha", 15_000, vec![line("ada", 7), line("grace", 2)]));
        board.record(round("beta", 20_000, vec![line("linus", 4)]));

        let top = board.top_n(10);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].display_name, "ada");
        assert_eq!(top[0].room_id, RoomKey::new("alpha"));
        assert_eq!(top[0].timestamp, 15_000);
        assert_eq!(top[1].display_name, "linus");
        assert_eq!(top[2].display_name, "grace");
    }

    #[test]
    fn test_top_n_tie_prefers_earlier_round() {
        let mut board = Leaderboard::new();
        board.record(round("alpha", 15_000, vec![line("ada", 4)]));
        board.record(round("beta", 20_000, vec![line("grace", 4)]));

        let top = board.top_n(2);
        assert_eq!(top[0].display_name, "ada");
        assert_eq!(top[1].display_name, "grace");
    }

    #[test]
    fn test_top_n_truncates() {
        let mut board = Leaderboard::new();
        board.record(round(
            "main",
            15_000,
            vec![line("ada", 5), line("grace", 4), line("linus", 3)],
        ));
        assert_eq!(board.top_n(2).len(), 2);
    }

    #[test]
    fn test_same_player_counts_once_per_round() {
        let mut board = Leaderboard::new();
        board.record(round("main", 15_000, vec![line("ada", 5)]));
        board.record(round("main", 30_000, vec![line("ada", 8)]));

        let top = board.top_n(10);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].score, 8);
        assert_eq!(top[1].score, 5);
    }

    #[test]
    fn test_recent_rounds_newest_first() {
        let mut board = Leaderboard::new();
        board.record(round("main", 15_000, vec![line("ada", 1)]));
        board.record(round("main", 30_000, vec![line("ada", 2)]));
        board.record(round("main", 45_000, vec![line("ada", 3)]));

        let recent = board.recent_rounds(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].end_time, 45_000);
        assert_eq!(recent[1].end_time, 30_000);
    }

    #[test]
    fn test_view_combines_top_and_recent() {
        let mut board = Leaderboard::new();
        board.record(round("main", 15_000, vec![line("ada", 5)]));

        let view = board.view(10);
        assert_eq!(view.top.len(), 1);
        assert_eq!(view.recent_rounds.len(), 1);
    }

    #[test]
    fn test_empty_round_contributes_no_top_entries() {
        let mut board = Leaderboard::new();
        board.record(round("main", 15_000, vec![]));

        assert_eq!(board.round_count(), 1);
        assert!(board.top_n(10).is_empty());
        assert_eq!(board.recent_rounds(10).len(), 1);
    }

    #[test]
    fn test_shared_handle_records_through_sink() {
        let shared = SharedLeaderboard::with_capacity(2);
        let sink: &dyn ResultsSink = &shared;
        sink.record(&round("main", 15_000, vec![line("ada", 5)]));

        assert_eq!(shared.round_count(), 1);
        let view = shared.view(10);
        assert_eq!(view.top[0].display_name, "ada");
    }
}
