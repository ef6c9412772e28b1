//! The results engine: pure, deterministic ranking.

use tapdash_protocol::{RoomKey, RoundResults, ScoreLine};

use crate::room::Participant;

/// Computes the ranked Result Record for a finished round.
///
/// Deterministic given the same roster contents and join order: the roster
/// slice is in join order, and a stable sort by descending score leaves
/// equal scores in that order — earliest join wins ties, never randomness.
/// Pure: calling it twice on an unchanged roster yields identical output.
pub fn compute(
    room_id: &RoomKey,
    start_time: u64,
    end_time: u64,
    roster: &[Participant],
) -> RoundResults {
    let mut scores: Vec<ScoreLine> = roster
        .iter()
        .map(|p| ScoreLine {
            player_id: p.player_id.clone(),
            display_name: p.display_name.clone(),
            score: p.score,
        })
        .collect();
    scores.sort_by(|a, b| b.score.cmp(&a.score));

    let winner = scores.first().cloned();

    RoundResults {
        room_id: room_id.clone(),
        start_time,
        end_time,
        duration_ms: end_time.saturating_sub(start_time),
        scores,
        winner,
    }
}
