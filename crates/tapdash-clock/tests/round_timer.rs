//! Integration tests for the round timer.
//!
//! Uses `tokio::time::pause()` (via `start_paused`) so sleeps resolve
//! deterministically when the test advances the clock.

use std::time::Duration;

use tapdash_clock::RoundTimer;
use tokio::sync::mpsc;

/// Arms `timer` to send `tag` on `tx` after `delay_ms`.
fn arm_send(
    timer: &mut RoundTimer,
    delay_ms: u64,
    tx: mpsc::UnboundedSender<u32>,
    tag: u32,
) {
    timer.arm(Duration::from_millis(delay_ms), async move {
        let _ = tx.send(tag);
    });
}

#[tokio::test(start_paused = true)]
async fn test_timer_fires_once_after_delay() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut timer = RoundTimer::new();
    arm_send(&mut timer, 100, tx, 1);
    // Let the spawned task register its sleep before the clock moves.
    tokio::task::yield_now().await;

    tokio::time::advance(Duration::from_millis(99)).await;
    assert!(rx.try_recv().is_err(), "must not fire early");

    tokio::time::advance(Duration::from_millis(2)).await;
    tokio::task::yield_now().await;
    assert_eq!(rx.try_recv().unwrap(), 1);
    assert!(rx.try_recv().is_err(), "must fire exactly once");
}

#[tokio::test(start_paused = true)]
async fn test_rearm_cancels_previous_wakeup() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut timer = RoundTimer::new();
    arm_send(&mut timer, 100, tx.clone(), 1);
    // Re-arm before the first wakeup: only tag 2 may ever arrive.
    arm_send(&mut timer, 200, tx, 2);
    tokio::task::yield_now().await;

    tokio::time::advance(Duration::from_millis(150)).await;
    tokio::task::yield_now().await;
    assert!(rx.try_recv().is_err(), "cancelled wakeup must not fire");

    tokio::time::advance(Duration::from_millis(100)).await;
    tokio::task::yield_now().await;
    assert_eq!(rx.try_recv().unwrap(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_disarm_prevents_firing() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut timer = RoundTimer::new();
    arm_send(&mut timer, 50, tx, 1);
    timer.disarm();

    tokio::time::advance(Duration::from_millis(100)).await;
    tokio::task::yield_now().await;
    assert!(rx.try_recv().is_err());
    assert!(!timer.is_armed());
}

#[tokio::test(start_paused = true)]
async fn test_drop_aborts_pending_wakeup() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    {
        let mut timer = RoundTimer::new();
        arm_send(&mut timer, 50, tx, 1);
    }

    tokio::time::advance(Duration::from_millis(100)).await;
    tokio::task::yield_now().await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn test_is_armed_reflects_state() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut timer = RoundTimer::new();
    assert!(!timer.is_armed());

    arm_send(&mut timer, 50, tx, 1);
    assert!(timer.is_armed());

    timer.disarm();
    assert!(!timer.is_armed());
}
