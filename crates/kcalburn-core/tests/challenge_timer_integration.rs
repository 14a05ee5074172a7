//! Integration tests for the challenge timer driven by its own tick source.
//!
//! All tests run on tokio's paused clock, so "seconds" pass instantly.

use std::time::Duration;

use kcalburn_core::timer::COMPLETION_MESSAGE;
use kcalburn_core::{
    estimate, CalculationInput, Catalog, ChallengePhase, ChallengeTimer, ChallengeView, Event,
};
use tokio::time::{sleep, timeout, Instant};

fn open_run(timer: &mut ChallengeTimer, target: u64) {
    let run = Catalog::builtin().get("run").cloned().unwrap();
    timer.open(run, target);
}

#[tokio::test(start_paused = true)]
async fn five_ticks_take_five_seconds() {
    let mut timer = ChallengeTimer::new();
    open_run(&mut timer, 20);
    let started = Instant::now();
    timer.start().unwrap();

    for _ in 0..5 {
        timer.next_tick().await;
    }

    assert_eq!(timer.elapsed_secs(), 5);
    assert_eq!(timer.progress(), 5.0 / 20.0);
    assert!(started.elapsed() >= Duration::from_secs(5));
    assert!(started.elapsed() < Duration::from_secs(6));
}

#[tokio::test(start_paused = true)]
async fn paused_time_is_not_caught_up() {
    let mut timer = ChallengeTimer::new();
    open_run(&mut timer, 60);
    timer.start().unwrap();
    for _ in 0..5 {
        timer.next_tick().await;
    }

    timer.pause().unwrap();
    sleep(Duration::from_secs(3)).await;
    timer.resume().unwrap();
    assert_eq!(timer.elapsed_secs(), 5);

    let resumed = Instant::now();
    timer.next_tick().await;
    assert_eq!(timer.elapsed_secs(), 6);
    assert!(resumed.elapsed() >= Duration::from_secs(1));
}

#[tokio::test(start_paused = true)]
async fn next_tick_pends_while_paused() {
    let mut timer = ChallengeTimer::new();
    open_run(&mut timer, 60);
    timer.start().unwrap();
    timer.next_tick().await;
    timer.pause().unwrap();

    let waited = timeout(Duration::from_secs(30), timer.next_tick()).await;
    assert!(waited.is_err());
    assert_eq!(timer.elapsed_secs(), 1);
}

#[tokio::test(start_paused = true)]
async fn next_tick_pends_while_ready_or_closed() {
    let mut timer = ChallengeTimer::new();
    assert!(timeout(Duration::from_secs(5), timer.next_tick()).await.is_err());

    open_run(&mut timer, 60);
    assert!(timeout(Duration::from_secs(5), timer.next_tick()).await.is_err());
    assert_eq!(timer.phase(), ChallengePhase::Ready);
    assert_eq!(timer.elapsed_secs(), 0);
}

#[tokio::test(start_paused = true)]
async fn completion_notice_fires_once_and_timer_keeps_counting() {
    let mut timer = ChallengeTimer::new();
    open_run(&mut timer, 4);
    timer.start().unwrap();

    let mut completions = 0;
    for _ in 0..10 {
        if let Some(Event::ChallengeCompleted { message, .. }) = timer.next_tick().await {
            assert_eq!(message, COMPLETION_MESSAGE);
            completions += 1;
        }
        if timer.elapsed_secs() >= 4 {
            assert_eq!(timer.completion_message(), Some(COMPLETION_MESSAGE));
        } else {
            assert!(timer.completion_message().is_none());
        }
    }

    assert_eq!(completions, 1);
    assert_eq!(timer.elapsed_secs(), 10);
    assert_eq!(timer.phase(), ChallengePhase::Running);
    assert_eq!(ChallengeView::of(&timer).unwrap().progress_pct, 100.0);
}

#[tokio::test(start_paused = true)]
async fn stop_then_open_always_starts_from_zero() {
    let mut timer = ChallengeTimer::new();
    open_run(&mut timer, 3);
    timer.start().unwrap();
    for _ in 0..4 {
        timer.next_tick().await;
    }
    timer.pause().unwrap();
    timer.stop().unwrap();

    open_run(&mut timer, 3);
    assert_eq!(timer.elapsed_secs(), 0);
    assert!(timer.completion_message().is_none());
    assert!(!timer.is_ticking());
}

#[tokio::test(start_paused = true)]
async fn reopening_cancels_running_tick_source() {
    let mut timer = ChallengeTimer::new();
    open_run(&mut timer, 100);
    timer.start().unwrap();
    timer.next_tick().await;

    let walk = Catalog::builtin().get("walk").cloned().unwrap();
    timer.open(walk, 50);
    assert!(timeout(Duration::from_secs(10), timer.next_tick()).await.is_err());
    assert_eq!(timer.elapsed_secs(), 0);
}

#[tokio::test(start_paused = true)]
async fn estimate_feeds_timer_end_to_end() {
    let catalog = Catalog::builtin();
    let input = CalculationInput::parse("1", Some("60"), 60.0).unwrap();
    let est = estimate(&input, catalog.get("stairs").unwrap());
    // 1 kcal of stair climbing at 60 kg.
    assert_eq!(est.target_seconds, 7);

    let mut timer = ChallengeTimer::new();
    timer.open(est.activity.clone(), est.target_seconds);
    timer.start().unwrap();
    let mut last = None;
    for _ in 0..est.target_seconds {
        last = timer.next_tick().await;
    }
    assert!(matches!(last, Some(Event::ChallengeCompleted { .. })));
    assert_eq!(ChallengeView::of(&timer).unwrap().clock, "00:07");
}
