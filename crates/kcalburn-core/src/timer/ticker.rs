//! One-second tick source for the challenge timer.
//!
//! At most one interval exists at a time. Every transition goes through
//! [`Ticker::rearm`], which drops the current interval and optionally arms
//! a fresh one, so a paused session never catches up on missed ticks.

use std::time::Duration;

use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    /// First deadline of the armed source. `None` means cancelled.
    armed_at: Option<Instant>,
    /// Built lazily on the first await so arming works outside a runtime.
    interval: Option<Interval>,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            armed_at: None,
            interval: None,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed_at.is_some()
    }

    /// Cancel any outstanding source, then arm a new one if `run` is set.
    /// The first tick of a new source fires one full period after arming.
    pub fn rearm(&mut self, run: bool) {
        self.interval = None;
        self.armed_at = run.then(|| Instant::now() + self.period);
    }

    /// Wait for the next tick. Pends forever while cancelled.
    pub async fn tick(&mut self) {
        let Some(start) = self.armed_at else {
            return std::future::pending().await;
        };
        let period = self.period;
        let interval = self.interval.get_or_insert_with(|| {
            let mut iv = interval_at(start, period);
            iv.set_missed_tick_behavior(MissedTickBehavior::Delay);
            iv
        });
        interval.tick().await;
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(TICK_PERIOD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rearm_toggles_armed_state() {
        let mut ticker = Ticker::default();
        assert!(!ticker.is_armed());
        ticker.rearm(true);
        assert!(ticker.is_armed());
        ticker.rearm(false);
        assert!(!ticker.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn first_tick_waits_one_period() {
        let mut ticker = Ticker::default();
        let armed = Instant::now();
        ticker.rearm(true);
        ticker.tick().await;
        let first = armed.elapsed();
        assert!(first >= TICK_PERIOD && first < TICK_PERIOD * 2);
        ticker.tick().await;
        assert!(armed.elapsed() >= TICK_PERIOD * 2);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_ticker_never_fires() {
        let mut ticker = Ticker::default();
        ticker.rearm(true);
        ticker.rearm(false);
        let waited = tokio::time::timeout(Duration::from_secs(30), ticker.tick()).await;
        assert!(waited.is_err());
    }
}
