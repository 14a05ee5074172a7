//! Challenge timer implementation.
//!
//! A stopwatch counting up towards a target duration. Elapsed time advances
//! only through [`ChallengeTimer::tick`], one second per call; the owned
//! [`Ticker`] decides when ticks happen.
//!
//! ## State Transitions
//!
//! ```text
//! Closed -> Ready -> Running <-> Paused
//!   ^         |         |          |
//!   +---------+---------+----------+   (stop / close)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut timer = ChallengeTimer::new();
//! timer.open(activity, target_secs);
//! timer.start();
//! loop {
//!     let event = timer.next_tick().await;
//! }
//! ```

use chrono::Utc;
use serde::Serialize;

use super::ticker::Ticker;
use crate::activity::Activity;
use crate::events::Event;

/// Shown once elapsed time reaches the target.
pub const COMPLETION_MESSAGE: &str = "Well done! You reached the target time.";

pub const PAUSE_LABEL: &str = "Pause";
pub const RESUME_LABEL: &str = "Resume";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengePhase {
    Closed,
    /// Activity chosen, not started yet.
    Ready,
    Running,
    Paused,
}

/// The single challenge session of a screen.
///
/// Overtime is allowed: the timer keeps counting after the target and never
/// stops on its own.
#[derive(Debug)]
pub struct ChallengeTimer {
    phase: ChallengePhase,
    activity: Option<Activity>,
    target_secs: u64,
    elapsed_secs: u64,
    completion: Option<String>,
    ticker: Ticker,
}

impl ChallengeTimer {
    pub fn new() -> Self {
        Self {
            phase: ChallengePhase::Closed,
            activity: None,
            target_secs: 0,
            elapsed_secs: 0,
            completion: None,
            ticker: Ticker::default(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> ChallengePhase {
        self.phase
    }

    pub fn activity(&self) -> Option<&Activity> {
        self.activity.as_ref()
    }

    pub fn target_secs(&self) -> u64 {
        self.target_secs
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn is_running(&self) -> bool {
        self.phase == ChallengePhase::Running
    }

    /// Whether a tick source is currently scheduled.
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_armed()
    }

    /// 0.0 .. 1.0, capped at 1.0 during overtime.
    pub fn progress(&self) -> f64 {
        if self.target_secs == 0 {
            return 0.0;
        }
        (self.elapsed_secs as f64 / self.target_secs as f64).min(1.0)
    }

    pub fn completion_message(&self) -> Option<&str> {
        self.completion.as_deref()
    }

    pub fn is_completed(&self) -> bool {
        self.completion.is_some()
    }

    /// Label of the pause/resume control for the current phase.
    pub fn pause_label(&self) -> &'static str {
        match self.phase {
            ChallengePhase::Paused => RESUME_LABEL,
            _ => PAUSE_LABEL,
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Select an activity, discarding whatever session existed before.
    pub fn open(&mut self, activity: Activity, target_secs: u64) -> Event {
        self.ticker.rearm(false);
        tracing::debug!(activity = %activity.key, target_secs, "challenge opened");
        let event = Event::ChallengeOpened {
            activity_key: activity.key.clone(),
            target_secs,
            at: Utc::now(),
        };
        self.phase = ChallengePhase::Ready;
        self.activity = Some(activity);
        self.target_secs = target_secs;
        self.elapsed_secs = 0;
        self.completion = None;
        event
    }

    pub fn start(&mut self) -> Option<Event> {
        if self.phase != ChallengePhase::Ready || self.target_secs == 0 {
            return None;
        }
        let key = self.activity.as_ref()?.key.clone();
        self.elapsed_secs = 0;
        self.completion = None;
        self.set_running(true);
        tracing::debug!(activity = %key, target_secs = self.target_secs, "challenge started");
        Some(Event::ChallengeStarted {
            activity_key: key,
            target_secs: self.target_secs,
            at: Utc::now(),
        })
    }

    pub fn pause(&mut self) -> Option<Event> {
        if self.phase != ChallengePhase::Running {
            return None;
        }
        self.set_running(false);
        tracing::debug!(elapsed_secs = self.elapsed_secs, "challenge paused");
        Some(Event::ChallengePaused {
            elapsed_secs: self.elapsed_secs,
            at: Utc::now(),
        })
    }

    pub fn resume(&mut self) -> Option<Event> {
        if self.phase != ChallengePhase::Paused {
            return None;
        }
        self.set_running(true);
        tracing::debug!(elapsed_secs = self.elapsed_secs, "challenge resumed");
        Some(Event::ChallengeResumed {
            elapsed_secs: self.elapsed_secs,
            at: Utc::now(),
        })
    }

    /// The pause/resume control: pauses when running, resumes when paused.
    pub fn toggle_pause(&mut self) -> Option<Event> {
        match self.phase {
            ChallengePhase::Running => self.pause(),
            ChallengePhase::Paused => self.resume(),
            _ => None,
        }
    }

    /// End the session and clear it. Returns `None` if nothing was open.
    pub fn stop(&mut self) -> Option<Event> {
        self.ticker.rearm(false);
        if self.phase == ChallengePhase::Closed {
            return None;
        }
        let elapsed_secs = self.elapsed_secs;
        tracing::debug!(elapsed_secs, "challenge closed");
        self.phase = ChallengePhase::Closed;
        self.activity = None;
        self.target_secs = 0;
        self.elapsed_secs = 0;
        self.completion = None;
        Some(Event::ChallengeClosed {
            elapsed_secs,
            at: Utc::now(),
        })
    }

    /// Dismissing the challenge view. Same as [`ChallengeTimer::stop`].
    pub fn close(&mut self) -> Option<Event> {
        self.stop()
    }

    /// Advance by one second. Only counts while running.
    ///
    /// Returns `ChallengeCompleted` on the first tick that reaches the
    /// target, `ChallengeTicked` otherwise.
    pub fn tick(&mut self) -> Option<Event> {
        if self.phase != ChallengePhase::Running {
            return None;
        }
        self.elapsed_secs += 1;

        if self.elapsed_secs >= self.target_secs && self.completion.is_none() {
            self.completion = Some(COMPLETION_MESSAGE.to_string());
            let activity_key = self
                .activity
                .as_ref()
                .map(|a| a.key.clone())
                .unwrap_or_default();
            tracing::info!(activity = %activity_key, target_secs = self.target_secs, "challenge target reached");
            return Some(Event::ChallengeCompleted {
                activity_key,
                target_secs: self.target_secs,
                message: COMPLETION_MESSAGE.to_string(),
                at: Utc::now(),
            });
        }

        Some(Event::ChallengeTicked {
            elapsed_secs: self.elapsed_secs,
            progress: self.progress(),
            at: Utc::now(),
        })
    }

    /// Wait for the tick source, then apply one tick.
    ///
    /// Pends forever unless running, so it can sit in a `select!` next to
    /// user input without extra guards.
    pub async fn next_tick(&mut self) -> Option<Event> {
        self.ticker.tick().await;
        self.tick()
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn set_running(&mut self, running: bool) {
        self.ticker.rearm(running);
        self.phase = if running {
            ChallengePhase::Running
        } else {
            ChallengePhase::Paused
        };
    }
}

impl Default for ChallengeTimer {
    fn default() -> Self {
        Self::new()
    }
}
