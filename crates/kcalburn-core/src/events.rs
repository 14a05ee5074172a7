use chrono::{DateTime, Utc};
use serde::Serialize;

/// Every state change of a challenge produces an Event.
/// The screen renders from them; `challenge --json` prints one per line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Event {
    ChallengeOpened {
        activity_key: String,
        target_secs: u64,
        at: DateTime<Utc>,
    },
    ChallengeStarted {
        activity_key: String,
        target_secs: u64,
        at: DateTime<Utc>,
    },
    ChallengePaused {
        elapsed_secs: u64,
        at: DateTime<Utc>,
    },
    ChallengeResumed {
        elapsed_secs: u64,
        at: DateTime<Utc>,
    },
    ChallengeTicked {
        elapsed_secs: u64,
        progress: f64,
        at: DateTime<Utc>,
    },
    /// Elapsed time reached the target. Emitted once per session; the timer
    /// keeps counting afterwards.
    ChallengeCompleted {
        activity_key: String,
        target_secs: u64,
        message: String,
        at: DateTime<Utc>,
    },
    ChallengeClosed {
        elapsed_secs: u64,
        at: DateTime<Utc>,
    },
}
