//! Display-ready data for the result cards and the challenge view.
//!
//! Nothing here renders; a front end reads these structs and draws them
//! however it likes.

use serde::Serialize;

use crate::calculator::{format_clock, format_duration_label};
use crate::estimate::ActivityEstimate;
use crate::timer::{ChallengePhase, ChallengeTimer};

/// One selectable result card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityCard {
    pub key: String,
    pub icon: String,
    pub label: String,
    pub duration_label: String,
    pub intensity_label: String,
    pub target_seconds: u64,
}

impl From<&ActivityEstimate> for ActivityCard {
    fn from(est: &ActivityEstimate) -> Self {
        Self {
            key: est.activity.key.clone(),
            icon: est.activity.icon.clone(),
            label: est.activity.label.clone(),
            duration_label: est.duration_label.clone(),
            intensity_label: est.activity.intensity_label(),
            target_seconds: est.target_seconds,
        }
    }
}

/// Everything the challenge modal shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChallengeView {
    pub phase: ChallengePhase,
    pub icon: String,
    pub title: String,
    pub subtitle: String,
    pub target_text: String,
    pub clock: String,
    /// 0 ..= 100.
    pub progress_pct: f64,
    pub pause_label: &'static str,
    pub message: Option<String>,
}

impl ChallengeView {
    /// `None` when no challenge is open.
    pub fn of(timer: &ChallengeTimer) -> Option<Self> {
        let activity = timer.activity()?;
        let approx = format_duration_label(timer.target_secs());
        Some(Self {
            phase: timer.phase(),
            icon: activity.icon.clone(),
            title: format!("{} challenge", activity.label),
            subtitle: format!("Take on {approx}"),
            target_text: format!("Target: {approx}"),
            clock: format_clock(timer.elapsed_secs()),
            progress_pct: timer.progress() * 100.0,
            pause_label: timer.pause_label(),
            message: timer.completion_message().map(str::to_string),
        })
    }
}
