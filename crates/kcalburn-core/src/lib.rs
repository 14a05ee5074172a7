//! # kcalburn Core Library
//!
//! Turns a calorie amount into the time needed to burn it with a handful of
//! everyday activities, and runs a "challenge" stopwatch for one of them.
//! The CLI binary is a thin front end over this crate.
//!
//! ## Architecture
//!
//! - **Calculator**: pure functions from (kcal, body weight, METs) to whole
//!   seconds, plus the approximate and clock-style formatters
//! - **Input**: validation of the raw form fields
//! - **Challenge Timer**: a state machine that owns its one-second tick
//!   source; the caller awaits `next_tick()` or calls `tick()` directly
//! - **Config**: TOML-based preferences and an optional custom catalog
//!
//! ## Key Components
//!
//! - [`ChallengeTimer`]: Challenge state machine
//! - [`Catalog`]: Activities and their intensity
//! - [`CalculationInput`]: Validated calculator input
//! - [`Config`]: Application configuration management

pub mod activity;
pub mod calculator;
pub mod config;
pub mod error;
pub mod estimate;
pub mod events;
pub mod input;
pub mod timer;
pub mod view;

pub use activity::{Activity, Catalog};
pub use calculator::{format_clock, format_duration_label, required_seconds, DEFAULT_WEIGHT_KG};
pub use config::Config;
pub use error::{CatalogError, ConfigError, CoreError, InputError};
pub use estimate::{estimate, estimate_all, summary_line, ActivityEstimate};
pub use events::Event;
pub use input::CalculationInput;
pub use timer::{ChallengePhase, ChallengeTimer};
pub use view::{ActivityCard, ChallengeView};
