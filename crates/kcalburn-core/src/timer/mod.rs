mod engine;
mod ticker;

pub use engine::{ChallengePhase, ChallengeTimer, COMPLETION_MESSAGE, PAUSE_LABEL, RESUME_LABEL};
pub use ticker::{Ticker, TICK_PERIOD};
