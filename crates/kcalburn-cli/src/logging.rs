//! stderr logging for the CLI.
//!
//! Filter comes from `KCALBURN_LOG` (same syntax as `RUST_LOG`), default
//! `warn`. Logs go to stderr so they never interleave with screen output.

use tracing_subscriber::EnvFilter;

pub fn init() {
    let filter = EnvFilter::try_from_env("KCALBURN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    // A subscriber may already be installed (tests); keep the first one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
