use clap::{CommandFactory, Parser, Subcommand};
use kcalburn_core::CoreError;

mod commands;
mod logging;
mod render;
mod screen;

#[derive(Parser)]
#[command(
    name = "kcalburn",
    version,
    about = "How long to burn it off? Calorie calculator with challenge timer"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate activity durations for a calorie amount
    Calc(commands::calc::CalcArgs),
    /// List the activity catalog
    Activities {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run a challenge timer for one activity
    Challenge(commands::challenge::ChallengeArgs),
    /// Interactive calculator and challenge screen
    Screen,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

/// What to print for a failed command. Validation messages stand alone.
fn error_message(err: &(dyn std::error::Error + 'static)) -> String {
    match err.downcast_ref::<CoreError>() {
        Some(CoreError::Input(input)) => input.to_string(),
        _ => format!("error: {err}"),
    }
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Calc(args) => commands::calc::run(args),
        Commands::Activities { json } => commands::activities::run(json),
        Commands::Challenge(args) => commands::challenge::run(args),
        Commands::Screen => commands::screen::run(),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "kcalburn", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        tracing::debug!(error = %e, "command failed");
        eprintln!("{}", error_message(e.as_ref()));
        std::process::exit(1);
    }
}
