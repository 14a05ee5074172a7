use clap::Args;
use kcalburn_core::{estimate, CalculationInput, Config, CoreError};
use tokio::io::BufReader;

use crate::screen::Screen;

#[derive(Args)]
pub struct ChallengeArgs {
    /// Activity key (see `kcalburn activities`)
    pub activity: String,
    /// Calories to burn (kcal)
    #[arg(allow_hyphen_values = true)]
    pub calories: String,
    /// Body weight in kg
    #[arg(long, short, allow_hyphen_values = true)]
    pub weight: Option<String>,
    /// Print challenge events as JSON lines
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ChallengeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let catalog = config.catalog()?;
    let activity = catalog.require(&args.activity)?;
    let input = CalculationInput::parse(
        &args.calories,
        args.weight.as_deref(),
        config.default_weight_kg(),
    )
    .map_err(CoreError::from)?;
    let est = estimate(&input, activity);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(async {
        let stdin = BufReader::new(tokio::io::stdin());
        let mut screen =
            Screen::new(stdin, std::io::stdout(), &config)?.with_json_events(args.json);
        screen.run_challenge(&est).await?;
        Ok::<(), Box<dyn std::error::Error>>(())
    })
}
