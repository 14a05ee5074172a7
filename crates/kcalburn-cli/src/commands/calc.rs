use clap::Args;
use kcalburn_core::error::Result;
use kcalburn_core::{
    estimate_all, summary_line, ActivityCard, ActivityEstimate, CalculationInput, Config,
};
use serde::Serialize;

use crate::render;

#[derive(Args)]
pub struct CalcArgs {
    /// Calories to burn (kcal)
    #[arg(allow_hyphen_values = true)]
    pub calories: String,
    /// Body weight in kg (defaults to calculator.default_weight_kg)
    #[arg(long, short, allow_hyphen_values = true)]
    pub weight: Option<String>,
    /// Print cards as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct CalcOutput<'a> {
    summary: String,
    input: &'a CalculationInput,
    cards: &'a [ActivityCard],
}

/// Validate raw input and estimate every activity of the configured catalog.
pub fn compute(
    config: &Config,
    calories: &str,
    weight: Option<&str>,
) -> Result<(CalculationInput, Vec<ActivityEstimate>)> {
    let input = CalculationInput::parse(calories, weight, config.default_weight_kg())?;
    let catalog = config.catalog()?;
    Ok((input, estimate_all(&input, &catalog)))
}

pub fn run(args: CalcArgs) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let (input, estimates) = compute(&config, &args.calories, args.weight.as_deref())?;
    let cards: Vec<ActivityCard> = estimates.iter().map(ActivityCard::from).collect();

    if args.json {
        let out = CalcOutput {
            summary: summary_line(&input),
            input: &input,
            cards: &cards,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        let mut stdout = std::io::stdout().lock();
        render::cards(
            &mut stdout,
            &summary_line(&input),
            &cards,
            config.display.show_intensity,
        )?;
    }
    Ok(())
}
