use kcalburn_core::Config;

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let catalog = config.catalog()?;

    if json {
        println!("{}", serde_json::to_string_pretty(catalog.activities())?);
        return Ok(());
    }
    for activity in catalog.iter() {
        println!(
            "{:<8} {} {:<22} {}",
            activity.key,
            activity.icon,
            activity.label,
            activity.intensity_label()
        );
    }
    Ok(())
}
