use kcalburn_core::Config;
use tokio::io::BufReader;

use crate::screen::Screen;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(async {
        let stdin = BufReader::new(tokio::io::stdin());
        let mut screen = Screen::new(stdin, std::io::stdout(), &config)?;
        screen.run().await?;
        Ok::<(), Box<dyn std::error::Error>>(())
    })
}
