// src/bin/cli.rs
use color_eyre::eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;
    gym_scrape::cli::run()
}
