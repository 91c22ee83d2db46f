// src/bin/cli.rs
use color_eyre::eyre::{Result, eyre};

use mdl_scrape::cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    cli::run().map_err(|e| eyre!(e.to_string()))
}
