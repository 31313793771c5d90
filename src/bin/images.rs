// src/bin/images.rs
use catalog_tools::cli;
use color_eyre::eyre::{eyre, Result};

fn main() -> Result<()> {
    color_eyre::install()?;
    cli::run_images().map_err(|e| eyre!("{e}"))
}
