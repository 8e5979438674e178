#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! Load a Font Awesome configuration and print the code generator input as JSON.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use fontawesome_generate::load_icon_set;

#[derive(Parser)]
#[command(author, version, about = "Load Font Awesome icon metadata and emit code generator input as JSON.")]
struct Cli {
    /// Root configuration document naming the icon metadata file.
    #[arg(default_value = "_config.yml")]
    config: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    info!("Start: loading icon set from '{}'", cli.config.display());
    let set = load_icon_set(&cli.config)
        .with_context(|| format!("while loading icon set from '{}'", cli.config.display()))?;
    info!("icon set loaded with {} icons", set.len());

    let json = set.to_json_pretty().context("while serializing generator input")?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}").context("while writing generator input")?;
    Ok(())
}
