use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use word_freq::{initialize_logging, run, Args, RunConfig};

fn main() -> Result<()> {
    let config = RunConfig::from(Args::parse());
    initialize_logging(LevelFilter::Warn);

    let stdout = io::stdout();
    run(&config, &mut stdout.lock())
        .with_context(|| format!("word count failed for {}", config.filepath.display()))
}
