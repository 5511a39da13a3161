//! cxr - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use cxr::cli::Cli;
use cxr::logging::{self, LogConfig};
use cxr::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    logging::init(&LogConfig {
        verbose: cli.verbose,
        quiet: cli.quiet,
        default_level: config.logging.level.clone(),
    });

    commands::extract::handle(&cli, &config)
}
