//! Extract command handler

use anyhow::{Context, Result};

use cxr::cli::Cli;
use cxr::paths::expand_tilde;
use cxr::pipeline::{self, ExtractOptions};
use cxr::progress::ProgressReporter;
use cxr::selector::SelectionFilter;
use cxr::Config;

/// Combine CLI arguments with config defaults.
///
/// Flags win over the config file; a batch count below 1 is clamped to 1.
pub fn build_options(cli: &Cli, config: &Config) -> ExtractOptions {
    ExtractOptions {
        sessions_root: expand_tilde(&cli.sessions_root),
        output_dir: expand_tilde(&cli.output_dir),
        batches: cli.batches.unwrap_or(config.extract.batches).max(1),
        filter: SelectionFilter {
            min_size: cli.min_size.unwrap_or(config.extract.min_size),
            from: cli.from_date,
            to: cli.to_date,
            workspace: cli.workspace.clone(),
        },
    }
}

/// Run an extraction and print the output directory on stdout.
#[cfg(not(tarpaulin_include))]
pub fn handle(cli: &Cli, config: &Config) -> Result<()> {
    let options = build_options(cli, config);
    if let (Some(from), Some(to)) = (options.filter.from, options.filter.to) {
        if from > to {
            tracing::warn!(%from, %to, "--from is after --to; no session can match");
        }
    }

    let summary = pipeline::run(&options, &ProgressReporter::new()).with_context(|| {
        format!(
            "Failed to extract conversations into {}",
            options.output_dir.display()
        )
    })?;

    println!("{}", summary.output_dir.display());
    Ok(())
}
