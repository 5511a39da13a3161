//! CLI definitions for cxr
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages, markdown).

use chrono::NaiveDate;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::Parser;

/// Build clap styles.
///
/// - Green: headers, usage, literals
/// - White: placeholders and valid values (light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

/// Parse a `YYYY-MM-DD` date argument.
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{}' (expected YYYY-MM-DD): {}", value, e))
}

/// Parse an integer argument, accepting any sign and magnitude.
fn parse_integer(value: &str) -> Result<i128, String> {
    value
        .trim()
        .parse::<i128>()
        .map_err(|e| format!("invalid integer '{}': {}", value, e))
}

/// Parse `--batches`; counts below 1 become 1.
pub fn parse_batches(value: &str) -> Result<usize, String> {
    let count = parse_integer(value)?.max(1);
    Ok(usize::try_from(count).unwrap_or(usize::MAX))
}

/// Parse `--min-size`; negative sizes become 0, which keeps every file.
pub fn parse_min_size(value: &str) -> Result<u64, String> {
    let size = parse_integer(value)?.max(0);
    Ok(u64::try_from(size).unwrap_or(u64::MAX))
}

#[derive(Parser, Debug)]
#[command(name = "cxr")]
#[command(about = "Extract user and assistant messages from Codex session JSONL files")]
#[command(
    long_about = "cxr - Codex conversation extractor.

Scans a directory of Codex session logs (*.jsonl), keeps the sessions that
match the size, date and workspace filters, and writes one transcript per
session containing its user and assistant messages. The transcripts are then
split into batch manifests for downstream processing.

OUTPUT:
    <OUTPUT_DIR>/000_<session>.txt            One transcript per session
    <OUTPUT_DIR>/batches/batch_0.txt ...      Newline-separated transcript paths

Progress is reported on stderr. The output directory is printed on stdout.

EXAMPLES:
    cxr ~/.codex/sessions /tmp/convos
    cxr ~/.codex/sessions /tmp/convos --workspace ~/src/app --batches 3
    cxr ~/.codex/sessions /tmp/convos --from 2025-01-01 --to 2025-01-31

CONFIGURATION:
    Defaults for --batches and --min-size, and the default log level, can be
    set in ~/.config/cxr/config.toml:

    [extract]
    batches = 5
    min_size = 500

    [logging]
    level = \"warn\""
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Root directory containing Codex session JSONL files
    #[arg(help = "Root directory containing Codex session JSONL files")]
    pub sessions_root: String,

    /// Directory for extracted conversation text files
    #[arg(help = "Directory for extracted conversation text files")]
    pub output_dir: String,

    /// Number of batch manifests to create
    #[arg(long, value_name = "N", value_parser = parse_batches, allow_negative_numbers = true, help = "Number of batch manifests [default: 5]")]
    pub batches: Option<usize>,

    /// Keep only sessions whose cwd is this path or a subpath
    #[arg(long, value_name = "PATH", help = "Keep only sessions whose cwd is this path or a subpath")]
    pub workspace: Option<String>,

    /// Include sessions modified on or after this date
    #[arg(long = "from", value_name = "YYYY-MM-DD", value_parser = parse_date, help = "Include sessions modified on or after this date")]
    pub from_date: Option<NaiveDate>,

    /// Include sessions modified on or before this date
    #[arg(long = "to", value_name = "YYYY-MM-DD", value_parser = parse_date, help = "Include sessions modified on or before this date")]
    pub to_date: Option<NaiveDate>,

    /// Minimum session file size in bytes
    #[arg(long, value_name = "BYTES", value_parser = parse_min_size, allow_negative_numbers = true, help = "Minimum JSONL file size in bytes [default: 500]")]
    pub min_size: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity (-v, -vv, -vvv)")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, help = "Only log errors")]
    pub quiet: bool,
}
