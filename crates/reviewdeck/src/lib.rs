//! Library interface for the `reviewdeck` CLI.
//!
//! Exposes the argument parser and the report command as a library so
//! integration tests can reach them; `main.rs` is the real entry point.
//!
//! # Structure
//!
//! - [`Cli`] - The argument parser (clap derive)
//! - [`report`] - The report generation command

pub mod report;

use camino::Utf8PathBuf;
use clap::Parser;
use std::path::PathBuf;

/// Color output preference.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Let owo-colors probe the terminal.
    #[default]
    Auto,
    /// Force colors on.
    Always,
    /// Force colors off.
    Never,
}

impl ColorChoice {
    /// Install this preference as the process-wide color override.
    pub fn apply(self) {
        match self {
            Self::Auto => {}
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG               Log filter (e.g., debug, reviewdeck=trace)
    REVIEWDECK_LOG_DIR     Directory for JSONL log files
    REVIEWDECK_TITLE       Default report title
    REVIEWDECK_OUTPUT_DIR  Default output directory
";

/// Command-line interface definition for reviewdeck.
///
/// One operation, no subcommands: read the review CSV, analyze it per
/// category, write the HTML report artifact.
#[derive(Parser)]
#[command(name = "reviewdeck")]
#[command(about = "Generate an interactive HTML report from annotated product reviews", long_about = None)]
#[command(version, arg_required_else_help = true)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// CSV file of annotated product reviews
    #[arg(
        short,
        long,
        value_name = "FILE",
        required_unless_present = "version_only"
    )]
    pub input: Option<Utf8PathBuf>,

    /// Directory to write the report into
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<Utf8PathBuf>,

    /// Title shown in the report header
    #[arg(short, long)]
    pub title: Option<String>,

    /// Print only the version number (for scripting)
    #[arg(long)]
    pub version_only: bool,

    /// Path to configuration file (overrides discovery)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', long)]
    pub chdir: Option<PathBuf>,

    /// Only print errors (suppresses warnings/info)
    #[arg(short, long)]
    pub quiet: bool,

    /// More detail (repeatable; e.g. -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Colorize output
    #[arg(long, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Print a machine-readable run summary as JSON (for scripting)
    #[arg(long)]
    pub json: bool,
}
