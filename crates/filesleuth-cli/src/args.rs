/// Command-line arguments.
use clap::{Parser, ValueEnum};
use filesleuth_core::model::DEFAULT_THRESHOLD_MIB;
use std::path::PathBuf;
use tracing::Level;

/// Report output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary report
    #[default]
    Text,
    /// Full analysis result as JSON
    Json,
    /// Per-category totals as CSV
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "filesleuth")]
#[command(about = "Analyze File System Structure")]
#[command(version)]
pub struct Args {
    /// Directory to analyze
    pub directory: PathBuf,

    /// Large file size threshold in MB
    #[arg(short = 't', long = "threshold", value_name = "MB", default_value_t = DEFAULT_THRESHOLD_MIB)]
    pub threshold: u64,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Worker threads (default: one per logical CPU)
    #[arg(long = "threads", value_name = "N")]
    pub threads: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug). Logs go to stderr.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Maximum tracing level selected by `-v` flags.
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }
}
