//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::infrastructure::config::DiffSettings;

/// DUKIT command line.
#[derive(Parser, Debug)]
#[command(name = "dukit")]
#[command(author, version, about = "Developer utilities: line-level file comparison")]
pub struct Cli {
    /// Path to a TOML config file (defaults to `<config dir>/dukit/config.toml`)
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare two text files line by line
    Diff(DiffArgs),
}

/// Arguments of `dukit diff`.
#[derive(Args, Debug)]
pub struct DiffArgs {
    /// Original file
    pub old: PathBuf,

    /// Modified file
    pub new: PathBuf,

    /// Output format
    #[clap(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Unchanged lines around each hunk (unified format only)
    #[clap(short = 'U', long)]
    pub context: Option<usize>,

    /// Disable colored output
    #[clap(long, default_value_t = false)]
    pub no_color: bool,

    /// Abort when the edit distance exceeds this value (0 disables the bound)
    #[clap(long)]
    pub max_edit_distance: Option<usize>,

    /// Abort the comparison after this many milliseconds (0 disables the timeout)
    #[clap(long)]
    pub timeout_ms: Option<u64>,
}

impl DiffArgs {
    /// Applies command-line overrides on top of loaded settings.
    pub fn apply(&self, settings: &mut DiffSettings) {
        if let Some(context) = self.context {
            settings.context_lines = context;
        }
        if let Some(max) = self.max_edit_distance {
            settings.max_edit_distance = max;
        }
        if let Some(timeout) = self.timeout_ms {
            settings.timeout_ms = timeout;
        }
        if self.no_color {
            settings.color = false;
        }
    }
}

/// How a comparison is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Every line with a `  `, `+ ` or `- ` marker
    Plain,
    /// Unified diff with context hunks
    Unified,
    /// JSON report
    Json,
}
