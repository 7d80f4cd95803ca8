//! Error types for DUKIT tools.

use std::path::PathBuf;
use std::time::Duration;

use diff_engine::DiffError;
use thiserror::Error;

/// Errors raised while running a tool.
#[derive(Error, Debug)]
pub enum ToolError {
    /// An input file could not be read as UTF-8 text.
    #[error("Failed to read '{}': {source}", path.display())]
    Read {
        /// Path that failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The diff engine rejected or aborted the comparison.
    #[error("Diff failed: {0}")]
    Diff(#[from] DiffError),

    /// The comparison ran past its time budget and was cancelled.
    #[error("Comparison timed out after {} ms", elapsed.as_millis())]
    TimedOut {
        /// The budget that was exceeded.
        elapsed: Duration,
    },

    /// The blocking worker panicked or was aborted.
    #[error("Comparison worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}
