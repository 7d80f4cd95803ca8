//! The file comparison tool.
//!
//! Wraps the diff engine with file loading, timing and a wall-clock budget.
//! The engine is CPU-bound, so the async entry point runs it on the blocking
//! pool and cancels it through its [`CancellationToken`] once the budget is
//! spent.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use diff_engine::{
    CancellationToken, DiffAlgorithm, DiffLimits, DiffStats, EditOp, MyersDiff, diff_text,
};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::error::ToolError;
use crate::infrastructure::config::DiffSettings;

/// Result of comparing two texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompareReport {
    /// Line-level edit script, old-to-new.
    pub ops: Vec<EditOp<String>>,
    /// Both inputs were byte-for-byte identical.
    pub identical: bool,
    /// Operation counts.
    pub stats: DiffStats,
    /// Wall-clock time spent comparing.
    #[serde(skip)]
    pub elapsed: Duration,
}

/// Compares texts or files with a pluggable diff algorithm.
#[derive(Debug, Clone, Default)]
pub struct FileCompare<A = MyersDiff> {
    algorithm: A,
}

impl FileCompare<MyersDiff> {
    /// Uses the Myers algorithm under `limits`.
    #[must_use]
    pub fn new(limits: DiffLimits) -> Self {
        Self {
            algorithm: MyersDiff::new().with_limits(limits),
        }
    }
}

impl<A: DiffAlgorithm> FileCompare<A> {
    /// Uses a custom algorithm.
    pub const fn with_algorithm(algorithm: A) -> Self {
        Self { algorithm }
    }

    /// Compares two in-memory texts line by line.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::Diff`] if the algorithm rejects the inputs.
    pub fn compare_texts(&self, old: &str, new: &str) -> Result<CompareReport, ToolError> {
        let started = Instant::now();
        let diff = diff_text(old, new, &self.algorithm)?;
        let stats = diff.stats();
        let identical = diff.is_identical();
        let ops = diff
            .into_ops()
            .into_iter()
            .map(|op| op.map(str::to_owned))
            .collect();
        let elapsed = started.elapsed();

        debug!(
            matches = stats.matches,
            insertions = stats.insertions,
            deletions = stats.deletions,
            elapsed_ms = elapsed.as_millis(),
            "Comparison complete"
        );
        Ok(CompareReport {
            ops,
            identical,
            stats,
            elapsed,
        })
    }

    /// Reads two UTF-8 files and compares them.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::Read`] if either file cannot be read and
    /// [`ToolError::Diff`] if the algorithm rejects the inputs.
    pub fn compare_files(&self, old: &Path, new: &Path) -> Result<CompareReport, ToolError> {
        let started = Instant::now();
        let old_text = read_text(old)?;
        let new_text = read_text(new)?;
        info!(old = %old.display(), new = %new.display(), "Comparing files");

        let mut report = self.compare_texts(&old_text, &new_text)?;
        report.elapsed = started.elapsed();
        Ok(report)
    }
}

/// Compares two files on the blocking pool under `settings`.
///
/// When the configured timeout expires the engine is cancelled at its next
/// search depth and [`ToolError::TimedOut`] is returned.
///
/// # Errors
///
/// Returns [`ToolError::TimedOut`] when the budget runs out,
/// [`ToolError::Worker`] if the worker panics, and otherwise whatever
/// [`FileCompare::compare_files`] returns.
pub async fn compare_files_with_timeout(
    settings: &DiffSettings,
    old: PathBuf,
    new: PathBuf,
) -> Result<CompareReport, ToolError> {
    let token = CancellationToken::new();
    let tool = FileCompare::new(settings.limits(Some(token.clone())));
    let mut handle = tokio::task::spawn_blocking(move || tool.compare_files(&old, &new));

    let Some(limit) = settings.timeout() else {
        return handle.await?;
    };

    if let Ok(joined) = tokio::time::timeout(limit, &mut handle).await {
        return joined?;
    }

    warn!(timeout_ms = limit.as_millis(), "Comparison timed out, cancelling");
    token.cancel();
    // The worker stops at its next search depth; wait so it never outlives us.
    let _ = handle.await;
    Err(ToolError::TimedOut { elapsed: limit })
}

fn read_text(path: &Path) -> Result<String, ToolError> {
    std::fs::read_to_string(path).map_err(|source| ToolError::Read {
        path: path.to_path_buf(),
        source,
    })
}
