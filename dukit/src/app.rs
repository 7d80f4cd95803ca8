//! Command execution shared by the binary and its tests.

use std::io::Write;

use anyhow::{Context, Result};

use crate::cli::DiffArgs;
use crate::infrastructure::config::DiffSettings;
use crate::render::{RenderOptions, render, status_line};
use crate::tools::{CompareReport, compare_files_with_timeout};

/// Runs `dukit diff`: applies the command-line overrides to `settings`,
/// compares the two files, writes the rendered result to `out` and the
/// status line to `status`.
///
/// # Errors
///
/// Returns an error if the comparison fails or either writer fails.
pub async fn run_diff<W: Write, S: Write>(
    args: &DiffArgs,
    mut settings: DiffSettings,
    out: &mut W,
    status: &mut S,
) -> Result<CompareReport> {
    args.apply(&mut settings);

    let report = compare_files_with_timeout(&settings, args.old.clone(), args.new.clone())
        .await
        .context("Comparison failed")?;

    let old_name = args.old.display().to_string();
    let new_name = args.new.display().to_string();
    let options = RenderOptions {
        format: args.format,
        old_name: &old_name,
        new_name: &new_name,
        context: settings.context_lines,
        color: settings.color,
    };

    render(out, &report, &options).context("Failed to write output")?;
    out.flush().context("Failed to write output")?;
    writeln!(status, "{}", status_line(report.elapsed)).context("Failed to write status")?;

    Ok(report)
}
