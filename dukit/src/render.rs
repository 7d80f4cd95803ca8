//! Terminal rendering of comparison reports.
//!
//! Unchanged lines are grey, insertions green and deletions red. Color is
//! applied with ANSI escapes and can be turned off for pipes and tests.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::style::Stylize;
use diff_engine::{EditKind, format_unified_diff};

use crate::cli::OutputFormat;
use crate::tools::CompareReport;

/// Message printed instead of a diff when both inputs are identical.
pub const IDENTICAL_MESSAGE: &str = "Texts are identical";

/// Output options for [`render`].
#[derive(Debug, Clone)]
pub struct RenderOptions<'a> {
    /// Output format.
    pub format: OutputFormat,
    /// Label of the old input in unified headers.
    pub old_name: &'a str,
    /// Label of the new input in unified headers.
    pub new_name: &'a str,
    /// Context lines for unified hunks.
    pub context: usize,
    /// Emit ANSI colors.
    pub color: bool,
}

/// Writes `report` in the requested format.
///
/// # Errors
///
/// Returns any error raised by `out`.
pub fn render<W: Write>(
    out: &mut W,
    report: &CompareReport,
    options: &RenderOptions<'_>,
) -> io::Result<()> {
    match options.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)
        }
        _ if report.identical => writeln!(out, "{IDENTICAL_MESSAGE}"),
        OutputFormat::Plain => write_plain(out, report, options.color),
        OutputFormat::Unified => write_unified(out, report, options),
    }
}

fn write_plain<W: Write>(out: &mut W, report: &CompareReport, color: bool) -> io::Result<()> {
    for op in &report.ops {
        let line = format!("{}{}", op.marker(), op.value());
        if color {
            match op.kind() {
                EditKind::Match => writeln!(out, "{}", line.dark_grey())?,
                EditKind::Insert => writeln!(out, "{}", line.green())?,
                EditKind::Delete => writeln!(out, "{}", line.red())?,
            }
        } else {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

fn write_unified<W: Write>(
    out: &mut W,
    report: &CompareReport,
    options: &RenderOptions<'_>,
) -> io::Result<()> {
    let text = format_unified_diff(
        options.old_name,
        options.new_name,
        &report.ops,
        options.context,
    );
    if !options.color {
        return out.write_all(text.as_bytes());
    }
    for line in text.lines() {
        if line.starts_with("--- ") || line.starts_with("+++ ") {
            writeln!(out, "{}", line.bold())?;
        } else if line.starts_with("@@") {
            writeln!(out, "{}", line.cyan())?;
        } else if line.starts_with('+') {
            writeln!(out, "{}", line.green())?;
        } else if line.starts_with('-') {
            writeln!(out, "{}", line.red())?;
        } else {
            writeln!(out, "{}", line.dark_grey())?;
        }
    }
    Ok(())
}

/// Status line reporting how long a comparison took.
#[must_use]
pub fn status_line(elapsed: Duration) -> String {
    format!("Comparison finished in {} ms", elapsed.as_millis())
}
