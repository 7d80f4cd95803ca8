//! Whole-text diffing: line splitting, the equality fast path and the
//! configured diff algorithm in one call.

use tracing::debug;

use super::fast_path::texts_identical;
use super::traits::{DiffAlgorithm, DiffStats, EditOp};
use crate::error::DiffError;

/// Line-level diff of two texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDiff<'a> {
    ops: Vec<EditOp<&'a str>>,
    identical: bool,
}

impl<'a> TextDiff<'a> {
    /// The edit script, in old-to-new order.
    #[must_use]
    pub fn ops(&self) -> &[EditOp<&'a str>] {
        &self.ops
    }

    /// Consumes the diff and returns its edit script.
    #[must_use]
    pub fn into_ops(self) -> Vec<EditOp<&'a str>> {
        self.ops
    }

    /// True if both texts were byte-for-byte identical.
    #[must_use]
    pub const fn is_identical(&self) -> bool {
        self.identical
    }

    /// Operation counts of the script.
    #[must_use]
    pub fn stats(&self) -> DiffStats {
        DiffStats::from_ops(&self.ops)
    }
}

/// Diffs two texts line by line.
///
/// Texts are split with [`split_lines`], so `\n`, `\r\n` and lone `\r`
/// endings compare equal and a trailing newline does not produce an extra
/// empty line. No other normalization is applied. Identical texts skip the
/// algorithm and yield one `Match` per line.
///
/// # Errors
///
/// Returns whatever `algorithm` returns for the split lines.
pub fn diff_text<'a, A: DiffAlgorithm + ?Sized>(
    old: &'a str,
    new: &'a str,
    algorithm: &A,
) -> Result<TextDiff<'a>, DiffError> {
    if texts_identical(old, new) {
        debug!("Texts identical, skipping search");
        return Ok(TextDiff {
            ops: split_lines(old).into_iter().map(EditOp::Match).collect(),
            identical: true,
        });
    }

    let old_lines = split_lines(old);
    let new_lines = split_lines(new);
    let ops = algorithm.diff(&old_lines, &new_lines)?;

    Ok(TextDiff {
        ops,
        identical: false,
    })
}

/// Splits a text into lines without their terminators.
///
/// Line boundaries are `\n`, `\r\n`, a lone `\r`, and the vertical tab, form
/// feed, file/group/record separators, NEL and the Unicode line and paragraph
/// separators. A terminator at the very end does not start another line, so
/// `"a\n"` is one line and `""` is none.
#[must_use]
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while let Some(end) = rest.find(is_line_break) {
        lines.push(&rest[..end]);
        let tail = &rest[end..];
        let width = if tail.starts_with("\r\n") {
            2
        } else {
            tail.chars().next().map_or(1, char::len_utf8)
        };
        rest = &tail[width..];
    }
    if !rest.is_empty() {
        lines.push(rest);
    }
    lines
}

const fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}'..='\u{1e}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}
