//! Unified diff formatting (similar to `diff -u`).

use std::fmt::{Display, Write};

use super::traits::{EditKind, EditOp};

/// Formats an edit script as a unified diff.
///
/// Every change is surrounded by up to `context` unchanged lines; hunks
/// whose context overlaps or touches are merged. Returns an empty string if
/// the script contains no changes.
///
/// # Arguments
///
/// * `old_name` - Label of the old text (for the `---` header).
/// * `new_name` - Label of the new text (for the `+++` header).
/// * `ops` - The edit script, in old-to-new order.
/// * `context` - Number of unchanged lines around each change.
#[must_use]
pub fn format_unified_diff<T: Display>(
    old_name: &str,
    new_name: &str,
    ops: &[EditOp<T>],
    context: usize,
) -> String {
    let mut output = String::new();
    let hunks = hunk_bounds(ops, context);
    if hunks.is_empty() {
        return output;
    }

    // (old, new) line positions before each op
    let mut positions = Vec::with_capacity(ops.len() + 1);
    let (mut old_pos, mut new_pos) = (0usize, 0usize);
    for op in ops {
        positions.push((old_pos, new_pos));
        match op.kind() {
            EditKind::Match => {
                old_pos += 1;
                new_pos += 1;
            }
            EditKind::Delete => old_pos += 1,
            EditKind::Insert => new_pos += 1,
        }
    }

    let _ = writeln!(output, "--- {old_name}");
    let _ = writeln!(output, "+++ {new_name}");

    for (start, end) in hunks {
        let slice = &ops[start..end];
        let (old_at, new_at) = positions[start];
        let old_count = slice
            .iter()
            .filter(|op| op.kind() != EditKind::Insert)
            .count();
        let new_count = slice
            .iter()
            .filter(|op| op.kind() != EditKind::Delete)
            .count();

        let _ = writeln!(
            output,
            "@@ -{} +{} @@",
            hunk_range(old_at, old_count),
            hunk_range(new_at, new_count)
        );
        for op in slice {
            let prefix = match op.kind() {
                EditKind::Match => ' ',
                EditKind::Insert => '+',
                EditKind::Delete => '-',
            };
            let _ = writeln!(output, "{prefix}{}", op.value());
        }
    }

    output
}

/// Half-open op-index ranges of the hunks to print.
fn hunk_bounds<T>(ops: &[EditOp<T>], context: usize) -> Vec<(usize, usize)> {
    let mut hunks: Vec<(usize, usize)> = Vec::new();
    for (i, _) in ops.iter().enumerate().filter(|(_, op)| op.is_change()) {
        let start = i.saturating_sub(context);
        let end = (i + context + 1).min(ops.len());
        match hunks.last_mut() {
            Some((_, last_end)) if start <= *last_end => *last_end = end,
            _ => hunks.push((start, end)),
        }
    }
    hunks
}

/// `start,count` with a 1-based start; empty ranges name the preceding line.
fn hunk_range(at: usize, count: usize) -> String {
    if count == 0 {
        format!("{at},0")
    } else {
        format!("{},{count}", at + 1)
    }
}
