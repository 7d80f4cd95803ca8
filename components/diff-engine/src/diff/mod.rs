//! Line-level diff algorithms and the types around them.
//!
//! The [`myers`] module implements the shortest-edit-script search; the
//! remaining modules wrap it for whole texts, group its output into ranges,
//! format unified diffs and bound its resource use.

pub mod fast_path;
pub mod grouping;
pub mod limits;
pub mod myers;
pub mod text;
pub mod traits;
pub mod unified;

pub use fast_path::{content_digest, texts_identical};
pub use grouping::group_operations;
pub use limits::{CancellationToken, DiffLimits, trace_slots};
pub use myers::{MyersDiff, Trace};
pub use text::{TextDiff, diff_text, split_lines};
pub use traits::{DiffAlgorithm, DiffOp, DiffStats, EditKind, EditOp};
pub use unified::format_unified_diff;

/// Computes the shortest edit script turning `old` into `new`.
///
/// Runs without limits; use [`MyersDiff::with_limits`] to bound the work.
/// Equal inputs skip the search.
#[must_use]
pub fn diff<'a, T: PartialEq>(old: &'a [T], new: &'a [T]) -> Vec<EditOp<&'a T>> {
    if old == new {
        return old.iter().map(EditOp::Match).collect();
    }
    myers::reconstruct(old, new, &myers::search(old, new))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_matches_engine_output() {
        let old = ["a", "b", "c", "d"];
        let new = ["a", "c", "d", "e"];
        let direct = diff(&old, &new);
        let engine = MyersDiff::new().diff_slices(&old, &new).unwrap();
        assert_eq!(direct, engine);
    }

    #[test]
    fn test_diff_identity() {
        let lines = ["x", "y"];
        assert_eq!(diff(&lines, &lines), vec![EditOp::Match(&"x"), EditOp::Match(&"y")]);
    }
}
