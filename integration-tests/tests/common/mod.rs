//! Shared helpers for the diff integration tests.
//!
//! Provides a script replayer that checks an edit script against both
//! inputs, and a textbook LCS used as the minimality reference.

#![allow(dead_code)]

use std::fmt::Debug;

use diff_engine::EditOp;

/// Replays `ops` against `old`, returning the sequence it produces.
///
/// Panics if a `Match` or `Delete` names a value other than the next
/// unconsumed element of `old`, or if `old` is not fully consumed.
pub fn apply_script<T: PartialEq + Clone + Debug>(old: &[T], ops: &[EditOp<&T>]) -> Vec<T> {
    let mut cursor = 0;
    let mut output = Vec::new();
    for op in ops {
        match op {
            EditOp::Match(value) => {
                assert_eq!(old.get(cursor), Some(*value), "match out of step at {cursor}");
                output.push((*value).clone());
                cursor += 1;
            }
            EditOp::Delete(value) => {
                assert_eq!(old.get(cursor), Some(*value), "delete out of step at {cursor}");
                cursor += 1;
            }
            EditOp::Insert(value) => output.push((*value).clone()),
        }
    }
    assert_eq!(cursor, old.len(), "script did not consume the old sequence");
    output
}

/// Length of the longest common subsequence, by dynamic programming.
pub fn lcs_len<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let mut row = vec![0usize; b.len() + 1];
    for x in a {
        let mut diagonal = 0;
        for (j, y) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if x == y {
                diagonal + 1
            } else {
                above.max(row[j])
            };
            diagonal = above;
        }
    }
    row[b.len()]
}

/// `(matches, insertions, deletions)` of a script.
pub fn counts<T>(ops: &[EditOp<T>]) -> (usize, usize, usize) {
    ops.iter().fold((0, 0, 0), |(m, i, d), op| match op {
        EditOp::Match(_) => (m + 1, i, d),
        EditOp::Insert(_) => (m, i + 1, d),
        EditOp::Delete(_) => (m, i, d + 1),
    })
}
