//! Trace reconstruction.
//!
//! Walks the recorded layers from `(N, M)` back to the origin. Each depth
//! contributes the snake that ended on the current point (as matches) and,
//! above depth zero, the single insertion or deletion that started it.

#![allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]

use crate::diff::traits::EditOp;

use super::trace::{Trace, previous_diagonal};

/// Turns a search trace into the forward (old-to-new) edit script.
///
/// # Panics
///
/// Panics if `trace` was recorded for sequences of different lengths, or if
/// a layer lacks a diagonal the walk needs. Both mean the trace did not come
/// from searching `old` against `new`.
#[must_use]
pub fn reconstruct<'a, T>(old: &'a [T], new: &'a [T], trace: &Trace) -> Vec<EditOp<&'a T>> {
    if trace.is_empty() {
        return Vec::new();
    }
    assert_eq!(
        trace.dimensions(),
        (old.len(), new.len()),
        "trace was recorded for different input lengths"
    );

    let (mut x, mut y) = (old.len(), new.len());
    let mut ops = Vec::with_capacity(old.len() + new.len());

    for d in (0..trace.depth_count()).rev() {
        let (prev_x, prev_y) = if d == 0 {
            (0, 0)
        } else {
            let k = x as isize - y as isize;
            let prev = &trace.layers[d - 1];
            let prev_k = previous_diagonal(prev, k, d as isize);
            let prev_x = prev.expect_diagonal(prev_k);
            (prev_x, (prev_x as isize - prev_k) as usize)
        };

        while x > prev_x && y > prev_y {
            ops.push(EditOp::Match(&old[x - 1]));
            x -= 1;
            y -= 1;
        }

        if d > 0 {
            if prev_x == x {
                ops.push(EditOp::Insert(&new[prev_y]));
            } else {
                ops.push(EditOp::Delete(&old[prev_x]));
            }
            x = prev_x;
            y = prev_y;
        }
    }

    debug_assert_eq!((x, y), (0, 0), "backtrace must end at the origin");
    ops.reverse();
    ops
}
