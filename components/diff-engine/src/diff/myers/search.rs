//! Edit-graph search.
//!
//! Greedy forward search from Myers' "An O(ND) Difference Algorithm and Its
//! Variations" (1986). Depth `d` explores the diagonals `-d, -d + 2, …, d`,
//! steps once off the best neighbouring diagonal of depth `d - 1` and then
//! follows the snake of equal elements as far as it goes.

#![allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]

use std::convert::Infallible;

use tracing::{debug, trace};

use super::trace::{LayerState, Trace, previous_diagonal};

/// Runs the edit-graph search without limits.
///
/// Total over any pair of finite sequences. Worst case is quadratic in the
/// combined length when the sequences share nothing.
#[must_use]
pub fn search<T: PartialEq>(old: &[T], new: &[T]) -> Trace {
    let Ok(trace) = search_layers(old, new, |_| Ok::<(), Infallible>(()));
    trace
}

/// Runs the search, calling `before_layer` ahead of every depth.
///
/// An error from `before_layer` aborts the search and is returned as is.
pub(crate) fn search_layers<T, E, F>(old: &[T], new: &[T], mut before_layer: F) -> Result<Trace, E>
where
    T: PartialEq,
    F: FnMut(usize) -> Result<(), E>,
{
    let (n, m) = (old.len(), new.len());
    let mut layers: Vec<LayerState> = Vec::new();

    for d in 0..=n + m {
        before_layer(d)?;

        let depth = d as isize;
        let mut layer = LayerState::new(d);

        for k in (-depth..=depth).step_by(2) {
            let mut x = match layers.last() {
                None => 0,
                Some(prev) => {
                    let prev_k = previous_diagonal(prev, k, depth);
                    let prev_x = prev.expect_diagonal(prev_k);
                    if prev_k == k + 1 { prev_x } else { prev_x + 1 }
                }
            };
            let mut y = x as isize - k;

            while x < n && y < m as isize && old[x] == new[y as usize] {
                x += 1;
                y += 1;
            }

            layer.record(k, x);

            if x >= n && y >= m as isize {
                layers.push(layer);
                debug!(edit_distance = d, old_len = n, new_len = m, "Shortest edit script found");
                return Ok(Trace {
                    layers,
                    old_len: n,
                    new_len: m,
                });
            }
        }

        trace!(depth = d, "Explored search layer");
        layers.push(layer);
    }

    unreachable!("edit graph search passed depth {} without reaching ({n}, {m})", n + m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_empty_has_single_trivial_layer() {
        let trace = search::<&str>(&[], &[]);
        assert_eq!(trace.depth_count(), 1);
        assert_eq!(trace.edit_distance(), Some(0));
        assert_eq!(trace.layer(0).and_then(|l| l.furthest(0)), Some(0));
    }

    #[test]
    fn test_identical_sequences_stop_at_depth_zero() {
        let seq = ["a", "b", "c"];
        let trace = search(&seq, &seq);
        assert_eq!(trace.edit_distance(), Some(0));
        assert_eq!(trace.layer(0).and_then(|l| l.furthest(0)), Some(3));
    }

    #[test]
    fn test_recorded_layers_for_single_substitution() {
        let trace = search(&["a", "b", "c"], &["a", "x", "c"]);
        assert_eq!(trace.edit_distance(), Some(2));

        let layers: Vec<Vec<(isize, usize)>> =
            trace.layers().iter().map(|l| l.diagonals().collect()).collect();
        assert_eq!(
            layers,
            vec![vec![(0, 1)], vec![(-1, 1), (1, 2)], vec![(-2, 1), (0, 3)]]
        );
    }

    #[test]
    fn test_one_sided_inputs() {
        let trace = search(&[], &["x", "y"]);
        assert_eq!(trace.edit_distance(), Some(2));

        let trace = search(&["x", "y", "z"], &[]);
        assert_eq!(trace.edit_distance(), Some(3));
    }

    #[test]
    fn test_disjoint_sequences_need_every_edit() {
        let trace = search(&["a", "b", "c"], &["x", "y"]);
        assert_eq!(trace.edit_distance(), Some(5));
        assert_eq!(trace.dimensions(), (3, 2));
    }

    #[test]
    fn test_abort_from_callback() {
        let result = search_layers(&["a", "b"], &["c", "d"], |d| if d == 1 { Err(d) } else { Ok(()) });
        assert_eq!(result, Err(1));
    }

    #[test]
    fn test_layers_respect_parity_invariant() {
        let trace = search(&["a", "b", "c", "a", "b", "b", "a"], &["c", "b", "a", "b", "a", "c"]);
        for layer in trace.layers() {
            let d = layer.depth() as isize;
            for (k, _) in layer.diagonals() {
                assert!((-d..=d).contains(&k));
                assert_eq!((k + d) % 2, 0);
            }
        }
        // Myers' paper example: D = 5
        assert_eq!(trace.edit_distance(), Some(5));
    }
}
