//! Per-depth search state recorded by the edit-graph search.
//!
//! A [`Trace`] holds one [`LayerState`] per explored depth `d = 0..=D`.
//! Each layer maps a diagonal `k = x - y` to the furthest `x` reached on it
//! with exactly `d` insertions and deletions. Diagonals that were never
//! explored in a layer are `None`, so a legitimate `x == 0` can never be
//! mistaken for "unexplored".
//!
//! Slots store `x + 1` as a [`NonZeroUsize`], so an `Option` slot is one
//! machine word. A trace of `D + 1` layers holds `(D + 1)(D + 2) / 2` slots,
//! which is what [`DiffLimits::with_max_trace_slots`] bounds.
//!
//! [`DiffLimits::with_max_trace_slots`]: crate::diff::limits::DiffLimits::with_max_trace_slots

#![allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]

use std::num::NonZeroUsize;

/// Furthest-reaching x positions of one search depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerState {
    depth: usize,
    // Slot i holds diagonal k = 2i - depth, storing x + 1.
    furthest: Vec<Option<NonZeroUsize>>,
}

impl LayerState {
    pub(crate) fn new(depth: usize) -> Self {
        Self {
            depth,
            furthest: vec![None; depth + 1],
        }
    }

    /// Search depth (number of non-diagonal moves) of this layer.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the furthest x recorded on diagonal `k`.
    ///
    /// `None` means the diagonal is invalid at this depth (out of range or of
    /// the wrong parity) or was not reached before the search finished.
    #[must_use]
    pub fn furthest(&self, k: isize) -> Option<usize> {
        self.slot(k)
            .and_then(|i| self.furthest[i])
            .map(|x| x.get() - 1)
    }

    /// Iterates the recorded `(k, x)` pairs in ascending diagonal order.
    pub fn diagonals(&self) -> impl Iterator<Item = (isize, usize)> + '_ {
        let depth = self.depth as isize;
        self.furthest
            .iter()
            .enumerate()
            .filter_map(move |(i, x)| x.map(|x| (2 * i as isize - depth, x.get() - 1)))
    }

    pub(crate) fn record(&mut self, k: isize, x: usize) {
        match self.slot(k) {
            Some(i) => self.furthest[i] = NonZeroUsize::new(x + 1),
            None => panic!("diagonal {k} is not valid at depth {}", self.depth),
        }
    }

    /// Furthest x on `k`, which the search guarantees to exist.
    ///
    /// # Panics
    ///
    /// Panics if the diagonal is absent, which means the trace is corrupt.
    pub(crate) fn expect_diagonal(&self, k: isize) -> usize {
        match self.furthest(k) {
            Some(x) => x,
            None => panic!(
                "trace layer {} is missing diagonal {k}; search state is corrupt",
                self.depth
            ),
        }
    }

    fn slot(&self, k: isize) -> Option<usize> {
        let depth = self.depth as isize;
        if k < -depth || k > depth || (k + depth) % 2 != 0 {
            return None;
        }
        Some(((k + depth) / 2) as usize)
    }
}

/// Depth-indexed history of the edit-graph search.
///
/// Produced by [`search`](super::search) and consumed by
/// [`reconstruct`](super::reconstruct). A trace belongs to the single diff
/// call that recorded it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    pub(crate) layers: Vec<LayerState>,
    pub(crate) old_len: usize,
    pub(crate) new_len: usize,
}

impl Trace {
    /// Returns true if no layer was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Number of recorded layers (`D + 1` for a completed search).
    #[must_use]
    pub fn depth_count(&self) -> usize {
        self.layers.len()
    }

    /// The shortest edit distance `D`, or `None` for an empty trace.
    #[must_use]
    pub fn edit_distance(&self) -> Option<usize> {
        self.layers.len().checked_sub(1)
    }

    /// Returns the layer recorded at `depth`.
    #[must_use]
    pub fn layer(&self, depth: usize) -> Option<&LayerState> {
        self.layers.get(depth)
    }

    /// All layers in depth order.
    #[must_use]
    pub fn layers(&self) -> &[LayerState] {
        &self.layers
    }

    /// Lengths `(N, M)` of the sequences the trace was recorded for.
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.old_len, self.new_len)
    }
}

/// Selects the diagonal the furthest point on `k` at `depth` came from.
///
/// The leftmost diagonal can only be entered from `k + 1` (an insertion) and
/// the rightmost only from `k - 1` (a deletion). Elsewhere the insertion
/// predecessor wins only when it is strictly further along than the deletion
/// predecessor; ties go to the deletion.
pub(crate) fn previous_diagonal(prev: &LayerState, k: isize, depth: isize) -> isize {
    if k == -depth {
        return k + 1;
    }
    if k == depth {
        return k - 1;
    }
    if prev.expect_diagonal(k - 1) < prev.expect_diagonal(k + 1) {
        k + 1
    } else {
        k - 1
    }
}
