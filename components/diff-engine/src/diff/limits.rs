//! Resource limits and cooperative cancellation for diff computations.
//!
//! The search keeps one layer per depth, so a trace of edit distance `D`
//! holds `(D + 1)(D + 2) / 2` slots of one machine word each. Time and
//! memory are both quadratic in `D`; interactive callers bound them here. The engine has no clock: time-based
//! aborts are built by the caller on top of [`CancellationToken`].

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::DiffError;

/// Shared flag used to abort a running diff from another thread.
///
/// Clones observe the same flag. The search polls it once per depth.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a token that is not cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation of every computation holding a clone.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Returns true once [`cancel`](Self::cancel) has been called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Bounds applied to a single diff call. The default is unbounded.
#[derive(Debug, Clone, Default)]
pub struct DiffLimits {
    /// Maximum combined number of elements in both inputs.
    pub max_input_len: Option<usize>,
    /// Maximum edit distance the search may explore.
    pub max_edit_distance: Option<usize>,
    /// Maximum number of diagonal slots the trace may hold across all depths.
    pub max_trace_slots: Option<usize>,
    /// Cooperative cancellation handle.
    pub cancel: Option<CancellationToken>,
}

impl DiffLimits {
    /// Creates unbounded limits.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Sets the maximum combined input length.
    #[must_use]
    pub const fn with_max_input_len(mut self, max: usize) -> Self {
        self.max_input_len = Some(max);
        self
    }

    /// Sets the maximum edit distance.
    #[must_use]
    pub const fn with_max_edit_distance(mut self, max: usize) -> Self {
        self.max_edit_distance = Some(max);
        self
    }

    /// Sets the maximum number of trace slots.
    #[must_use]
    pub const fn with_max_trace_slots(mut self, max: usize) -> Self {
        self.max_trace_slots = Some(max);
        self
    }

    /// Attaches a cancellation token.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Rejects inputs whose combined length is over the bound.
    pub(crate) fn check_input(&self, old_len: usize, new_len: usize) -> Result<(), DiffError> {
        let len = old_len + new_len;
        match self.max_input_len {
            Some(max) if len > max => Err(DiffError::InputTooLarge { len, max }),
            _ => Ok(()),
        }
    }

    /// Checked before exploring `depth`.
    pub(crate) fn check_depth(&self, depth: usize) -> Result<(), DiffError> {
        if self.cancel.as_ref().is_some_and(CancellationToken::is_cancelled) {
            return Err(DiffError::Cancelled { depth });
        }
        if let Some(max) = self.max_edit_distance.filter(|&max| depth > max) {
            return Err(DiffError::EditDistanceExceeded { max });
        }
        let slots = trace_slots(depth);
        if let Some(max) = self.max_trace_slots.filter(|&max| slots > max) {
            return Err(DiffError::TraceTooLarge { slots, max });
        }
        Ok(())
    }
}

/// Slots held by a trace once layers `0..=depth` are recorded.
#[must_use]
pub const fn trace_slots(depth: usize) -> usize {
    // (depth + 1)(depth + 2) / 2, halving whichever factor is even
    let half = depth / 2 + 1;
    let other = if depth % 2 == 0 {
        depth + 1
    } else {
        depth.saturating_add(2)
    };
    half.saturating_mul(other)
}
