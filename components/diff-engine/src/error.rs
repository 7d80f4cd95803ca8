//! Error types for the diff engine.
//!
//! The Myers search is total over finite inputs, so every variant here is a
//! resource limit chosen by the caller rather than a logical failure.

use thiserror::Error;

/// Errors returned when a diff is refused or aborted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// The combined input length exceeds the configured bound.
    #[error("Input too large: {len} lines (max {max})")]
    InputTooLarge {
        /// Combined number of elements in both sequences.
        len: usize,
        /// The maximum allowed combined length.
        max: usize,
    },

    /// The shortest edit script is longer than the configured bound.
    #[error("Edit distance exceeds limit of {max}; computation aborted")]
    EditDistanceExceeded {
        /// The maximum allowed edit distance.
        max: usize,
    },

    /// The search trace would grow past the configured number of slots.
    #[error("Search trace would need {slots} slots (max {max}); computation aborted")]
    TraceTooLarge {
        /// Slots the trace would hold after the next depth.
        slots: usize,
        /// The maximum allowed number of slots.
        max: usize,
    },

    /// The caller cancelled the computation.
    #[error("Diff cancelled at search depth {depth}")]
    Cancelled {
        /// Search depth reached when cancellation was observed.
        depth: usize,
    },
}

impl DiffError {
    /// Returns true if the error came from an explicit cancellation request.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}
