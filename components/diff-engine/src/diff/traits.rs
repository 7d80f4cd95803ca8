//! Diff algorithm traits and types.
//!
//! This module provides the core types and traits for diff algorithms,
//! enabling pluggable implementations with a consistent interface.

use serde::{Deserialize, Serialize};

use crate::error::DiffError;

/// The kind of a single edit operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditKind {
    /// The element is present in both sequences.
    Match,
    /// The element only exists in the new sequence.
    Insert,
    /// The element only exists in the old sequence.
    Delete,
}

impl EditKind {
    /// Two-character prefix used when printing a change script.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Match => "  ",
            Self::Insert => "+ ",
            Self::Delete => "- ",
        }
    }
}

/// One line-level operation of an edit script, carrying the element it
/// applies to.
///
/// Scripts are ordered old-to-new: keeping every `Match`, dropping every
/// `Delete` and adding every `Insert` in sequence turns the old sequence into
/// the new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum EditOp<T> {
    /// Element kept from the old sequence.
    Match(T),
    /// Element inserted from the new sequence.
    Insert(T),
    /// Element deleted from the old sequence.
    Delete(T),
}

impl<T> EditOp<T> {
    /// Returns the kind of this operation.
    #[must_use]
    pub const fn kind(&self) -> EditKind {
        match self {
            Self::Match(_) => EditKind::Match,
            Self::Insert(_) => EditKind::Insert,
            Self::Delete(_) => EditKind::Delete,
        }
    }

    /// Returns the element carried by this operation.
    #[must_use]
    pub const fn value(&self) -> &T {
        match self {
            Self::Match(v) | Self::Insert(v) | Self::Delete(v) => v,
        }
    }

    /// Consumes the operation and returns its element.
    #[must_use]
    pub fn into_value(self) -> T {
        match self {
            Self::Match(v) | Self::Insert(v) | Self::Delete(v) => v,
        }
    }

    /// Returns the printable prefix for this operation.
    #[must_use]
    pub const fn marker(&self) -> &'static str {
        self.kind().marker()
    }

    /// Returns true if this operation represents a change (not a match).
    #[must_use]
    pub const fn is_change(&self) -> bool {
        !matches!(self, Self::Match(_))
    }

    /// Maps the carried element while keeping the kind.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> EditOp<U> {
        match self {
            Self::Match(v) => EditOp::Match(f(v)),
            Self::Insert(v) => EditOp::Insert(f(v)),
            Self::Delete(v) => EditOp::Delete(f(v)),
        }
    }
}

/// Operation counts of an edit script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffStats {
    /// Number of `Match` operations.
    pub matches: usize,
    /// Number of `Insert` operations.
    pub insertions: usize,
    /// Number of `Delete` operations.
    pub deletions: usize,
}

impl DiffStats {
    /// Counts the operations of a script.
    #[must_use]
    pub fn from_ops<T>(ops: &[EditOp<T>]) -> Self {
        ops.iter().fold(Self::default(), |mut stats, op| {
            match op.kind() {
                EditKind::Match => stats.matches += 1,
                EditKind::Insert => stats.insertions += 1,
                EditKind::Delete => stats.deletions += 1,
            }
            stats
        })
    }

    /// Number of insertions plus deletions.
    #[must_use]
    pub const fn edit_distance(&self) -> usize {
        self.insertions + self.deletions
    }

    /// Returns true if the script contains no changes.
    #[must_use]
    pub const fn is_unchanged(&self) -> bool {
        self.edit_distance() == 0
    }
}

/// A grouped diff operation over index ranges of the two texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffOp {
    /// Lines that are unchanged between both texts.
    Equal {
        /// Start line index in the old text (0-based, inclusive).
        old_start: usize,
        /// End line index in the old text (0-based, exclusive).
        old_end: usize,
        /// Start line index in the new text (0-based, inclusive).
        new_start: usize,
        /// End line index in the new text (0-based, exclusive).
        new_end: usize,
    },
    /// Lines that were inserted in the new text.
    Insert {
        /// Position in the old text the lines are inserted before.
        old_index: usize,
        /// Start line index in the new text (0-based, inclusive).
        new_start: usize,
        /// End line index in the new text (0-based, exclusive).
        new_end: usize,
    },
    /// Lines that were deleted from the old text.
    Delete {
        /// Start line index in the old text (0-based, inclusive).
        old_start: usize,
        /// End line index in the old text (0-based, exclusive).
        old_end: usize,
        /// Position in the new text where the lines used to be.
        new_index: usize,
    },
    /// Lines that were replaced (deleted and inserted).
    Replace {
        /// Start line index in the old text (0-based, inclusive).
        old_start: usize,
        /// End line index in the old text (0-based, exclusive).
        old_end: usize,
        /// Start line index in the new text (0-based, inclusive).
        new_start: usize,
        /// End line index in the new text (0-based, exclusive).
        new_end: usize,
    },
}

impl DiffOp {
    /// Returns the half-open range of lines covered in the old text.
    ///
    /// Insertions cover an empty range at their position.
    #[must_use]
    pub const fn old_range(&self) -> (usize, usize) {
        match *self {
            Self::Equal {
                old_start, old_end, ..
            }
            | Self::Delete {
                old_start, old_end, ..
            }
            | Self::Replace {
                old_start, old_end, ..
            } => (old_start, old_end),
            Self::Insert { old_index, .. } => (old_index, old_index),
        }
    }

    /// Returns the half-open range of lines covered in the new text.
    ///
    /// Deletions cover an empty range at their position.
    #[must_use]
    pub const fn new_range(&self) -> (usize, usize) {
        match *self {
            Self::Equal {
                new_start, new_end, ..
            }
            | Self::Insert {
                new_start, new_end, ..
            }
            | Self::Replace {
                new_start, new_end, ..
            } => (new_start, new_end),
            Self::Delete { new_index, .. } => (new_index, new_index),
        }
    }

    /// Returns true if this operation represents a change (not equal).
    #[must_use]
    pub const fn is_change(&self) -> bool {
        !matches!(self, Self::Equal { .. })
    }

    /// Returns the number of old lines covered.
    #[must_use]
    pub const fn old_len(&self) -> usize {
        let (start, end) = self.old_range();
        end - start
    }

    /// Returns the number of new lines covered.
    #[must_use]
    pub const fn new_len(&self) -> usize {
        let (start, end) = self.new_range();
        end - start
    }
}

/// Trait for line diff algorithms.
///
/// Implementations can use different algorithms while the host keeps a
/// single calling convention. The `Send + Sync` bound lets one configured
/// instance be shared by worker threads.
pub trait DiffAlgorithm: Send + Sync {
    /// Computes the edit script turning `base` into `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured resource limit is hit or the
    /// computation is cancelled.
    fn diff<'a>(
        &self,
        base: &[&'a str],
        target: &[&'a str],
    ) -> Result<Vec<EditOp<&'a str>>, DiffError>;
}
