//! Line-level diff engine for DUKIT.
//!
//! The engine computes Myers' shortest edit script between two sequences and
//! turns the recorded search trace into an ordered list of tagged operations
//! (`Match`, `Insert`, `Delete`). It performs no I/O and holds no shared
//! state: every call owns its trace and drops it before returning.
//!
//! # Example
//!
//! ```
//! use diff_engine::{EditOp, diff};
//!
//! let old = ["a", "b", "c"];
//! let new = ["a", "x", "c"];
//!
//! let ops = diff(&old, &new);
//! assert_eq!(
//!     ops,
//!     vec![
//!         EditOp::Match(&"a"),
//!         EditOp::Delete(&"b"),
//!         EditOp::Insert(&"x"),
//!         EditOp::Match(&"c"),
//!     ]
//! );
//! ```

pub mod diff;
pub mod error;

pub use diff::{
    CancellationToken, DiffAlgorithm, DiffLimits, DiffOp, DiffStats, EditKind, EditOp,
    MyersDiff, TextDiff, content_digest, diff, diff_text, format_unified_diff,
    group_operations, split_lines, texts_identical, trace_slots,
};
pub use error::DiffError;
