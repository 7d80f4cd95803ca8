//! Myers diff algorithm implementation.
//!
//! Myers' algorithm is a classic diff algorithm with O(ND) time complexity,
//! where N is the sum of the lengths of the two sequences and D is the number
//! of differences. It's particularly efficient when the two texts are similar.
//!
//! The work is split in two phases: [`search`] records the furthest-reaching
//! point of every diagonal per depth into a [`Trace`], and [`reconstruct`]
//! walks that trace backward into the shortest edit script.

pub mod algorithm;
pub mod reconstruct;
pub mod search;
pub mod trace;

// Re-export main types
pub use algorithm::MyersDiff;
pub use reconstruct::reconstruct;
pub use search::search;
pub use trace::{LayerState, Trace};
