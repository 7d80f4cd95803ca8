//! Myers diff algorithm.
use tracing::warn;

use crate::diff::limits::DiffLimits;
use crate::diff::traits::{DiffAlgorithm, EditOp};
use crate::error::DiffError;

use super::reconstruct::reconstruct;
use super::search::search_layers;
use super::trace::Trace;

/// Myers diff algorithm with optional resource limits.
#[derive(Debug, Clone, Default)]
pub struct MyersDiff {
    limits: DiffLimits,
}

impl MyersDiff {
    /// Creates an instance without limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the limits applied to every call.
    #[must_use]
    pub fn with_limits(mut self, limits: DiffLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Limits applied to every call.
    #[must_use]
    pub const fn limits(&self) -> &DiffLimits {
        &self.limits
    }

    /// Runs the edit-graph search under the configured limits.
    ///
    /// # Errors
    ///
    /// Returns [`DiffError::InputTooLarge`] before searching if the inputs are
    /// over the size bound, [`DiffError::EditDistanceExceeded`] if the search
    /// needs more depths than allowed, and [`DiffError::Cancelled`] if the
    /// cancellation token fires.
    pub fn search<T: PartialEq>(&self, old: &[T], new: &[T]) -> Result<Trace, DiffError> {
        self.limits.check_input(old.len(), new.len())?;
        search_layers(old, new, |depth| self.limits.check_depth(depth)).inspect_err(|err| {
            warn!(old_len = old.len(), new_len = new.len(), error = %err, "Diff aborted");
        })
    }

    /// Computes the edit script turning `old` into `new`.
    ///
    /// Equal inputs skip the search and come back as one `Match` per element.
    ///
    /// # Errors
    ///
    /// Same as [`search`](Self::search).
    pub fn diff_slices<'a, T: PartialEq>(
        &self,
        old: &'a [T],
        new: &'a [T],
    ) -> Result<Vec<EditOp<&'a T>>, DiffError> {
        if old == new {
            return Ok(old.iter().map(EditOp::Match).collect());
        }
        let trace = self.search(old, new)?;
        Ok(reconstruct(old, new, &trace))
    }
}

impl DiffAlgorithm for MyersDiff {
    fn diff<'a>(
        &self,
        base: &[&'a str],
        target: &[&'a str],
    ) -> Result<Vec<EditOp<&'a str>>, DiffError> {
        let ops = self.diff_slices(base, target)?;
        Ok(ops.into_iter().map(|op| op.map(|line| *line)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::limits::CancellationToken;

    #[test]
    fn test_empty_sequences() {
        let diff = MyersDiff::new();
        let result = diff.diff(&[], &[]).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_identical_sequences() {
        let diff = MyersDiff::new();
        let lines = vec!["1", "2", "3"];
        let result = diff.diff(&lines, &lines).unwrap();

        assert_eq!(
            result,
            vec![EditOp::Match("1"), EditOp::Match("2"), EditOp::Match("3")]
        );
    }

    #[test]
    fn test_all_insertions() {
        let diff = MyersDiff::new();
        let result = diff.diff(&[], &["a", "b", "c"]).unwrap();
        assert_eq!(
            result,
            vec![EditOp::Insert("a"), EditOp::Insert("b"), EditOp::Insert("c")]
        );
    }

    #[test]
    fn test_all_deletions() {
        let diff = MyersDiff::new();
        let result = diff.diff(&["a", "b", "c"], &[]).unwrap();
        assert!(result.iter().all(|op| matches!(op, EditOp::Delete(_))));
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_generic_elements() {
        let diff = MyersDiff::new();
        let ops = diff.diff_slices(&[1, 2, 3], &[1, 3, 4]).unwrap();
        assert_eq!(
            ops,
            vec![
                EditOp::Match(&1),
                EditOp::Delete(&2),
                EditOp::Match(&3),
                EditOp::Insert(&4),
            ]
        );
    }

    #[test]
    fn test_input_limit() {
        let diff = MyersDiff::new().with_limits(DiffLimits::unbounded().with_max_input_len(3));
        let err = diff.diff(&["a", "b"], &["c", "d"]).unwrap_err();
        assert_eq!(err, DiffError::InputTooLarge { len: 4, max: 3 });
    }

    #[test]
    fn test_identical_inputs_bypass_limits() {
        let diff = MyersDiff::new().with_limits(DiffLimits::unbounded().with_max_input_len(1));
        let lines = ["a", "b"];
        assert_eq!(diff.diff(&lines, &lines).unwrap().len(), 2);
    }

    #[test]
    fn test_edit_distance_limit() {
        let diff = MyersDiff::new().with_limits(DiffLimits::unbounded().with_max_edit_distance(2));
        assert!(diff.diff(&["a", "b", "c"], &["a", "x", "c"]).is_ok());

        let err = diff.diff(&["a", "b"], &["c", "d"]).unwrap_err();
        assert_eq!(err, DiffError::EditDistanceExceeded { max: 2 });
    }

    #[test]
    fn test_trace_slot_limit() {
        let diff = MyersDiff::new().with_limits(DiffLimits::unbounded().with_max_trace_slots(6));
        // D = 2 fits in exactly 6 slots
        assert!(diff.diff(&["a", "b", "c"], &["a", "x", "c"]).is_ok());

        let err = diff.diff(&["a", "b"], &["c", "d"]).unwrap_err();
        assert_eq!(err, DiffError::TraceTooLarge { slots: 10, max: 6 });
    }

    #[test]
    fn test_cancelled_before_start() {
        let token = CancellationToken::new();
        token.cancel();
        let diff = MyersDiff::new().with_limits(DiffLimits::unbounded().with_cancellation(token));

        let err = diff.diff(&["a"], &["b"]).unwrap_err();
        assert_eq!(err, DiffError::Cancelled { depth: 0 });
    }

    #[test]
    fn test_trait_object() {
        let algo: Box<dyn DiffAlgorithm> = Box::new(MyersDiff::new());
        let ops = algo.diff(&["a"], &["b"]).unwrap();
        assert_eq!(ops, vec![EditOp::Delete("a"), EditOp::Insert("b")]);
    }
}
