//! Grouping of line-level edit scripts into range operations.
//!
//! Consecutive operations of the same kind collapse into one [`DiffOp`], and
//! an uninterrupted run of deletions and insertions becomes a `Replace`.

use super::traits::{DiffOp, EditKind, EditOp};

/// Groups an edit script into index-range operations.
#[must_use]
pub fn group_operations<T>(ops: &[EditOp<T>]) -> Vec<DiffOp> {
    let (mut groups, mut old_idx, mut new_idx) = (Vec::new(), 0, 0);
    let mut current: Option<DiffOp> = None;

    for op in ops {
        match op.kind() {
            EditKind::Match => {
                if let Some(DiffOp::Equal {
                    old_end, new_end, ..
                }) = &mut current
                {
                    *old_end += 1;
                    *new_end += 1;
                } else {
                    groups.extend(current.take());
                    current = Some(DiffOp::Equal {
                        old_start: old_idx,
                        old_end: old_idx + 1,
                        new_start: new_idx,
                        new_end: new_idx + 1,
                    });
                }
                old_idx += 1;
                new_idx += 1;
            }
            EditKind::Delete => {
                match &mut current {
                    Some(DiffOp::Delete { old_end, .. } | DiffOp::Replace { old_end, .. }) => {
                        *old_end += 1;
                    }
                    Some(DiffOp::Insert {
                        old_index,
                        new_start,
                        new_end,
                    }) => {
                        let (at, start, end) = (*old_index, *new_start, *new_end);
                        current = Some(DiffOp::Replace {
                            old_start: at,
                            old_end: at + 1,
                            new_start: start,
                            new_end: end,
                        });
                    }
                    _ => {
                        groups.extend(current.take());
                        current = Some(DiffOp::Delete {
                            old_start: old_idx,
                            old_end: old_idx + 1,
                            new_index: new_idx,
                        });
                    }
                }
                old_idx += 1;
            }
            EditKind::Insert => {
                match &mut current {
                    Some(DiffOp::Insert { new_end, .. } | DiffOp::Replace { new_end, .. }) => {
                        *new_end += 1;
                    }
                    Some(DiffOp::Delete {
                        old_start,
                        old_end,
                        new_index,
                    }) => {
                        let (start, end, at) = (*old_start, *old_end, *new_index);
                        current = Some(DiffOp::Replace {
                            old_start: start,
                            old_end: end,
                            new_start: at,
                            new_end: at + 1,
                        });
                    }
                    _ => {
                        groups.extend(current.take());
                        current = Some(DiffOp::Insert {
                            old_index: old_idx,
                            new_start: new_idx,
                            new_end: new_idx + 1,
                        });
                    }
                }
                new_idx += 1;
            }
        }
    }

    groups.extend(current);
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_ops() {
        assert!(group_operations::<&str>(&[]).is_empty());
    }

    #[test]
    fn test_equal_run_collapses() {
        let ops = [EditOp::Match("a"), EditOp::Match("b"), EditOp::Match("c")];
        assert_eq!(
            group_operations(&ops),
            vec![DiffOp::Equal {
                old_start: 0,
                old_end: 3,
                new_start: 0,
                new_end: 3,
            }]
        );
    }

    #[test]
    fn test_delete_then_insert_becomes_replace() {
        let ops = [
            EditOp::Match("a"),
            EditOp::Delete("b"),
            EditOp::Delete("c"),
            EditOp::Insert("x"),
            EditOp::Match("d"),
        ];
        assert_eq!(
            group_operations(&ops),
            vec![
                DiffOp::Equal {
                    old_start: 0,
                    old_end: 1,
                    new_start: 0,
                    new_end: 1,
                },
                DiffOp::Replace {
                    old_start: 1,
                    old_end: 3,
                    new_start: 1,
                    new_end: 2,
                },
                DiffOp::Equal {
                    old_start: 3,
                    old_end: 4,
                    new_start: 2,
                    new_end: 3,
                },
            ]
        );
    }

    #[test]
    fn test_insert_then_delete_becomes_replace() {
        let ops = [EditOp::Insert("x"), EditOp::Delete("a"), EditOp::Delete("b")];
        assert_eq!(
            group_operations(&ops),
            vec![DiffOp::Replace {
                old_start: 0,
                old_end: 2,
                new_start: 0,
                new_end: 1,
            }]
        );
    }

    #[test]
    fn test_pure_insert_and_delete_positions() {
        let ops = [
            EditOp::Match("a"),
            EditOp::Insert("b"),
            EditOp::Match("c"),
            EditOp::Delete("d"),
        ];
        assert_eq!(
            group_operations(&ops),
            vec![
                DiffOp::Equal {
                    old_start: 0,
                    old_end: 1,
                    new_start: 0,
                    new_end: 1,
                },
                DiffOp::Insert {
                    old_index: 1,
                    new_start: 1,
                    new_end: 2,
                },
                DiffOp::Equal {
                    old_start: 1,
                    old_end: 2,
                    new_start: 2,
                    new_end: 3,
                },
                DiffOp::Delete {
                    old_start: 2,
                    old_end: 3,
                    new_index: 3,
                },
            ]
        );
    }
}
