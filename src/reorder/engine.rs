//! Swap-and-shift moves for multi-range selections.
//!
//! Moving up walks the ranges top to bottom and, inside each range, swaps
//! every row with the row above it, top row first. Each block slides into the
//! single free slot above it and a block further down is not touched until
//! its own turn. Moving down mirrors this from the bottom. Afterwards every
//! range is shifted by one row, so the same logical rows stay selected.
//!
//! ```text
//! up, selection {1..=2}          down, selection {0, 2}
//!
//! A  B  B      (0..=1)           A  A  B      (1, 3)
//! B  A  C                        B  B  A
//! C  C  A                        C  D  D
//! D  D  D                        D  C  C
//! ```

use crate::domain::Selection;

/// Which way a move shifts the selected rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

/// Result of a move request.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Rows were permuted and the selection shifted.
    ///
    /// `reveal_row` is the row a view should scroll to: the new topmost
    /// selected row after moving up, the new bottommost after moving down.
    Moved { reveal_row: usize },

    /// Empty selection, or the selection already touches the edge it was
    /// moved toward. Sequence and selection are untouched.
    Unchanged,
}

impl MoveOutcome {
    #[must_use]
    pub const fn is_moved(self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Moves every selected block one row toward the top.
///
/// # Panics
///
/// Panics if any selected row is outside `sequence`.
///
/// # Examples
///
/// ```
/// use langorder::reorder::{move_selection_up, MoveOutcome};
/// use langorder::{Selection, SelectionRange};
///
/// let mut rows = vec!['A', 'B', 'C', 'D', 'E'];
/// let mut selection = Selection::from_rows([1, 2]);
///
/// let outcome = move_selection_up(&mut rows, &mut selection);
/// assert_eq!(outcome, MoveOutcome::Moved { reveal_row: 0 });
/// assert_eq!(rows, vec!['B', 'C', 'A', 'D', 'E']);
/// assert_eq!(selection.ranges(), &[SelectionRange::new(0, 1)]);
///
/// // Touching the top edge: nothing moves.
/// assert_eq!(move_selection_up(&mut rows, &mut selection), MoveOutcome::Unchanged);
/// ```
pub fn move_selection_up<T>(sequence: &mut [T], selection: &mut Selection) -> MoveOutcome {
    let _span = tracing::trace_span!(
        "move_selection_up",
        rows = sequence.len(),
        ranges = selection.ranges().len()
    )
    .entered();

    if selection.is_empty() {
        return MoveOutcome::Unchanged;
    }
    assert_in_bounds(sequence.len(), selection);

    let top = match selection.top_row() {
        Some(top) if top > 0 => top,
        _ => {
            tracing::trace!("selection touches the top edge");
            return MoveOutcome::Unchanged;
        }
    };

    for range in selection.ranges() {
        for row in range.rows() {
            sequence.swap(row, row - 1);
        }
    }
    selection.shift_up();

    MoveOutcome::Moved { reveal_row: top - 1 }
}

/// Moves every selected block one row toward the bottom.
///
/// # Panics
///
/// Panics if any selected row is outside `sequence`.
///
/// # Examples
///
/// ```
/// use langorder::reorder::{move_selection_down, MoveOutcome};
/// use langorder::{Selection, SelectionRange};
///
/// let mut rows = vec!['A', 'B', 'C', 'D', 'E'];
/// let mut selection = Selection::from_rows([0, 2]);
///
/// let outcome = move_selection_down(&mut rows, &mut selection);
/// assert_eq!(outcome, MoveOutcome::Moved { reveal_row: 3 });
/// assert_eq!(rows, vec!['B', 'A', 'D', 'C', 'E']);
/// assert_eq!(
///     selection.ranges(),
///     &[SelectionRange::single(1), SelectionRange::single(3)]
/// );
/// ```
pub fn move_selection_down<T>(sequence: &mut [T], selection: &mut Selection) -> MoveOutcome {
    let _span = tracing::trace_span!(
        "move_selection_down",
        rows = sequence.len(),
        ranges = selection.ranges().len()
    )
    .entered();

    if selection.is_empty() {
        return MoveOutcome::Unchanged;
    }
    assert_in_bounds(sequence.len(), selection);

    let bottom = match selection.bottom_row() {
        Some(bottom) if bottom + 1 < sequence.len() => bottom,
        _ => {
            tracing::trace!("selection touches the bottom edge");
            return MoveOutcome::Unchanged;
        }
    };

    for range in selection.ranges().iter().rev() {
        for row in range.rows().rev() {
            sequence.swap(row, row + 1);
        }
    }
    selection.shift_down();

    MoveOutcome::Moved { reveal_row: bottom + 1 }
}

/// Dispatches to [`move_selection_up`] or [`move_selection_down`].
pub fn move_selection<T>(
    sequence: &mut [T],
    selection: &mut Selection,
    direction: Direction,
) -> MoveOutcome {
    match direction {
        Direction::Up => move_selection_up(sequence, selection),
        Direction::Down => move_selection_down(sequence, selection),
    }
}

/// By-value form of [`move_selection`]: takes the sequence and selection and
/// hands back the reordered pair.
///
/// # Examples
///
/// ```
/// use langorder::reorder::{moved, Direction};
/// use langorder::Selection;
///
/// let (rows, selection, outcome) = moved(vec![1, 2, 3], Selection::from_rows([0]), Direction::Down);
/// assert!(outcome.is_moved());
/// assert_eq!(rows, vec![2, 1, 3]);
/// assert_eq!(selection.top_row(), Some(1));
/// ```
pub fn moved<T>(
    mut sequence: Vec<T>,
    mut selection: Selection,
    direction: Direction,
) -> (Vec<T>, Selection, MoveOutcome) {
    let outcome = move_selection(&mut sequence, &mut selection, direction);
    (sequence, selection, outcome)
}

fn assert_in_bounds(len: usize, selection: &Selection) {
    if let Some(bottom) = selection.bottom_row() {
        assert!(
            bottom < len,
            "selected row {bottom} is outside a sequence of {len} rows"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SelectionRange;
    use std::collections::BTreeSet;

    fn letters(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn move_up_block_then_noop_at_top() {
        let mut rows = letters("ABCDE");
        let mut selection = Selection::new(vec![SelectionRange::new(1, 2)]).unwrap();

        let outcome = move_selection_up(&mut rows, &mut selection);
        assert_eq!(outcome, MoveOutcome::Moved { reveal_row: 0 });
        assert_eq!(rows, letters("BCADE"));
        assert_eq!(selection.ranges(), &[SelectionRange::new(0, 1)]);

        let before = (rows.clone(), selection.clone());
        assert_eq!(move_selection_up(&mut rows, &mut selection), MoveOutcome::Unchanged);
        assert_eq!((rows, selection), before);
    }

    #[test]
    fn move_down_disjoint_singles() {
        let mut rows = letters("ABCDE");
        let mut selection =
            Selection::new(vec![SelectionRange::single(0), SelectionRange::single(2)]).unwrap();

        let outcome = move_selection_down(&mut rows, &mut selection);
        assert_eq!(outcome, MoveOutcome::Moved { reveal_row: 3 });
        assert_eq!(rows, letters("BADCE"));
        assert_eq!(
            selection.ranges(),
            &[SelectionRange::single(1), SelectionRange::single(3)]
        );
    }

    #[test]
    fn move_down_noop_at_bottom_edge() {
        let mut rows = letters("ABCDE");
        let mut selection = Selection::from_rows([1, 4]);
        let before = (rows.clone(), selection.clone());

        assert_eq!(move_selection_down(&mut rows, &mut selection), MoveOutcome::Unchanged);
        assert_eq!((rows, selection), before);
    }

    #[test]
    fn empty_selection_is_noop_both_ways() {
        let mut rows = letters("ABC");
        let mut selection = Selection::empty();

        assert_eq!(move_selection_up(&mut rows, &mut selection), MoveOutcome::Unchanged);
        assert_eq!(move_selection_down(&mut rows, &mut selection), MoveOutcome::Unchanged);
        assert_eq!(rows, letters("ABC"));
        assert!(selection.is_empty());
    }

    #[test]
    fn empty_sequence_with_empty_selection() {
        let mut rows: Vec<char> = Vec::new();
        let mut selection = Selection::empty();
        assert_eq!(move_selection_down(&mut rows, &mut selection), MoveOutcome::Unchanged);
        assert_eq!(move_selection_up(&mut rows, &mut selection), MoveOutcome::Unchanged);
    }

    #[test]
    fn blocks_separated_by_one_row_moving_up() {
        // B,C and E selected; D sits alone between the two blocks.
        let mut rows = letters("ABCDEF");
        let mut selection = Selection::from_rows([1, 2, 4]);

        let outcome = move_selection_up(&mut rows, &mut selection);
        assert_eq!(outcome, MoveOutcome::Moved { reveal_row: 0 });
        assert_eq!(rows, letters("BCAEDF"));
        assert_eq!(
            selection.ranges(),
            &[SelectionRange::new(0, 1), SelectionRange::single(3)]
        );
    }

    #[test]
    fn blocks_separated_by_one_row_moving_down() {
        let mut rows = letters("ABCDEF");
        let mut selection = Selection::from_rows([0, 2, 3]);

        let outcome = move_selection_down(&mut rows, &mut selection);
        assert_eq!(outcome, MoveOutcome::Moved { reveal_row: 4 });
        assert_eq!(rows, letters("BAECDF"));
        assert_eq!(
            selection.ranges(),
            &[SelectionRange::single(1), SelectionRange::new(3, 4)]
        );
    }

    #[test]
    fn gap_between_blocks_survives_until_edge_noop() {
        // A and C selected with B between them. Both blocks move together,
        // so the gap never closes, and once C reaches the bottom the next
        // move does nothing.
        let mut rows = letters("ABCD");
        let mut selection = Selection::from_rows([0, 2]);

        assert!(move_selection_down(&mut rows, &mut selection).is_moved());
        assert_eq!(rows, letters("BADC"));
        assert_eq!(move_selection_down(&mut rows, &mut selection), MoveOutcome::Unchanged);
        assert_eq!(
            selection.ranges(),
            &[SelectionRange::single(1), SelectionRange::single(3)]
        );
    }

    #[test]
    fn touching_ranges_move_like_a_single_block() {
        let mut split_rows = letters("ABCDE");
        let mut split =
            Selection::new(vec![SelectionRange::new(2, 2), SelectionRange::new(3, 4)]).unwrap();
        let mut merged_rows = split_rows.clone();
        let mut merged = Selection::from_rows([2, 3, 4]);

        let _ = move_selection_up(&mut split_rows, &mut split);
        let _ = move_selection_up(&mut merged_rows, &mut merged);

        assert_eq!(split_rows, merged_rows);
        assert_eq!(split_rows, letters("ACDEB"));
        assert_eq!(split.rows().collect::<Vec<_>>(), merged.rows().collect::<Vec<_>>());
    }

    #[test]
    fn moved_returns_reordered_pair() {
        let (rows, selection, outcome) =
            moved(letters("ABC"), Selection::from_rows([2]), Direction::Up);
        assert_eq!(outcome, MoveOutcome::Moved { reveal_row: 1 });
        assert_eq!(rows, letters("ACB"));
        assert_eq!(selection.ranges(), &[SelectionRange::single(1)]);
    }

    #[test]
    #[should_panic(expected = "outside a sequence")]
    fn out_of_bounds_selection_panics() {
        let mut rows = letters("AB");
        let mut selection = Selection::from_rows([1, 5]);
        let _ = move_selection_up(&mut rows, &mut selection);
    }

    #[test]
    #[should_panic(expected = "outside a sequence")]
    fn out_of_bounds_selection_panics_even_at_top_edge() {
        let mut rows = letters("AB");
        let mut selection = Selection::from_rows([0, 2]);
        let _ = move_selection_up(&mut rows, &mut selection);
    }

    /// Every non-empty subset of rows for sequences up to six long, both as
    /// coalesced ranges and as one range per row.
    fn all_selections() -> Vec<(usize, Selection)> {
        let mut cases = Vec::new();
        for len in 1..=6_usize {
            for mask in 1..(1_u32 << len) {
                let rows: Vec<usize> = (0..len).filter(|bit| mask & (1 << bit) != 0).collect();
                cases.push((len, Selection::from_rows(rows.iter().copied())));
                let singles = rows.iter().copied().map(SelectionRange::single).collect();
                cases.push((len, Selection::new(singles).unwrap()));
            }
        }
        cases
    }

    fn selected_identities(rows: &[usize], selection: &Selection) -> BTreeSet<usize> {
        selection.rows().map(|row| rows[row]).collect()
    }

    #[test]
    fn moves_permute_rows_and_keep_selected_identities() {
        for (len, selection) in all_selections() {
            for direction in [Direction::Up, Direction::Down] {
                let original: Vec<usize> = (0..len).collect();
                let (rows, after, outcome) = moved(original.clone(), selection.clone(), direction);

                let mut sorted = rows.clone();
                sorted.sort_unstable();
                assert_eq!(sorted, original, "rows are a permutation");
                assert_eq!(after.len(), selection.len(), "selected row count");
                assert_eq!(after.ranges().len(), selection.ranges().len());
                assert_eq!(
                    selected_identities(&rows, &after),
                    selected_identities(&original, &selection),
                    "{direction:?} {selection:?}"
                );
                if !outcome.is_moved() {
                    assert_eq!(rows, original);
                    assert_eq!(after, selection);
                }
            }
        }
    }

    #[test]
    fn noop_exactly_at_the_edges() {
        for (len, selection) in all_selections() {
            let (_, _, up) = moved((0..len).collect(), selection.clone(), Direction::Up);
            assert_eq!(up.is_moved(), selection.top_row() != Some(0));

            let (_, _, down) = moved((0..len).collect(), selection.clone(), Direction::Down);
            assert_eq!(down.is_moved(), selection.bottom_row() != Some(len - 1));
        }
    }

    #[test]
    fn selected_rows_move_exactly_one_step() {
        for (len, selection) in all_selections() {
            for direction in [Direction::Up, Direction::Down] {
                let original: Vec<usize> = (0..len).collect();
                let (rows, after, outcome) = moved(original, selection.clone(), direction);
                let MoveOutcome::Moved { reveal_row } = outcome else {
                    continue;
                };

                let position = |identity: usize| rows.iter().position(|&r| r == identity).unwrap();
                for old in selection.rows() {
                    let expected = match direction {
                        Direction::Up => old - 1,
                        Direction::Down => old + 1,
                    };
                    assert_eq!(position(old), expected);
                }

                // Unselected rows only ever move against the direction and
                // keep their relative order.
                let unselected: Vec<usize> =
                    (0..len).filter(|r| !selection.rows().any(|s| s == *r)).collect();
                for &identity in &unselected {
                    let new = position(identity);
                    match direction {
                        Direction::Up => assert!(new >= identity),
                        Direction::Down => assert!(new <= identity),
                    }
                }
                let order: Vec<usize> = rows.iter().copied().filter(|r| unselected.contains(r)).collect();
                assert_eq!(order, unselected);

                let expected_reveal = match direction {
                    Direction::Up => after.top_row(),
                    Direction::Down => after.bottom_row(),
                };
                assert_eq!(Some(reveal_row), expected_reveal);
            }
        }
    }

    #[test]
    fn opposite_move_restores_sequence_and_selection() {
        for (len, selection) in all_selections() {
            for direction in [Direction::Up, Direction::Down] {
                let original: Vec<usize> = (0..len).collect();
                let (rows, after, outcome) = moved(original.clone(), selection.clone(), direction);
                if !outcome.is_moved() {
                    continue;
                }
                let (restored, restored_selection, back) = moved(rows, after, direction.opposite());
                assert!(back.is_moved());
                assert_eq!(restored, original);
                assert_eq!(restored_selection, selection);
            }
        }
    }
}
