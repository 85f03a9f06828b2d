//! Selection ranges over an ordered sequence.
//!
//! A [`Selection`] is an ascending list of disjoint [`SelectionRange`]s, each a
//! closed block `top..=bottom` of row indices. Ranges may touch (`0..=1` next
//! to `2..=3`); merging touching ranges is left to whoever builds the
//! selection. [`Selection::from_rows`] is the usual way in: it turns any set
//! of selected row indices into the minimal coalesced range list.

use crate::domain::error::{LangorderError, Result};
use std::collections::BTreeSet;
use std::ops::RangeInclusive;

/// A contiguous, non-empty block of selected rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectionRange {
    top: usize,
    bottom: usize,
}

impl SelectionRange {
    /// Creates the closed range `top..=bottom`.
    ///
    /// # Panics
    ///
    /// Panics if `top > bottom`. A range always covers at least one row.
    ///
    /// # Examples
    ///
    /// ```
    /// use langorder::SelectionRange;
    ///
    /// let range = SelectionRange::new(1, 3);
    /// assert_eq!(range.row_count(), 3);
    /// assert!(range.contains(2));
    /// ```
    #[must_use]
    pub fn new(top: usize, bottom: usize) -> Self {
        assert!(
            top <= bottom,
            "selection range must cover at least one row (top {top}, bottom {bottom})"
        );
        Self { top, bottom }
    }

    #[must_use]
    pub const fn single(row: usize) -> Self {
        Self { top: row, bottom: row }
    }

    #[must_use]
    pub const fn top(&self) -> usize {
        self.top
    }

    #[must_use]
    pub const fn bottom(&self) -> usize {
        self.bottom
    }

    #[must_use]
    pub const fn row_count(&self) -> usize {
        self.bottom - self.top + 1
    }

    #[must_use]
    pub const fn contains(&self, row: usize) -> bool {
        self.top <= row && row <= self.bottom
    }

    /// Row indices covered by this range, top to bottom.
    #[must_use]
    pub fn rows(&self) -> RangeInclusive<usize> {
        self.top..=self.bottom
    }
}

/// Selected rows as ascending, non-overlapping ranges.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    ranges: Vec<SelectionRange>,
}

impl Selection {
    /// Builds a selection from ranges that are already sorted and disjoint.
    ///
    /// Touching ranges are accepted as given and are not merged.
    ///
    /// # Errors
    ///
    /// Returns [`LangorderError::InvalidSelection`] if a range starts at or
    /// above the bottom of the range before it.
    ///
    /// # Examples
    ///
    /// ```
    /// use langorder::{Selection, SelectionRange};
    ///
    /// let ok = Selection::new(vec![SelectionRange::new(0, 1), SelectionRange::single(3)]);
    /// assert!(ok.is_ok());
    ///
    /// let overlapping = Selection::new(vec![SelectionRange::new(0, 2), SelectionRange::single(2)]);
    /// assert!(overlapping.is_err());
    /// ```
    pub fn new(ranges: Vec<SelectionRange>) -> Result<Self> {
        for pair in ranges.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            if next.top <= prev.bottom {
                return Err(LangorderError::InvalidSelection(format!(
                    "range {}..={} must start below {}..={}",
                    next.top, next.bottom, prev.top, prev.bottom
                )));
            }
        }
        Ok(Self { ranges })
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self { ranges: Vec::new() }
    }

    /// Coalesces arbitrary row indices into the minimal range list.
    ///
    /// Order and duplicates in the input do not matter.
    ///
    /// # Examples
    ///
    /// ```
    /// use langorder::{Selection, SelectionRange};
    ///
    /// let selection = Selection::from_rows([4, 0, 1, 2, 4]);
    /// assert_eq!(
    ///     selection.ranges(),
    ///     &[SelectionRange::new(0, 2), SelectionRange::single(4)]
    /// );
    /// ```
    #[must_use]
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let sorted: BTreeSet<usize> = rows.into_iter().collect();
        let mut ranges: Vec<SelectionRange> = Vec::new();

        for row in sorted {
            match ranges.last_mut() {
                Some(last) if last.bottom + 1 == row => last.bottom = row,
                _ => ranges.push(SelectionRange::single(row)),
            }
        }

        Self { ranges }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    #[must_use]
    pub fn ranges(&self) -> &[SelectionRange] {
        &self.ranges
    }

    /// Topmost selected row, if any.
    #[must_use]
    pub fn top_row(&self) -> Option<usize> {
        self.ranges.first().map(SelectionRange::top)
    }

    /// Bottommost selected row, if any.
    #[must_use]
    pub fn bottom_row(&self) -> Option<usize> {
        self.ranges.last().map(SelectionRange::bottom)
    }

    /// Number of selected rows across all ranges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranges.iter().map(SelectionRange::row_count).sum()
    }

    /// Every selected row index in ascending order.
    pub fn rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.ranges.iter().flat_map(SelectionRange::rows)
    }

    /// Checks that every range lies inside a sequence of `len` rows.
    ///
    /// # Errors
    ///
    /// Returns [`LangorderError::InvalidSelection`] if the bottom row is past
    /// the end of the sequence.
    pub fn check_bounds(&self, len: usize) -> Result<()> {
        match self.bottom_row() {
            Some(bottom) if bottom >= len => Err(LangorderError::InvalidSelection(format!(
                "row {bottom} is outside a sequence of {len} rows"
            ))),
            _ => Ok(()),
        }
    }

    /// Shifts every range one row toward the top. Caller guarantees `top_row() > 0`.
    pub(crate) fn shift_up(&mut self) {
        for range in &mut self.ranges {
            range.top -= 1;
            range.bottom -= 1;
        }
    }

    /// Shifts every range one row toward the bottom.
    pub(crate) fn shift_down(&mut self) {
        for range in &mut self.ranges {
            range.top += 1;
            range.bottom += 1;
        }
    }
}

impl FromIterator<usize> for Selection {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self::from_rows(iter)
    }
}
