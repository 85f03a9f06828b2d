//! Editor state and view model computation.
//!
//! [`EditorState`] owns the ordered rows for one editing session together
//! with the row-set selection the keyboard manipulates. Selection is kept as
//! a `BTreeSet` of row indices, the way a table widget tracks highlighted
//! rows, and is translated to [`Selection`] ranges only for the duration of
//! a move.
//!
//! # Example
//!
//! ```
//! use langorder::app::EditorState;
//! use langorder::reorder::Direction;
//! use langorder::{Row, Theme};
//!
//! let rows = vec![Row::new("en", "English"), Row::new("de", "Deutsch")];
//! let mut state = EditorState::new(rows, Theme::default());
//! state.cursor_down();
//! let outcome = state.move_selected(Direction::Up)?;
//! assert!(outcome.is_moved());
//! assert_eq!(state.ordered_codes(), vec!["de", "en"]);
//! # Ok::<(), langorder::LangorderError>(())
//! ```

use crate::domain::error::Result;
use crate::domain::{Row, Selection};
use crate::reorder::{self, Direction, MoveOutcome};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayItem, EmptyState, FooterInfo, HeaderInfo, UIViewModel};
use std::collections::BTreeSet;

/// Width of the CODE column, including its trailing gap.
const CODE_COLUMN_WIDTH: usize = 10;

/// Width of the cursor marker prefix.
const MARKER_WIDTH: usize = 2;

/// Lines taken by header, borders, column titles and footer.
const CHROME_ROWS: usize = 6;

/// State of one editing session.
#[derive(Debug, Clone)]
pub struct EditorState {
    /// The ordered sequence being edited.
    pub rows: Vec<Row>,

    /// Indices of highlighted rows.
    pub selected: BTreeSet<usize>,

    /// Row with keyboard focus. Always `< rows.len()` when rows exist.
    pub cursor: usize,

    /// Row the viewport keeps visible.
    pub reveal_row: usize,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Set once preferences have been loaded into the session.
    pub loaded: bool,

    /// Set once the session has been closed and its order handed off.
    pub finished: bool,

    /// Message from a failed load, shown in place of the table.
    pub load_error: Option<String>,
}

impl EditorState {
    /// Creates a session over `rows`, selecting the first row.
    #[must_use]
    pub fn new(rows: Vec<Row>, theme: Theme) -> Self {
        let mut state = Self::empty(theme);
        state.load(rows);
        state
    }

    /// Creates a session with nothing loaded yet.
    #[must_use]
    pub fn empty(theme: Theme) -> Self {
        Self {
            rows: Vec::new(),
            selected: BTreeSet::new(),
            cursor: 0,
            reveal_row: 0,
            theme,
            loaded: false,
            finished: false,
            load_error: None,
        }
    }

    /// Replaces the sequence with freshly loaded rows.
    ///
    /// The first row starts out selected.
    pub fn load(&mut self, rows: Vec<Row>) {
        tracing::debug!(count = rows.len(), "loading preference rows");

        self.rows = rows;
        self.selected.clear();
        self.cursor = 0;
        self.reveal_row = 0;
        self.loaded = true;
        self.load_error = None;

        if !self.rows.is_empty() {
            self.selected.insert(0);
        }
    }

    /// Current highlight as selection ranges.
    #[must_use]
    pub fn selection(&self) -> Selection {
        Selection::from_rows(self.selected.iter().copied())
    }

    /// Moves the cursor up one row and selects only that row.
    ///
    /// Returns whether the cursor or the selection changed.
    pub fn cursor_up(&mut self) -> bool {
        if self.rows.is_empty() {
            return false;
        }
        self.select_only(self.cursor.saturating_sub(1))
    }

    /// Moves the cursor down one row and selects only that row.
    ///
    /// Returns whether the cursor or the selection changed.
    pub fn cursor_down(&mut self) -> bool {
        if self.rows.is_empty() {
            return false;
        }
        self.select_only((self.cursor + 1).min(self.rows.len() - 1))
    }

    /// Moves the cursor up without touching the selection.
    pub fn focus_up(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.reveal_row = self.cursor;
        true
    }

    /// Moves the cursor down without touching the selection.
    pub fn focus_down(&mut self) -> bool {
        if self.cursor + 1 >= self.rows.len() {
            return false;
        }
        self.cursor += 1;
        self.reveal_row = self.cursor;
        true
    }

    /// Adds the cursor row to the selection, or removes it if already selected.
    pub fn toggle_cursor_row(&mut self) -> bool {
        if self.rows.is_empty() {
            return false;
        }
        if !self.selected.remove(&self.cursor) {
            self.selected.insert(self.cursor);
        }
        true
    }

    pub fn select_all(&mut self) -> bool {
        let before = self.selected.len();
        self.selected = (0..self.rows.len()).collect();
        self.selected.len() != before
    }

    pub fn clear_selection(&mut self) -> bool {
        let had_selection = !self.selected.is_empty();
        self.selected.clear();
        had_selection
    }

    /// Moves every selected row one step in `direction`.
    ///
    /// The old highlight is cleared before rows are swapped and the shifted
    /// ranges are highlighted again afterwards. On a real move the viewport
    /// target becomes the row returned by the engine, and the cursor stays on
    /// the same logical row.
    ///
    /// # Errors
    ///
    /// Returns [`LangorderError::InvalidSelection`](crate::LangorderError::InvalidSelection)
    /// if the highlight references rows that no longer exist. The state is
    /// left unchanged in that case.
    pub fn move_selected(&mut self, direction: Direction) -> Result<MoveOutcome> {
        let mut selection = self.selection();
        selection.check_bounds(self.rows.len())?;

        let highlighted = std::mem::take(&mut self.selected);
        let outcome = reorder::move_selection(&mut self.rows, &mut selection, direction);
        self.selected = selection.rows().collect();

        if let MoveOutcome::Moved { reveal_row } = outcome {
            self.cursor = follow_row(self.cursor, &highlighted, direction);
            self.reveal_row = reveal_row;
            tracing::debug!(
                direction = ?direction,
                selected = self.selected.len(),
                reveal_row,
                "selection moved"
            );
        } else {
            tracing::debug!(direction = ?direction, "move ignored at boundary");
        }

        Ok(outcome)
    }

    /// Final identities in order, display names dropped.
    #[must_use]
    pub fn ordered_codes(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.code.clone()).collect()
    }

    /// Computes a renderable view model for a pane of `rows` x `cols`.
    ///
    /// The visible window is centred on `reveal_row`, and slides back when
    /// that would leave empty lines at the end.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let header = self.compute_header();
        let footer = Self::compute_footer();

        if self.rows.is_empty() {
            return UIViewModel {
                display_items: vec![],
                header,
                footer,
                empty_state: Some(self.compute_empty_state()),
            };
        }

        let available_rows = rows.saturating_sub(CHROME_ROWS).max(1);

        let mut visible_start = self.reveal_row.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(self.rows.len());
        if visible_end - visible_start < available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let max_name_width = cols.saturating_sub(CODE_COLUMN_WIDTH + MARKER_WIDTH);
        let display_items = (visible_start..visible_end)
            .map(|index| DisplayItem {
                code: truncate(&self.rows[index].code, CODE_COLUMN_WIDTH - 1),
                name: truncate(&self.rows[index].name, max_name_width),
                is_selected: self.selected.contains(&index),
                is_cursor: index == self.cursor,
            })
            .collect();

        UIViewModel {
            display_items,
            header,
            footer,
            empty_state: None,
        }
    }

    fn select_only(&mut self, row: usize) -> bool {
        let unchanged = row == self.cursor
            && row == self.reveal_row
            && self.selected.len() == 1
            && self.selected.contains(&row);
        self.cursor = row;
        self.reveal_row = row;
        if unchanged {
            return false;
        }
        self.selected.clear();
        self.selected.insert(row);
        true
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = if self.selected.is_empty() {
            format!(" Language Preferences ({}) ", self.rows.len())
        } else {
            format!(
                " Language Preferences ({}, {} selected) ",
                self.rows.len(),
                self.selected.len()
            )
        };
        HeaderInfo { title }
    }

    fn compute_footer() -> FooterInfo {
        FooterInfo {
            keybindings: "j/k: navigate  Space: toggle  a/c: all/none  J/K: move down/up  Enter: save & close"
                .to_string(),
        }
    }

    fn compute_empty_state(&self) -> EmptyState {
        match &self.load_error {
            Some(error) => EmptyState {
                message: "Could not load language preferences".to_string(),
                subtitle: error.clone(),
            },
            None if !self.loaded => EmptyState {
                message: "Loading language preferences...".to_string(),
                subtitle: "Waiting for file access permission".to_string(),
            },
            None => EmptyState {
                message: "No languages to order".to_string(),
                subtitle: "Press Enter to close".to_string(),
            },
        }
    }
}

/// Where the row at `row` ends up after a successful move of `selected`.
///
/// A selected row shifts by one. An unselected row directly above (for up)
/// or below (for down) a selected run is pushed past that run. Every other
/// row stays put.
fn follow_row(row: usize, selected: &BTreeSet<usize>, direction: Direction) -> usize {
    if selected.contains(&row) {
        return match direction {
            Direction::Up => row - 1,
            Direction::Down => row + 1,
        };
    }
    match direction {
        Direction::Up => row + (row + 1..).take_while(|r| selected.contains(r)).count(),
        Direction::Down => row - (0..row).rev().take_while(|r| selected.contains(r)).count(),
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push_str("...");
    truncated
}
