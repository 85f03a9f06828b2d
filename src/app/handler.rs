//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point for everything that happens
//! during a session: storage results from the shell and key presses mapped
//! to editor events. It returns whether the UI should re-render and the
//! side effects to run.
//!
//! # Example
//!
//! ```
//! use langorder::app::{handle_event, Action, EditorState, Event};
//! use langorder::{Row, Theme};
//!
//! let mut state = EditorState::new(
//!     vec![Row::new("en", "English"), Row::new("de", "Deutsch")],
//!     Theme::default(),
//! );
//! handle_event(&mut state, &Event::CursorDown)?;
//! handle_event(&mut state, &Event::MoveSelectionUp)?;
//!
//! let (_, actions) = handle_event(&mut state, &Event::Close)?;
//! assert_eq!(
//!     actions,
//!     vec![
//!         Action::SavePreferences { codes: vec!["de".to_string(), "en".to_string()] },
//!         Action::CloseFocus,
//!     ]
//! );
//! # Ok::<(), langorder::LangorderError>(())
//! ```

use crate::app::{Action, EditorState};
use crate::domain::error::Result;
use crate::domain::Row;
use crate::reorder::Direction;

/// Events triggered by user input or by the preference store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The store returned the current ordered preferences.
    ///
    /// Only the first one builds the sequence. Later ones are ignored.
    PreferencesLoaded {
        rows: Vec<Row>,
    },
    /// The store could not be opened or read.
    LoadFailed {
        error: String,
    },

    /// Cursor up, selecting only the new row.
    CursorUp,
    /// Cursor down, selecting only the new row.
    CursorDown,
    /// Cursor up, selection untouched.
    FocusUp,
    /// Cursor down, selection untouched.
    FocusDown,
    /// Toggles the cursor row in the selection.
    ToggleSelection,
    SelectAll,
    ClearSelection,

    /// Moves every selected row one position up.
    MoveSelectionUp,
    /// Moves every selected row one position down.
    MoveSelectionDown,

    /// Ends the session: saves the order once and hides the pane.
    Close,
}

/// Processes an event, mutates editor state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. Moves at a boundary report `false` and no
/// actions.
///
/// # Errors
///
/// Returns an error if the highlighted rows no longer fit the sequence.
pub fn handle_event(state: &mut EditorState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event_name(event)).entered();

    if state.finished && *event != Event::Close {
        tracing::debug!("session already finished, ignoring event");
        return Ok((false, vec![]));
    }

    match event {
        Event::PreferencesLoaded { .. } if state.loaded => {
            tracing::debug!("preferences already loaded, keeping current order");
            Ok((false, vec![]))
        }
        Event::PreferencesLoaded { rows } => {
            state.load(rows.clone());
            Ok((true, vec![]))
        }
        Event::LoadFailed { error } => {
            tracing::warn!(error = %error, "failed to load preferences");
            state.load_error = Some(error.clone());
            Ok((true, vec![]))
        }
        Event::CursorUp => Ok((state.cursor_up(), vec![])),
        Event::CursorDown => Ok((state.cursor_down(), vec![])),
        Event::FocusUp => Ok((state.focus_up(), vec![])),
        Event::FocusDown => Ok((state.focus_down(), vec![])),
        Event::ToggleSelection => Ok((state.toggle_cursor_row(), vec![])),
        Event::SelectAll => Ok((state.select_all(), vec![])),
        Event::ClearSelection => Ok((state.clear_selection(), vec![])),
        Event::MoveSelectionUp => {
            let outcome = state.move_selected(Direction::Up)?;
            Ok((outcome.is_moved(), vec![]))
        }
        Event::MoveSelectionDown => {
            let outcome = state.move_selected(Direction::Down)?;
            Ok((outcome.is_moved(), vec![]))
        }
        Event::Close => {
            if state.finished {
                return Ok((false, vec![Action::CloseFocus]));
            }
            state.finished = true;

            if !state.loaded {
                tracing::debug!("closing before preferences loaded, nothing to save");
                return Ok((false, vec![Action::CloseFocus]));
            }

            let codes = state.ordered_codes();
            tracing::debug!(count = codes.len(), "closing session, saving order");
            Ok((false, vec![Action::SavePreferences { codes }, Action::CloseFocus]))
        }
    }
}

const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::PreferencesLoaded { .. } => "PreferencesLoaded",
        Event::LoadFailed { .. } => "LoadFailed",
        Event::CursorUp => "CursorUp",
        Event::CursorDown => "CursorDown",
        Event::FocusUp => "FocusUp",
        Event::FocusDown => "FocusDown",
        Event::ToggleSelection => "ToggleSelection",
        Event::SelectAll => "SelectAll",
        Event::ClearSelection => "ClearSelection",
        Event::MoveSelectionUp => "MoveSelectionUp",
        Event::MoveSelectionDown => "MoveSelectionDown",
        Event::Close => "Close",
    }
}
