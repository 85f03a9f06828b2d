//! End-to-end editing sessions: load from a store, rearrange, close, save.

use langorder::languages;
use langorder::storage::{JsonPreferenceStore, MemoryPreferenceStore, PreferenceStore};
use langorder::{handle_event, initialize, Action, Config, EditorState, Event, Row};

/// Feeds `events` through the handler and performs the actions against `store`.
fn drive<S: PreferenceStore>(state: &mut EditorState, store: &mut S, events: &[Event]) -> usize {
    let mut closes = 0;
    for event in events {
        let (_, actions) = handle_event(state, event).unwrap();
        for action in actions {
            match action {
                Action::SavePreferences { codes } => store.save_ordered(&codes).unwrap(),
                Action::CloseFocus => closes += 1,
            }
        }
    }
    closes
}

fn open(store: &impl PreferenceStore) -> EditorState {
    let mut state = initialize(&Config::default());
    let rows = store.load_ordered().unwrap();
    handle_event(&mut state, &Event::PreferencesLoaded { rows }).unwrap();
    state
}

fn rows(codes: &[&str]) -> Vec<Row> {
    codes.iter().map(|code| Row::new(*code, code.to_uppercase())).collect()
}

#[test]
fn disjoint_rows_move_up_together_and_save_once() {
    let mut store = MemoryPreferenceStore::new(rows(&["a", "b", "c", "d", "e", "f"]));
    let mut state = open(&store);

    // Select b and d to e: {1}, {3..=4}.
    let closes = drive(
        &mut state,
        &mut store,
        &[
            Event::CursorDown,
            Event::FocusDown,
            Event::FocusDown,
            Event::ToggleSelection,
            Event::FocusDown,
            Event::ToggleSelection,
            Event::MoveSelectionUp,
            Event::Close,
            Event::Close,
        ],
    );

    assert_eq!(closes, 2);
    assert_eq!(store.saves().len(), 1);
    assert_eq!(store.saves()[0], vec!["b", "a", "d", "e", "c", "f"]);
}

#[test]
fn boundary_moves_leave_store_order_intact() {
    let mut store = MemoryPreferenceStore::new(rows(&["a", "b", "c"]));
    let mut state = open(&store);

    drive(
        &mut state,
        &mut store,
        &[
            Event::MoveSelectionUp,
            Event::MoveSelectionUp,
            Event::SelectAll,
            Event::MoveSelectionDown,
            Event::Close,
        ],
    );

    assert_eq!(store.saves(), &[vec!["a", "b", "c"]]);
}

#[test]
fn repeated_moves_carry_selection_to_the_bottom() {
    let mut store = MemoryPreferenceStore::new(rows(&["a", "b", "c", "d"]));
    let mut state = open(&store);

    drive(
        &mut state,
        &mut store,
        &[
            Event::FocusDown,
            Event::ToggleSelection,
            Event::MoveSelectionDown,
            Event::MoveSelectionDown,
            Event::MoveSelectionDown,
        ],
    );

    assert_eq!(state.ordered_codes(), vec!["c", "d", "a", "b"]);
    assert_eq!(state.selected.iter().copied().collect::<Vec<_>>(), vec![2, 3]);

    drive(&mut state, &mut store, &[Event::Close]);
    assert_eq!(store.saves()[0], vec!["c", "d", "a", "b"]);
}

#[test]
fn json_store_round_trips_a_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("languages.json");

    let mut store = JsonPreferenceStore::new(path.clone()).unwrap();
    let mut state = open(&store);
    assert_eq!(state.rows, languages::default_rows());

    // Move the third catalogue language to the top.
    drive(
        &mut state,
        &mut store,
        &[
            Event::CursorDown,
            Event::CursorDown,
            Event::MoveSelectionUp,
            Event::MoveSelectionUp,
            Event::Close,
        ],
    );

    let reopened = JsonPreferenceStore::new(path).unwrap();
    let loaded = reopened.load_ordered().unwrap();
    let expected_first = languages::default_rows()[2].clone();
    assert_eq!(loaded[0], expected_first);
    assert_eq!(loaded.len(), languages::CATALOG.len());
}

#[test]
fn failed_load_never_overwrites_store() {
    let mut store = MemoryPreferenceStore::new(rows(&["a", "b"]));
    let mut state = initialize(&Config::default());

    drive(
        &mut state,
        &mut store,
        &[
            Event::LoadFailed {
                error: "Storage error: failed to parse JSON".to_string(),
            },
            Event::MoveSelectionDown,
            Event::Close,
        ],
    );

    assert!(store.saves().is_empty());
    let vm = state.compute_viewmodel(24, 80);
    assert_eq!(
        vm.empty_state.map(|empty| empty.subtitle).as_deref(),
        Some("Storage error: failed to parse JSON")
    );
}
