//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the langorder library and the Zellij
//! plugin system: it maps keys to library events, feeds the store's results
//! in, and runs the returned actions.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create an empty session
//! 2. **Permissions**: Request file access, subscribe to keys
//! 3. **Granted**: Open the JSON store and load the ordered preferences
//! 4. **Update**: Map keys to events, execute actions
//! 5. **Close**: Save the final order once and hide the pane
//!
//! # Keybindings
//!
//! - `j`/`Down`, `k`/`Up`: Move the cursor and select that row
//! - `Ctrl+n`, `Ctrl+p`: Move the cursor, keep the selection
//! - `Space`: Toggle the cursor row
//! - `a` / `c`: Select all / clear
//! - `J`/`Shift+Down`, `K`/`Shift+Up`: Move the selected rows
//! - `Enter`, `q`, `Esc`: Save and close
//!
//! The plugin only builds for `wasm32`. On other targets the binary is an
//! empty stub so `cargo test` can run the library tests on the host.

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_arch = "wasm32")]
use std::collections::BTreeMap;
#[cfg(target_arch = "wasm32")]
use zellij_tile::prelude::*;

#[cfg(target_arch = "wasm32")]
use langorder::storage::{JsonPreferenceStore, PreferenceStore};
#[cfg(target_arch = "wasm32")]
use langorder::{handle_event, Action, Config, Event};

#[cfg(target_arch = "wasm32")]
register_plugin!(State);

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("langorder is a Zellij plugin, build it with --target wasm32-wasip1");
}

/// Plugin state wrapper.
///
/// Wraps the library's `EditorState` with the store the session loads from
/// and saves to.
#[cfg(target_arch = "wasm32")]
struct State {
    /// Core session state from library layer.
    app: langorder::EditorState,

    /// Parsed plugin configuration.
    config: Config,

    /// Opened once file access is granted.
    store: Option<JsonPreferenceStore>,
}

#[cfg(target_arch = "wasm32")]
impl Default for State {
    fn default() -> Self {
        let config = Config::default();
        Self {
            app: langorder::initialize(&config),
            config,
            store: None,
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl ZellijPlugin for State {
    /// Parses configuration, requests permissions and subscribes to events.
    ///
    /// Preferences are loaded after `FullHdAccess` is granted.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        langorder::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            preferences = %config.preferences_path().display(),
            "parsed configuration"
        );
        self.app = langorder::initialize(&config);
        self.config = config;

        request_permission(&[
            PermissionType::FullHdAccess,
            PermissionType::ChangeApplicationState,
        ]);
        subscribe(&[EventType::Key, EventType::PermissionRequestResult]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let span = tracing::debug_span!("plugin_update_event", event_type = %Self::get_event_name(&event));
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match Self::map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                match self.map_permission_result(permissions) {
                    Some(event) => event,
                    None => return false,
                }
            }
            _ => return false,
        };

        self.dispatch(&our_event)
    }

    fn render(&mut self, rows: usize, cols: usize) {
        langorder::ui::render(&self.app, rows, cols);
    }
}

#[cfg(target_arch = "wasm32")]
impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Runs an event through the library and executes the resulting actions.
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::FocusDown),
                BareKey::Char('p') => Some(Event::FocusUp),
                _ => None,
            };
        }
        if key.has_modifiers(&[KeyModifier::Shift]) {
            match key.bare_key {
                BareKey::Up => return Some(Event::MoveSelectionUp),
                BareKey::Down => return Some(Event::MoveSelectionDown),
                _ => {}
            }
        }

        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::CursorDown,
            BareKey::Up | BareKey::Char('k') => Event::CursorUp,
            BareKey::Char('J') => Event::MoveSelectionDown,
            BareKey::Char('K') => Event::MoveSelectionUp,
            BareKey::Char(' ') => Event::ToggleSelection,
            BareKey::Char('a') => Event::SelectAll,
            BareKey::Char('c') => Event::ClearSelection,
            BareKey::Enter | BareKey::Esc | BareKey::Char('q') => Event::Close,
            _ => return None,
        })
    }

    /// Opens the store and loads preferences once file access is granted.
    ///
    /// Later grants are ignored so the open session keeps its store.
    fn map_permission_result(&mut self, permissions: PermissionStatus) -> Option<Event> {
        if self.store.is_some() {
            tracing::debug!("preference store already open, ignoring permission result");
            return None;
        }

        Some(match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted - loading preferences");
                match langorder::open_store(&self.config)
                    .and_then(|store| store.load_ordered().map(|rows| (store, rows)))
                {
                    Ok((store, rows)) => {
                        tracing::info!(count = rows.len(), "preferences loaded");
                        self.store = Some(store);
                        Event::PreferencesLoaded { rows }
                    }
                    Err(e) => Event::LoadFailed {
                        error: e.to_string(),
                    },
                }
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - cannot read preferences");
                Event::LoadFailed {
                    error: "File access permission was denied".to_string(),
                }
            }
        })
    }

    /// Translates library actions to store writes and Zellij API calls.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&mut self, action: &Action) {
        match action {
            Action::SavePreferences { codes } => match self.store.as_mut() {
                Some(store) => match store.save_ordered(codes) {
                    Ok(()) => tracing::info!(count = codes.len(), "preferences saved"),
                    Err(e) => tracing::error!(error = %e, "failed to save preferences"),
                },
                None => tracing::warn!("no preference store open, order not saved"),
            },
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
        }
    }
}
