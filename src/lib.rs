//! langorder: A Zellij plugin for ordering language preferences.
//!
//! The plugin shows the user's preferred languages as a table. Any set of
//! rows, contiguous or not, can be highlighted and moved up or down one step
//! at a time. The selection travels with the moved rows, and the final order
//! is saved once when the pane is closed.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Session state
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Reorder       │   │ Storage Layer │
//! │ (ui/)         │   │ (reorder/)    │   │ (storage/)    │
//! │ - Rendering   │   │ - Block moves │   │ - JSON I/O    │
//! │ - Theming     │   │ - Selection   │   │ - Backend API │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Languages & Infrastructure                 │
//! │  - Rows and selection ranges (domain/)              │
//! │  - Built-in language catalogue (languages)          │
//! │  - Sandbox paths (infrastructure/)                  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Editing session with event/action model
//! - [`domain`]: Rows, selection ranges and errors
//! - [`reorder`]: Selection-preserving move engine
//! - [`languages`]: Built-in language catalogue
//! - [`storage`]: Preference persistence
//! - [`ui`]: Terminal rendering with theme support
//! - [`infrastructure`]: Sandbox paths
//! - [`observability`]: Rotating log file
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/langorder.wasm" {
//!         preferences_file "~/.config/langorder/languages.json"
//!         theme "daylight"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use langorder::{handle_event, initialize, Action, Config, Event, Row};
//!
//! let mut state = initialize(&Config::default());
//! let rows = vec![
//!     Row::new("en", "English"),
//!     Row::new("de", "Deutsch"),
//!     Row::new("fr", "Français"),
//! ];
//! handle_event(&mut state, &Event::PreferencesLoaded { rows })?;
//!
//! // Highlight "de" and "fr" together and move them above "en".
//! handle_event(&mut state, &Event::CursorDown)?;
//! handle_event(&mut state, &Event::FocusDown)?;
//! handle_event(&mut state, &Event::ToggleSelection)?;
//! handle_event(&mut state, &Event::MoveSelectionUp)?;
//!
//! let (_, actions) = handle_event(&mut state, &Event::Close)?;
//! assert_eq!(
//!     actions[0],
//!     Action::SavePreferences {
//!         codes: vec!["de".to_string(), "fr".to_string(), "en".to_string()],
//!     }
//! );
//! # Ok::<(), langorder::LangorderError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod languages;
pub mod observability;
pub mod reorder;
pub mod storage;
pub mod ui;

pub use app::{handle_event, Action, EditorState, Event};
pub use domain::{LangorderError, Result, Row, Selection, SelectionRange};
pub use ui::Theme;

use std::collections::BTreeMap;
use std::path::PathBuf;
use storage::JsonPreferenceStore;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// ```kdl
/// plugin location="file:/path/to/langorder.wasm" {
///     preferences_file "~/.config/langorder/languages.json"
///     theme "midnight"
///     theme_file "/path/to/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Where preferences are stored.
    ///
    /// `~` expands to the sandbox `/host` mount. Default:
    /// `~/.local/share/zellij/langorder/languages.json`
    pub preferences_file: Option<String>,

    /// Built-in theme name, `midnight` or `daylight`.
    ///
    /// Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for the log file. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Blank values count as unset.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use langorder::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("preferences_file".to_string(), "~/langs.json".to_string());
    /// map.insert("theme".to_string(), "daylight".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.preferences_path().to_str(), Some("/host/langs.json"));
    /// assert_eq!(config.theme_name.as_deref(), Some("daylight"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        Self {
            preferences_file: value("preferences_file"),
            theme_name: value("theme"),
            theme_file: value("theme_file"),
            trace_level: value("trace_level"),
        }
    }

    /// Resolved location of the preference store.
    #[must_use]
    pub fn preferences_path(&self) -> PathBuf {
        self.preferences_file.as_deref().map_or_else(
            infrastructure::preferences_path,
            |path| PathBuf::from(infrastructure::expand_tilde(path)),
        )
    }
}

/// Creates an empty editing session with the configured theme.
///
/// The theme comes from `theme_file`, then `theme_name`, then the default.
/// A theme that fails to load is logged and replaced by the default.
///
/// Rows arrive later through [`Event::PreferencesLoaded`].
#[must_use]
pub fn initialize(config: &Config) -> EditorState {
    tracing::debug!("initializing langorder plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config
                .theme_name
                .as_ref()
                .map_or_else(Theme::default, |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                        Theme::default()
                    })
                })
        },
        |theme_file| {
            Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    EditorState::empty(theme)
}

/// Opens the JSON preference store at the configured location.
///
/// # Errors
///
/// Returns [`LangorderError::Config`] if the configured path is a directory,
/// or a storage error if the store directory cannot be created or an existing
/// file cannot be read or parsed.
pub fn open_store(config: &Config) -> Result<JsonPreferenceStore> {
    let path = config.preferences_path();
    if path.is_dir() {
        return Err(LangorderError::Config(format!(
            "preferences_file must name a file, got directory {}",
            path.display()
        )));
    }
    tracing::debug!(path = %path.display(), "opening preference store");
    JsonPreferenceStore::new(path)
}
