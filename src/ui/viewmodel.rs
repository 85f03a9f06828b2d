//! View model types representing renderable UI state.
//!
//! View models are computed by `EditorState::compute_viewmodel()` and
//! consumed by the renderer. They hold display-ready data only.
//!
//! # Example
//!
//! ```
//! use langorder::ui::viewmodel::{DisplayItem, FooterInfo, HeaderInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     display_items: vec![DisplayItem {
//!         code: "en".to_string(),
//!         name: "English".to_string(),
//!         is_selected: true,
//!         is_cursor: true,
//!     }],
//!     header: HeaderInfo { title: "Language Preferences (1)".to_string() },
//!     footer: FooterInfo { keybindings: "q: quit".to_string() },
//!     empty_state: None,
//! };
//! assert_eq!(vm.display_items.len(), 1);
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Rows inside the visible window, top to bottom.
    pub display_items: Vec<DisplayItem>,

    /// Header information (title and counts).
    pub header: HeaderInfo,

    /// Footer information (keybindings).
    pub footer: FooterInfo,

    /// Message shown instead of the table when there are no rows.
    pub empty_state: Option<EmptyState>,
}

/// One visible language row.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    /// Language code column.
    pub code: String,

    /// Display name column, already truncated to fit.
    pub name: String,

    /// Whether the row is highlighted.
    pub is_selected: bool,

    /// Whether the row has keyboard focus.
    pub is_cursor: bool,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message.
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
