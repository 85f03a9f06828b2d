//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler stays pure: it mutates [`EditorState`](crate::app::EditorState)
//! and returns a list of actions. The plugin shell turns those into storage
//! writes and Zellij calls, in order.

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hands the final order to the preference store.
    ///
    /// Emitted at most once per session, when it closes.
    SavePreferences {
        /// Language codes, most preferred first.
        codes: Vec<String>,
    },

    /// Hides the plugin pane.
    CloseFocus,
}
