//! Path utilities for the Zellij sandbox environment.

use std::path::PathBuf;

/// File name of the preference store inside the data directory.
pub const PREFERENCES_FILE_NAME: &str = "languages.json";

/// Returns the data directory for langorder storage.
///
/// `/host` points to the cwd of the last focused terminal, or the folder
/// Zellij was started from, which is usually the home directory. The real
/// location is then `~/.local/share/zellij/langorder`.
///
/// # Examples
///
/// ```
/// use langorder::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str().unwrap(), "/host/.local/share/zellij/langorder");
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("langorder")
}

/// Default location of the preference store.
#[must_use]
pub fn preferences_path() -> PathBuf {
    get_data_dir().join(PREFERENCES_FILE_NAME)
}

/// Expands tilde paths to use the `/host` prefix for Zellij sandbox.
///
/// # Examples
///
/// ```
/// use langorder::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/prefs.json"), "/host/prefs.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}
