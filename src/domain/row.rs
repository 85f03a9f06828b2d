//! Row domain model.
//!
//! A [`Row`] is one orderable language preference. Its `code` is the stable
//! identity that gets persisted, and its `name` is only for display.

use serde::{Deserialize, Serialize};

/// One language preference in the ordered list.
///
/// # Examples
///
/// ```
/// use langorder::Row;
///
/// let row = Row::new("de", "Deutsch");
/// assert_eq!(row.code, "de");
/// assert_eq!(row.name, "Deutsch");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Row {
    /// Language code, e.g. `"en"` or `"zh-Hant"`.
    pub code: String,
    /// Human-readable language name.
    pub name: String,
}

impl Row {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}
