//! Storage record models for the persistence layer.

use serde::{Deserialize, Serialize};

/// Current on-disk format version.
pub const FORMAT_VERSION: u32 = 1;

/// The persisted preference list.
///
/// Only codes are stored. Display names come from the language catalogue
/// at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferencesRecord {
    /// Version of the storage format for future migrations.
    pub version: u32,

    /// Language codes, most preferred first.
    #[serde(default)]
    pub languages: Vec<String>,

    /// Unix timestamp of the last save, `None` if never saved.
    #[serde(default)]
    pub saved_at: Option<i64>,
}

impl PreferencesRecord {
    /// Creates a record for `languages` stamped with the current time.
    ///
    /// # Examples
    ///
    /// ```
    /// use langorder::storage::PreferencesRecord;
    ///
    /// let record = PreferencesRecord::new(vec!["en".to_string()]);
    /// assert_eq!(record.version, 1);
    /// assert!(record.saved_at.is_some());
    /// ```
    #[must_use]
    pub fn new(languages: Vec<String>) -> Self {
        Self {
            version: FORMAT_VERSION,
            languages,
            saved_at: Some(chrono::Utc::now().timestamp()),
        }
    }
}

impl Default for PreferencesRecord {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            languages: Vec::new(),
            saved_at: None,
        }
    }
}
