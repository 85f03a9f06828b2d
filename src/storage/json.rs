//! JSON file-based storage backend.
//!
//! Preferences are kept in a small human-readable JSON file. Saves use an
//! atomic write (write-to-temp + rename) so a crash never leaves a truncated
//! file behind.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "languages": ["de", "en", "fr"],
//!   "saved_at": 1718000000
//! }
//! ```

use crate::domain::error::{LangorderError, Result};
use crate::domain::Row;
use crate::languages;
use crate::storage::backend::PreferenceStore;
use crate::storage::models::PreferencesRecord;
use std::path::{Path, PathBuf};

/// JSON file preference store.
///
/// The record is read once on creation and kept in memory. Each save
/// rewrites the whole file.
#[derive(Debug)]
pub struct JsonPreferenceStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory copy of the last loaded or saved record.
    record: PreferencesRecord,
}

impl JsonPreferenceStore {
    /// Opens a JSON preference store, creating parent directories as needed.
    ///
    /// A missing file is not an error: the store starts empty and
    /// [`load_ordered`](PreferenceStore::load_ordered) yields the default
    /// catalogue order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - File exists but contains invalid JSON
    /// - File permissions prevent reading
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "opening JSON preference store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let record = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("no saved preferences, starting from defaults");
            PreferencesRecord::default()
        };

        Ok(Self { file_path, record })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<PreferencesRecord> {
        let contents = std::fs::read_to_string(path)?;
        let record: PreferencesRecord = serde_json::from_str(&contents)
            .map_err(|e| LangorderError::Storage(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(
            version = record.version,
            languages = record.languages.len(),
            "loaded preferences"
        );

        Ok(record)
    }

    /// `<file>.tmp` next to the store file, keeping the full file name.
    fn tmp_path(&self) -> Result<PathBuf> {
        let mut name = self
            .file_path
            .file_name()
            .ok_or_else(|| {
                LangorderError::Storage(format!(
                    "preference path has no file name: {}",
                    self.file_path.display()
                ))
            })?
            .to_os_string();
        name.push(".tmp");
        Ok(self.file_path.with_file_name(name))
    }

    fn save_to_file(&self, record: &PreferencesRecord) -> Result<()> {
        let json = serde_json::to_string_pretty(record)
            .map_err(|e| LangorderError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.tmp_path()?;

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;

        tracing::trace!("renaming temporary file to final location");
        std::fs::rename(&tmp_path, &self.file_path)?;

        Ok(())
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn load_ordered(&self) -> Result<Vec<Row>> {
        let _span = tracing::debug_span!("json_load_ordered").entered();

        let rows = languages::resolve(&self.record.languages);

        tracing::debug!(count = rows.len(), "resolved preference rows");
        Ok(rows)
    }

    fn save_ordered(&mut self, codes: &[String]) -> Result<()> {
        let _span = tracing::debug_span!("json_save_ordered", count = codes.len()).entered();

        let record = PreferencesRecord::new(codes.to_vec());
        self.save_to_file(&record)?;
        self.record = record;

        tracing::debug!(path = ?self.file_path, "preferences saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_default_catalogue() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonPreferenceStore::new(dir.path().join("nested/languages.json")).unwrap();

        assert_eq!(store.load_ordered().unwrap(), languages::default_rows());
        assert!(dir.path().join("nested").is_dir());
    }

    #[test]
    fn save_writes_codes_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("languages.json");
        let mut store = JsonPreferenceStore::new(path.clone()).unwrap();

        store
            .save_ordered(&["ru".to_string(), "en".to_string()])
            .unwrap();

        let saved: PreferencesRecord =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved.languages, vec!["ru", "en"]);
        assert!(saved.saved_at.is_some());
        assert!(!dir.path().join("languages.json.tmp").exists());

        let rows = store.load_ordered().unwrap();
        assert_eq!(rows[0], Row::new("ru", "Русский"));
        assert_eq!(rows[1].code, "en");
    }

    #[test]
    fn store_named_tmp_still_writes_through_a_separate_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.tmp");
        let mut store = JsonPreferenceStore::new(path.clone()).unwrap();

        assert_eq!(store.tmp_path().unwrap(), dir.path().join("prefs.tmp.tmp"));
        store.save_ordered(&["sv".to_string()]).unwrap();

        assert!(!dir.path().join("prefs.tmp.tmp").exists());
        let reopened = JsonPreferenceStore::new(path).unwrap();
        assert_eq!(reopened.load_ordered().unwrap()[0].code, "sv");
    }

    #[test]
    fn reopening_reads_saved_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("languages.json");
        JsonPreferenceStore::new(path.clone())
            .unwrap()
            .save_ordered(&["fi".to_string()])
            .unwrap();

        let reopened = JsonPreferenceStore::new(path).unwrap();
        assert_eq!(reopened.load_ordered().unwrap()[0].code, "fi");
    }

    #[test]
    fn corrupt_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("languages.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = JsonPreferenceStore::new(path);
        assert!(matches!(result, Err(LangorderError::Storage(_))));
    }
}
