//! Storage backend abstraction.
//!
//! This module defines the [`PreferenceStore`] trait so the editor session
//! never depends on where preferences actually live.

use crate::domain::error::Result;
use crate::domain::Row;

/// Abstraction over persistent preference backends.
///
/// # Implementations
///
/// - [`JsonPreferenceStore`](crate::storage::JsonPreferenceStore): JSON file with atomic writes (default)
/// - [`MemoryPreferenceStore`](crate::storage::MemoryPreferenceStore): in-memory, for tests and embedding
///
/// # Examples
///
/// ```no_run
/// use langorder::storage::{JsonPreferenceStore, PreferenceStore};
/// use std::path::PathBuf;
///
/// let mut store = JsonPreferenceStore::new(PathBuf::from("/tmp/languages.json"))?;
/// let rows = store.load_ordered()?;
/// let codes: Vec<String> = rows.into_iter().rev().map(|row| row.code).collect();
/// store.save_ordered(&codes)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait PreferenceStore: Send {
    /// Returns the current preferences as `(code, display name)` rows, most
    /// preferred first.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn load_ordered(&self) -> Result<Vec<Row>>;

    /// Persists the final order of language codes.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails. Callers log the failure and do
    /// not retry.
    fn save_ordered(&mut self, codes: &[String]) -> Result<()>;
}
