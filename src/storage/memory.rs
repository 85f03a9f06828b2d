//! In-memory storage backend.

use crate::domain::error::Result;
use crate::domain::Row;
use crate::storage::backend::PreferenceStore;

/// Keeps preferences in memory and records every save call.
///
/// # Examples
///
/// ```
/// use langorder::storage::{MemoryPreferenceStore, PreferenceStore};
/// use langorder::Row;
///
/// let mut store = MemoryPreferenceStore::new(vec![Row::new("en", "English")]);
/// store.save_ordered(&["en".to_string()])?;
/// assert_eq!(store.saves().len(), 1);
/// # Ok::<(), langorder::LangorderError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    rows: Vec<Row>,
    saves: Vec<Vec<String>>,
}

impl MemoryPreferenceStore {
    #[must_use]
    pub const fn new(rows: Vec<Row>) -> Self {
        Self {
            rows,
            saves: Vec::new(),
        }
    }

    /// Every order passed to `save_ordered`, oldest first.
    #[must_use]
    pub fn saves(&self) -> &[Vec<String>] {
        &self.saves
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load_ordered(&self) -> Result<Vec<Row>> {
        Ok(self.rows.clone())
    }

    fn save_ordered(&mut self, codes: &[String]) -> Result<()> {
        // Keep names for codes we already know so a later load round-trips.
        let rows = codes
            .iter()
            .map(|code| {
                self.rows
                    .iter()
                    .find(|row| &row.code == code)
                    .cloned()
                    .unwrap_or_else(|| Row::new(code.clone(), code.clone()))
            })
            .collect();
        self.rows = rows;
        self.saves.push(codes.to_vec());
        Ok(())
    }
}
