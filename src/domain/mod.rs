//! Domain layer for langorder.
//!
//! Core types with no dependency on Zellij or storage concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`row`]: The orderable language preference
//! - [`selection`]: Selection ranges over the ordered rows
//!
//! # Examples
//!
//! ```
//! use langorder::domain::{Row, Selection};
//!
//! let rows = vec![Row::new("en", "English"), Row::new("fr", "Français")];
//! let selection = Selection::from_rows([1]);
//! assert!(selection.check_bounds(rows.len()).is_ok());
//! ```

pub mod error;
pub mod row;
pub mod selection;

pub use error::{LangorderError, Result};
pub use row::Row;
pub use selection::{Selection, SelectionRange};
