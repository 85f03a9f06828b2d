//! Storage layer for the ordered language preferences.
//!
//! The editor only needs two things from storage: the current ordered list
//! when a session opens, and a single save of the final order when it
//! closes. [`PreferenceStore`] captures exactly that.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction for backend implementations
//! - `json`: JSON file-based storage implementation
//! - `memory`: In-memory backend that records saves
//! - `models`: Serialized record types separate from domain models

pub mod backend;
pub mod json;
pub mod memory;
pub mod models;

pub use backend::PreferenceStore;
pub use json::JsonPreferenceStore;
pub use memory::MemoryPreferenceStore;
pub use models::PreferencesRecord;
