//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (main.rs) and the reorder engine and
//! storage. Data flows one way:
//!
//! ```text
//! Key / Store result → Event → handle_event → EditorState → Actions → Side effects
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`state`]: The editing session and view model computation

pub mod actions;
pub mod handler;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use state::EditorState;
