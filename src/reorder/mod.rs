//! Selection-preserving reorder engine.
//!
//! Moves one or more selected, possibly non-contiguous blocks of rows up or
//! down by one position while keeping the same logical rows selected. The
//! engine is generic over the row type and holds no state: callers pass the
//! sequence and its [`Selection`](crate::domain::Selection) in, and both are
//! updated together.
//!
//! Boundary requests (empty selection, or a block already touching the edge
//! it is moved toward) are silent no-ops reported as
//! [`MoveOutcome::Unchanged`]. A selection reaching past the end of the
//! sequence is a caller bug and panics.

mod engine;

pub use engine::{
    move_selection, move_selection_down, move_selection_up, moved, Direction, MoveOutcome,
};
