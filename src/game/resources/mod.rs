//! Game resources - board snapshot and drag lifecycle
//!
//! - [`BoardState`] - the Board State Store, one authoritative snapshot
//! - [`DragController`] - the drag state machine and drop rule
//!
//! The controller is the only writer of [`BoardState`]; render systems read
//! it and react to change detection.

pub mod board_state;
pub mod drag;

pub use board_state::*;
pub use drag::*;
