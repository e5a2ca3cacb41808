//! Input module - picking observers
//!
//! - `pointer` - hover tracking for board tiles
//!
//! Drag observers live with the game systems in
//! [`crate::game::systems::input`]; both sets are attached to tile entities
//! when the board is spawned.

pub mod pointer;

pub use pointer::*;
