//! Rendering module - 2D board visualization
//!
//! - `board` - tile quads, pointer observers, valid-drop highlight
//! - `pieces` - piece discs rebuilt from the board snapshot, drag follow
//! - `utils` - tile layout and shared materials
//!
//! Both plugins read [`crate::game::resources::BoardState`] and
//! [`crate::game::resources::DragController`] and never write them.

pub mod board;
pub mod pieces;
pub mod utils;

pub use board::*;
pub use pieces::*;
pub use utils::*;
