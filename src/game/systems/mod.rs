//! Game systems
//!
//! - [`input`] - picking observers on tiles that emit
//!   [`crate::game::events::DragInput`]
//! - [`drag`] - resolves drag input against the board
//!
//! Visual systems that read the board live in [`crate::rendering`].

pub mod drag;
pub mod input;

pub use drag::*;
pub use input::*;
