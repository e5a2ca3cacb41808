//! Game components

pub mod piece;
pub mod tile;

pub use piece::*;
pub use tile::*;
