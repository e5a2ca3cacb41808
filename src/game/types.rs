//! Tile addressing for the 8x8 board
//!
//! Tiles are numbered 1..=64 in row-major order: row 0 holds tiles 1-8,
//! row 7 holds tiles 57-64. The newtype keeps raw integers out of the board
//! API so an out-of-range identifier can only come from a caller defect.

use super::error::{TileError, TileResult};
use bevy::prelude::*;
use std::fmt;

/// Number of tiles along one side of the board
pub const BOARD_SIDE: u8 = 8;

/// Total number of tiles on the board
pub const TILE_COUNT: usize = 64;

/// Identifier of one board tile, always in 1..=64
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Reflect)]
pub struct TileId(u8);

impl TileId {
    /// Create a tile identifier
    ///
    /// # Panics
    ///
    /// Panics when `id` is outside 1..=64. Use [`TileId::try_from`] for
    /// untrusted input.
    pub fn new(id: u8) -> Self {
        match Self::try_from(id) {
            Ok(tile) => tile,
            Err(e) => panic!("{e}"),
        }
    }

    /// Create a tile from a zero-based row and column
    pub fn from_row_col(row: u8, col: u8) -> TileResult<Self> {
        if row >= BOARD_SIDE || col >= BOARD_SIDE {
            return Err(TileError::CoordinateOutOfRange { row, col });
        }
        Ok(TileId(row * BOARD_SIDE + col + 1))
    }

    /// Raw identifier (1..=64)
    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based index into a 64 element array
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Zero-based row (0 holds tiles 1-8)
    pub fn row(self) -> u8 {
        (self.0 - 1) / BOARD_SIDE
    }

    /// Zero-based column
    pub fn col(self) -> u8 {
        (self.0 - 1) % BOARD_SIDE
    }

    /// Algebraic name, tile 1 is `a1` and tile 64 is `h8`
    pub fn to_algebraic(self) -> String {
        format!("{}{}", (b'a' + self.col()) as char, self.row() + 1)
    }

    /// Whether this tile uses the light color in the checkerboard
    pub fn is_light(self) -> bool {
        (self.row() + self.col()) % 2 == 0
    }

    /// All tiles in row-major order
    pub fn all() -> impl Iterator<Item = TileId> {
        (1..=TILE_COUNT as u8).map(TileId)
    }
}

impl TryFrom<u8> for TileId {
    type Error = TileError;

    fn try_from(value: u8) -> TileResult<Self> {
        if (1..=TILE_COUNT as u8).contains(&value) {
            Ok(TileId(value))
        } else {
            Err(TileError::OutOfRange(value))
        }
    }
}

impl From<TileId> for u8 {
    fn from(tile: TileId) -> Self {
        tile.0
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.to_algebraic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_layout() {
        assert_eq!(TileId::new(1).row(), 0);
        assert_eq!(TileId::new(1).col(), 0);
        assert_eq!(TileId::new(8).col(), 7);
        assert_eq!(TileId::new(9).row(), 1);
        assert_eq!(TileId::new(64).row(), 7);
        assert_eq!(TileId::new(64).col(), 7);
    }

    #[test]
    fn test_try_from_rejects_out_of_range() {
        assert_eq!(TileId::try_from(0), Err(TileError::OutOfRange(0)));
        assert_eq!(TileId::try_from(65), Err(TileError::OutOfRange(65)));
        assert!(TileId::try_from(64).is_ok());
    }

    #[test]
    #[should_panic(expected = "outside the board")]
    fn test_new_panics_on_zero() {
        let _ = TileId::new(0);
    }

    #[test]
    fn test_from_row_col_matches_numbering() {
        for tile in TileId::all() {
            assert_eq!(TileId::from_row_col(tile.row(), tile.col()), Ok(tile));
        }
        assert!(TileId::from_row_col(8, 0).is_err());
    }

    #[test]
    fn test_algebraic_names() {
        assert_eq!(TileId::new(1).to_algebraic(), "a1");
        assert_eq!(TileId::new(13).to_algebraic(), "e2");
        assert_eq!(TileId::new(64).to_algebraic(), "h8");
    }

    #[test]
    fn test_all_yields_every_tile_once() {
        let tiles: Vec<_> = TileId::all().collect();
        assert_eq!(tiles.len(), TILE_COUNT);
        assert_eq!(tiles.first().map(|t| t.get()), Some(1));
        assert_eq!(tiles.last().map(|t| t.get()), Some(64));
    }

    #[test]
    fn test_checkerboard_alternates() {
        assert!(TileId::new(1).is_light());
        assert!(!TileId::new(2).is_light());
        assert!(!TileId::new(9).is_light());
        assert!(TileId::new(10).is_light());
    }
}
