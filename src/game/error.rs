//! Error types for game module
//!
//! Tile addressing is the only fallible input in the board model. Rejected
//! drops are not errors; see [`crate::game::resources::DropOutcome`].

/// Errors that can occur when addressing the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TileError {
    /// Tile identifier outside 1..=64
    #[error("Tile identifier {0} is outside the board (expected 1..=64)")]
    OutOfRange(u8),

    /// Row or column outside 0..8
    #[error("Board coordinate ({row}, {col}) is outside the board")]
    CoordinateOutOfRange { row: u8, col: u8 },
}

/// Result type alias for board addressing
pub type TileResult<T> = Result<T, TileError>;
