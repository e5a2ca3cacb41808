//! Board State Store
//!
//! Holds which piece occupies each of the 64 tiles. The store is replaced
//! wholesale on every accepted drop: [`BoardState::relocate`] returns a new
//! snapshot and never mutates the receiver, so every render pass reads one
//! consistent board.

use crate::game::components::{Piece, PieceColor, PieceKind};
use crate::game::types::{TileId, BOARD_SIDE, TILE_COUNT};
use bevy::prelude::*;

/// Contents of a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
pub enum Occupancy {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Occupancy {
    pub fn is_empty(self) -> bool {
        matches!(self, Occupancy::Empty)
    }

    pub fn piece(self) -> Option<Piece> {
        match self {
            Occupancy::Empty => None,
            Occupancy::Occupied(piece) => Some(piece),
        }
    }
}

impl From<Option<Piece>> for Occupancy {
    fn from(piece: Option<Piece>) -> Self {
        piece.map_or(Occupancy::Empty, Occupancy::Occupied)
    }
}

/// Standard back rank, column 0 to 7
const BACK_RANK: [PieceKind; BOARD_SIDE as usize] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Mapping from tile to occupant, indexed by `tile - 1`
#[derive(Resource, Debug, Clone, PartialEq, Eq, Reflect)]
#[reflect(Resource)]
pub struct BoardState {
    tiles: [Occupancy; TILE_COUNT],
}

impl Default for BoardState {
    fn default() -> Self {
        Self::starting()
    }
}

impl BoardState {
    /// Board with no pieces
    pub fn empty() -> Self {
        Self {
            tiles: [Occupancy::Empty; TILE_COUNT],
        }
    }

    /// Standard starting layout: white on rows 0-1 (tiles 1-16), black on
    /// rows 6-7 (tiles 49-64)
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for tile in TileId::all() {
            let back = BACK_RANK[tile.col() as usize];
            let piece = match tile.row() {
                0 => Some(Piece::new(PieceColor::White, back)),
                1 => Some(Piece::white(PieceKind::Pawn)),
                row if row == BOARD_SIDE - 2 => Some(Piece::black(PieceKind::Pawn)),
                row if row == BOARD_SIDE - 1 => Some(Piece::new(PieceColor::Black, back)),
                _ => None,
            };
            board.tiles[tile.index()] = Occupancy::from(piece);
        }
        board
    }

    /// Builder used to set up fixtures
    pub fn with_piece(mut self, tile: TileId, piece: Piece) -> Self {
        self.place(tile, piece);
        self
    }

    fn place(&mut self, tile: TileId, piece: Piece) {
        self.tiles[tile.index()] = Occupancy::Occupied(piece);
    }

    /// Occupant of `tile`, [`Occupancy::Empty`] when nothing is recorded
    pub fn get(&self, tile: TileId) -> Occupancy {
        self.tiles[tile.index()]
    }

    pub fn is_empty_at(&self, tile: TileId) -> bool {
        self.get(tile).is_empty()
    }

    /// Move the occupant of `from` to `to`, leaving `from` empty
    ///
    /// Legality is not checked here. `from == to` yields an identical board.
    pub fn relocate(&self, from: TileId, to: TileId) -> BoardState {
        let mut next = self.clone();
        if from == to {
            return next;
        }
        next.tiles[to.index()] = self.get(from);
        next.tiles[from.index()] = Occupancy::Empty;
        debug!("[BOARD] Relocated {} -> {}", from, to);
        next
    }

    /// Number of occupied tiles
    pub fn piece_count(&self) -> usize {
        self.tiles.iter().filter(|o| !o.is_empty()).count()
    }

    /// Occupied tiles with their pieces, in row-major order
    pub fn occupied_tiles(&self) -> impl Iterator<Item = (TileId, Piece)> + '_ {
        TileId::all().filter_map(|tile| self.get(tile).piece().map(|piece| (tile, piece)))
    }
}
