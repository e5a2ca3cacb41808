//! Piece-related components

use bevy::prelude::*;

/// Side a piece belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Reflect, Default)]
pub enum PieceColor {
    #[default]
    White,
    Black,
}

impl PieceColor {
    /// Single letter prefix used in piece codes
    pub fn prefix(self) -> char {
        match self {
            PieceColor::White => 'w',
            PieceColor::Black => 'b',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Reflect, Default)]
pub enum PieceKind {
    #[default]
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// Uppercase letter used for the piece code and the rendered glyph
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Rook => 'R',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

/// A chess piece. Pieces have no identity beyond color and kind.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash, Reflect)]
#[reflect(Component)]
pub struct Piece {
    pub color: PieceColor,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: PieceColor, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    pub const fn white(kind: PieceKind) -> Self {
        Self::new(PieceColor::White, kind)
    }

    pub const fn black(kind: PieceKind) -> Self {
        Self::new(PieceColor::Black, kind)
    }

    /// Two letter code such as `wP` or `bK`
    pub fn code(self) -> String {
        format!("{}{}", self.color.prefix(), self.kind.letter())
    }

    /// Glyph drawn on top of the piece disc
    pub fn glyph(self) -> String {
        self.kind.letter().to_string()
    }
}
