//! Tile-related components

use crate::game::types::TileId;
use bevy::prelude::*;

/// Marks a board tile entity; the pointer target for drags and hover
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct Tile(pub TileId);

/// Marks a rendered piece and the tile it is drawn on
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct PieceOnTile(pub TileId);
