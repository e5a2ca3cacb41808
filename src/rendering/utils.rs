//! Rendering utilities - tile layout and shared materials
//!
//! - [`tile_translation`] maps a tile to its world-space center
//! - [`TileMaterials`] holds the color materials for tiles and pieces
//!
//! Row 0 (tiles 1-8) is drawn at the top of the board, column 0 on the left.

use crate::core::BoardSettings;
use crate::game::components::PieceColor;
use crate::game::types::TileId;
use bevy::color::Mix;
use bevy::prelude::*;

/// Center of `tile` in world space, board centered on the origin
pub fn tile_translation(tile: TileId, tile_size: f32) -> Vec2 {
    Vec2::new(
        (tile.col() as f32 - 3.5) * tile_size,
        (3.5 - tile.row() as f32) * tile_size,
    )
}

/// Material handles shared by every tile and piece
#[derive(Resource, Debug, Clone)]
pub struct TileMaterials {
    pub light: Handle<ColorMaterial>,
    pub dark: Handle<ColorMaterial>,
    /// Light tile with the valid-drop highlight applied
    pub light_highlight: Handle<ColorMaterial>,
    /// Dark tile with the valid-drop highlight applied
    pub dark_highlight: Handle<ColorMaterial>,
    pub white_piece: Handle<ColorMaterial>,
    pub black_piece: Handle<ColorMaterial>,
}

impl TileMaterials {
    /// Base material for a tile in the checkerboard
    pub fn base(&self, tile: TileId) -> Handle<ColorMaterial> {
        if tile.is_light() {
            self.light.clone()
        } else {
            self.dark.clone()
        }
    }

    /// Highlighted material for a tile
    pub fn highlight(&self, tile: TileId) -> Handle<ColorMaterial> {
        if tile.is_light() {
            self.light_highlight.clone()
        } else {
            self.dark_highlight.clone()
        }
    }

    pub fn piece(&self, color: PieceColor) -> Handle<ColorMaterial> {
        match color {
            PieceColor::White => self.white_piece.clone(),
            PieceColor::Black => self.black_piece.clone(),
        }
    }
}

/// Tile color darkened toward black, the original overlay look
pub fn highlight_color(base: Color, strength: f32) -> Color {
    base.mix(&Color::BLACK, strength)
}

/// Disc and glyph colors for a piece side
pub fn piece_colors(color: PieceColor) -> (Color, Color) {
    match color {
        PieceColor::White => (Color::srgb(0.97, 0.96, 0.92), Color::srgb(0.1, 0.1, 0.1)),
        PieceColor::Black => (Color::srgb(0.12, 0.12, 0.14), Color::srgb(0.95, 0.95, 0.95)),
    }
}

impl FromWorld for TileMaterials {
    fn from_world(world: &mut World) -> Self {
        let settings = world
            .get_resource::<BoardSettings>()
            .cloned()
            .unwrap_or_default();
        let (light, dark) = settings.theme.colors();
        let strength = settings.highlight_strength;

        let mut materials = world.resource_mut::<Assets<ColorMaterial>>();
        TileMaterials {
            light: materials.add(ColorMaterial::from(light)),
            dark: materials.add(ColorMaterial::from(dark)),
            light_highlight: materials.add(ColorMaterial::from(highlight_color(light, strength))),
            dark_highlight: materials.add(ColorMaterial::from(highlight_color(dark, strength))),
            white_piece: materials.add(ColorMaterial::from(piece_colors(PieceColor::White).0)),
            black_piece: materials.add(ColorMaterial::from(piece_colors(PieceColor::Black).0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_tiles() {
        assert_eq!(
            tile_translation(TileId::new(1), 10.0),
            Vec2::new(-35.0, 35.0)
        );
        assert_eq!(
            tile_translation(TileId::new(8), 10.0),
            Vec2::new(35.0, 35.0)
        );
        assert_eq!(
            tile_translation(TileId::new(57), 10.0),
            Vec2::new(-35.0, -35.0)
        );
        assert_eq!(
            tile_translation(TileId::new(64), 10.0),
            Vec2::new(35.0, -35.0)
        );
    }

    #[test]
    fn test_neighbours_are_one_tile_apart() {
        let a = tile_translation(TileId::new(9), 96.0);
        let b = tile_translation(TileId::new(10), 96.0);
        let c = tile_translation(TileId::new(17), 96.0);
        assert_eq!(b.x - a.x, 96.0);
        assert_eq!(a.y - c.y, 96.0);
    }
}
