//! Pointer hover tracking
//!
//! Tiles carry `.observe()` callbacks for `Pointer<Over>` and `Pointer<Out>`.
//! They maintain [`HoveredTile`], the "is the pointer over this tile" input
//! to the valid-drop highlight and the drop target reported on drag end.
//!
//! Pieces are spawned with `Pickable::IGNORE`, so the tile under a dragged
//! piece still receives hover events.

use crate::game::components::Tile;
use crate::game::types::TileId;
use bevy::picking::events::{Out, Over, Pointer};
use bevy::prelude::*;

/// Tile currently under the pointer, `None` when off the board
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Resource)]
pub struct HoveredTile(pub Option<TileId>);

impl HoveredTile {
    pub fn enter(&mut self, tile: TileId) {
        self.0 = Some(tile);
    }

    /// Clear only if `tile` is still the hovered one; `Out` for the previous
    /// tile may arrive after `Over` for the next.
    pub fn leave(&mut self, tile: TileId) {
        if self.0 == Some(tile) {
            self.0 = None;
        }
    }
}

pub fn on_tile_hover(
    hover: On<Pointer<Over>>,
    tiles: Query<&Tile>,
    mut hovered: ResMut<HoveredTile>,
) {
    if let Ok(tile) = tiles.get(hover.entity) {
        hovered.enter(tile.0);
        trace!("[POINTER] Over tile {}", tile.0);
    }
}

pub fn on_tile_unhover(
    unhover: On<Pointer<Out>>,
    tiles: Query<&Tile>,
    mut hovered: ResMut<HoveredTile>,
) {
    if let Ok(tile) = tiles.get(unhover.entity) {
        hovered.leave(tile.0);
        trace!("[POINTER] Left tile {}", tile.0);
    }
}

/// Plugin that registers pointer tracking resources
pub struct PointerEventsPlugin;

impl Plugin for PointerEventsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HoveredTile>();
        app.register_type::<HoveredTile>();
    }
}
