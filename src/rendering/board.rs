//! Board creation and valid-drop highlighting
//!
//! Spawns the 64 tile quads in one batch and attaches the pointer observers
//! to each. The highlight system recomputes the render view every frame and
//! swaps tile materials; it never touches [`BoardState`].

use crate::core::BoardSettings;
use crate::game::components::Tile;
use crate::game::resources::{BoardState, DragController};
use crate::game::system_sets::GameSystems;
use crate::game::systems::input::{on_tile_drag, on_tile_drag_end, on_tile_drag_start};
use crate::game::types::TileId;
use crate::game::view::tile_views;
use crate::input::pointer::{on_tile_hover, on_tile_unhover, HoveredTile};
use crate::rendering::utils::{tile_translation, TileMaterials};
use bevy::prelude::*;

pub(crate) fn create_board(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    materials: Res<TileMaterials>,
    settings: Res<BoardSettings>,
) {
    let tile_size = settings.tile_size;
    let mesh = meshes.add(Rectangle::new(tile_size, tile_size));

    let tiles: Vec<_> = TileId::all()
        .map(|tile| {
            (
                Mesh2d(mesh.clone()),
                MeshMaterial2d(materials.base(tile)),
                Transform::from_translation(tile_translation(tile, tile_size).extend(0.0)),
                Tile(tile),
                Name::new(format!("Tile {}", tile.to_algebraic())),
            )
        })
        .collect();

    for tile_bundle in tiles {
        commands
            .spawn(tile_bundle)
            .observe(on_tile_drag_start)
            .observe(on_tile_drag)
            .observe(on_tile_drag_end)
            .observe(on_tile_hover)
            .observe(on_tile_unhover);
    }

    info!("[BOARD] Spawned 64 tiles at {} px", tile_size);
}

/// Apply the valid-drop highlight from the render view
pub fn update_tile_highlights(
    board: Res<BoardState>,
    controller: Res<DragController>,
    hovered: Res<HoveredTile>,
    materials: Res<TileMaterials>,
    mut tiles: Query<(&Tile, &mut MeshMaterial2d<ColorMaterial>)>,
) {
    let views = tile_views(&board, &controller, hovered.0);
    for (tile, mut material) in tiles.iter_mut() {
        let view = &views[tile.0.index()];
        let wanted = if view.valid_drop_highlight {
            materials.highlight(tile.0)
        } else {
            materials.base(tile.0)
        };
        if material.0 != wanted {
            material.0 = wanted;
        }
    }
}

pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TileMaterials>()
            .add_systems(Startup, create_board)
            .add_systems(Update, update_tile_highlights.in_set(GameSystems::Visual));
    }
}
