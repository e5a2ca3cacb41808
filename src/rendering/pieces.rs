//! Piece visuals
//!
//! Pieces are drawn as colored discs with a letter glyph. They are rebuilt
//! from [`BoardState`] whenever the snapshot is replaced, so the ECS never
//! holds a second copy of piece positions that could drift.
//!
//! While dragging, the piece on the source tile follows the pointer offset.
//! Every other piece eases toward its tile center, which gives a rejected
//! drop its snap-back.

use crate::core::BoardSettings;
use crate::game::components::{Piece, PieceOnTile};
use crate::game::resources::{BoardState, DragController};
use crate::game::system_sets::GameSystems;
use crate::game::types::TileId;
use crate::rendering::utils::{piece_colors, tile_translation, TileMaterials};
use bevy::picking::Pickable;
use bevy::prelude::*;

/// Resting z for pieces, above the tiles
const PIECE_Z: f32 = 1.0;
/// Z for the piece being dragged, above every resting piece
const DRAGGED_Z: f32 = 2.0;
/// Distance under which an easing piece snaps to its tile
const SNAP_EPSILON: f32 = 0.5;

/// Shared piece disc mesh
#[derive(Resource, Debug, Clone)]
pub struct PieceMeshes {
    pub disc: Handle<Mesh>,
}

impl FromWorld for PieceMeshes {
    fn from_world(world: &mut World) -> Self {
        let tile_size = world
            .get_resource::<BoardSettings>()
            .map_or(BoardSettings::default().tile_size, |s| s.tile_size);
        let mut meshes = world.resource_mut::<Assets<Mesh>>();
        PieceMeshes {
            disc: meshes.add(Circle::new(tile_size * 0.38)),
        }
    }
}

fn piece_name(piece: Piece, tile: TileId) -> String {
    format!("{:?} {:?} {}", piece.color, piece.kind, tile.to_algebraic())
}

fn spawn_piece(
    commands: &mut Commands,
    meshes: &PieceMeshes,
    materials: &TileMaterials,
    tile_size: f32,
    tile: TileId,
    piece: Piece,
) {
    let (_, glyph_color) = piece_colors(piece.color);
    commands
        .spawn((
            Mesh2d(meshes.disc.clone()),
            MeshMaterial2d(materials.piece(piece.color)),
            Transform::from_translation(tile_translation(tile, tile_size).extend(PIECE_Z)),
            Pickable::IGNORE,
            Name::new(piece_name(piece, tile)),
            piece,
            PieceOnTile(tile),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text2d::new(piece.glyph()),
                TextFont {
                    font_size: tile_size * 0.4,
                    ..default()
                },
                TextColor(glyph_color),
                Transform::from_xyz(0.0, 0.0, 0.1),
                Pickable::IGNORE,
            ));
        });
}

/// Rebuild piece entities when the board snapshot changes
///
/// Runs on the first frame too, since a freshly inserted resource counts as
/// changed.
pub fn sync_piece_entities(
    mut commands: Commands,
    board: Res<BoardState>,
    settings: Res<BoardSettings>,
    meshes: Res<PieceMeshes>,
    materials: Res<TileMaterials>,
    existing: Query<Entity, With<PieceOnTile>>,
) {
    if !board.is_changed() {
        return;
    }

    for entity in existing.iter() {
        commands.entity(entity).despawn();
    }
    for (tile, piece) in board.occupied_tiles() {
        spawn_piece(&mut commands, &meshes, &materials, settings.tile_size, tile, piece);
    }

    debug!("[PIECES] Rebuilt {} piece entities", board.piece_count());
}

/// Dragged piece follows the pointer, the rest ease home
pub fn animate_pieces(
    time: Res<Time>,
    controller: Res<DragController>,
    settings: Res<BoardSettings>,
    mut pieces: Query<(&PieceOnTile, &mut Transform)>,
) {
    let session = controller.session();
    let blend = (settings.snap_speed * time.delta_secs()).min(1.0);

    for (on_tile, mut transform) in pieces.iter_mut() {
        let home = tile_translation(on_tile.0, settings.tile_size);

        if let Some(session) = session.filter(|s| s.source == on_tile.0) {
            transform.translation = (home + session.offset).extend(DRAGGED_Z);
            continue;
        }

        let current = transform.translation.truncate();
        let next = if current.distance(home) < SNAP_EPSILON {
            home
        } else {
            current.lerp(home, blend)
        };
        transform.translation = next.extend(PIECE_Z);
    }
}

pub struct PiecePlugin;

impl Plugin for PiecePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PieceMeshes>()
            .add_systems(Update, sync_piece_entities.in_set(GameSystems::Sync))
            .add_systems(Update, animate_pieces.in_set(GameSystems::Visual));
    }
}
