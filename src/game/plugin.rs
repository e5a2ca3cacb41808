//! Game plugin - board state and drag interaction
//!
//! Registers the Board State Store, the drag controller, the input boundary
//! messages and the resolution system. Nothing here needs a window or a
//! renderer, so the plugin runs under `MinimalPlugins` in tests.
//!
//! # Plugin Dependencies
//!
//! Add after [`crate::core::CorePlugin`] and before the rendering plugins,
//! which order their systems against [`GameSystems`].

use super::components::{Piece, PieceColor, PieceKind, PieceOnTile, Tile};
use super::events::{DragInput, DropResolved};
use super::resources::*;
use super::system_sets::GameSystems;
use super::systems::apply_drag_input;
use super::types::TileId;
use bevy::prelude::*;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BoardState>()
            .init_resource::<DragController>();

        app.add_message::<DragInput>()
            .add_message::<DropResolved>();

        app.register_type::<BoardState>()
            .register_type::<DragController>()
            .register_type::<Occupancy>()
            .register_type::<Piece>()
            .register_type::<PieceColor>()
            .register_type::<PieceKind>()
            .register_type::<Tile>()
            .register_type::<PieceOnTile>()
            .register_type::<TileId>();

        app.configure_sets(
            Update,
            (GameSystems::Input, GameSystems::Sync, GameSystems::Visual).chain(),
        );

        app.add_systems(Update, apply_drag_input.in_set(GameSystems::Input));

        app.add_systems(Startup, log_initial_board);
    }
}

fn log_initial_board(board: Res<BoardState>) {
    info!("[BOARD] Board ready with {} pieces", board.piece_count());
}
