//! Pointer drag observers
//!
//! Attached to every tile entity with `.observe()`. Each observer translates
//! one Bevy picking event into a [`DragInput`] message; the decision logic
//! stays in [`crate::game::resources::DragController`].

use crate::game::components::Tile;
use crate::game::events::DragInput;
use crate::input::pointer::HoveredTile;
use bevy::picking::events::{Drag, DragEnd, DragStart, Pointer};
use bevy::picking::pointer::PointerButton;
use bevy::prelude::*;

/// Helper to check if primary button (left click) was used
fn is_primary(button: PointerButton) -> bool {
    matches!(button, PointerButton::Primary)
}

/// Screen-space drag distance to world space (y axis flips)
pub fn screen_to_world_offset(distance: Vec2) -> Vec2 {
    Vec2::new(distance.x, -distance.y)
}

pub fn on_tile_drag_start(
    drag: On<Pointer<DragStart>>,
    tiles: Query<&Tile>,
    mut inputs: MessageWriter<DragInput>,
) {
    if !is_primary(drag.event.button) {
        return;
    }
    let Ok(tile) = tiles.get(drag.entity) else {
        warn!(
            "[INPUT] Drag start on entity {:?} without Tile",
            drag.entity
        );
        return;
    };
    inputs.write(DragInput::Start { tile: tile.0 });
}

pub fn on_tile_drag(drag: On<Pointer<Drag>>, mut inputs: MessageWriter<DragInput>) {
    if !is_primary(drag.event.button) {
        return;
    }
    inputs.write(DragInput::Move {
        offset: screen_to_world_offset(drag.event.distance),
    });
}

pub fn on_tile_drag_end(
    drag: On<Pointer<DragEnd>>,
    tiles: Query<&Tile>,
    hovered: Res<HoveredTile>,
    mut inputs: MessageWriter<DragInput>,
) {
    if !is_primary(drag.event.button) {
        return;
    }
    let Ok(tile) = tiles.get(drag.entity) else {
        return;
    };
    inputs.write(DragInput::End {
        active: tile.0,
        over: hovered.0,
    });
}
