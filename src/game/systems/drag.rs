//! Drag resolution system
//!
//! Consumes [`DragInput`] in delivery order and applies the drop rule. The
//! board resource is only written when a drop is accepted, so change
//! detection on [`BoardState`] fires exactly once per accepted move.

use crate::game::events::{DragInput, DropResolved};
use crate::game::resources::{BoardState, DragController, DropOutcome};
use bevy::prelude::*;

pub fn apply_drag_input(
    mut inputs: MessageReader<DragInput>,
    mut controller: ResMut<DragController>,
    mut board: ResMut<BoardState>,
    mut resolved: MessageWriter<DropResolved>,
) {
    for input in inputs.read() {
        match *input {
            DragInput::Start { tile } => {
                controller.drag_start(tile, &board);
            }
            DragInput::Move { offset } => {
                controller.drag_move(offset);
                trace!("[DRAG] Offset ({:.1}, {:.1})", offset.x, offset.y);
            }
            DragInput::End { active, over } => {
                let (outcome, next) = controller.drag_end(active, over, &board);
                match outcome {
                    DropOutcome::Accepted { from, to, piece } => {
                        info!("[DRAG] {} moved {} -> {}", piece.code(), from, to);
                    }
                    DropOutcome::Rejected(reason) => {
                        debug!("[DRAG] Drop from {} rejected: {:?}", active, reason);
                    }
                }
                if let Some(next) = next {
                    *board = next;
                }
                resolved.write(DropResolved { outcome });
            }
        }
    }
}
