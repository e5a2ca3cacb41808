//! Messages crossing the input boundary
//!
//! Drag start, move and end share one message type so a single reader sees
//! them in delivery order.

use crate::game::resources::DropOutcome;
use crate::game::types::TileId;
use bevy::prelude::*;

/// Pointer drag input consumed by the drag controller
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub enum DragInput {
    /// Primary button drag began on `tile`
    Start { tile: TileId },
    /// Pointer moved; `offset` is the world-space distance from the drag origin
    Move { offset: Vec2 },
    /// Drag released. `over` is the tile under the pointer, if any.
    End { active: TileId, over: Option<TileId> },
}

/// Emitted once per drag end with the resolved outcome
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct DropResolved {
    pub outcome: DropOutcome,
}
