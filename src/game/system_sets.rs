//! System organization using SystemSets
//!
//! Systems run in this order each frame:
//! 1. **Input** - Resolve drag messages written by pointer observers
//! 2. **Sync** - Rebuild piece visuals when the board snapshot changed
//! 3. **Visual** - Highlights, drag follow and snap-back animation

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SystemSet)]
pub enum GameSystems {
    /// Drag lifecycle and board replacement
    Input,

    /// Piece entities follow the committed board
    Sync,

    /// Per-frame presentation, never writes the board
    Visual,
}
