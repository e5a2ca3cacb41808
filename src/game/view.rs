//! Render boundary
//!
//! Flattens the board snapshot and the drag state into one entry per tile.
//! Rendering consumes these views each frame and never writes back.

use crate::game::resources::{BoardState, DragController, Occupancy};
use crate::game::types::TileId;

/// What the renderer needs to draw one tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileView {
    pub tile: TileId,
    pub occupancy: Occupancy,
    pub valid_drop_highlight: bool,
}

/// Views for all 64 tiles in row-major order
pub fn tile_views(
    board: &BoardState,
    controller: &DragController,
    hovered: Option<TileId>,
) -> Vec<TileView> {
    TileId::all()
        .map(|tile| TileView {
            tile,
            occupancy: board.get(tile),
            valid_drop_highlight: controller.is_valid_drop_target(tile, hovered, board),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_views_cover_board() {
        let board = BoardState::starting();
        let views = tile_views(&board, &DragController::default(), None);
        assert_eq!(views.len(), 64);
        assert_eq!(views.iter().filter(|v| !v.occupancy.is_empty()).count(), 32);
        assert!(views.iter().all(|v| !v.valid_drop_highlight));
    }

    #[test]
    fn test_only_hovered_empty_tile_highlights_during_drag() {
        let board = BoardState::starting();
        let mut controller = DragController::default();
        controller.drag_start(TileId::new(12), &board);

        let views = tile_views(&board, &controller, Some(TileId::new(20)));
        let lit: Vec<_> = views
            .iter()
            .filter(|v| v.valid_drop_highlight)
            .map(|v| v.tile)
            .collect();
        assert_eq!(lit, vec![TileId::new(20)]);

        let views = tile_views(&board, &controller, Some(TileId::new(57)));
        assert!(views.iter().all(|v| !v.valid_drop_highlight));
    }
}
