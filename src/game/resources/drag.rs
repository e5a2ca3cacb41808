//! Drag Interaction Controller
//!
//! Owns the pointer-drag lifecycle and decides whether a drop relocates a
//! piece. The machine is either [`DragPhase::Idle`] or
//! [`DragPhase::Dragging`]; resolving a drop is a synchronous transition back
//! to `Idle`.
//!
//! ```text
//! Idle --drag_start(occupied)--> Dragging(source)
//! Idle --drag_start(empty)-----> Idle
//! Dragging --drag_end(..)------> Idle   (board replaced only on Accepted)
//! ```
//!
//! Every rejection is silent: the caller receives a [`DropOutcome::Rejected`]
//! for logging, but nothing is surfaced to the player.

use super::board_state::BoardState;
use crate::game::components::Piece;
use crate::game::types::TileId;
use bevy::prelude::*;

/// Ephemeral record of the drag in progress
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct DragSession {
    /// Tile the dragged piece was lifted from
    pub source: TileId,
    /// Pointer offset from the drag origin in world units, visual only
    pub offset: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Reflect)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Why a drop left the board unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum RejectReason {
    /// Drag end arrived while no drag was active
    NoActiveDrag,
    /// Released outside every tile
    NoTarget,
    /// Released over the tile it started on
    SameTile,
    /// Target tile already holds a piece
    TargetOccupied,
    /// Source piece vanished between drag start and drag end
    SourceVacated,
    /// Drag end reported a different source than the active session
    SourceMismatch,
}

/// Result of resolving a drag end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum DropOutcome {
    Accepted { from: TileId, to: TileId, piece: Piece },
    Rejected(RejectReason),
}

/// Resource driving the drag state machine
#[derive(Resource, Debug, Default, Reflect)]
#[reflect(Resource)]
pub struct DragController {
    phase: DragPhase,
}

impl DragController {
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging(_))
    }

    /// Active session, if any
    pub fn session(&self) -> Option<DragSession> {
        match self.phase {
            DragPhase::Idle => None,
            DragPhase::Dragging(session) => Some(session),
        }
    }

    /// Source tile of the active drag
    pub fn active_source(&self) -> Option<TileId> {
        self.session().map(|s| s.source)
    }

    /// Begin dragging the piece on `tile`
    ///
    /// Returns `false` and stays idle when the tile is empty. A start while a
    /// drag is already active is ignored.
    pub fn drag_start(&mut self, tile: TileId, board: &BoardState) -> bool {
        if let DragPhase::Dragging(session) = self.phase {
            debug!(
                "[DRAG] Ignoring drag start on {} while dragging from {}",
                tile, session.source
            );
            return false;
        }

        if board.is_empty_at(tile) {
            debug!("[DRAG] Drag start on empty tile {} refused", tile);
            return false;
        }

        self.phase = DragPhase::Dragging(DragSession {
            source: tile,
            offset: Vec2::ZERO,
        });
        debug!("[DRAG] Dragging from {}", tile);
        true
    }

    /// Update the visual offset of the active drag
    pub fn drag_move(&mut self, offset: Vec2) {
        if let DragPhase::Dragging(session) = &mut self.phase {
            session.offset = offset;
        }
    }

    /// Resolve the drop and return to idle
    ///
    /// The second element is the replacement board, present only when the
    /// drop was accepted.
    pub fn drag_end(
        &mut self,
        active: TileId,
        over: Option<TileId>,
        board: &BoardState,
    ) -> (DropOutcome, Option<BoardState>) {
        let phase = std::mem::take(&mut self.phase);
        let outcome = Self::resolve(phase, active, over, board);

        let next = match outcome {
            DropOutcome::Accepted { from, to, .. } => Some(board.relocate(from, to)),
            DropOutcome::Rejected(_) => None,
        };
        (outcome, next)
    }

    fn resolve(
        phase: DragPhase,
        active: TileId,
        over: Option<TileId>,
        board: &BoardState,
    ) -> DropOutcome {
        let DragPhase::Dragging(session) = phase else {
            return DropOutcome::Rejected(RejectReason::NoActiveDrag);
        };
        let source = session.source;
        if active != source {
            return DropOutcome::Rejected(RejectReason::SourceMismatch);
        }
        let Some(target) = over else {
            return DropOutcome::Rejected(RejectReason::NoTarget);
        };
        if target == source {
            return DropOutcome::Rejected(RejectReason::SameTile);
        }
        let Some(piece) = board.get(source).piece() else {
            return DropOutcome::Rejected(RejectReason::SourceVacated);
        };
        if !board.is_empty_at(target) {
            return DropOutcome::Rejected(RejectReason::TargetOccupied);
        }
        DropOutcome::Accepted {
            from: source,
            to: target,
            piece,
        }
    }

    /// Whether `tile` should show the valid-drop highlight
    ///
    /// True only while dragging, with the pointer over `tile`, when `tile` is
    /// not the drag source and is currently empty.
    pub fn is_valid_drop_target(
        &self,
        tile: TileId,
        hovered: Option<TileId>,
        board: &BoardState,
    ) -> bool {
        let Some(source) = self.active_source() else {
            return false;
        };
        hovered == Some(tile) && tile != source && board.is_empty_at(tile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::components::PieceKind;
    use crate::game::resources::Occupancy;

    fn tile(n: u8) -> TileId {
        TileId::new(n)
    }

    #[test]
    fn test_controller_starts_idle() {
        let controller = DragController::default();
        assert_eq!(controller.phase(), DragPhase::Idle);
        assert!(controller.active_source().is_none());
    }

    #[test]
    fn test_drag_start_on_piece_enters_dragging() {
        let board = BoardState::starting();
        let mut controller = DragController::default();

        assert!(controller.drag_start(tile(9), &board));
        assert_eq!(controller.active_source(), Some(tile(9)));
        assert_eq!(controller.session().map(|s| s.offset), Some(Vec2::ZERO));
    }

    #[test]
    fn test_drag_start_on_empty_tile_stays_idle() {
        let board = BoardState::starting();
        let mut controller = DragController::default();

        assert!(!controller.drag_start(tile(25), &board));
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_second_drag_start_is_ignored() {
        let board = BoardState::starting();
        let mut controller = DragController::default();

        controller.drag_start(tile(9), &board);
        assert!(!controller.drag_start(tile(10), &board));
        assert_eq!(controller.active_source(), Some(tile(9)));
    }

    #[test]
    fn test_drag_move_updates_offset_only_while_dragging() {
        let board = BoardState::starting();
        let mut controller = DragController::default();

        controller.drag_move(Vec2::new(5.0, 5.0));
        assert!(controller.session().is_none());

        controller.drag_start(tile(2), &board);
        controller.drag_move(Vec2::new(12.0, -40.0));
        assert_eq!(
            controller.session().map(|s| s.offset),
            Some(Vec2::new(12.0, -40.0))
        );
    }

    #[test]
    fn test_drop_on_empty_tile_is_accepted() {
        let board = BoardState::starting();
        let mut controller = DragController::default();

        controller.drag_start(tile(9), &board);
        let (outcome, next) = controller.drag_end(tile(9), Some(tile(17)), &board);

        assert_eq!(
            outcome,
            DropOutcome::Accepted {
                from: tile(9),
                to: tile(17),
                piece: Piece::white(PieceKind::Pawn),
            }
        );
        let next = next.expect("accepted drop yields a board");
        assert!(next.is_empty_at(tile(9)));
        assert_eq!(
            next.get(tile(17)),
            Occupancy::Occupied(Piece::white(PieceKind::Pawn))
        );
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_drop_on_occupied_tile_is_rejected() {
        let board = BoardState::starting();
        let mut controller = DragController::default();

        // Friendly and enemy targets alike
        for target in [1, 10, 49, 64] {
            controller.drag_start(tile(9), &board);
            let (outcome, next) = controller.drag_end(tile(9), Some(tile(target)), &board);
            assert_eq!(outcome, DropOutcome::Rejected(RejectReason::TargetOccupied));
            assert!(next.is_none());
            assert!(!controller.is_dragging());
        }
    }

    #[test]
    fn test_drop_without_target_is_rejected() {
        let board = BoardState::starting();
        let mut controller = DragController::default();

        controller.drag_start(tile(9), &board);
        let (outcome, next) = controller.drag_end(tile(9), None, &board);
        assert_eq!(outcome, DropOutcome::Rejected(RejectReason::NoTarget));
        assert!(next.is_none());
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_drop_on_source_is_rejected() {
        let board = BoardState::starting();
        let mut controller = DragController::default();

        controller.drag_start(tile(9), &board);
        let (outcome, next) = controller.drag_end(tile(9), Some(tile(9)), &board);
        assert_eq!(outcome, DropOutcome::Rejected(RejectReason::SameTile));
        assert!(next.is_none());
    }

    #[test]
    fn test_drop_while_idle_is_rejected() {
        let board = BoardState::starting();
        let mut controller = DragController::default();

        controller.drag_start(tile(25), &board);
        let (outcome, next) = controller.drag_end(tile(25), Some(tile(26)), &board);
        assert_eq!(outcome, DropOutcome::Rejected(RejectReason::NoActiveDrag));
        assert!(next.is_none());
    }

    #[test]
    fn test_vacated_source_aborts() {
        let board = BoardState::starting();
        let mut controller = DragController::default();
        controller.drag_start(tile(9), &board);

        // Board replaced externally while the drag was in flight
        let external = board.relocate(tile(9), tile(25));
        let (outcome, next) = controller.drag_end(tile(9), Some(tile(17)), &external);
        assert_eq!(outcome, DropOutcome::Rejected(RejectReason::SourceVacated));
        assert!(next.is_none());
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_mismatched_source_aborts() {
        let board = BoardState::starting();
        let mut controller = DragController::default();
        controller.drag_start(tile(9), &board);

        let (outcome, next) = controller.drag_end(tile(10), Some(tile(18)), &board);
        assert_eq!(outcome, DropOutcome::Rejected(RejectReason::SourceMismatch));
        assert!(next.is_none());
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_valid_drop_target_rule() {
        let board = BoardState::starting();
        let mut controller = DragController::default();

        // Idle: nothing highlights
        assert!(
            !controller.is_valid_drop_target(tile(17), Some(tile(17)), &board)
        );

        controller.drag_start(tile(9), &board);
        assert!(
            controller.is_valid_drop_target(tile(17), Some(tile(17)), &board)
        );
        // Not hovered
        assert!(
            !controller.is_valid_drop_target(tile(17), Some(tile(18)), &board)
        );
        assert!(!controller.is_valid_drop_target(tile(17), None, &board));
        // Source tile
        assert!(
            !controller.is_valid_drop_target(tile(9), Some(tile(9)), &board)
        );
        // Occupied
        assert!(
            !controller.is_valid_drop_target(tile(1), Some(tile(1)), &board)
        );
    }
}
