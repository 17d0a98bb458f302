//! History entry for one executed ply.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::CastlingFlags;

/// Immutable record of an executed move; the unit of undo.
///
/// Besides describing the move it carries a full snapshot of everything the
/// move changed, so undo restores the prior position exactly instead of
/// reversing the move's effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Position,
    pub to: Position,
    pub moving_piece: Piece,
    /// Ordinary capture or the pawn removed en passant.
    pub captured_piece: Option<Piece>,
    pub promotion: Option<PieceKind>,
    pub board_before: Board,
    pub king_positions_before: KingPositions,
    pub side_to_move_before: Color,
    pub castling_before: CastlingFlags,
    pub en_passant_before: Option<Position>,
}

impl MoveRecord {
    #[inline]
    pub fn is_castling(&self) -> bool {
        self.moving_piece.kind == PieceKind::King && self.from.col().abs_diff(self.to.col()) == 2
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.moving_piece.kind == PieceKind::Pawn
            && self.from.col() != self.to.col()
            && self.board_before.is_empty_at(self.to)
    }

    #[inline]
    pub fn is_double_step(&self) -> bool {
        self.moving_piece.kind == PieceKind::Pawn && self.from.row().abs_diff(self.to.row()) == 2
    }
}
