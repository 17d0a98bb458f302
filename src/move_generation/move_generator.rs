use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

/// A legal (from, to) pair for the side to move, optionally with a promotion kind.
///
/// The generator leaves `promotion` empty; engines fill it in before playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveCandidate {
    pub from: Position,
    pub to: Position,
    pub promotion: Option<PieceKind>,
}

impl MoveCandidate {
    #[inline]
    pub const fn new(from: Position, to: Position) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    /// Whether this move takes a pawn to its last row on `board`.
    pub fn is_promotion(&self, board: &Board) -> bool {
        board.piece_at(self.from).is_some_and(|piece| {
            piece.kind == PieceKind::Pawn && self.to.row() == piece.color.promotion_row()
        })
    }

    /// Fill in a queen promotion when the move needs one; engines always promote to queen.
    pub fn with_queen_promotion(self, board: &Board) -> Self {
        if self.is_promotion(board) {
            Self {
                promotion: Some(PieceKind::Queen),
                ..self
            }
        } else {
            self
        }
    }
}
