//! Pluggable board evaluation interfaces and the default positional scorer.
//!
//! Search stays modular by delegating static position scoring to this trait,
//! so alternate heuristics can be swapped in without touching search code.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

/// Score awarded for delivering mate; no static evaluation comes close.
pub const MATE_SCORE: i32 = 100_000;

pub trait BoardScorer: Send + Sync {
    /// Score of `board` from the point of view of `perspective` (positive is good for it).
    fn score(&self, board: &Board, perspective: Color) -> i32;
}

/// Material plus small positional bonuses for pawn advance, central pawns and
/// developed minor pieces.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalScorer;

impl PositionalScorer {
    #[inline]
    pub const fn piece_value(kind: PieceKind) -> i32 {
        match kind {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 20_000,
        }
    }

    /// Value of one piece standing on `position`, before the colour sign is applied.
    pub fn piece_square_value(piece: Piece, position: Position) -> i32 {
        let mut value = Self::piece_value(piece.kind);
        let row = i32::from(position.row());
        let col = position.col();

        match piece.kind {
            PieceKind::Pawn => {
                let advance = match piece.color {
                    Color::Light => 6 - row,
                    Color::Dark => row - 1,
                };
                value += advance * 10;
                if (3..=4).contains(&col) {
                    value += 20;
                }
            }
            PieceKind::Knight | PieceKind::Bishop => {
                let developed = match piece.color {
                    Color::Light => row < 6,
                    Color::Dark => row > 1,
                };
                if developed {
                    value += 10;
                }
            }
            _ => {}
        }

        value
    }
}

impl BoardScorer for PositionalScorer {
    fn score(&self, board: &Board, perspective: Color) -> i32 {
        board
            .pieces()
            .map(|(position, piece)| {
                let value = Self::piece_square_value(piece, position);
                if piece.color == perspective {
                    value
                } else {
                    -value
                }
            })
            .sum()
    }
}

/// Pure material count, benched beside `PositionalScorer`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board, perspective: Color) -> i32 {
        board
            .pieces()
            .map(|(_, piece)| {
                let value = PositionalScorer::piece_value(piece.kind);
                if piece.color == perspective {
                    value
                } else {
                    -value
                }
            })
            .sum()
    }
}
