//! Live game state.
//!
//! `GameState` is the central model of the engine: the board, the side to
//! move, both king locations, castling and en-passant bookkeeping, the move
//! history used for undo, and the captured-piece lists. It is replaced
//! wholesale on reset and only ever mutated through the executor
//! (`execute_move` / `undo_moves`) or the search's make/unmake cycle.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    KINGSIDE_ROOK_COL, QUEENSIDE_ROOK_COL, STARTING_POSITION_FEN,
};
use crate::game_state::chess_types::*;
use crate::game_state::move_record::MoveRecord;
use crate::utils::fen_parser::parse_fen;

/// Which rook a castle uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastlingSide {
    Kingside,
    Queenside,
}

impl CastlingSide {
    #[inline]
    pub const fn rook_col(self) -> u8 {
        match self {
            CastlingSide::Kingside => KINGSIDE_ROOK_COL,
            CastlingSide::Queenside => QUEENSIDE_ROOK_COL,
        }
    }
}

/// Has-moved flags for each king and each original rook.
///
/// A flag is set the first time its piece leaves its home square, or when
/// anything lands on a rook's home corner (the rook was captured there).
/// Flags are never cleared except by undo, which restores a snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CastlingFlags {
    king_moved: [bool; 2],
    kingside_rook_moved: [bool; 2],
    queenside_rook_moved: [bool; 2],
}

impl CastlingFlags {
    /// Flags for a position where nothing may castle any more.
    pub const fn all_moved() -> Self {
        Self {
            king_moved: [true; 2],
            kingside_rook_moved: [true; 2],
            queenside_rook_moved: [true; 2],
        }
    }

    #[inline]
    pub const fn king_has_moved(&self, color: Color) -> bool {
        self.king_moved[color.index()]
    }

    #[inline]
    pub const fn rook_has_moved(&self, color: Color, side: CastlingSide) -> bool {
        match side {
            CastlingSide::Kingside => self.kingside_rook_moved[color.index()],
            CastlingSide::Queenside => self.queenside_rook_moved[color.index()],
        }
    }

    /// Neither the king nor the rook of `side` has moved.
    #[inline]
    pub const fn may_castle(&self, color: Color, side: CastlingSide) -> bool {
        !self.king_has_moved(color) && !self.rook_has_moved(color, side)
    }

    /// Grants a castling right, used when importing a FEN castling field.
    pub(crate) fn grant(&mut self, color: Color, side: CastlingSide) {
        self.king_moved[color.index()] = false;
        match side {
            CastlingSide::Kingside => self.kingside_rook_moved[color.index()] = false,
            CastlingSide::Queenside => self.queenside_rook_moved[color.index()] = false,
        }
    }

    /// Update the flags for `piece` travelling from `from` to `to`.
    pub(crate) fn note_move(&mut self, piece: Piece, from: Position, to: Position) {
        if piece.kind == PieceKind::King {
            self.king_moved[piece.color.index()] = true;
        }
        for square in [from, to] {
            for color in [Color::Light, Color::Dark] {
                if square.row() != color.back_row() {
                    continue;
                }
                if square.col() == KINGSIDE_ROOK_COL {
                    self.kingside_rook_moved[color.index()] = true;
                } else if square.col() == QUEENSIDE_ROOK_COL {
                    self.queenside_rook_moved[color.index()] = true;
                }
            }
        }
    }
}

/// Complete state of one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    pub king_positions: KingPositions,
    pub castling: CastlingFlags,
    /// Square of a pawn that advanced two rows on the previous ply.
    pub en_passant: Option<Position>,
    pub move_history: Vec<MoveRecord>,
    pub captured_pieces: CapturedPieces,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Fresh starting position with Light to move.
    pub fn new_game() -> Self {
        Self {
            board: Board::standard(),
            side_to_move: Color::Light,
            king_positions: KingPositions {
                light: Position::at(7, 4),
                dark: Position::at(0, 4),
            },
            castling: CastlingFlags::default(),
            en_passant: None,
            move_history: Vec::new(),
            captured_pieces: CapturedPieces::default(),
        }
    }

    /// Build a position from a FEN string (history starts empty).
    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        parse_fen(fen)
    }

    /// The start position expressed as FEN, for callers that set up from text.
    #[inline]
    pub fn starting_fen() -> &'static str {
        STARTING_POSITION_FEN
    }

    #[inline]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.move_history.last()
    }

    #[inline]
    pub fn ply_count(&self) -> usize {
        self.move_history.len()
    }

    /// Rebuild the captured-piece lists by replaying the history's capture fields.
    pub fn recompute_captured_pieces(&mut self) {
        let mut captured = CapturedPieces::default();
        for record in &self.move_history {
            if let Some(piece) = record.captured_piece {
                captured.push(record.moving_piece.color, piece);
            }
        }
        self.captured_pieces = captured;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_matches_starting_fen() {
        let dut = GameState::new_game();
        let parsed = GameState::from_fen(STARTING_POSITION_FEN).expect("start FEN should parse");
        assert_eq!(dut, parsed);
        assert_eq!(dut.side_to_move, Color::Light);
        assert!(dut.castling.may_castle(Color::Light, CastlingSide::Kingside));
        assert!(dut.castling.may_castle(Color::Dark, CastlingSide::Queenside));
    }

    #[test]
    fn king_move_clears_both_rights() {
        let mut flags = CastlingFlags::default();
        let king = Piece::new(Color::Light, PieceKind::King);
        flags.note_move(king, Position::at(7, 4), Position::at(6, 4));
        assert!(!flags.may_castle(Color::Light, CastlingSide::Kingside));
        assert!(!flags.may_castle(Color::Light, CastlingSide::Queenside));
        assert!(flags.may_castle(Color::Dark, CastlingSide::Kingside));
    }

    #[test]
    fn landing_on_a_rook_corner_clears_that_right() {
        let mut flags = CastlingFlags::default();
        let bishop = Piece::new(Color::Light, PieceKind::Bishop);
        flags.note_move(bishop, Position::at(1, 6), Position::at(0, 7));
        assert!(!flags.may_castle(Color::Dark, CastlingSide::Kingside));
        assert!(flags.may_castle(Color::Dark, CastlingSide::Queenside));
        assert!(flags.may_castle(Color::Light, CastlingSide::Kingside));
    }
}
