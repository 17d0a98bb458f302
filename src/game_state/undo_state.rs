//! In-place make/unmake for simulation.
//!
//! Search and perft walk the game tree on a single scratch `GameState`. Each
//! `make_move_unchecked` returns an `UndoState` holding only what the move
//! touched; `unmake_move` puts those cells and fields back so sibling branches
//! never observe each other's mutations.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::{CastlingFlags, GameState};
use crate::move_generation::legal_move_apply::{
    apply_move_to_board, revert_move_on_board, BoardEffects,
};

/// Single undo record for `make_move_unchecked` / `unmake_move`.
#[derive(Debug, Clone, Copy)]
pub struct UndoState {
    pub from: Position,
    pub to: Position,
    pub effects: BoardEffects,

    pub prev_king_positions: KingPositions,
    pub prev_side_to_move: Color,
    pub prev_castling: CastlingFlags,
    pub prev_en_passant: Option<Position>,
}

impl GameState {
    /// Apply a move without legality checks and without touching history or
    /// captured-piece lists.
    ///
    /// Returns `None` (and changes nothing) when `from` is empty.
    pub fn make_move_unchecked(
        &mut self,
        from: Position,
        to: Position,
        promotion: Option<PieceKind>,
    ) -> Option<UndoState> {
        let effects = apply_move_to_board(&mut self.board, from, to, promotion)?;
        let undo = UndoState {
            from,
            to,
            effects,
            prev_king_positions: self.king_positions,
            prev_side_to_move: self.side_to_move,
            prev_castling: self.castling,
            prev_en_passant: self.en_passant,
        };

        let moved = effects.moved;
        if moved.kind == PieceKind::King {
            self.king_positions.set(moved.color, to);
        }
        self.castling.note_move(moved, from, to);
        self.en_passant = if moved.kind == PieceKind::Pawn && from.row().abs_diff(to.row()) == 2 {
            Some(to)
        } else {
            None
        };
        self.side_to_move = moved.color.opposite();

        Some(undo)
    }

    /// Reverse a move made with `make_move_unchecked`.
    ///
    /// Undo records must be replayed in reverse order of creation.
    pub fn unmake_move(&mut self, undo: UndoState) {
        revert_move_on_board(&mut self.board, undo.from, undo.to, &undo.effects);
        self.king_positions = undo.prev_king_positions;
        self.side_to_move = undo.prev_side_to_move;
        self.castling = undo.prev_castling;
        self.en_passant = undo.prev_en_passant;
    }
}
