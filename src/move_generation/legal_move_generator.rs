//! Full legal move generation pipeline.
//!
//! Dispatches to the per-piece pseudo-legal generators, then simulates every
//! candidate on a copy of the board and drops those that leave the mover's
//! own king attacked. Nothing returned from here can expose one's own king.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move_to_board;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_sliding::{
    generate_bishop_moves, generate_queen_moves, generate_rook_moves,
};
use crate::move_generation::move_generator::MoveCandidate;

/// Legal destinations for the piece on `from`.
///
/// Returns an empty list when `from` is empty or holds a piece of the side not
/// to move.
pub fn legal_moves(game_state: &GameState, from: Position) -> Vec<Position> {
    let Some(piece) = game_state.board.piece_at(from) else {
        return Vec::new();
    };
    if piece.color != game_state.side_to_move {
        return Vec::new();
    }

    let mut targets = Vec::with_capacity(28);
    generate_pseudo_legal_moves(game_state, from, piece, &mut targets);
    targets.retain(|to| !leaves_own_king_attacked(game_state, from, *to, piece));
    targets
}

/// Every legal move for the side to move, scanning the board from the top left.
pub fn generate_all_moves(game_state: &GameState) -> Vec<MoveCandidate> {
    let mut moves = Vec::with_capacity(64);
    for (from, _) in game_state.board.pieces_of(game_state.side_to_move) {
        moves.extend(
            legal_moves(game_state, from)
                .into_iter()
                .map(|to| MoveCandidate::new(from, to)),
        );
    }
    moves
}

/// Whether the side to move has at least one legal move; stops at the first.
pub fn has_any_legal_move(game_state: &GameState) -> bool {
    game_state
        .board
        .pieces_of(game_state.side_to_move)
        .any(|(from, _)| !legal_moves(game_state, from).is_empty())
}

fn generate_pseudo_legal_moves(
    game_state: &GameState,
    from: Position,
    piece: Piece,
    out: &mut Vec<Position>,
) {
    let board = &game_state.board;
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(game_state, from, piece.color, out),
        PieceKind::Knight => generate_knight_moves(board, from, piece.color, out),
        PieceKind::Bishop => generate_bishop_moves(board, from, piece.color, out),
        PieceKind::Rook => generate_rook_moves(board, from, piece.color, out),
        PieceKind::Queen => generate_queen_moves(board, from, piece.color, out),
        PieceKind::King => generate_king_moves(game_state, from, piece.color, out),
    }
}

/// Simulate `from -> to` on a scratch board and test the mover's king.
fn leaves_own_king_attacked(game_state: &GameState, from: Position, to: Position, piece: Piece) -> bool {
    let mut scratch = game_state.board;
    if apply_move_to_board(&mut scratch, from, to, None).is_none() {
        return true;
    }
    let king_at = if piece.kind == PieceKind::King {
        to
    } else {
        game_state.king_positions.get(piece.color)
    };
    is_square_attacked(&scratch, king_at, piece.color)
}
