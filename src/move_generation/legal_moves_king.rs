use crate::game_state::chess_rules::{KING_START_COL, KINGSIDE_CASTLE_COLS, QUEENSIDE_CASTLE_COLS};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::{CastlingSide, GameState};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::{push_step_targets, KING_OFFSETS};

pub fn generate_king_moves(
    game_state: &GameState,
    from: Position,
    color: Color,
    out: &mut Vec<Position>,
) {
    push_step_targets(&game_state.board, from, color, &KING_OFFSETS, out);
    generate_castling_moves(game_state, from, color, out);
}

/// Castling destinations (the king's landing square, two columns over).
///
/// Requires an unmoved king on its start square, an unmoved own rook on the
/// corner, empty squares strictly between them, and no attack on the king's
/// start, pass-through or landing square.
fn generate_castling_moves(
    game_state: &GameState,
    from: Position,
    color: Color,
    out: &mut Vec<Position>,
) {
    let board = &game_state.board;
    let row = color.back_row();
    if from != Position::at(row, KING_START_COL) {
        return;
    }

    // Cannot castle out of check.
    if is_square_attacked(board, from, color) {
        return;
    }

    for side in [CastlingSide::Kingside, CastlingSide::Queenside] {
        if !game_state.castling.may_castle(color, side) {
            continue;
        }

        let rook_at = Position::at(row, side.rook_col());
        if board.piece_at(rook_at) != Some(Piece::new(color, PieceKind::Rook)) {
            continue;
        }

        let low = from.col().min(rook_at.col()) + 1;
        let high = from.col().max(rook_at.col());
        if (low..high).any(|col| !board.is_empty_at(Position::at(row, col))) {
            continue;
        }

        let king_to_col = match side {
            CastlingSide::Kingside => KINGSIDE_CASTLE_COLS.0,
            CastlingSide::Queenside => QUEENSIDE_CASTLE_COLS.0,
        };
        let path_low = from.col().min(king_to_col);
        let path_high = from.col().max(king_to_col);
        let path_attacked = (path_low..=path_high)
            .filter(|col| *col != from.col())
            .any(|col| is_square_attacked(board, Position::at(row, col), color));
        if path_attacked {
            continue;
        }

        out.push(Position::at(row, king_to_col));
    }
}
