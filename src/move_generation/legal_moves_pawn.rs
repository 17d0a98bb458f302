use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

/// Pseudo-legal pawn destinations.
///
/// One step forward onto an empty square, two from the starting row when both
/// squares are empty, and diagonal captures. A diagonal onto an empty square
/// is offered only for en passant, when the pawn that just advanced two rows
/// stands beside `from` on that column.
pub fn generate_pawn_moves(
    game_state: &GameState,
    from: Position,
    color: Color,
    out: &mut Vec<Position>,
) {
    let board = &game_state.board;
    let forward = color.forward();

    if let Some(one_step) = from.offset(forward, 0) {
        if board.is_empty_at(one_step) {
            out.push(one_step);
            if from.row() == color.pawn_row() {
                if let Some(two_step) = one_step.offset(forward, 0) {
                    if board.is_empty_at(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        let Some(target) = from.offset(forward, d_col) else {
            continue;
        };
        match board.piece_at(target) {
            Some(occupant) if occupant.color != color => out.push(target),
            Some(_) => {}
            None => {
                let beside = Position::at(from.row(), target.col());
                if game_state.en_passant == Some(beside) {
                    out.push(target);
                }
            }
        }
    }
}
