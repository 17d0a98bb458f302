use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{push_step_targets, KNIGHT_OFFSETS};

pub fn generate_knight_moves(board: &Board, from: Position, color: Color, out: &mut Vec<Position>) {
    push_step_targets(board, from, color, &KNIGHT_OFFSETS, out);
}
