//! Bishop, rook and queen destinations by ray casting.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{
    push_ray_targets, BISHOP_DIRECTIONS, ROOK_DIRECTIONS,
};

pub fn generate_bishop_moves(board: &Board, from: Position, color: Color, out: &mut Vec<Position>) {
    push_ray_targets(board, from, color, &BISHOP_DIRECTIONS, out);
}

pub fn generate_rook_moves(board: &Board, from: Position, color: Color, out: &mut Vec<Position>) {
    push_ray_targets(board, from, color, &ROOK_DIRECTIONS, out);
}

pub fn generate_queen_moves(board: &Board, from: Position, color: Color, out: &mut Vec<Position>) {
    push_ray_targets(board, from, color, &BISHOP_DIRECTIONS, out);
    push_ray_targets(board, from, color, &ROOK_DIRECTIONS, out);
}
