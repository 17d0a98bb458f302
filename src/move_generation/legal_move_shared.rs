use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// True when `target` may be entered by a piece of `color`: empty or enemy-held.
#[inline]
pub fn is_empty_or_enemy(board: &Board, target: Position, color: Color) -> bool {
    board
        .piece_at(target)
        .map_or(true, |occupant| occupant.color != color)
}

/// Single-step targets (knight and king shapes).
pub fn push_step_targets(
    board: &Board,
    from: Position,
    color: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<Position>,
) {
    for &(d_row, d_col) in offsets {
        if let Some(target) = from.offset(d_row, d_col) {
            if is_empty_or_enemy(board, target, color) {
                out.push(target);
            }
        }
    }
}

/// Ray-cast targets for sliding pieces.
///
/// Each ray stops at the first occupied square, which is included only when
/// it holds an enemy piece.
pub fn push_ray_targets(
    board: &Board,
    from: Position,
    color: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<Position>,
) {
    for &(d_row, d_col) in directions {
        let mut cursor = from;
        while let Some(target) = cursor.offset(d_row, d_col) {
            match board.piece_at(target) {
                None => out.push(target),
                Some(occupant) => {
                    if occupant.color != color {
                        out.push(target);
                    }
                    break;
                }
            }
            cursor = target;
        }
    }
}
