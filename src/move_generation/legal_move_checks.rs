//! Attack and check oracle.
//!
//! Pure functions of an explicit board snapshot: nothing here mutates, and
//! nothing reads a "current" board implicitly, so the legality filter can ask
//! about a hypothetical board just as easily as about the live one.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

/// Whether any piece of the side opposing `defending_color` attacks `target`.
///
/// Scans every enemy piece and applies its closed-form attack shape: pawns
/// hit one row forward diagonally, knights and kings by fixed offsets, and
/// sliders along a clear ray that ends exactly on `target`.
pub fn is_square_attacked(board: &Board, target: Position, defending_color: Color) -> bool {
    board
        .pieces_of(defending_color.opposite())
        .any(|(from, piece)| attacks_square(board, from, piece, target))
}

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    is_square_attacked(
        &game_state.board,
        game_state.king_positions.get(color),
        color,
    )
}

/// Enemy pieces attacking `target`, for diagnostics and tests.
pub fn attackers_to_square(
    board: &Board,
    target: Position,
    defending_color: Color,
) -> Vec<(Position, PieceKind)> {
    board
        .pieces_of(defending_color.opposite())
        .filter(|(from, piece)| attacks_square(board, *from, *piece, target))
        .map(|(from, piece)| (from, piece.kind))
        .collect()
}

fn attacks_square(board: &Board, from: Position, piece: Piece, target: Position) -> bool {
    let d_row = target.row() as i8 - from.row() as i8;
    let d_col = target.col() as i8 - from.col() as i8;
    if d_row == 0 && d_col == 0 {
        return false;
    }

    let diagonal = d_row.abs() == d_col.abs();
    let straight = d_row == 0 || d_col == 0;

    match piece.kind {
        PieceKind::Pawn => d_row == piece.color.forward() && d_col.abs() == 1,
        PieceKind::Knight => matches!((d_row.abs(), d_col.abs()), (1, 2) | (2, 1)),
        PieceKind::King => d_row.abs() <= 1 && d_col.abs() <= 1,
        PieceKind::Bishop => diagonal && ray_is_clear(board, from, target),
        PieceKind::Rook => straight && ray_is_clear(board, from, target),
        PieceKind::Queen => (diagonal || straight) && ray_is_clear(board, from, target),
    }
}

/// Every square strictly between two aligned positions is empty.
fn ray_is_clear(board: &Board, from: Position, target: Position) -> bool {
    let step_row = (target.row() as i8 - from.row() as i8).signum();
    let step_col = (target.col() as i8 - from.col() as i8).signum();

    let mut cursor = from;
    loop {
        let Some(next) = cursor.offset(step_row, step_col) else {
            return false;
        };
        if next == target {
            return true;
        }
        if !board.is_empty_at(next) {
            return false;
        }
        cursor = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Position {
        Position::from_algebraic(name).unwrap()
    }

    #[test]
    fn queen_on_open_line_gives_check() {
        let rank = GameState::from_fen("4k3/8/8/8/8/8/8/Q3K3 b - - 0 1").unwrap();
        assert!(!is_king_in_check(&rank, Color::Dark));

        let file = GameState::from_fen("4k3/8/8/8/8/8/8/4QK2 b - - 0 1").unwrap();
        assert!(is_king_in_check(&file, Color::Dark));

        let diagonal = GameState::from_fen("4k3/8/8/8/Q7/8/8/5K2 b - - 0 1").unwrap();
        assert!(is_king_in_check(&diagonal, Color::Dark));

        let same_rank = GameState::from_fen("Q3k3/8/8/8/8/8/8/5K2 b - - 0 1").unwrap();
        assert!(is_king_in_check(&same_rank, Color::Dark));
    }

    #[test]
    fn blocked_line_is_not_check() {
        let file = GameState::from_fen("4k3/8/8/4n3/8/8/8/4QK2 b - - 0 1").unwrap();
        assert!(!is_king_in_check(&file, Color::Dark));

        let diagonal = GameState::from_fen("4k3/8/2P5/8/Q7/8/8/5K2 b - - 0 1").unwrap();
        assert!(!is_king_in_check(&diagonal, Color::Dark));

        let same_rank = GameState::from_fen("Q1b1k3/8/8/8/8/8/8/5K2 b - - 0 1").unwrap();
        assert!(!is_king_in_check(&same_rank, Color::Dark));
    }

    #[test]
    fn pawns_attack_forward_diagonals_only() {
        let game = GameState::from_fen("4k3/8/8/8/3p4/8/4P3/4K3 w - - 0 1").unwrap();
        // Light pawn on e2 attacks d3 and f3.
        assert!(is_square_attacked(&game.board, sq("d3"), Color::Dark));
        assert!(is_square_attacked(&game.board, sq("f3"), Color::Dark));
        assert!(!is_square_attacked(&game.board, sq("e3"), Color::Dark));
        // Dark pawn on d4 attacks c3 and e3, not c5.
        assert!(is_square_attacked(&game.board, sq("e3"), Color::Light));
        assert!(is_square_attacked(&game.board, sq("c3"), Color::Light));
        assert!(!is_square_attacked(&game.board, sq("c5"), Color::Light));
    }

    #[test]
    fn knight_and_king_shapes() {
        let game = GameState::from_fen("4k3/8/8/8/8/5n2/8/4K3 w - - 0 1").unwrap();
        assert!(is_king_in_check(&game, Color::Light));
        assert_eq!(
            attackers_to_square(&game.board, sq("e1"), Color::Light),
            vec![(sq("f3"), PieceKind::Knight)]
        );
        assert!(is_square_attacked(&game.board, sq("d7"), Color::Light));
        assert!(!is_square_attacked(&game.board, sq("e6"), Color::Light));
    }

    #[test]
    fn bishop_does_not_attack_along_files() {
        let game = GameState::from_fen("4k3/8/8/8/4b3/8/8/4K3 w - - 0 1").unwrap();
        assert!(!is_king_in_check(&game, Color::Light));
        assert!(is_square_attacked(&game.board, sq("h1"), Color::Light));
        assert!(is_square_attacked(&game.board, sq("a8"), Color::Light));
    }
}
