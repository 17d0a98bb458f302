//! Terminal-oriented Unicode board renderer.
//!
//! Used by the self-play binary and by debug logging to show a position in a
//! text environment.

use std::fmt;

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

/// Render the board to a Unicode string for terminal output, rank 8 on top.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = game_state.board.to_string();
    out.push('\n');
    out.push_str(match game_state.side_to_move {
        Color::Light => "Light to move",
        Color::Dark => "Dark to move",
    });
    out
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for row in 0..8u8 {
            let rank = char::from(b'8' - row);
            write!(f, "{rank} ")?;
            for col in 0..8u8 {
                let ch = self
                    .piece_at(Position::at(row, col))
                    .map_or('·', piece_to_unicode);
                write!(f, "{ch}")?;
                if col < 7 {
                    write!(f, " ")?;
                }
            }
            writeln!(f, " {rank}")?;
        }
        write!(f, "  a b c d e f g h")
    }
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}
