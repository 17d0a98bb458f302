//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the internal
//! `Position` (row 0 = rank 8, col 0 = a-file) used by tests, logging and
//! error messages.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Position;

/// Convert algebraic notation (for example: "e4") to a position.
pub fn from_algebraic(square: &str) -> Result<Position, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraic(square.to_owned()));
    }

    Position::new(b'8' - rank, file - b'a')
}

/// Convert a position to algebraic notation (for example: "e4").
pub fn to_algebraic(position: Position) -> String {
    let file_char = char::from(b'a' + position.col());
    let rank_char = char::from(b'8' - position.row());
    format!("{file_char}{rank_char}")
}

impl Position {
    /// Shorthand for [`from_algebraic`].
    pub fn from_algebraic(square: &str) -> Result<Self, ChessErrors> {
        from_algebraic(square)
    }

    /// Shorthand for [`to_algebraic`].
    pub fn to_algebraic(self) -> String {
        to_algebraic(self)
    }
}
