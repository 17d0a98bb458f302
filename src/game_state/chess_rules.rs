//! Canonical chess-rule constants.
//!
//! Static literals shared by setup, move generation and execution: the
//! starting position and the fixed columns involved in castling.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Column of both kings at the start of a game.
pub const KING_START_COL: u8 = 4;

/// Column of the queenside rook at the start of a game.
pub const QUEENSIDE_ROOK_COL: u8 = 0;

/// Column of the kingside rook at the start of a game.
pub const KINGSIDE_ROOK_COL: u8 = 7;

/// King and rook destination columns for a kingside castle.
pub const KINGSIDE_CASTLE_COLS: (u8, u8) = (6, 5);

/// King and rook destination columns for a queenside castle.
pub const QUEENSIDE_CASTLE_COLS: (u8, u8) = (2, 3);
