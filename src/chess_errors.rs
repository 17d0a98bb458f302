//! Errors used throughout the chess engine.
//!
//! `ChessErrors` is the single error type returned by game logic, parsing
//! helpers, the executor, search and the game session. Each variant carries
//! enough context to render a precise message.
//!
//! Usage guidelines:
//! - Input-style variants (`EmptySquare`, `IllegalMove`, `InvalidAlgebraic`,
//!   ...) are recoverable: the request was rejected and the game state was not
//!   touched, so the caller simply clears its selection.
//! - `NoLegalMoves` signals a broken caller contract (search started on a
//!   finished position) and is not expected during normal play.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Color, PieceKind, Position};
use crate::game_state::game_status::GameStatus;
use crate::utils::algebraic::to_algebraic;

/// Unified error type for the chess engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// Row or column outside `0..=7`.
    ///
    /// Payload: (row, col).
    InvalidRowOrColumn((u8, u8)),

    /// A square name such as `"e4"` could not be parsed.
    InvalidAlgebraic(String),

    /// A FEN string was malformed; payload describes the offending field.
    InvalidFen(String),

    /// The origin square of a request holds no piece.
    EmptySquare(Position),

    /// The origin square holds a piece of the side not to move.
    NotSideToMove(Position),

    /// The destination is not among the legal moves of the origin piece.
    IllegalMove { from: Position, to: Position },

    /// A promotion was requested to a kind outside queen/rook/bishop/knight.
    InvalidPromotionChoice(PieceKind),

    /// A promotion kind was supplied for a move that does not promote.
    UnexpectedPromotion { from: Position, to: Position },

    /// A move was submitted while a promotion choice is still outstanding.
    PromotionPending,

    /// A promotion choice was supplied but no promotion is outstanding.
    NoPromotionPending,

    /// The game already reached a terminal status.
    GameOver(GameStatus),

    /// Human input was submitted for the side the engine plays.
    NotHumanTurn(Color),

    /// The engine was asked to move while it is not the engine's turn.
    NotEngineTurn(Color),

    /// Search depth must be at least one ply.
    InvalidSearchDepth(u8),

    /// No legal moves are available for the side to move.
    NoLegalMoves,
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::InvalidRowOrColumn((row, col)) => {
                write!(f, "position ({row}, {col}) is off the board")
            }
            ChessErrors::InvalidAlgebraic(text) => write!(f, "invalid square name: {text:?}"),
            ChessErrors::InvalidFen(msg) => write!(f, "invalid FEN: {msg}"),
            ChessErrors::EmptySquare(at) => write!(f, "no piece on {}", to_algebraic(*at)),
            ChessErrors::NotSideToMove(at) => {
                write!(f, "piece on {} does not belong to the side to move", to_algebraic(*at))
            }
            ChessErrors::IllegalMove { from, to } => {
                write!(f, "illegal move {}{}", to_algebraic(*from), to_algebraic(*to))
            }
            ChessErrors::InvalidPromotionChoice(kind) => {
                write!(f, "cannot promote to {kind:?}")
            }
            ChessErrors::UnexpectedPromotion { from, to } => write!(
                f,
                "move {}{} does not promote",
                to_algebraic(*from),
                to_algebraic(*to)
            ),
            ChessErrors::PromotionPending => write!(f, "a promotion choice is pending"),
            ChessErrors::NoPromotionPending => write!(f, "no promotion is pending"),
            ChessErrors::GameOver(status) => write!(f, "game is over ({status:?})"),
            ChessErrors::NotHumanTurn(color) => {
                write!(f, "{color:?} is played by the engine")
            }
            ChessErrors::NotEngineTurn(color) => {
                write!(f, "{color:?} to move is not played by the engine")
            }
            ChessErrors::InvalidSearchDepth(depth) => {
                write!(f, "search depth must be at least 1, got {depth}")
            }
            ChessErrors::NoLegalMoves => write!(f, "no legal moves for the side to move"),
        }
    }
}

impl Error for ChessErrors {}
