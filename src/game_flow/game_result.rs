//! End-of-game reporting.
//!
//! A finished, scored game produces one `GameReport`, handed to whatever
//! `ResultListener` the caller installed (a statistics store, a UI banner,
//! a test probe).

use chrono::{DateTime, Utc};

use crate::game_state::chess_types::Color;
use crate::game_state::game_status::GameStatus;

/// Outcome from the point of view of the scored side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameReport {
    pub result: GameResult,
    /// `Checkmate` or `Stalemate`.
    pub terminal: GameStatus,
    pub winner: Option<Color>,
    pub plies: usize,
    pub finished_at: DateTime<Utc>,
}

impl GameReport {
    /// Build the report for a game that just reached `terminal` with
    /// `side_to_move` unable to move, scored for `perspective`.
    pub fn new(
        terminal: GameStatus,
        side_to_move: Color,
        perspective: Color,
        plies: usize,
    ) -> Self {
        let winner = match terminal {
            GameStatus::Checkmate => Some(side_to_move.opposite()),
            _ => None,
        };
        let result = match winner {
            Some(color) if color == perspective => GameResult::Win,
            Some(_) => GameResult::Loss,
            None => GameResult::Draw,
        };
        Self {
            result,
            terminal,
            winner,
            plies,
            finished_at: Utc::now(),
        }
    }
}

/// Receives the report of every scored game that finishes.
pub trait ResultListener: Send {
    fn on_game_finished(&mut self, report: &GameReport);
}

impl<F> ResultListener for F
where
    F: FnMut(&GameReport) + Send,
{
    fn on_game_finished(&mut self, report: &GameReport) {
        self(report)
    }
}
