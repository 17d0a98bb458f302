//! Engine abstraction used by the game session and the self-play binary.
//!
//! Defines common input parameters and output payloads so different move
//! selection strategies can be swapped behind a single trait interface.

use crate::chess_errors::ChessErrors;
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::MoveCandidate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchParams {
    /// Ply depth; `None` uses the engine's configured default.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOutput {
    pub best_move: MoveCandidate,
    pub score: Option<i32>,
    pub nodes: u64,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Pick a move for the side to move. Promotions are always filled in.
    ///
    /// Fails with `NoLegalMoves` when the side to move has none.
    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &SearchParams,
    ) -> Result<EngineOutput, ChessErrors>;
}
