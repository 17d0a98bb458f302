//! Random-move engine.
//!
//! Selects uniformly from legal moves. Used as a trivial opponent and to drive
//! random play-outs in tests.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessErrors;
use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_all_moves;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        _params: &SearchParams,
    ) -> Result<EngineOutput, ChessErrors> {
        let legal_moves = generate_all_moves(game_state);
        let picked = legal_moves
            .as_slice()
            .choose(&mut self.rng)
            .ok_or(ChessErrors::NoLegalMoves)?;

        Ok(EngineOutput {
            best_move: picked.with_queen_promotion(&game_state.board),
            score: None,
            nodes: legal_moves.len() as u64,
        })
    }
}
