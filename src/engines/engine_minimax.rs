//! Alpha-beta minimax engine, the computer opponent.
//!
//! Wraps `search::minimax_search::select_move` with a scorer, a default
//! depth and its own random generator for root move shuffling.

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessErrors;
use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::{BoardScorer, PositionalScorer};
use crate::search::minimax_search::{select_move, SearchConfig};

pub struct MinimaxEngine<S: BoardScorer = PositionalScorer> {
    scorer: S,
    config: SearchConfig,
    rng: StdRng,
}

impl MinimaxEngine<PositionalScorer> {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_scorer(PositionalScorer, config, rand::random())
    }

    /// Deterministic engine: the same seed shuffles root moves the same way.
    pub fn with_seed(config: SearchConfig, seed: u64) -> Self {
        Self::with_scorer(PositionalScorer, config, seed)
    }
}

impl<S: BoardScorer> MinimaxEngine<S> {
    pub fn with_scorer(scorer: S, config: SearchConfig, seed: u64) -> Self {
        Self {
            scorer,
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn set_depth(&mut self, depth: u8) {
        self.config.depth = depth;
    }
}

impl Default for MinimaxEngine<PositionalScorer> {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl<S: BoardScorer> Engine for MinimaxEngine<S> {
    fn name(&self) -> &str {
        "Minimax"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &SearchParams,
    ) -> Result<EngineOutput, ChessErrors> {
        let depth = params.depth.unwrap_or(self.config.depth);
        let result = select_move(game_state, depth, &self.scorer, &mut self.rng)?;

        info!(
            "{:?} plays {}{} at depth {} (score {}, {} nodes)",
            game_state.side_to_move,
            result.best_move.from.to_algebraic(),
            result.best_move.to.to_algebraic(),
            depth,
            result.score,
            result.nodes
        );

        Ok(EngineOutput {
            best_move: result.best_move,
            score: Some(result.score),
            nodes: result.nodes,
        })
    }
}
