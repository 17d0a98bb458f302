//! Crate root module declarations for the chessmaster engine.
//!
//! Exposes the rules core (game state, move generation, game-end
//! classification), the alpha-beta search and engines, the turn-by-turn game
//! session, and the text helpers used by tests, benches and the self-play
//! binary.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod game_status;
    pub mod move_record;
    pub mod undo_state;
}

pub mod move_generation {
    pub mod game_end_classifier;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_sliding;
    pub mod move_generator;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax_search;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod game_flow {
    pub mod game_result;
    pub mod game_session;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_parser;
    pub mod render_game_state;
}
