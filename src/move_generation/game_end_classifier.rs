//! Check / checkmate / stalemate classification of the side to move.

use crate::game_state::game_state::GameState;
use crate::game_state::game_status::GameStatus;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::has_any_legal_move;

/// Classify the side to move of `game_state`.
pub fn classify_game_status(game_state: &GameState) -> GameStatus {
    let in_check = is_king_in_check(game_state, game_state.side_to_move);
    let can_move = has_any_legal_move(game_state);
    match (in_check, can_move) {
        (true, false) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::InProgress,
    }
}

#[inline]
pub fn is_checkmate(game_state: &GameState) -> bool {
    classify_game_status(game_state) == GameStatus::Checkmate
}

#[inline]
pub fn is_stalemate(game_state: &GameState) -> bool {
    classify_game_status(game_state) == GameStatus::Stalemate
}
