//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! The side to move at the root is the maximizing player for the whole tree.
//! Depth counts plies including the root move itself: depth 1 scores every
//! legal move by the static evaluation of the position it produces. Deeper
//! searches alternate minimizing and maximizing replies, and a node without
//! replies scores as mate (for whoever delivered it) or stalemate (zero).
//!
//! All simulation happens on one scratch clone through make/unmake, so the
//! caller's `GameState` is never touched.

use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::generate_all_moves;
use crate::move_generation::move_generator::MoveCandidate;
use crate::search::board_scoring::{BoardScorer, MATE_SCORE};

const INFINITY: i32 = i32::MAX;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    #[inline]
    pub const fn search_depth(self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: Difficulty::default().search_depth(),
        }
    }
}

impl From<Difficulty> for SearchConfig {
    fn from(difficulty: Difficulty) -> Self {
        Self {
            depth: difficulty.search_depth(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Chosen move; a promotion is always filled in as a queen.
    pub best_move: MoveCandidate,
    pub score: i32,
    pub nodes: u64,
}

struct SearchContext<'a, S: BoardScorer + ?Sized> {
    scorer: &'a S,
    engine_color: Color,
    nodes: u64,
}

/// Pick the best move for the side to move of `game_state`.
///
/// Root candidates are shuffled with `rng` before searching; among equally
/// scored moves the first one searched wins.
pub fn select_move<S, R>(
    game_state: &GameState,
    depth: u8,
    scorer: &S,
    rng: &mut R,
) -> Result<SearchResult, ChessErrors>
where
    S: BoardScorer + ?Sized,
    R: Rng + ?Sized,
{
    if depth == 0 {
        return Err(ChessErrors::InvalidSearchDepth(depth));
    }

    let mut scratch = game_state.clone();
    let mut moves = generate_all_moves(&scratch);
    if moves.is_empty() {
        return Err(ChessErrors::NoLegalMoves);
    }
    moves.shuffle(rng);

    let mut ctx = SearchContext {
        scorer,
        engine_color: scratch.side_to_move,
        nodes: 0,
    };

    let mut alpha = -INFINITY;
    let mut best: Option<(MoveCandidate, i32)> = None;

    for mv in moves {
        let mv = mv.with_queen_promotion(&scratch.board);
        let nodes_before = ctx.nodes;
        let Some(score) = search_move(&mut scratch, mv, depth, alpha, INFINITY, true, &mut ctx)
        else {
            continue;
        };
        trace!(
            "root {}{} score {} nodes {}",
            mv.from.to_algebraic(),
            mv.to.to_algebraic(),
            score,
            ctx.nodes - nodes_before
        );

        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
        alpha = alpha.max(score);
    }

    let (best_move, score) = best.ok_or(ChessErrors::NoLegalMoves)?;
    Ok(SearchResult {
        best_move,
        score,
        nodes: ctx.nodes,
    })
}

/// Score `mv` by playing it, searching the replies and taking it back.
///
/// `engine_moved` says whether the maximizing side made `mv`. Returns `None`
/// only if `mv` could not be played at all.
fn search_move<S: BoardScorer + ?Sized>(
    game_state: &mut GameState,
    mv: MoveCandidate,
    depth: u8,
    alpha: i32,
    beta: i32,
    engine_moved: bool,
    ctx: &mut SearchContext<'_, S>,
) -> Option<i32> {
    let undo = game_state.make_move_unchecked(mv.from, mv.to, mv.promotion)?;
    ctx.nodes += 1;
    let score = score_position(game_state, depth, alpha, beta, engine_moved, ctx);
    game_state.unmake_move(undo);
    Some(score)
}

fn score_position<S: BoardScorer + ?Sized>(
    game_state: &mut GameState,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    engine_moved: bool,
    ctx: &mut SearchContext<'_, S>,
) -> i32 {
    if depth <= 1 {
        return ctx.scorer.score(&game_state.board, ctx.engine_color);
    }

    let replies = generate_all_moves(game_state);
    if replies.is_empty() {
        return if is_king_in_check(game_state, game_state.side_to_move) {
            if engine_moved {
                MATE_SCORE
            } else {
                -MATE_SCORE
            }
        } else {
            0
        };
    }

    if engine_moved {
        // Opponent to move: minimize.
        let mut min_score = INFINITY;
        for reply in replies {
            let reply = reply.with_queen_promotion(&game_state.board);
            let Some(score) = search_move(game_state, reply, depth - 1, alpha, beta, false, ctx)
            else {
                continue;
            };
            min_score = min_score.min(score);
            beta = beta.min(score);
            if min_score <= alpha {
                break;
            }
        }
        min_score
    } else {
        let mut max_score = -INFINITY;
        for reply in replies {
            let reply = reply.with_queen_promotion(&game_state.board);
            let Some(score) = search_move(game_state, reply, depth - 1, alpha, beta, true, ctx)
            else {
                continue;
            };
            max_score = max_score.max(score);
            alpha = alpha.max(score);
            if max_score >= beta {
                break;
            }
        }
        max_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{PieceKind, Position};
    use crate::search::board_scoring::PositionalScorer;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sq(name: &str) -> Position {
        Position::from_algebraic(name).unwrap()
    }

    fn search(fen: &str, depth: u8, seed: u64) -> SearchResult {
        let game = GameState::from_fen(fen).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        select_move(&game, depth, &PositionalScorer, &mut rng).unwrap()
    }

    #[test]
    fn difficulty_maps_to_depth() {
        assert_eq!(Difficulty::Easy.search_depth(), 2);
        assert_eq!(Difficulty::Medium.search_depth(), 3);
        assert_eq!(Difficulty::Hard.search_depth(), 4);
        assert_eq!(SearchConfig::default().depth, 3);
        assert_eq!(SearchConfig::from(Difficulty::Hard).depth, 4);
    }

    #[test]
    fn depth_one_returns_the_best_static_score() {
        let fen = "r1bqkbnr/pppp1ppp/2n5/4p3/3PP3/5N2/PPP2PPP/RNBQKB1R b KQkq - 0 1";
        let game = GameState::from_fen(fen).unwrap();
        let mut scratch = game.clone();
        let best_static = generate_all_moves(&game)
            .into_iter()
            .map(|mv| {
                let undo = scratch.make_move_unchecked(mv.from, mv.to, None).unwrap();
                let score = PositionalScorer.score(&scratch.board, Color::Dark);
                scratch.unmake_move(undo);
                score
            })
            .max()
            .unwrap();

        for seed in 0..8 {
            let result = search(fen, 1, seed);
            assert_eq!(result.score, best_static);
        }
    }

    #[test]
    fn takes_a_hanging_queen() {
        let result = search("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1", 1, 7);
        assert_eq!(result.best_move.from, sq("d1"));
        assert_eq!(result.best_move.to, sq("d5"));
    }

    #[test]
    fn finds_mate_in_one() {
        for seed in 0..4 {
            let result = search("6k1/5ppp/8/8/8/8/8/3R2K1 w - - 0 1", 2, seed);
            assert_eq!(result.best_move.from, sq("d1"));
            assert_eq!(result.best_move.to, sq("d8"));
            assert_eq!(result.score, MATE_SCORE);
        }
    }

    #[test]
    fn dark_finds_mate_in_one_too() {
        let result = search("3r2k1/8/8/8/8/8/5PPP/6K1 b - - 0 1", 2, 3);
        assert_eq!(result.best_move.to, sq("d1"));
        assert_eq!(result.score, MATE_SCORE);
    }

    #[test]
    fn avoids_stepping_into_mate_at_depth_three() {
        // Light must not let the rook reach the back rank: anything but a
        // defence of the first rank loses to Rd1#.
        let result = search("3r2k1/5ppp/8/8/8/8/5PPP/4R1K1 w - - 0 1", 3, 11);
        assert!(result.score > -MATE_SCORE);
    }

    #[test]
    fn engine_promotes_to_queen() {
        let result = search("8/P6k/8/8/8/8/8/K7 w - - 0 1", 1, 5);
        assert_eq!(result.best_move.from, sq("a7"));
        assert_eq!(result.best_move.promotion, Some(PieceKind::Queen));
    }

    #[test]
    fn search_leaves_the_input_untouched() {
        let game = GameState::new_game();
        let before = game.clone();
        let mut rng = StdRng::seed_from_u64(1);
        let result = select_move(&game, 3, &PositionalScorer, &mut rng).unwrap();
        assert_eq!(game, before);
        assert!(result.nodes > 20);
    }

    #[test]
    fn rejects_zero_depth_and_finished_games() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            select_move(&GameState::new_game(), 0, &PositionalScorer, &mut rng),
            Err(ChessErrors::InvalidSearchDepth(0))
        );
        let mated = GameState::from_fen("3R2k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
        assert_eq!(
            select_move(&mated, 2, &PositionalScorer, &mut rng),
            Err(ChessErrors::NoLegalMoves)
        );
    }
}
