//! Leaf-node counting over the legal move tree.
//!
//! Perft walks every legal line to a fixed depth with make/unmake on one
//! scratch state and counts the leaves. Promotions count once per promotion
//! kind, as in the published reference numbers.

use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_all_moves;
use crate::move_generation::move_generator::MoveCandidate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
    }
}

pub fn perft(game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }
    let mut scratch = game_state.clone();
    perft_recurse(&mut scratch, depth)
}

const PROMOTION_VARIANTS: [Option<PieceKind>; 4] = [
    Some(PieceKind::Queen),
    Some(PieceKind::Rook),
    Some(PieceKind::Bishop),
    Some(PieceKind::Knight),
];

fn promotion_variants(mv: MoveCandidate, board: &Board) -> &'static [Option<PieceKind>] {
    if mv.is_promotion(board) {
        &PROMOTION_VARIANTS
    } else {
        &[None]
    }
}

fn perft_recurse(game_state: &mut GameState, depth: u8) -> PerftCounts {
    let mut total = PerftCounts::default();

    for mv in generate_all_moves(game_state) {
        let promotions = promotion_variants(mv, &game_state.board);
        for &promotion in promotions {
            let Some(undo) = game_state.make_move_unchecked(mv.from, mv.to, promotion) else {
                continue;
            };

            if depth == 1 {
                let effects = undo.effects;
                total.nodes += 1;
                if effects.captured.is_some() {
                    total.captures += 1;
                    if effects.captured.map(|(at, _)| at) != Some(mv.to) {
                        total.en_passant += 1;
                    }
                }
                if effects.rook_relocation.is_some() {
                    total.castles += 1;
                }
                if effects.promoted_to.is_some() {
                    total.promotions += 1;
                }
            } else {
                total.merge(perft_recurse(game_state, depth - 1));
            }

            game_state.unmake_move(undo);
        }
    }

    total
}

/// Per-root-move node counts, handy when comparing against another generator.
///
/// Moves are named in coordinate form; a promotion gets one entry per kind
/// with the kind's letter appended (`a7a8q`, `a7a8n`).
pub fn perft_divide(game_state: &GameState, depth: u8) -> Vec<(String, u64)> {
    let mut scratch = game_state.clone();
    let mut out = Vec::new();
    if depth == 0 {
        return out;
    }
    for mv in generate_all_moves(&scratch) {
        for &promotion in promotion_variants(mv, &scratch.board) {
            let Some(undo) = scratch.make_move_unchecked(mv.from, mv.to, promotion) else {
                continue;
            };
            let nodes = if depth == 1 {
                1
            } else {
                perft_recurse(&mut scratch, depth - 1).nodes
            };
            scratch.unmake_move(undo);

            let mut name = format!("{}{}", mv.from.to_algebraic(), mv.to.to_algebraic());
            if let Some(kind) = promotion {
                name.push(kind.letter());
            }
            out.push((name, nodes));
        }
    }
    out
}
