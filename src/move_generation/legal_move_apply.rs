//! Move application: board-level effects, the validated executor, and undo.
//!
//! `apply_move_to_board` is the single place that knows how a move rearranges
//! pieces (captures, en passant removal, castling rook relocation and
//! promotion). The legality filter, the make/unmake cycle and the executor
//! all go through it, so a simulated move and an executed move can never
//! disagree.

use log::debug;

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    KINGSIDE_CASTLE_COLS, KINGSIDE_ROOK_COL, QUEENSIDE_CASTLE_COLS, QUEENSIDE_ROOK_COL,
};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::game_state::game_status::GameStatus;
use crate::game_state::move_record::MoveRecord;
use crate::move_generation::game_end_classifier::classify_game_status;
use crate::move_generation::legal_move_generator::legal_moves;

/// What a move did to the board, enough to put it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardEffects {
    /// The piece as it stood on the origin square (a pawn, even when promoting).
    pub moved: Piece,
    /// Captured piece and the square it was removed from.
    pub captured: Option<(Position, Piece)>,
    /// Rook origin and destination when the move was a castle.
    pub rook_relocation: Option<(Position, Position)>,
    pub promoted_to: Option<PieceKind>,
}

/// Rearrange pieces for `from -> to`.
///
/// A pawn moving diagonally onto an empty square captures en passant, a king
/// moving two columns castles, and a pawn reaching its last row is replaced by
/// `promotion` when one is given. Returns `None` if `from` is empty.
pub(crate) fn apply_move_to_board(
    board: &mut Board,
    from: Position,
    to: Position,
    promotion: Option<PieceKind>,
) -> Option<BoardEffects> {
    let moved = board.take(from)?;

    let mut captured = board.take(to).map(|piece| (to, piece));
    if moved.kind == PieceKind::Pawn && from.col() != to.col() && captured.is_none() {
        let victim_at = Position::at(from.row(), to.col());
        captured = board.take(victim_at).map(|piece| (victim_at, piece));
    }

    let promoted_to = if moved.kind == PieceKind::Pawn && to.row() == moved.color.promotion_row() {
        promotion
    } else {
        None
    };
    let placed = promoted_to.map_or(moved, |kind| Piece::new(moved.color, kind));
    board.set(to, Some(placed));

    let mut rook_relocation = None;
    if moved.kind == PieceKind::King && from.col().abs_diff(to.col()) == 2 {
        let (rook_from_col, rook_to_col) = if to.col() > from.col() {
            (KINGSIDE_ROOK_COL, KINGSIDE_CASTLE_COLS.1)
        } else {
            (QUEENSIDE_ROOK_COL, QUEENSIDE_CASTLE_COLS.1)
        };
        let rook_from = Position::at(from.row(), rook_from_col);
        let rook_to = Position::at(from.row(), rook_to_col);
        let rook = board.take(rook_from);
        board.set(rook_to, rook);
        rook_relocation = Some((rook_from, rook_to));
    }

    Some(BoardEffects {
        moved,
        captured,
        rook_relocation,
        promoted_to,
    })
}

/// Inverse of [`apply_move_to_board`].
pub(crate) fn revert_move_on_board(
    board: &mut Board,
    from: Position,
    to: Position,
    effects: &BoardEffects,
) {
    if let Some((rook_from, rook_to)) = effects.rook_relocation {
        let rook = board.take(rook_to);
        board.set(rook_from, rook);
    }
    board.set(to, None);
    board.set(from, Some(effects.moved));
    if let Some((at, piece)) = effects.captured {
        board.set(at, Some(piece));
    }
}

/// Result of a validated move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteOutcome {
    /// The move was played; payload is the new side to move's status.
    Applied(GameStatus),
    /// The move promotes and no kind was supplied. Nothing was changed.
    PromotionRequired { from: Position, to: Position },
}

/// Validate and play `from -> to` on the live game.
///
/// Every precondition is checked before the first mutation, so an `Err` or a
/// `PromotionRequired` outcome leaves `game_state` untouched. On success the
/// move is recorded with a full snapshot, captures are credited to the mover
/// and the side to move flips.
pub fn execute_move(
    game_state: &mut GameState,
    from: Position,
    to: Position,
    promotion: Option<PieceKind>,
) -> Result<ExecuteOutcome, ChessErrors> {
    let piece = game_state
        .board
        .piece_at(from)
        .ok_or(ChessErrors::EmptySquare(from))?;
    if piece.color != game_state.side_to_move {
        return Err(ChessErrors::NotSideToMove(from));
    }
    if !legal_moves(game_state, from).contains(&to) {
        return Err(ChessErrors::IllegalMove { from, to });
    }

    let promotes = piece.kind == PieceKind::Pawn && to.row() == piece.color.promotion_row();
    match (promotes, promotion) {
        (true, None) => return Ok(ExecuteOutcome::PromotionRequired { from, to }),
        (true, Some(kind)) if !kind.is_promotion_choice() => {
            return Err(ChessErrors::InvalidPromotionChoice(kind))
        }
        (false, Some(_)) => return Err(ChessErrors::UnexpectedPromotion { from, to }),
        _ => {}
    }

    let mut record = MoveRecord {
        from,
        to,
        moving_piece: piece,
        captured_piece: None,
        promotion,
        board_before: game_state.board,
        king_positions_before: game_state.king_positions,
        side_to_move_before: game_state.side_to_move,
        castling_before: game_state.castling,
        en_passant_before: game_state.en_passant,
    };

    let undo = game_state
        .make_move_unchecked(from, to, promotion)
        .ok_or(ChessErrors::EmptySquare(from))?;

    record.captured_piece = undo.effects.captured.map(|(_, captured)| captured);
    if let Some(captured) = record.captured_piece {
        game_state.captured_pieces.push(piece.color, captured);
    }

    debug!(
        "{:?} {:?} {}{}{}{}",
        piece.color,
        piece.kind,
        from.to_algebraic(),
        if record.captured_piece.is_some() { "x" } else { "-" },
        to.to_algebraic(),
        promotion.map_or(String::new(), |kind| format!("={kind:?}")),
    );
    game_state.move_history.push(record);

    Ok(ExecuteOutcome::Applied(classify_game_status(game_state)))
}

/// Rewind up to `count` plies. Returns how many were actually undone.
///
/// Undoing past the start of history is a no-op for the missing plies.
/// Board, king positions, side to move, castling flags and en-passant square
/// come from the snapshot of the earliest undone ply; captured-piece lists are
/// rebuilt from what remains of the history.
pub fn undo_moves(game_state: &mut GameState, count: usize) -> usize {
    let count = count.min(game_state.move_history.len());
    if count == 0 {
        return 0;
    }

    let keep = game_state.move_history.len() - count;
    let Some(earliest) = game_state.move_history.split_off(keep).into_iter().next() else {
        return 0;
    };

    game_state.board = earliest.board_before;
    game_state.king_positions = earliest.king_positions_before;
    game_state.side_to_move = earliest.side_to_move_before;
    game_state.castling = earliest.castling_before;
    game_state.en_passant = earliest.en_passant_before;
    game_state.recompute_captured_pieces();

    debug!("undid {count} ply, {} remain", game_state.move_history.len());
    count
}
