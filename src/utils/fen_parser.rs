//! FEN-to-GameState parser.
//!
//! Builds a ready-to-play `GameState` from a Forsyth-Edwards Notation string:
//! board, side to move, castling flags and the en-passant pawn. The move
//! clocks are validated when present but otherwise ignored, and the history
//! always starts empty.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::{CastlingFlags, CastlingSide, GameState};
use crate::utils::algebraic::from_algebraic;

pub fn parse_fen(fen: &str) -> Result<GameState, ChessErrors> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    let castling_part = parts.next().unwrap_or("-");
    let en_passant_part = parts.next().unwrap_or("-");

    for clock in parts.by_ref().take(2) {
        clock
            .parse::<u16>()
            .map_err(|_| invalid(&format!("invalid move clock '{clock}'")))?;
    }
    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let board = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;

    let light_king = find_single_king(&board, Color::Light)?;
    let dark_king = find_single_king(&board, Color::Dark)?;

    let castling = parse_castling(castling_part)?;
    let en_passant = parse_en_passant(en_passant_part, &board, side_to_move)?;

    Ok(GameState {
        board,
        side_to_move,
        king_positions: KingPositions {
            light: light_king,
            dark: dark_king,
        },
        castling,
        en_passant,
        move_history: Vec::new(),
        captured_pieces: CapturedPieces::default(),
    })
}

fn invalid(reason: &str) -> ChessErrors {
    ChessErrors::InvalidFen(reason.to_owned())
}

/// FEN ranks run from rank 8 down to rank 1, which is row 0 down to row 7 here.
fn parse_board(board_part: &str) -> Result<Board, ChessErrors> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut board = Board::empty();
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("invalid empty-square count '{ch}'")));
                }
                col += empty_count as u8;
                if col > 8 {
                    return Err(invalid("board rank has too many files"));
                }
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(&format!("invalid piece character '{ch}'")))?;
            if col >= 8 {
                return Err(invalid("board rank has too many files"));
            }
            board.set(Position::at(row as u8, col), Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err(invalid("board rank does not sum to 8 files"));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessErrors> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(invalid(&format!("invalid side to move '{side_part}'"))),
    }
}

fn find_single_king(board: &Board, color: Color) -> Result<Position, ChessErrors> {
    let king = Piece::new(color, PieceKind::King);
    let mut kings = board.pieces().filter(|(_, piece)| *piece == king);
    match (kings.next(), kings.next()) {
        (Some((position, _)), None) => Ok(position),
        (None, _) => Err(invalid(&format!("no {color:?} king"))),
        (Some(_), Some(_)) => Err(invalid(&format!("more than one {color:?} king"))),
    }
}

fn parse_castling(castling_part: &str) -> Result<CastlingFlags, ChessErrors> {
    let mut flags = CastlingFlags::all_moved();
    if castling_part == "-" {
        return Ok(flags);
    }

    for ch in castling_part.chars() {
        let (color, side) = match ch {
            'K' => (Color::Light, CastlingSide::Kingside),
            'Q' => (Color::Light, CastlingSide::Queenside),
            'k' => (Color::Dark, CastlingSide::Kingside),
            'q' => (Color::Dark, CastlingSide::Queenside),
            _ => return Err(invalid(&format!("invalid castling character '{ch}'"))),
        };
        flags.grant(color, side);
    }

    Ok(flags)
}

/// FEN names the square behind the pawn; the game state tracks the pawn itself.
fn parse_en_passant(
    en_passant_part: &str,
    board: &Board,
    side_to_move: Color,
) -> Result<Option<Position>, ChessErrors> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let target = from_algebraic(en_passant_part)
        .map_err(|_| invalid(&format!("invalid en-passant square '{en_passant_part}'")))?;
    let pawn_color = side_to_move.opposite();
    let pawn_at = target
        .offset(pawn_color.forward(), 0)
        .ok_or_else(|| invalid(&format!("impossible en-passant square '{en_passant_part}'")))?;

    if board.piece_at(pawn_at) != Some(Piece::new(pawn_color, PieceKind::Pawn))
        || !board.is_empty_at(target)
    {
        return Err(invalid(&format!(
            "no pawn can be taken en passant on '{en_passant_part}'"
        )));
    }

    Ok(Some(pawn_at))
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}
