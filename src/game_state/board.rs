//! The 8x8 grid of optional pieces.
//!
//! `Board` is a small `Copy` value (64 optional pieces) so callers can take a
//! snapshot for legality simulation or undo history without allocation.
//! Mutation is crate-private: only the executor and the make/unmake cycle are
//! allowed to move pieces.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// The conventional starting arrangement, Dark on rows 0-1 and Light on rows 6-7.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            board.set(Position::at(0, col), Some(Piece::new(Color::Dark, *kind)));
            board.set(Position::at(1, col), Some(Piece::new(Color::Dark, PieceKind::Pawn)));
            board.set(Position::at(6, col), Some(Piece::new(Color::Light, PieceKind::Pawn)));
            board.set(Position::at(7, col), Some(Piece::new(Color::Light, *kind)));
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        self.squares[position.row() as usize][position.col() as usize]
    }

    #[inline]
    pub fn is_empty_at(&self, position: Position) -> bool {
        self.piece_at(position).is_none()
    }

    #[inline]
    pub(crate) fn set(&mut self, position: Position, piece: Option<Piece>) {
        self.squares[position.row() as usize][position.col() as usize] = piece;
    }

    #[inline]
    pub(crate) fn take(&mut self, position: Position) -> Option<Piece> {
        self.squares[position.row() as usize][position.col() as usize].take()
    }

    /// Every occupied square with its piece, row by row from the top left.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |position| {
            self.piece_at(position).map(|piece| (position, piece))
        })
    }

    /// Occupied squares of one color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// First king of `color` found scanning from the top left.
    pub fn find_king(&self, color: Color) -> Option<Position> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(position, _)| position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_board_has_thirty_two_pieces() {
        let board = Board::standard();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.pieces_of(Color::Light).count(), 16);
        assert_eq!(board.find_king(Color::Light), Some(Position::at(7, 4)));
        assert_eq!(board.find_king(Color::Dark), Some(Position::at(0, 4)));
        assert_eq!(
            board.piece_at(Position::at(0, 3)),
            Some(Piece::new(Color::Dark, PieceKind::Queen))
        );
        for row in 2..6 {
            for col in 0..8 {
                assert!(board.is_empty_at(Position::at(row, col)));
            }
        }
    }

    #[test]
    fn take_clears_the_square() {
        let mut board = Board::standard();
        let knight = board.take(Position::at(7, 1));
        assert_eq!(knight, Some(Piece::new(Color::Light, PieceKind::Knight)));
        assert!(board.is_empty_at(Position::at(7, 1)));
        assert_eq!(board.take(Position::at(7, 1)), None);
    }
}
