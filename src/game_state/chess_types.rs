//! Plain value types shared by every subsystem of the engine.
//!
//! Colors, piece kinds, pieces and board coordinates live here. Everything in
//! this module is `Copy` and immutable once built; the mutable containers
//! (`Board`, `GameState`) are defined in sibling modules.

use crate::chess_errors::ChessErrors;

/// Side of a piece, and the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Starts on rows 6-7 (ranks 2 and 1) and moves toward row 0.
    Light,
    /// Starts on rows 0-1 (ranks 8 and 7) and moves toward row 7.
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Row delta of a single pawn step for this side.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }

    /// Row holding this side's king and rooks at the start of a game.
    #[inline]
    pub const fn back_row(self) -> u8 {
        match self {
            Color::Light => 7,
            Color::Dark => 0,
        }
    }

    /// Row this side's pawns start on.
    #[inline]
    pub const fn pawn_row(self) -> u8 {
        match self {
            Color::Light => 6,
            Color::Dark => 1,
        }
    }

    /// Row on which this side's pawns promote.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }
}

/// Piece kind (color is carried separately in `Piece`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Kinds a pawn may turn into, in the order the promotion prompt lists them.
    pub const PROMOTION_CHOICES: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    /// Lowercase letter used in coordinate move names.
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    #[inline]
    pub const fn is_promotion_choice(self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        )
    }
}

/// A colored piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

/// A square on the 8x8 grid.
///
/// Row 0 is the top of the board (rank 8) and column 0 is the a-file. The
/// fields are private so an off-grid position can never be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Builds a position, rejecting coordinates outside `0..=7`.
    pub fn new(row: u8, col: u8) -> Result<Self, ChessErrors> {
        if row > 7 || col > 7 {
            return Err(ChessErrors::InvalidRowOrColumn((row, col)));
        }
        Ok(Self { row, col })
    }

    /// Internal constructor for coordinates already known to be on the grid.
    #[inline]
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        debug_assert!(row < 8 && col < 8);
        Self { row, col }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// The position shifted by `(d_row, d_col)`, or `None` when that leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self::at(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Every square of the board, row by row from the top left.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Position::at(row, col)))
    }
}

/// Where each king currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KingPositions {
    pub light: Position,
    pub dark: Position,
}

impl KingPositions {
    #[inline]
    pub const fn get(&self, color: Color) -> Position {
        match color {
            Color::Light => self.light,
            Color::Dark => self.dark,
        }
    }

    #[inline]
    pub fn set(&mut self, color: Color, position: Position) {
        match color {
            Color::Light => self.light = position,
            Color::Dark => self.dark = position,
        }
    }
}

/// Pieces taken so far, keyed by the side that captured them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedPieces {
    /// Dark pieces captured by Light.
    pub light: Vec<Piece>,
    /// Light pieces captured by Dark.
    pub dark: Vec<Piece>,
}

impl CapturedPieces {
    pub fn by(&self, capturer: Color) -> &[Piece] {
        match capturer {
            Color::Light => &self.light,
            Color::Dark => &self.dark,
        }
    }

    pub fn push(&mut self, capturer: Color, piece: Piece) {
        match capturer {
            Color::Light => self.light.push(piece),
            Color::Dark => self.dark.push(piece),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_rejects_off_grid_coordinates() {
        assert!(Position::new(7, 7).is_ok());
        assert!(matches!(
            Position::new(8, 0),
            Err(ChessErrors::InvalidRowOrColumn((8, 0)))
        ));
        assert!(Position::new(0, 9).is_err());
    }

    #[test]
    fn offset_stays_on_the_board() {
        let corner = Position::at(0, 0);
        assert_eq!(corner.offset(1, 2), Some(Position::at(1, 2)));
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(Position::at(7, 7).offset(0, 1), None);
    }

    #[test]
    fn all_positions_cover_the_grid_once() {
        let all: Vec<Position> = Position::all().collect();
        assert_eq!(all.len(), 64);
        assert_eq!(all[0], Position::at(0, 0));
        assert_eq!(all[63], Position::at(7, 7));
    }

    #[test]
    fn color_geometry_is_mirrored() {
        assert_eq!(Color::Light.forward(), -Color::Dark.forward());
        assert_eq!(Color::Light.promotion_row(), Color::Dark.back_row());
        assert_eq!(Color::Dark.opposite(), Color::Light);
    }
}
