/// Classification of the side to move, recomputed after every executed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    /// In check with at least one legal reply.
    Check,
    /// In check with no legal reply. Terminal; the side that just moved wins.
    Checkmate,
    /// Not in check but no legal move. Terminal; drawn.
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}
