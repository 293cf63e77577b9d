//! Game status types.

/// Outcome state of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Moves (or at least a draw or redeal) are still available.
    InProgress,
    /// All four foundations are complete.
    Won,
    /// A redeal came around with no move made since the previous one.
    /// Terminal, but a legitimate game outcome rather than an error.
    Stuck,
}

impl GameStatus {
    /// Returns whether the game has reached a terminal state.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}
