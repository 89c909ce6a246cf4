use super::Mark;

/// Where a game stands. Never stored; recomputed from the board after each move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Winner(Mark),
    Draw,
}

impl GameOutcome {
    /// Check if game is over
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    pub fn winner(self) -> Option<Mark> {
        match self {
            GameOutcome::Winner(mark) => Some(mark),
            _ => None,
        }
    }
}
