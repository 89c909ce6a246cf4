//! Move selection. A [`MovePolicy`] turns a board into a column choice; the
//! two implementations are a human at the console and the one-ply heuristic.

mod heuristic;
mod interactive;

pub use heuristic::{Decision, HeuristicPolicy};
pub use interactive::{parse_column, InteractivePolicy};

use crate::error::PlayError;
use crate::game::{Board, Mark};
use crate::ui::Terminal;

/// Universal interface for anything that can take a turn.
pub trait MovePolicy {
    /// Pick a zero-based column for [`MovePolicy::mark`] on `board`.
    ///
    /// The returned column satisfies `board.is_valid_move`. The board is only
    /// read; the caller applies the move.
    fn choose_column(
        &mut self,
        board: &Board,
        terminal: &mut dyn Terminal,
    ) -> Result<usize, PlayError>;

    /// The mark this policy plays.
    fn mark(&self) -> Mark;

    /// Display name, e.g. for logs.
    fn name(&self) -> &str;
}
