//! Core Connect Four game logic: the board with its win/full detection, the
//! two marks, and the derived game outcome.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, MoveError, COLS, CONNECT, ROWS};
pub use player::Mark;
pub use state::GameOutcome;
