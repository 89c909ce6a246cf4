//! Game loop and the console glue around it: mode menu, seat assignment,
//! replay prompt.

mod game;
mod setup;

pub use game::GameContext;
pub use setup::{ask_replay, select_mode, GameMode, Session, SessionSummary};
