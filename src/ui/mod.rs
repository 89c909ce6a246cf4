//! Console front end: the line-based [`Terminal`] the game talks to, and the
//! text rendering of boards and announcements.

mod console;
pub mod game_view;

pub use console::{Console, Terminal};
