use crate::error::PlayError;
use crate::game::{Board, Mark, COLS};
use crate::ui::Terminal;

use super::MovePolicy;

/// A human at the console. Keeps asking until the answer names a playable column.
pub struct InteractivePolicy {
    mark: Mark,
}

impl InteractivePolicy {
    pub fn new(mark: Mark) -> Self {
        InteractivePolicy { mark }
    }
}

/// Parse a user-facing column number (1-7) into a zero-based column.
pub fn parse_column(input: &str) -> Option<usize> {
    let number: usize = input.trim().parse().ok()?;
    (1..=COLS).contains(&number).then(|| number - 1)
}

impl MovePolicy for InteractivePolicy {
    fn choose_column(
        &mut self,
        board: &Board,
        terminal: &mut dyn Terminal,
    ) -> Result<usize, PlayError> {
        // Nothing the user types could be accepted.
        if board.valid_columns().is_empty() {
            return Err(PlayError::NoValidMove);
        }

        loop {
            terminal.write(&format!("Player {}, choose a column (1-{COLS}): ", self.mark))?;
            let line = terminal.read_line()?.ok_or(PlayError::InputClosed)?;

            match parse_column(&line) {
                Some(col) if board.is_valid_move(col) => return Ok(col),
                Some(col) => terminal.write_line(&format!("Column {} is full.", col + 1))?,
                None => {
                    log::debug!("rejected column input {line:?}");
                    terminal.write_line(&format!("Please enter a number between 1 and {COLS}."))?
                }
            }
        }
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        "Human"
    }
}
