use std::io;

use crate::game::{Board, GameOutcome, Mark};

use super::console::Terminal;

/// Redraw the whole board, legend included.
pub fn render_board(terminal: &mut dyn Terminal, board: &Board) -> io::Result<()> {
    terminal.clear()?;
    terminal.write_line(&board.to_string())
}

pub fn render_turn(terminal: &mut dyn Terminal, mark: Mark) -> io::Result<()> {
    terminal.write_line(&format!("Player {mark}'s turn."))
}

/// Final announcement. Nothing is printed while the game is still running.
pub fn render_outcome(terminal: &mut dyn Terminal, outcome: GameOutcome) -> io::Result<()> {
    match outcome {
        GameOutcome::Winner(mark) => terminal.write_line(&format!("Player {mark} wins!")),
        GameOutcome::Draw => terminal.write_line("The game is a tie!"),
        GameOutcome::InProgress => Ok(()),
    }
}

pub fn render_rejected_move(terminal: &mut dyn Terminal) -> io::Result<()> {
    terminal.write_line("Column is full or invalid. Try again.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Console;
    use std::io::Cursor;

    fn rendered(f: impl FnOnce(&mut dyn Terminal) -> io::Result<()>) -> String {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        let terminal: &mut dyn Terminal = &mut console;
        f(terminal).unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_render_board_ends_with_legend() {
        let mut board = Board::new();
        board.drop_piece(3, Mark::X).unwrap();
        let out = rendered(|t| render_board(t, &board));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[5], ". . . X . . .");
        assert_eq!(lines[6], "1 2 3 4 5 6 7");
    }

    #[test]
    fn test_render_announcements() {
        assert_eq!(rendered(|t| render_turn(t, Mark::O)), "Player O's turn.\n");
        assert_eq!(
            rendered(|t| render_outcome(t, GameOutcome::Winner(Mark::X))),
            "Player X wins!\n"
        );
        assert_eq!(
            rendered(|t| render_outcome(t, GameOutcome::Draw)),
            "The game is a tie!\n"
        );
        assert_eq!(rendered(|t| render_outcome(t, GameOutcome::InProgress)), "");
    }
}
