use std::thread;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::PlayError;
use crate::game::{Board, Mark};
use crate::ui::Terminal;

use super::MovePolicy;

/// Which tier of the heuristic produced a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Playing here wins immediately.
    Win(usize),
    /// Playing here stops the opponent from winning next move.
    Block(usize),
    /// Nothing urgent; uniform pick among valid columns.
    Random(usize),
}

impl Decision {
    pub fn column(self) -> usize {
        match self {
            Decision::Win(col) | Decision::Block(col) | Decision::Random(col) => col,
        }
    }
}

/// Computer opponent with one ply of lookahead: take a win, else block the
/// opponent's win, else play a random valid column.
pub struct HeuristicPolicy {
    mark: Mark,
    rng: StdRng,
    think_delay: Duration,
}

impl HeuristicPolicy {
    pub fn new(mark: Mark) -> Self {
        HeuristicPolicy {
            mark,
            rng: StdRng::from_os_rng(),
            think_delay: Duration::ZERO,
        }
    }

    /// Deterministic variant for reproducible games.
    pub fn with_seed(mark: Mark, seed: u64) -> Self {
        HeuristicPolicy {
            mark,
            rng: StdRng::seed_from_u64(seed),
            think_delay: Duration::ZERO,
        }
    }

    /// Pause before answering. Purely cosmetic.
    pub fn with_think_delay(mut self, think_delay: Duration) -> Self {
        self.think_delay = think_delay;
        self
    }

    /// Run the three tiers over the valid columns in ascending order.
    /// `None` only when the board has no valid column.
    pub fn decide(&mut self, board: &Board) -> Option<Decision> {
        let valid = board.valid_columns();
        if valid.is_empty() {
            return None;
        }

        if let Some(col) = first_winning_column(board, &valid, self.mark) {
            return Some(Decision::Win(col));
        }
        if let Some(col) = first_winning_column(board, &valid, self.mark.other()) {
            return Some(Decision::Block(col));
        }

        let idx = self.rng.random_range(0..valid.len());
        Some(Decision::Random(valid[idx]))
    }
}

/// Lowest column where dropping `mark` completes a line, tried on snapshots.
fn first_winning_column(board: &Board, valid: &[usize], mark: Mark) -> Option<usize> {
    valid.iter().copied().find(|&col| {
        let mut trial = board.snapshot();
        trial.drop_piece(col, mark).is_ok() && trial.check_win(mark)
    })
}

impl MovePolicy for HeuristicPolicy {
    fn choose_column(
        &mut self,
        board: &Board,
        terminal: &mut dyn Terminal,
    ) -> Result<usize, PlayError> {
        if !self.think_delay.is_zero() {
            terminal.write_line(&format!("Computer ({}) is thinking...", self.mark))?;
            thread::sleep(self.think_delay);
        }

        let decision = self.decide(board).ok_or(PlayError::NoValidMove)?;
        log::debug!("computer ({}) chose {:?}", self.mark, decision);
        Ok(decision.column())
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        "Computer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{COLS, ROWS};
    use crate::ui::Console;
    use std::io::Cursor;

    fn play(board: &mut Board, moves: &[(usize, Mark)]) {
        for &(col, mark) in moves {
            board.drop_piece(col, mark).unwrap();
        }
    }

    #[test]
    fn test_takes_horizontal_win() {
        let mut board = Board::new();
        play(
            &mut board,
            &[(1, Mark::O), (1, Mark::X), (2, Mark::O), (2, Mark::X), (3, Mark::O), (6, Mark::X)],
        );
        // O: 1,2,3 on the bottom row; both 0 and 4 win, lowest index first
        let mut policy = HeuristicPolicy::with_seed(Mark::O, 7);
        assert_eq!(policy.decide(&board), Some(Decision::Win(0)));
    }

    #[test]
    fn test_prefers_win_over_block() {
        let mut board = Board::new();
        // X threatens column 0 vertically, O threatens column 6 vertically
        play(
            &mut board,
            &[
                (0, Mark::X),
                (6, Mark::O),
                (0, Mark::X),
                (6, Mark::O),
                (0, Mark::X),
                (6, Mark::O),
            ],
        );
        let mut policy = HeuristicPolicy::with_seed(Mark::O, 1);
        assert_eq!(policy.decide(&board), Some(Decision::Win(6)));
    }

    #[test]
    fn test_blocks_opponent_three() {
        let mut board = Board::new();
        play(
            &mut board,
            &[(2, Mark::X), (2, Mark::O), (3, Mark::X), (3, Mark::O), (4, Mark::X), (0, Mark::O)],
        );
        // X threatens 1 and 5 on the bottom row; O has only two stacked
        let mut policy = HeuristicPolicy::with_seed(Mark::O, 3);
        assert_eq!(policy.decide(&board), Some(Decision::Block(1)));
    }

    #[test]
    fn test_blocks_vertical_threat() {
        let mut board = Board::new();
        play(&mut board, &[(5, Mark::X), (5, Mark::X), (5, Mark::X), (0, Mark::O)]);
        let mut policy = HeuristicPolicy::with_seed(Mark::O, 11);
        assert_eq!(policy.decide(&board), Some(Decision::Block(5)));
    }

    #[test]
    fn test_decision_leaves_board_untouched() {
        let mut board = Board::new();
        play(&mut board, &[(3, Mark::X), (3, Mark::X), (3, Mark::X)]);
        let before = board;
        let mut policy = HeuristicPolicy::with_seed(Mark::X, 5);
        assert_eq!(policy.decide(&board), Some(Decision::Win(3)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_random_fallback_is_valid() {
        let mut board = Board::new();
        for i in 0..ROWS {
            let mark = if i % 2 == 0 { Mark::X } else { Mark::O };
            board.drop_piece(0, mark).unwrap();
            board.drop_piece(6, mark.other()).unwrap();
        }

        let mut policy = HeuristicPolicy::with_seed(Mark::X, 99);
        for _ in 0..200 {
            match policy.decide(&board) {
                Some(Decision::Random(col)) => {
                    assert!(board.is_valid_move(col), "column {col} is not valid")
                }
                other => panic!("expected a random pick, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_random_fallback_covers_all_columns() {
        let board = Board::new();
        let mut policy = HeuristicPolicy::with_seed(Mark::X, 2024);
        let mut seen = [false; COLS];
        for _ in 0..500 {
            seen[policy.decide(&board).unwrap().column()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_unseeded_policy_plays_valid_columns() {
        let board = Board::new();
        let mut policy = HeuristicPolicy::new(Mark::O);
        assert_eq!(policy.mark(), Mark::O);
        assert_eq!(policy.name(), "Computer");
        assert!(board.is_valid_move(policy.decide(&board).unwrap().column()));
    }

    #[test]
    fn test_same_seed_same_choices() {
        let board = Board::new();
        let mut a = HeuristicPolicy::with_seed(Mark::X, 42);
        let mut b = HeuristicPolicy::with_seed(Mark::X, 42);
        for _ in 0..20 {
            assert_eq!(a.decide(&board), b.decide(&board));
        }
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.drop_piece(col, Mark::O).unwrap();
            }
        }
        let mut policy = HeuristicPolicy::with_seed(Mark::X, 0);
        assert_eq!(policy.decide(&board), None);

        let mut console = Console::new(Cursor::new(""), Vec::new());
        assert!(matches!(
            policy.choose_column(&board, &mut console),
            Err(PlayError::NoValidMove)
        ));
    }

    #[test]
    fn test_choose_column_never_invalid_during_self_play() {
        let mut board = Board::new();
        let mut policies = [
            HeuristicPolicy::with_seed(Mark::X, 10),
            HeuristicPolicy::with_seed(Mark::O, 20),
        ];
        let mut console = Console::new(Cursor::new(""), Vec::new());

        let mut turn = 0;
        while !board.outcome().is_terminal() {
            let policy = &mut policies[turn % 2];
            let col = policy.choose_column(&board, &mut console).unwrap();
            assert!(board.is_valid_move(col));
            board.drop_piece(col, policy.mark()).unwrap();
            turn += 1;
        }
        assert!(console.into_output().is_empty());
    }

    #[test]
    fn test_think_delay_announces() {
        let mut policy =
            HeuristicPolicy::with_seed(Mark::O, 1).with_think_delay(Duration::from_millis(1));
        let mut console = Console::new(Cursor::new(""), Vec::new());
        policy.choose_column(&Board::new(), &mut console).unwrap();
        let out = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(out, "Computer (O) is thinking...\n");
    }
}
