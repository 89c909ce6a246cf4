use std::fmt;

use super::player::Mark;
use super::state::GameOutcome;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Number of same-mark discs in a line needed to win.
pub const CONNECT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    /// Character used by the text rendering of the board.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

/// Why a disc could not be dropped. Both cases are ordinary during play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is out of range")]
    InvalidColumn,
    #[error("column is full")]
    ColumnFull,
}

/// The 6x7 grid. Row 0 is the top, row 5 is the bottom.
///
/// Discs only enter through [`Board::drop_piece`], so every column is a
/// contiguous stack growing up from row 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

/// Window directions as (row step, col step): horizontal, vertical,
/// diagonal down-right, diagonal up-right.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// True iff `col` is on the board and its top cell is empty.
    pub fn is_valid_move(&self, col: usize) -> bool {
        col < COLS && self.cells[0][col] == Cell::Empty
    }

    /// Columns that still accept a disc, ascending.
    pub fn valid_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| self.is_valid_move(col)).collect()
    }

    /// Drop a disc in a column, returns the row where it landed.
    /// On error the board is left untouched.
    pub fn drop_piece(&mut self, col: usize, mark: Mark) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }

        let row = (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][col] == Cell::Empty)
            .ok_or(MoveError::ColumnFull)?;

        self.cells[row][col] = mark.to_cell();
        Ok(row)
    }

    /// Check if the board is completely full.
    ///
    /// Looking at the top row is enough because columns have no gaps.
    pub fn is_full(&self) -> bool {
        self.cells[0].iter().all(|&cell| cell != Cell::Empty)
    }

    /// Number of discs on the board.
    pub fn disc_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Independent copy for speculative moves. Mutating it never touches `self`.
    pub fn snapshot(&self) -> Board {
        *self
    }

    /// True iff `mark` owns at least one line of four anywhere on the board.
    ///
    /// Scans every 4-cell window in all four directions.
    pub fn check_win(&self, mark: Mark) -> bool {
        let cell = mark.to_cell();

        for row in 0..ROWS {
            for col in 0..COLS {
                for &(dr, dc) in &DIRECTIONS {
                    if self.window_matches(row, col, dr, dc, cell) {
                        return true;
                    }
                }
            }
        }

        false
    }

    /// Check if the disc at (row, col) is part of a line of four.
    ///
    /// Only inspects lines through that cell, so after a drop this agrees with
    /// [`Board::check_win`] for the mark that was just played.
    pub fn check_win_at(&self, row: usize, col: usize) -> bool {
        let cell = self.get(row, col);
        if cell == Cell::Empty {
            return false;
        }

        DIRECTIONS.iter().any(|&(dr, dc)| {
            1 + self.run_length(row, col, dr, dc, cell) + self.run_length(row, col, -dr, -dc, cell)
                >= CONNECT
        })
    }

    /// Outcome derived from the grid alone.
    pub fn outcome(&self) -> GameOutcome {
        if self.check_win(Mark::X) {
            GameOutcome::Winner(Mark::X)
        } else if self.check_win(Mark::O) {
            GameOutcome::Winner(Mark::O)
        } else if self.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }

    /// Whether the four cells starting at (row, col) in direction (dr, dc)
    /// are all `cell`. Windows that leave the board never match.
    fn window_matches(&self, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> bool {
        (0..CONNECT as isize).all(|i| {
            offset(row, col, dr * i, dc * i).is_some_and(|(r, c)| self.cells[r][c] == cell)
        })
    }

    /// Count consecutive `cell`s starting next to (row, col) and walking (dr, dc).
    fn run_length(&self, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> usize {
        let mut count = 0;
        let (mut r, mut c) = (row, col);
        while let Some((nr, nc)) = offset(r, c, dr, dc) {
            if self.cells[nr][nc] != cell {
                break;
            }
            count += 1;
            r = nr;
            c = nc;
        }
        count
    }
}

fn offset(row: usize, col: usize, dr: isize, dc: isize) -> Option<(usize, usize)> {
    let r = row.checked_add_signed(dr)?;
    let c = col.checked_add_signed(dc)?;
    (r < ROWS && c < COLS).then_some((r, c))
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(|cell| cell.symbol().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        let legend: Vec<String> = (1..=COLS).map(|col| col.to_string()).collect();
        write!(f, "{}", legend.join(" "))
    }
}
