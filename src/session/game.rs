use crate::error::PlayError;
use crate::game::{Board, GameOutcome, Mark};
use crate::policy::MovePolicy;
use crate::ui::{game_view, Terminal};

/// One game in progress: the live board and the two sides, X first.
///
/// Restarting means building a new context; nothing carries over.
pub struct GameContext {
    board: Board,
    players: [Box<dyn MovePolicy>; 2],
    current: usize,
}

impl GameContext {
    /// `first` moves first and must play X, `second` plays O.
    pub fn new(first: Box<dyn MovePolicy>, second: Box<dyn MovePolicy>) -> Self {
        debug_assert_eq!(first.mark(), Mark::X);
        debug_assert_eq!(second.mark(), Mark::O);
        GameContext {
            board: Board::new(),
            players: [first, second],
            current: 0,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The policy seated on `mark`.
    pub fn player(&self, mark: Mark) -> &dyn MovePolicy {
        match mark {
            Mark::X => self.players[0].as_ref(),
            Mark::O => self.players[1].as_ref(),
        }
    }

    /// Mark of the side to move.
    pub fn current_mark(&self) -> Mark {
        self.players[self.current].mark()
    }

    /// Play one turn for the side to move, re-asking it until its column is
    /// accepted. Returns the outcome after the move; the turn passes only while
    /// the game is still in progress.
    pub fn play_turn(&mut self, terminal: &mut dyn Terminal) -> Result<GameOutcome, PlayError> {
        let mark = self.current_mark();

        let (row, col) = loop {
            let col = self.players[self.current].choose_column(&self.board, terminal)?;
            match self.board.drop_piece(col, mark) {
                Ok(row) => break (row, col),
                Err(err) => {
                    log::warn!(
                        "{} ({mark}) picked column {col}: {err}",
                        self.players[self.current].name()
                    );
                    game_view::render_rejected_move(terminal)?;
                }
            }
        };

        let outcome = if self.board.check_win_at(row, col) {
            GameOutcome::Winner(mark)
        } else if self.board.is_full() {
            GameOutcome::Draw
        } else {
            self.current = 1 - self.current;
            GameOutcome::InProgress
        };
        debug_assert_eq!(outcome, self.board.outcome());
        Ok(outcome)
    }

    /// Run the game to completion, rendering as it goes.
    pub fn play(&mut self, terminal: &mut dyn Terminal) -> Result<GameOutcome, PlayError> {
        loop {
            game_view::render_board(terminal, &self.board)?;
            game_view::render_turn(terminal, self.current_mark())?;

            let outcome = self.play_turn(terminal)?;
            if outcome.is_terminal() {
                game_view::render_board(terminal, &self.board)?;
                game_view::render_outcome(terminal, outcome)?;
                return Ok(outcome);
            }
        }
    }
}
