use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::AppConfig;
use crate::error::PlayError;
use crate::game::{GameOutcome, Mark};
use crate::policy::{HeuristicPolicy, InteractivePolicy, MovePolicy};
use crate::ui::Terminal;

use super::game::GameContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Human against the computer.
    OnePlayer,
    /// Two humans sharing the console.
    TwoPlayer,
}

impl GameMode {
    /// Menu answer to mode. Anything but "1" means two players.
    pub fn from_choice(choice: &str) -> GameMode {
        if choice.trim() == "1" {
            GameMode::OnePlayer
        } else {
            GameMode::TwoPlayer
        }
    }
}

/// Show the mode menu and read the answer.
pub fn select_mode(terminal: &mut dyn Terminal) -> Result<GameMode, PlayError> {
    terminal.write_line("Choose game mode:")?;
    terminal.write_line("1. One-player (You vs Computer)")?;
    terminal.write_line("2. Two-player (Player X vs Player O)")?;
    let choice = terminal.read_line()?.ok_or(PlayError::InputClosed)?;
    Ok(GameMode::from_choice(&choice))
}

/// Ask whether to start another game. End of input counts as "no".
pub fn ask_replay(terminal: &mut dyn Terminal) -> Result<bool, PlayError> {
    terminal.write("Play again? (y/n): ")?;
    let answer = terminal.read_line()?;
    Ok(answer.is_some_and(|a| a.trim().eq_ignore_ascii_case("y")))
}

/// Games finished in one session, by result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl SessionSummary {
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Winner(Mark::X) => self.x_wins += 1,
            GameOutcome::Winner(Mark::O) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::InProgress => {}
        }
    }

    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

/// Setup plus replay loop around [`GameContext`].
pub struct Session {
    config: AppConfig,
    mode: Option<GameMode>,
    rng: StdRng,
}

impl Session {
    /// `mode` skips the menu when set. A configured seed makes seat
    /// assignment and computer moves reproducible.
    pub fn new(config: AppConfig, mode: Option<GameMode>) -> Self {
        let rng = match config.ai.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Session { config, mode, rng }
    }

    /// Fresh board and fresh players. In one-player mode a coin flip decides
    /// whether the human gets X and moves first.
    pub fn new_game(&mut self, mode: GameMode) -> GameContext {
        match mode {
            GameMode::TwoPlayer => GameContext::new(
                Box::new(InteractivePolicy::new(Mark::X)),
                Box::new(InteractivePolicy::new(Mark::O)),
            ),
            GameMode::OnePlayer => {
                let human_first = self.rng.random_bool(0.5);
                let human_mark = if human_first { Mark::X } else { Mark::O };
                log::info!("human plays {human_mark}");

                let human: Box<dyn MovePolicy> = Box::new(InteractivePolicy::new(human_mark));
                let computer = match self.config.ai.seed {
                    Some(_) => HeuristicPolicy::with_seed(human_mark.other(), self.rng.random()),
                    None => HeuristicPolicy::new(human_mark.other()),
                };
                let computer: Box<dyn MovePolicy> =
                    Box::new(computer.with_think_delay(self.config.ai.think_delay()));
                if human_first {
                    GameContext::new(human, computer)
                } else {
                    GameContext::new(computer, human)
                }
            }
        }
    }

    /// Play games until the user declines a replay.
    pub fn run(&mut self, terminal: &mut dyn Terminal) -> Result<SessionSummary, PlayError> {
        let mut summary = SessionSummary::default();

        loop {
            let mode = match self.mode {
                Some(mode) => mode,
                None => select_mode(terminal)?,
            };
            log::info!("starting {mode:?} game");

            let mut game = self.new_game(mode);
            let outcome = game.play(terminal)?;
            summary.record(outcome);
            match outcome.winner() {
                Some(mark) => log::info!(
                    "{} ({mark}) won after {} discs",
                    game.player(mark).name(),
                    game.board().disc_count()
                ),
                None => log::info!("game drawn"),
            }

            if !ask_replay(terminal)? {
                return Ok(summary);
            }
        }
    }
}
