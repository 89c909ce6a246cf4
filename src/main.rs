use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use connect_four::config::AppConfig;
use connect_four::error::PlayError;
use connect_four::session::{GameMode, Session};
use connect_four::ui::Console;

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Skip the menu: one player against the computer, or two players
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Seed for seat assignment and computer moves
    #[arg(long)]
    seed: Option<u64>,

    /// Override the computer's thinking pause in milliseconds
    #[arg(long)]
    think_delay_ms: Option<u64>,

    /// Do not clear the screen between moves
    #[arg(long)]
    no_clear: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    One,
    Two,
}

impl From<ModeArg> for GameMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::One => GameMode::OnePlayer,
            ModeArg::Two => GameMode::TwoPlayer,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(seed) = cli.seed {
        config.ai.seed = Some(seed);
    }
    if let Some(delay) = cli.think_delay_ms {
        config.ai.think_delay_ms = delay;
    }
    if cli.no_clear {
        config.display.clear_screen = false;
    }
    config.validate().context("invalid configuration")?;

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock())
        .with_clear_screen(config.display.clear_screen);
    let mut session = Session::new(config, cli.mode.map(GameMode::from));

    match session.run(&mut console) {
        Ok(summary) => {
            log::info!(
                "played {} game(s): X won {}, O won {}, {} drawn",
                summary.games(),
                summary.x_wins,
                summary.o_wins,
                summary.draws
            );
            Ok(())
        }
        Err(PlayError::InputClosed) => {
            log::info!("input closed, leaving");
            Ok(())
        }
        Err(err) => Err(err).context("game session failed"),
    }
}
