mod command;
mod config;
mod export;
mod game_runner;
mod render;
mod session;
mod sound;

use clap::Parser;
use common::games::SessionRng;
use common::games::tictactoe::Difficulty;
use common::{log, logger};

use config::{GameMode, get_config_manager, get_config_path};
use game_runner::{RunnerOptions, run_game};
use session::MatchSession;

#[derive(Parser)]
#[command(name = "xo_terminal", about = "Tic-tac-toe in the terminal, against a friend or the computer")]
struct Args {
    /// Preferences file (names, mode, difficulty, sound, score)
    #[arg(long)]
    config: Option<String>,

    /// pvp or pvc
    #[arg(long)]
    mode: Option<GameMode>,

    /// easy, medium or hard
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Seed for the computer's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Let the computer answer without a pause
    #[arg(long)]
    no_delay: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("XO".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_path = args.config.unwrap_or_else(get_config_path);
    let config_manager = get_config_manager(&config_path);
    let mut config = config_manager.get_config()?;

    if let Some(mode) = args.mode {
        config.mode = mode;
    }
    if let Some(difficulty) = args.difficulty {
        config.difficulty = difficulty;
    }

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!(
        "Preferences loaded from {} ({}, {}, seed {})",
        config_path,
        config.mode,
        config.difficulty,
        rng.seed()
    );

    let session = MatchSession::new(config, rng);
    let options = RunnerOptions {
        thinking_delay: !args.no_delay,
    };

    run_game(session, &config_manager, options).await?;

    log!("Goodbye");
    Ok(())
}
