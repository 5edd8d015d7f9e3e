use std::io::Write;

use common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};
use common::games::tictactoe::Outcome;
use common::log;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::command::{Command, HELP_TEXT, parse_command};
use crate::config::Config;
use crate::export::export_score;
use crate::render::{render_board, render_score, render_settings, render_status};
use crate::session::{MatchSession, thinking_delay};
use crate::sound::{self, SoundCue};

pub type TerminalConfigManager = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

pub struct RunnerOptions {
    pub thinking_delay: bool,
}

enum Flow {
    Continue,
    Quit,
}

pub async fn run_game(
    mut session: MatchSession,
    config_manager: &TerminalConfigManager,
    options: RunnerOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    print_screen(&session);

    loop {
        if session.is_computer_turn() {
            if options.thinking_delay {
                tokio::time::sleep(thinking_delay(session.config().difficulty)).await;
            }
            session.play_computer()?;
            after_move(&session, config_manager);
            print_screen(&session);
            continue;
        }

        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{}", message);
                continue;
            }
        };

        if let Flow::Quit = handle_command(&mut session, config_manager, command) {
            break;
        }
    }

    save_config(&session, config_manager);
    Ok(())
}

fn handle_command(
    session: &mut MatchSession,
    config_manager: &TerminalConfigManager,
    command: Command,
) -> Flow {
    match command {
        Command::Place(index) => match session.play_human(index) {
            Ok(_) => {
                after_move(session, config_manager);
                print_screen(session);
            }
            Err(message) => println!("{}", message),
        },
        Command::NewRound => {
            session.new_round();
            print_screen(session);
        }
        Command::ResetAll => {
            session.reset_all();
            save_config(session, config_manager);
            print_screen(session);
        }
        Command::SetMode(mode) => {
            session.set_mode(mode);
            save_config(session, config_manager);
            println!("{}", render_settings(session.config()));
        }
        Command::SetDifficulty(difficulty) => {
            session.set_difficulty(difficulty);
            save_config(session, config_manager);
            println!("{}", render_settings(session.config()));
        }
        Command::SetName { mark, name } => match session.set_name(mark, &name) {
            Ok(()) => {
                save_config(session, config_manager);
                println!("{}", render_score(session.config()));
            }
            Err(message) => println!("{}", message),
        },
        Command::ToggleMute => {
            session.toggle_mute();
            save_config(session, config_manager);
            println!("{}", render_settings(session.config()));
        }
        Command::Export(path) => match export_score(&session.config().score, path.as_deref()) {
            Ok(written) => println!("Score exported to {}", written),
            Err(message) => println!("{}", message),
        },
        Command::Help => println!("{}", HELP_TEXT),
        Command::Quit => return Flow::Quit,
    }
    Flow::Continue
}

fn after_move(session: &MatchSession, config_manager: &TerminalConfigManager) {
    let muted = session.config().muted;
    match session.state().outcome {
        Outcome::Ongoing => sound::play(SoundCue::Click, muted),
        Outcome::Win(_) => {
            sound::play(SoundCue::Win, muted);
            save_config(session, config_manager);
        }
        Outcome::Draw => {
            sound::play(SoundCue::Click, muted);
            save_config(session, config_manager);
        }
    }
}

fn save_config(session: &MatchSession, config_manager: &TerminalConfigManager) {
    if let Err(e) = config_manager.set_config(session.config()) {
        log!("Failed to save preferences: {}", e);
    }
}

fn print_screen(session: &MatchSession) {
    println!();
    println!("{}", render_board(session));
    println!();
    println!("{}", render_status(session));
    println!("{}", render_score(session.config()));
    if session.state().is_over() {
        println!("Type 'new' for another round.");
    }
}
