use common::games::tictactoe::{CELL_COUNT, Difficulty, Mark};

use crate::config::GameMode;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Place(usize),
    NewRound,
    ResetAll,
    SetMode(GameMode),
    SetDifficulty(Difficulty),
    SetName { mark: Mark, name: String },
    ToggleMute,
    Export(Option<String>),
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
Commands:
  1-9                       place your mark (cells numbered left to right, top to bottom)
  new                       start a new round, keep the score
  reset                     start a new round and clear the score
  mode pvp|pvc              switch between two players and playing the computer
  difficulty easy|medium|hard
  name x|o <name>           rename a player
  mute                      toggle sound cues
  export [path]             write the score as JSON
  help                      show this help
  quit                      leave the game";

pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    if let Ok(cell) = word.parse::<usize>() {
        if !rest.is_empty() || !(1..=CELL_COUNT).contains(&cell) {
            return Err(format!("Cells are numbered 1 to {}", CELL_COUNT));
        }
        return Ok(Command::Place(cell - 1));
    }

    match word.to_ascii_lowercase().as_str() {
        "new" => Ok(Command::NewRound),
        "reset" => Ok(Command::ResetAll),
        "mode" => rest.parse().map(Command::SetMode),
        "difficulty" | "diff" => rest.parse().map(Command::SetDifficulty),
        "name" => parse_name(rest),
        "mute" => Ok(Command::ToggleMute),
        "export" => Ok(Command::Export(
            (!rest.is_empty()).then(|| rest.to_string()),
        )),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        "" => Err("Type a cell number or 'help'".to_string()),
        other => Err(format!("Unknown command '{}', type 'help'", other)),
    }
}

fn parse_name(rest: &str) -> Result<Command, String> {
    let Some((player, name)) = rest.split_once(char::is_whitespace) else {
        return Err("Usage: name x|o <name>".to_string());
    };
    let mark = match player.to_ascii_lowercase().as_str() {
        "x" => Mark::X,
        "o" => Mark::O,
        _ => return Err("Usage: name x|o <name>".to_string()),
    };
    Ok(Command::SetName {
        mark,
        name: name.trim().to_string(),
    })
}
