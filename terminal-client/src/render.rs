use common::games::tictactoe::{BOARD_SIZE, Mark, Outcome, Score};

use crate::config::Config;
use crate::session::MatchSession;

pub fn render_board(session: &MatchSession) -> String {
    let state = session.state();
    let winning_line = match state.outcome {
        Outcome::Win(line) => Some(line),
        _ => None,
    };

    let rows: Vec<String> = (0..BOARD_SIZE)
        .map(|row| {
            (0..BOARD_SIZE)
                .map(|column| {
                    let index = row * BOARD_SIZE + column;
                    let mark = state.board.get(index).unwrap_or(Mark::Empty);
                    let highlighted = winning_line.is_some_and(|line| line.contains(index));
                    match (mark, highlighted) {
                        (Mark::Empty, _) => format!(" {} ", index + 1),
                        (mark, true) => format!("[{}]", mark),
                        (mark, false) => format!(" {} ", mark),
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();

    rows.join("\n---+---+---\n")
}

pub fn render_status(session: &MatchSession) -> String {
    let config = session.config();
    let state = session.state();
    match state.outcome {
        Outcome::Ongoing => format!(
            "Next: {} ({})",
            player_name(config, state.current_mark),
            state.current_mark
        ),
        Outcome::Win(line) => format!("{} wins!", player_name(config, line.mark)),
        Outcome::Draw => "Draw!".to_string(),
    }
}

pub fn render_score(config: &Config) -> String {
    let Score { x, o, draws } = config.score;
    format!(
        "{} (X): {}   Draws: {}   {} (O): {}",
        config.player_x.name, x, draws, config.player_o.name, o
    )
}

pub fn render_settings(config: &Config) -> String {
    format!(
        "Mode: {}   Difficulty: {}   Sound: {}",
        config.mode,
        config.difficulty,
        if config.muted { "off" } else { "on" }
    )
}

pub fn player_name(config: &Config, mark: Mark) -> &str {
    match mark {
        Mark::O => &config.player_o.name,
        _ => &config.player_x.name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::SessionRng;

    fn session() -> MatchSession {
        MatchSession::new(Config::default(), SessionRng::new(1))
    }

    #[test]
    fn test_empty_board_shows_cell_numbers() {
        let expected = " 1 | 2 | 3 \n---+---+---\n 4 | 5 | 6 \n---+---+---\n 7 | 8 | 9 ";
        assert_eq!(render_board(&session()), expected);
    }

    #[test]
    fn test_winning_line_is_bracketed() {
        let config = Config {
            mode: crate::config::GameMode::Pvp,
            ..Config::default()
        };
        let mut session = MatchSession::new(config, SessionRng::new(1));
        for index in [0, 3, 1, 4, 2] {
            session.play_human(index).unwrap();
        }
        let board = render_board(&session);
        assert!(board.starts_with("[X]|[X]|[X]"));
        assert!(board.contains(" O | O | 6 "));
        assert_eq!(render_status(&session), "Player X wins!");
    }

    #[test]
    fn test_status_names_next_player() {
        assert_eq!(render_status(&session()), "Next: Player X (X)");
    }

    #[test]
    fn test_score_line() {
        let config = Config {
            score: Score { x: 3, o: 1, draws: 2 },
            ..Config::default()
        };
        assert_eq!(
            render_score(&config),
            "Player X (X): 3   Draws: 2   Player O (O): 1"
        );
    }
}
