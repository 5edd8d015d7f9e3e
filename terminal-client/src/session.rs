use std::time::Duration;

use common::config::Validate;
use common::games::SessionRng;
use common::games::tictactoe::{
    Difficulty, Mark, Move, Outcome, TicTacToeError, TicTacToeGameState, select_move,
};
use common::log;

use crate::config::{Config, GameMode, PlayerConfig};

/// The computer always plays O and never opens a round.
pub const COMPUTER_MARK: Mark = Mark::O;

pub fn thinking_delay(difficulty: Difficulty) -> Duration {
    match difficulty {
        Difficulty::Easy => Duration::from_millis(350),
        Difficulty::Medium => Duration::from_millis(600),
        Difficulty::Hard => Duration::from_millis(450),
    }
}

/// A sequence of rounds sharing names, settings and the running score.
pub struct MatchSession {
    config: Config,
    state: TicTacToeGameState,
    rng: SessionRng,
}

impl MatchSession {
    pub fn new(config: Config, rng: SessionRng) -> Self {
        Self {
            config,
            state: TicTacToeGameState::new(),
            rng,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    pub fn is_computer_turn(&self) -> bool {
        self.config.mode == GameMode::Pvc
            && !self.state.is_over()
            && self.state.current_mark == COMPUTER_MARK
    }

    pub fn play_human(&mut self, index: usize) -> Result<Outcome, String> {
        if self.is_computer_turn() {
            return Err("Wait for the computer to move".to_string());
        }
        self.apply(index).map_err(|e| e.to_string())
    }

    pub fn play_computer(&mut self) -> Result<Move, TicTacToeError> {
        let difficulty = self.config.difficulty;
        let chosen = select_move(&self.state.board, COMPUTER_MARK, difficulty, &mut self.rng)?;
        self.apply(chosen.index)?;
        log!(
            "Computer ({}) played cell {} (row {}, column {})",
            difficulty,
            chosen.index + 1,
            chosen.row() + 1,
            chosen.column() + 1
        );
        Ok(chosen)
    }

    fn apply(&mut self, index: usize) -> Result<Outcome, TicTacToeError> {
        let outcome = self.state.place_mark(index)?;
        if outcome.is_over() {
            self.config.score.record(&outcome);
            match outcome {
                Outcome::Win(line) => log!(
                    "Round won by {} on cells {:?}",
                    line.mark,
                    line.cells.map(|i| i + 1)
                ),
                _ => log!("Round ended in a draw"),
            }
        }
        Ok(outcome)
    }

    pub fn new_round(&mut self) {
        self.state.reset();
    }

    pub fn reset_all(&mut self) {
        self.state.reset();
        self.config.score.clear();
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.config.mode = mode;
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config.difficulty = difficulty;
    }

    pub fn set_name(&mut self, mark: Mark, name: &str) -> Result<(), String> {
        let player = PlayerConfig::new(name);
        player.validate()?;
        match mark {
            Mark::X => self.config.player_x = player,
            Mark::O => self.config.player_o = player,
            Mark::Empty => return Err("Only X and O have names".to_string()),
        }
        Ok(())
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.config.muted = !self.config.muted;
        self.config.muted
    }
}
