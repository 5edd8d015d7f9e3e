use super::board::Board;
use super::types::{Mark, Move, Outcome, TicTacToeError};
use super::win_detector::evaluate;

/// One round: X always opens, turns alternate until a line or a full board.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub outcome: Outcome,
    pub last_move: Option<Move>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            outcome: Outcome::Ongoing,
            last_move: None,
        }
    }

    pub fn place_mark(&mut self, index: usize) -> Result<Outcome, TicTacToeError> {
        if self.outcome.is_over() {
            return Err(TicTacToeError::GameOver);
        }

        self.board.place(index, self.current_mark)?;
        self.last_move = Some(Move::new(index));
        self.outcome = evaluate(&self.board);

        if self.outcome == Outcome::Ongoing {
            self.switch_turn();
        }

        Ok(self.outcome)
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == Mark::X {
            Mark::O
        } else {
            Mark::X
        };
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }
}
