mod board;
mod bot_controller;
mod game_state;
mod score;
mod types;
mod win_detector;

pub use board::{Board, LINES, get_available_moves};
pub use bot_controller::select_move;
pub use game_state::TicTacToeGameState;
pub use score::Score;
pub use types::{
    BOARD_SIZE, CELL_COUNT, Difficulty, Mark, Move, Outcome, TicTacToeError, WinningLine,
};
pub use win_detector::{check_win, check_win_with_line, evaluate, evaluate_cells};
