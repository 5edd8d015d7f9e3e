use crate::games::SessionRng;
use super::board::{Board, LINES, get_available_moves};
use super::types::{Difficulty, Mark, Move, Outcome, TicTacToeError};
use super::win_detector::evaluate;

const WIN_SCORE: i32 = 10;
const LOSS_SCORE: i32 = -10;
const DRAW_SCORE: i32 = 0;

/// Picks the computer's next cell. The board is only read; applying the
/// move is up to the caller.
///
/// Tie-breaks are part of the contract: Medium acts on the first qualifying
/// line in [`LINES`] order, and Hard takes the lowest index among the moves
/// that reach the best score.
pub fn select_move(
    board: &Board,
    computer_mark: Mark,
    difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Result<Move, TicTacToeError> {
    let opponent_mark = computer_mark
        .opponent()
        .ok_or(TicTacToeError::InvalidMark)?;
    let available_moves = get_available_moves(board);

    if available_moves.is_empty() {
        return Err(TicTacToeError::NoMoveAvailable);
    }

    let chosen = match difficulty {
        Difficulty::Easy => calculate_random_move(&available_moves, rng),
        Difficulty::Medium => find_line_completion(board, computer_mark)
            .or_else(|| find_line_completion(board, opponent_mark))
            .unwrap_or_else(|| calculate_random_move(&available_moves, rng)),
        Difficulty::Hard => calculate_minimax_move(board, computer_mark, opponent_mark)
            .unwrap_or_else(|| calculate_random_move(&available_moves, rng)),
    };

    Ok(chosen)
}

fn calculate_random_move(available_moves: &[Move], rng: &mut SessionRng) -> Move {
    let idx = rng.random_range(0..available_moves.len());
    available_moves[idx]
}

/// First line holding two `mark`s and one empty cell, answered with that
/// empty cell. Used both to win (own mark) and to block (opponent's mark).
fn find_line_completion(board: &Board, mark: Mark) -> Option<Move> {
    let cells = board.cells();
    for line in LINES {
        let own = line.iter().filter(|&&i| cells[i] == mark).count();
        let empty = line.iter().find(|&&i| cells[i] == Mark::Empty);
        if own == 2
            && let Some(&index) = empty
        {
            return Some(Move::new(index));
        }
    }
    None
}

fn calculate_minimax_move(board: &Board, bot_mark: Mark, opponent_mark: Mark) -> Option<Move> {
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for candidate in get_available_moves(board) {
        let next = board.with_mark(candidate.index, bot_mark);
        let score = minimax(next, opponent_mark, bot_mark, opponent_mark);

        if score > best_score {
            best_score = score;
            best_move = Some(candidate);
        }
    }

    best_move
}

fn minimax(board: Board, to_move: Mark, bot_mark: Mark, opponent_mark: Mark) -> i32 {
    match evaluate(&board) {
        Outcome::Win(line) if line.mark == bot_mark => return WIN_SCORE,
        Outcome::Win(_) => return LOSS_SCORE,
        Outcome::Draw => return DRAW_SCORE,
        Outcome::Ongoing => {}
    }

    let is_maximizing = to_move == bot_mark;
    let next_to_move = if is_maximizing { opponent_mark } else { bot_mark };
    let scores = get_available_moves(&board).into_iter().map(|m| {
        minimax(
            board.with_mark(m.index, to_move),
            next_to_move,
            bot_mark,
            opponent_mark,
        )
    });

    let best = if is_maximizing { scores.max() } else { scores.min() };
    best.unwrap_or(DRAW_SCORE)
}
