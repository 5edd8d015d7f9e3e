use super::board::{Board, LINES};
use super::types::{Mark, Outcome, TicTacToeError, WinningLine};

pub fn evaluate(board: &Board) -> Outcome {
    if let Some(line) = check_win_with_line(board) {
        return Outcome::Win(line);
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

pub fn evaluate_cells(cells: &[Mark]) -> Result<Outcome, TicTacToeError> {
    let board = Board::from_cells(cells)?;
    Ok(evaluate(&board))
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    LINES.iter().find_map(|&[a, b, c]| {
        let mark = cells[a];
        if mark != Mark::Empty && cells[b] == mark && cells[c] == mark {
            Some(WinningLine::new(mark, [a, b, c]))
        } else {
            None
        }
    })
}
