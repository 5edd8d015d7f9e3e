use super::types::{CELL_COUNT, Mark, Move, TicTacToeError};

/// Every winning triple. Scans run in this order, so the first match is
/// deterministic: rows, then columns, then the two diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    pub fn from_cells(cells: &[Mark]) -> Result<Self, TicTacToeError> {
        let cells: [Mark; CELL_COUNT] = cells
            .try_into()
            .map_err(|_| TicTacToeError::InvalidBoardShape { len: cells.len() })?;
        Ok(Self { cells })
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_valid_move(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), TicTacToeError> {
        if mark == Mark::Empty {
            return Err(TicTacToeError::InvalidMark);
        }
        match self.cells.get(index) {
            None => Err(TicTacToeError::OutOfBounds { index }),
            Some(Mark::Empty) => {
                self.cells[index] = mark;
                Ok(())
            }
            Some(_) => Err(TicTacToeError::CellOccupied { index }),
        }
    }

    /// Copy of this board with `mark` at `index`. Search branches use this
    /// so no two branches ever share a board.
    pub(crate) fn with_mark(&self, index: usize, mark: Mark) -> Self {
        let mut next = *self;
        next.cells[index] = mark;
        next
    }
}

pub fn get_available_moves(board: &Board) -> Vec<Move> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|&(_, &cell)| cell == Mark::Empty)
        .map(|(index, _)| Move::new(index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cells_rejects_wrong_length() {
        let short = [Mark::Empty; 8];
        assert_eq!(
            Board::from_cells(&short),
            Err(TicTacToeError::InvalidBoardShape { len: 8 })
        );
        let long = [Mark::Empty; 10];
        assert_eq!(
            Board::from_cells(&long),
            Err(TicTacToeError::InvalidBoardShape { len: 10 })
        );
    }

    #[test]
    fn test_available_moves_are_ascending_empty_cells() {
        use Mark::{Empty as E, O, X};
        let board = Board::from_cells(&[X, E, O, E, X, E, E, E, O]).unwrap();
        let indices: Vec<usize> = get_available_moves(&board).iter().map(|m| m.index).collect();
        assert_eq!(indices, vec![1, 3, 5, 6, 7]);
    }

    #[test]
    fn test_place_rejects_occupied_and_out_of_bounds() {
        let mut board = Board::new();
        assert!(board.place(4, Mark::X).is_ok());
        assert_eq!(
            board.place(4, Mark::O),
            Err(TicTacToeError::CellOccupied { index: 4 })
        );
        assert_eq!(
            board.place(9, Mark::O),
            Err(TicTacToeError::OutOfBounds { index: 9 })
        );
        assert_eq!(board.place(0, Mark::Empty), Err(TicTacToeError::InvalidMark));
        assert_eq!(board.get(4), Some(Mark::X));
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_mark(0, Mark::O);
        assert_eq!(board.get(0), Some(Mark::Empty));
        assert_eq!(next.get(0), Some(Mark::O));
    }

    #[test]
    fn test_lines_cover_every_cell() {
        for index in 0..CELL_COUNT {
            assert!(LINES.iter().any(|line| line.contains(&index)));
        }
    }
}
