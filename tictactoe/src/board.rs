use std::str::FromStr;

use crate::IllegalMove;

/// The number of cells on the board.
pub const NUM_CELLS: usize = 9;

/// The 8 index triples that constitute a win: 3 rows, 3 columns, 2 diagonals.
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

/// One of the two symbols a player is bound to for the duration of a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The other mark.
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A 3x3 playing grid.
///
/// Cells are indexed 0-8 in row-major order, so row `r` and column `c`
/// map to index `3 * r + c`:
///
/// ```text
///  0 | 1 | 2
/// ---|---|---
///  3 | 4 | 5
/// ---|---|---
///  6 | 7 | 8
/// ```
///
/// The board is small enough to be `Copy`, which is what the strategies
/// rely on for speculative placement: they copy the board via
/// [`Board::with_mark()`] instead of mutating the one they were handed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Mark>; NUM_CELLS],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [None; NUM_CELLS],
        }
    }

    /// Returns the mark at `index`, if any.
    ///
    /// Panics if `index` is out of bounds.
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells[index]
    }

    /// Places `mark` at `index`.
    ///
    /// Marks are only ever added, never unset. Placing onto an occupied
    /// cell or outside the grid is rejected and leaves the board untouched,
    /// so callers can re-prompt on the error.
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), IllegalMove> {
        if index >= NUM_CELLS {
            return Err(IllegalMove::OutOfBounds { index });
        }
        if let Some(occupied_by) = self.cells[index] {
            return Err(IllegalMove::CellOccupied { index, occupied_by });
        }
        self.cells[index] = Some(mark);
        Ok(())
    }

    /// Returns a copy of this board with `mark` placed at `index`.
    ///
    /// This is the "what-if" primitive the strategies are built on.
    /// Panics if `index` is occupied or out of bounds; strategies only
    /// call it with indices from [`Self::available_moves()`].
    pub fn with_mark(&self, index: usize, mark: Mark) -> Board {
        let mut copy = *self;
        copy.place(index, mark)
            .expect("speculative placement on a cell that is not available");
        copy
    }

    /// Whether any of the 8 [`LINES`] is fully occupied by `mark`.
    pub fn is_winner(&self, mark: Mark) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|&i| self.cells[i] == Some(mark)))
    }

    /// Whether every cell is occupied.
    ///
    /// A full board can still have a winner; check [`Self::is_winner()`]
    /// first when deciding how a game ended.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// The indices of all empty cells, in ascending order.
    ///
    /// An empty result signals a full board.
    pub fn available_moves(&self) -> Vec<usize> {
        (0..NUM_CELLS).filter(|&i| self.cells[i].is_none()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the board as 9 characters in cell order, `.` for empty cells.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(mark) => write!(f, "{}", mark)?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}

/// The error type for parsing a [`Board`] from its 9-character form.
#[derive(Debug, PartialEq, Eq)]
pub struct ParseBoardError;

impl std::error::Error for ParseBoardError {}

impl std::fmt::Display for ParseBoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "A board is exactly 9 characters, each one of 'X', 'O' or '.'")
    }
}

/// Parses the 9-character form produced by the `Display` impl,
/// e.g. `"XX.OO...."`.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; NUM_CELLS];
        let mut chars = s.chars();
        for cell in cells.iter_mut() {
            *cell = match chars.next() {
                Some('X') => Some(Mark::X),
                Some('O') => Some(Mark::O),
                Some('.') => None,
                _ => return Err(ParseBoardError),
            };
        }
        if chars.next().is_some() {
            return Err(ParseBoardError);
        }
        Ok(Self { cells })
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::MidgameBoard;

    /// Winner check written out coordinate-wise, independently of [`LINES`].
    fn winner_by_scan(board: &Board, mark: Mark) -> bool {
        let at = |r: usize, c: usize| board.get(3 * r + c) == Some(mark);
        (0..3).any(|r| (0..3).all(|c| at(r, c)))
            || (0..3).any(|c| (0..3).all(|r| at(r, c)))
            || (0..3).all(|i| at(i, i))
            || (0..3).all(|i| at(i, 2 - i))
    }

    /// Every possible assignment of the 9 cells, reachable or not.
    fn all_boards() -> impl Iterator<Item = Board> {
        (0..3usize.pow(9)).map(|mut code| {
            let mut board = Board::new();
            for i in 0..NUM_CELLS {
                board.cells[i] = match code % 3 {
                    0 => None,
                    1 => Some(Mark::X),
                    _ => Some(Mark::O),
                };
                code /= 3;
            }
            board
        })
    }

    #[test]
    fn oracle_agrees_with_scan_on_all_boards() {
        for board in all_boards() {
            for mark in [Mark::X, Mark::O] {
                assert_eq!(
                    board.is_winner(mark),
                    winner_by_scan(&board, mark),
                    "disagreement on {} for {}",
                    board,
                    mark
                );
            }
            assert_eq!(board.is_full(), board.available_moves().is_empty());
        }
    }

    #[test]
    fn winner_rows_columns_diagonals() {
        let row: Board = "OOOXX.X..".parse().unwrap();
        assert!(row.is_winner(Mark::O));
        assert!(!row.is_winner(Mark::X));

        let column: Board = "X.OX.OXO.".parse().unwrap();
        assert!(column.is_winner(Mark::X));

        let diagonal: Board = "X..OX.O.X".parse().unwrap();
        assert!(diagonal.is_winner(Mark::X));

        let anti_diagonal: Board = "XXO.O.OX.".parse().unwrap();
        assert!(anti_diagonal.is_winner(Mark::O));
    }

    #[test]
    fn full_board_can_still_have_a_winner() {
        let board: Board = "XXXOOXOXO".parse().unwrap();
        assert!(board.is_full());
        assert!(board.is_winner(Mark::X));
        assert!(!board.is_winner(Mark::O));
    }

    #[test]
    fn place_rejects_occupied_and_out_of_bounds() {
        let mut board = Board::new();
        board.place(4, Mark::X).unwrap();
        assert_eq!(
            board.place(4, Mark::O),
            Err(IllegalMove::CellOccupied {
                index: 4,
                occupied_by: Mark::X
            })
        );
        assert_eq!(board.place(9, Mark::O), Err(IllegalMove::OutOfBounds { index: 9 }));
        // The failed placements left the board alone
        assert_eq!(board.to_string(), "....X....");
    }

    #[test]
    fn display_parse_round_trip() {
        let s = "XX.OO...X";
        let board: Board = s.parse().unwrap();
        assert_eq!(board.to_string(), s);
        assert!("XX.OO...".parse::<Board>().is_err());
        assert!("XX.OO...XO".parse::<Board>().is_err());
        assert!("XX.OO...?".parse::<Board>().is_err());
    }

    quickcheck! {
        fn opponent_is_an_involution(mark: Mark) -> bool {
            mark.opponent() != mark && mark.opponent().opponent() == mark
        }

        fn available_moves_ascending_and_empty(position: MidgameBoard) -> bool {
            let moves = position.board.available_moves();
            moves.windows(2).all(|w| w[0] < w[1])
                && moves.iter().all(|&i| position.board.get(i).is_none())
        }

        fn placing_removes_exactly_that_index(position: MidgameBoard) -> bool {
            let board = position.board;
            let moves = board.available_moves();
            let Some(&index) = moves.first() else {
                return true;
            };
            let after = board.with_mark(index, position.to_move);
            let expected: Vec<usize> = moves.into_iter().filter(|&i| i != index).collect();
            after.available_moves() == expected
        }
    }
}
