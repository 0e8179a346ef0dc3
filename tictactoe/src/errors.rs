use crate::Mark;

/// The error type for [`Board::place()`](crate::Board::place).
#[derive(Debug, PartialEq, Eq)]
pub enum IllegalMove {
    OutOfBounds { index: usize },
    CellOccupied { index: usize, occupied_by: Mark },
}

impl std::error::Error for IllegalMove {}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::OutOfBounds { index } => {
                write!(f, "Cell index {} is outside the 3x3 grid", index)
            }
            IllegalMove::CellOccupied { index, occupied_by } => {
                write!(f, "Cell {} is already taken by {}", index, occupied_by)
            }
        }
    }
}

/// The error type for mapping a difficulty selector to a
/// [`Difficulty`](crate::Difficulty).
#[derive(Debug, PartialEq, Eq)]
pub struct InvalidDifficulty(pub u8);

impl std::error::Error for InvalidDifficulty {}

impl std::fmt::Display for InvalidDifficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Difficulty level must be between 1 and 5, got {}", self.0)
    }
}
