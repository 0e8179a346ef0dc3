use quickcheck::{Arbitrary, Gen};

use crate::{Board, Mark};

/// A reachable, non-terminal position: some number of legal alternating
/// plies from the empty board, with at least one cell still open and no
/// line completed yet.
#[derive(Clone, Debug)]
pub struct MidgameBoard {
    pub board: Board,
    /// The mark whose turn it is in this position.
    pub to_move: Mark,
}

impl Arbitrary for MidgameBoard {
    fn arbitrary(g: &mut Gen) -> Self {
        // At most 7 plies, so the resulting board always has open cells
        let num_plies = usize::arbitrary(g) % 8;
        let mut board = Board::new();
        let mut to_move = Mark::X;
        for _ in 0..num_plies {
            let moves = board.available_moves();
            let &index = g.choose(&moves).unwrap();
            let next = board.with_mark(index, to_move);
            // Don't walk past the end of the game
            if next.is_winner(to_move) {
                break;
            }
            board = next;
            to_move = to_move.opponent();
        }
        MidgameBoard { board, to_move }
    }
}

impl Arbitrary for Mark {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[Mark::X, Mark::O]).unwrap()
    }
}
