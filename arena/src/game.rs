use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tictactoe::{Board, Difficulty, Mark};
use tracing::trace;

pub enum GameResult {
    WonByEntrant { entrant_idx: usize },
    Tie,
}

/// Plays a single game between two difficulty levels.
///
/// Which entrant gets X (and with it the first move) is decided by a
/// shuffle, so that neither side keeps the first-move advantage over a
/// whole matchup.
pub fn play_game(rng: &mut StdRng, entrants: [Difficulty; 2]) -> GameResult {
    let mut entrant_for_mark = [0, 1];
    entrant_for_mark.shuffle(rng);

    let mut board = Board::new();
    let mut to_move = Mark::X;
    loop {
        let entrant_idx = entrant_for_mark[if to_move == Mark::X { 0 } else { 1 }];
        let difficulty = entrants[entrant_idx];
        let index = difficulty.choose_move(&board, to_move, rng);
        trace!(index, %difficulty, mark = %to_move);
        board
            .place(index, to_move)
            .expect("strategy returned an unavailable cell");

        if board.is_winner(to_move) {
            return GameResult::WonByEntrant { entrant_idx };
        }
        if board.is_full() {
            return GameResult::Tie;
        }
        to_move = to_move.opponent();
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn games_always_terminate_with_a_result() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut ties = 0;
        for _ in 0..200 {
            match play_game(&mut rng, [Difficulty::Random, Difficulty::Random]) {
                GameResult::WonByEntrant { entrant_idx } => assert!(entrant_idx < 2),
                GameResult::Tie => ties += 1,
            }
        }
        // Random vs. random ties roughly an eighth of the time; all 200
        // being ties (or none) would mean the loop is broken
        assert!(ties > 0 && ties < 200);
    }

    #[test]
    fn minimax_never_loses_a_matchup() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..30 {
            if let GameResult::WonByEntrant { entrant_idx } =
                play_game(&mut rng, [Difficulty::Minimax, Difficulty::Positional])
            {
                assert_eq!(entrant_idx, 0);
            }
        }
    }
}
