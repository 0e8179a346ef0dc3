use rand::seq::SliceRandom;
use rand::Rng;

use crate::{Board, InvalidDifficulty, Mark};

/// Cell indices the positional level prefers when it has no win or block
/// to play: the center first, then the corners.
const PREFERRED_CELLS: [usize; 5] = [4, 0, 2, 6, 8];

/// A bot difficulty level, from weakest to strongest.
///
/// Each level keeps all the reasoning of the level below it and adds one
/// refinement on top. The set is closed; selection happens once per bot
/// turn via [`Difficulty::choose_move()`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// Level 1: a uniformly random available cell.
    Random,
    /// Level 2: takes an immediate win when one exists, otherwise random.
    GreedyWin,
    /// Level 3: takes an immediate win, else blocks an immediate opponent
    /// win, otherwise random.
    ///
    /// Only a single threat is blocked per turn. A fork (two simultaneous
    /// threats) slips through; that weakness is what separates this level
    /// from [`Difficulty::Minimax`].
    WinOrBlock,
    /// Level 4: like [`Difficulty::WinOrBlock`], but prefers the center and
    /// then the corners over random placement.
    Positional,
    /// Level 5: full-depth minimax over the remaining game tree. Never
    /// loses, and wins whenever the position admits a forced win.
    Minimax,
}

impl Difficulty {
    /// All levels, in ascending strength.
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Random,
        Difficulty::GreedyWin,
        Difficulty::WinOrBlock,
        Difficulty::Positional,
        Difficulty::Minimax,
    ];

    /// The 1-based selector this level corresponds to.
    pub fn level(self) -> u8 {
        self as u8 + 1
    }

    /// Picks a cell for `bot` to play on `board`.
    ///
    /// The board is only read; all speculation happens on copies. The RNG
    /// drives the random fallback shared by levels 1-4 and is injected by
    /// the caller, so a seeded [`rand::rngs::StdRng`] makes every level
    /// reproducible (level 5 ignores it entirely).
    ///
    /// Callers must check that the board has at least one empty cell
    /// before calling; see [`Board::available_moves()`].
    pub fn choose_move(self, board: &Board, bot: Mark, rng: &mut impl Rng) -> usize {
        let moves = board.available_moves();
        debug_assert!(!moves.is_empty(), "choose_move called on a full board");
        match self {
            Difficulty::Random => pick_uniform(&moves, rng),
            Difficulty::GreedyWin => {
                winning_move(board, bot, &moves).unwrap_or_else(|| pick_uniform(&moves, rng))
            }
            Difficulty::WinOrBlock => winning_move(board, bot, &moves)
                .or_else(|| winning_move(board, bot.opponent(), &moves))
                .unwrap_or_else(|| pick_uniform(&moves, rng)),
            Difficulty::Positional => winning_move(board, bot, &moves)
                .or_else(|| winning_move(board, bot.opponent(), &moves))
                .or_else(|| {
                    PREFERRED_CELLS
                        .iter()
                        .copied()
                        .find(|cell| moves.contains(cell))
                })
                .unwrap_or_else(|| pick_uniform(&moves, rng)),
            Difficulty::Minimax => best_minimax_move(board, bot, &moves),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Random => "random",
            Difficulty::GreedyWin => "greedy-win",
            Difficulty::WinOrBlock => "win-or-block",
            Difficulty::Positional => "positional",
            Difficulty::Minimax => "minimax",
        };
        write!(f, "{}", name)
    }
}

/// Maps the user-facing selector 1-5 to a level.
impl TryFrom<u8> for Difficulty {
    type Error = InvalidDifficulty;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1..=5 => Ok(Difficulty::ALL[level as usize - 1]),
            _ => Err(InvalidDifficulty(level)),
        }
    }
}

fn pick_uniform(moves: &[usize], rng: &mut impl Rng) -> usize {
    *moves
        .choose(rng)
        .expect("choose_move called on a full board")
}

/// The lowest-indexed move in `moves` that completes a line for `mark`,
/// if there is one.
fn winning_move(board: &Board, mark: Mark, moves: &[usize]) -> Option<usize> {
    moves
        .iter()
        .copied()
        .find(|&index| board.with_mark(index, mark).is_winner(mark))
}

/// Scores `board` from the point of view of `bot` by exhaustive search.
///
/// Terminal positions score +1 (bot has a line), -1 (opponent has a line)
/// or 0 (full board, nobody won), with the win checks deliberately before
/// the full-board check since a full board can also be a won one. At a
/// maximizing node the bot is to move, at a minimizing node the opponent;
/// neither prunes nor caches, which is fine for a game tree of at most
/// 9! leaves.
fn minimax(board: &Board, bot: Mark, maximizing: bool) -> i32 {
    if board.is_winner(bot) {
        return 1;
    }
    if board.is_winner(bot.opponent()) {
        return -1;
    }
    if board.is_full() {
        return 0;
    }

    let mover = if maximizing { bot } else { bot.opponent() };
    let scores = board
        .available_moves()
        .into_iter()
        .map(|index| minimax(&board.with_mark(index, mover), bot, !maximizing));
    let best = if maximizing { scores.max() } else { scores.min() };
    best.expect("non-terminal board has at least one available move")
}

/// Evaluates each available root move as a bot placement followed by an
/// opponent (minimizing) reply, keeping the first strict maximum. The
/// strict `>` means equally good moves resolve to the lowest index.
fn best_minimax_move(board: &Board, bot: Mark, moves: &[usize]) -> usize {
    let mut best_move = None;
    let mut best_score = i32::MIN;
    for &index in moves {
        let score = minimax(&board.with_mark(index, bot), bot, false);
        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }
    best_move.expect("choose_move called on a full board")
}
