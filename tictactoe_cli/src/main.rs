use std::io::{BufRead, Write};

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tictactoe::{render_board, render_cell_numbers, Board, Difficulty, Mark};
use tracing::debug;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Bot difficulty level, 1 (random) through 5 (unbeatable).
    /// Prompted for when omitted.
    #[arg(short, long)]
    difficulty: Option<u8>,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let seed = args.seed.unwrap_or_else(rand::random);
    debug!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let stdin = std::io::stdin().lock();
    let mut lines = stdin.lines();

    let difficulty = match args.difficulty.map(Difficulty::try_from) {
        Some(Ok(difficulty)) => difficulty,
        Some(Err(err)) => {
            println!("{}", err);
            prompt_difficulty(&mut lines)?
        }
        None => prompt_difficulty(&mut lines)?,
    };

    println!("Welcome to Tic-Tac-Toe!");
    println!("Player: X | Bot: O ({})", difficulty);
    println!("Enter positions (1-9) as shown below:\n");
    println!("{}", render_cell_numbers());

    play(difficulty, &mut rng, &mut lines)
}

/// Runs one game to completion. The player is always X and moves first.
fn play(
    difficulty: Difficulty,
    rng: &mut StdRng,
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
) -> anyhow::Result<()> {
    let player = Mark::X;
    let bot = Mark::O;
    let mut board = Board::new();

    loop {
        println!("{}", render_board(&board));
        let index = prompt_move(&board, player, lines)?;
        board
            .place(index, player)
            .expect("prompt_move returned an unavailable cell");

        if board.is_winner(player) {
            println!("{}", render_board(&board));
            println!("Player {} wins! Congratulations!", player);
            return Ok(());
        }
        if board.is_full() {
            println!("{}", render_board(&board));
            println!("It's a tie!");
            return Ok(());
        }

        println!("Bot's turn...");
        let index = difficulty.choose_move(&board, bot, rng);
        debug!(index, %difficulty, "bot move");
        board
            .place(index, bot)
            .expect("strategy returned an unavailable cell");

        if board.is_winner(bot) {
            println!("{}", render_board(&board));
            println!("Bot {} wins! Better luck next time.", bot);
            return Ok(());
        }
        if board.is_full() {
            println!("{}", render_board(&board));
            println!("It's a tie!");
            return Ok(());
        }
    }
}

/// Keeps asking until the user supplies an integer between 1 and 5.
fn prompt_difficulty(
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
) -> anyhow::Result<Difficulty> {
    loop {
        let line = read_answer("Select bot difficulty level (1-5, 5 being the hardest): ", lines)?;
        match line.trim().parse::<u8>().map(Difficulty::try_from) {
            Ok(Ok(difficulty)) => return Ok(difficulty),
            Ok(Err(err)) => println!("{}", err),
            Err(_) => println!("Invalid input! Please enter a number between 1 and 5."),
        }
    }
}

/// Keeps asking until the user names an empty cell, and returns its
/// 0-based index. Bad input never mutates anything; it just re-prompts.
fn prompt_move(
    board: &Board,
    player: Mark,
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
) -> anyhow::Result<usize> {
    loop {
        let prompt = format!("Player {}, enter your move (1-9): ", player);
        let line = read_answer(&prompt, lines)?;
        let Some(index) = parse_cell(line.trim()) else {
            println!("Invalid input! Please enter a number between 1 and 9.");
            continue;
        };
        // Probe on a copy so the real board stays untouched on error
        let mut probe = *board;
        if let Err(err) = probe.place(index, player) {
            println!("{}", err);
            continue;
        }
        return Ok(index);
    }
}

/// Converts a 1-based cell label to a 0-based index.
fn parse_cell(input: &str) -> Option<usize> {
    match input.parse::<usize>() {
        Ok(label @ 1..=9) => Some(label - 1),
        _ => None,
    }
}

fn read_answer(
    prompt: &str,
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
) -> anyhow::Result<String> {
    print!("{}", prompt);
    std::io::stdout().flush()?;
    lines
        .next()
        .context("stdin closed before the game ended")?
        .context("failed to read from stdin")
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}
