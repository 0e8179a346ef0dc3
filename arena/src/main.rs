mod game;

use std::collections::HashMap;

use clap::Parser;
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tictactoe::Difficulty;
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::game::{play_game, GameResult};

#[derive(Parser)]
struct Args {
    /// Difficulty levels (1-5) of the entrants; every pair plays a matchup
    #[clap(num_args(2..), value_delimiter = ' ')]
    levels: Vec<u8>,

    /// How many games to play per matchup
    #[arg(short, long, default_value_t = 100)]
    num_games: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Default)]
struct MatchScore {
    wins: [usize; 2],
    ties: usize,
}

fn play_matchup(
    entrants: [Difficulty; 2],
    num_games: usize,
    rng: &mut StdRng,
) -> MatchScore {
    let mut match_score = MatchScore::default();

    for game_idx in 0..num_games {
        match play_game(rng, entrants) {
            GameResult::WonByEntrant { entrant_idx } => {
                debug!(winner = %entrants[entrant_idx], game_idx);
                match_score.wins[entrant_idx] += 1;
            }
            GameResult::Tie => {
                debug!(game_idx, "Tie");
                match_score.ties += 1;
            }
        }
    }

    eprintln!(
        "End result:\n- {} wins by {}\n- {} wins by {}\n- {} ties",
        match_score.wins[0], entrants[0], match_score.wins[1], entrants[1], match_score.ties
    );

    match_score
}

// prints an upper triangular matrix of the results of the tournament
fn print_tournament_results(
    entrants: &[Difficulty],
    match_results: &HashMap<(usize, usize), MatchScore>,
) {
    println!("\nTournament results (p1 win %, p2 win %, tie %):\n");
    print!(" {:19} |", "p1 ↓           p2 →");
    for j in (0..entrants.len()).rev() {
        print!(" {:19} |", entrants[j].to_string());
    }
    println!();
    for i in 0..entrants.len() {
        for _ in 0..entrants.len() - i + 1 {
            print!("---------------------|");
        }
        println!();
        print!(" {:19} |", entrants[i].to_string());
        for j in (0..entrants.len()).rev() {
            if i >= j {
                print!("    ");
            } else if let Some(score) = match_results.get(&(i, j)) {
                let num_games = score.wins[0] + score.wins[1] + score.ties;
                let win_1_percentage = score.wins[0] as f32 / num_games as f32 * 100.0;
                let win_2_percentage = score.wins[1] as f32 / num_games as f32 * 100.0;
                let tie_percentage = score.ties as f32 / num_games as f32 * 100.0;
                print!(
                    "{:5.1}% {:5.1}% {:5.1}% |",
                    win_1_percentage, win_2_percentage, tie_percentage
                );
            } else {
                print!(" {:19} |", "N/A");
            }
        }
        println!();
    }
    println!("---------------------|");
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let entrants = args
        .levels
        .iter()
        .map(|&level| Difficulty::try_from(level).map_err(anyhow::Error::from))
        .collect::<Result<Vec<Difficulty>, anyhow::Error>>()?;

    let matchups: Vec<(usize, usize)> = (0..entrants.len()).tuple_combinations().collect();

    let mut match_results: HashMap<(usize, usize), MatchScore> = HashMap::new();
    for (i1, i2) in matchups {
        info!(entrant_1 = %entrants[i1], entrant_2 = %entrants[i2], "Starting matchup");
        let match_score = play_matchup([entrants[i1], entrants[i2]], args.num_games, &mut rng);
        match_results.insert((i1, i2), match_score);
    }

    if entrants.len() > 2 {
        print_tournament_results(&entrants, &match_results);
    }

    Ok(())
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
