//! Match command - play a series of games between two AI configurations
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: play_match(), report_results()
//! - Level 3: play_single_game(), compute_match_statistics()
//! - Level 4: formatting utilities

use anyhow::Result;
use clap::Args;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::Serialize;

use hexai_core::{play_game, AiPlayer, Board, Difficulty, Side};

use crate::play_cmd::parse_size;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct MatchArgs {
    /// First AI strength (plays Red in odd-numbered games)
    #[arg(long, default_value = "medium")]
    pub first: Difficulty,

    /// Second AI strength (plays Red in even-numbered games)
    #[arg(long, default_value = "hard")]
    pub second: Difficulty,

    /// Number of games to play (will alternate colors)
    #[arg(long, default_value = "10")]
    pub games: usize,

    /// Board side length
    #[arg(long, default_value = "7", value_parser = parse_size)]
    pub size: usize,

    /// Run games on all cores
    #[arg(long)]
    pub parallel: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Which configuration of the match
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum Entrant {
    First,
    Second,
}

/// Result of a single game
#[derive(Clone, Debug, Serialize)]
struct GameSummary {
    game_number: usize,
    red: Entrant,
    winner: Option<Entrant>,
    moves: usize,
}

/// Aggregated match results
#[derive(Clone, Debug, Serialize)]
struct MatchResults {
    first: Difficulty,
    second: Difficulty,
    first_wins: usize,
    second_wins: usize,
    red_wins: usize,
    unfinished: usize,
    avg_moves: f32,
    games: Vec<GameSummary>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run match command
pub fn run(args: MatchArgs, seed: Option<u64>) -> Result<()> {
    tracing::info!(
        "Starting match: {} vs {} ({} games, {}x{})",
        args.first,
        args.second,
        args.games,
        args.size,
        args.size
    );

    let results = play_match(&args, seed);
    report_results(&results, &args)?;

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Play all games in the match
fn play_match(args: &MatchArgs, seed: Option<u64>) -> MatchResults {
    // Seeds are drawn up front so parallel and sequential runs agree
    let mut rng = create_rng(seed);
    let seeds: Vec<u64> = (0..args.games).map(|_| rng.gen()).collect();

    let play = |(i, game_seed): (usize, u64)| {
        let summary = play_single_game(args.first, args.second, i + 1, args.size, game_seed);
        tracing::info!(
            "Game {}: red={:?} winner={:?} ({} moves)",
            summary.game_number,
            summary.red,
            summary.winner,
            summary.moves
        );
        summary
    };

    let games: Vec<GameSummary> = if args.parallel {
        seeds.into_par_iter().enumerate().map(play).collect()
    } else {
        seeds.into_iter().enumerate().map(play).collect()
    };

    compute_match_statistics(args.first, args.second, games)
}

/// Report match results
fn report_results(results: &MatchResults, args: &MatchArgs) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(results)?);
    } else {
        print_text_results(results);
    }
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Play one game; the first entrant is Red in odd-numbered games
fn play_single_game(
    first: Difficulty,
    second: Difficulty,
    game_number: usize,
    size: usize,
    seed: u64,
) -> GameSummary {
    let (red, red_difficulty, blue_difficulty) = if game_number % 2 == 1 {
        (Entrant::First, first, second)
    } else {
        (Entrant::Second, second, first)
    };

    let mut red_ai = seeded_ai(Side::Red, red_difficulty, seed);
    let mut blue_ai = seeded_ai(Side::Blue, blue_difficulty, seed.wrapping_add(1));
    let mut board = Board::new(size);

    let record = play_game(&mut board, &mut red_ai, &mut blue_ai, |_, _| {});

    let winner = record.winner().map(|side| match (side, red) {
        (Side::Red, entrant) => entrant,
        (Side::Blue, Entrant::First) => Entrant::Second,
        (Side::Blue, Entrant::Second) => Entrant::First,
    });

    GameSummary {
        game_number,
        red,
        winner,
        moves: record.moves.len(),
    }
}

/// Compute aggregate statistics from game summaries
fn compute_match_statistics(
    first: Difficulty,
    second: Difficulty,
    games: Vec<GameSummary>,
) -> MatchResults {
    let count = |who: Entrant| games.iter().filter(|g| g.winner == Some(who)).count();
    let first_wins = count(Entrant::First);
    let second_wins = count(Entrant::Second);
    let red_wins = games
        .iter()
        .filter(|g| g.winner.is_some() && g.winner == Some(g.red))
        .count();
    let unfinished = games.iter().filter(|g| g.winner.is_none()).count();

    let total_moves: usize = games.iter().map(|g| g.moves).sum();
    let avg_moves = if games.is_empty() {
        0.0
    } else {
        total_moves as f32 / games.len() as f32
    };

    MatchResults {
        first,
        second,
        first_wins,
        second_wins,
        red_wins,
        unfinished,
        avg_moves,
        games,
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn seeded_ai(side: Side, difficulty: Difficulty, seed: u64) -> AiPlayer {
    let config = difficulty.config().with_seed(seed);
    AiPlayer::new(side, config, format!("{} AI ({})", difficulty, side))
}

/// Create RNG from seed or random
fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}

fn percent(part: usize, total: usize) -> f32 {
    if total > 0 {
        part as f32 / total as f32 * 100.0
    } else {
        0.0
    }
}

/// Print results as text
fn print_text_results(results: &MatchResults) {
    let total = results.games.len();

    println!("\n=== Match Results ===");
    println!("Total games: {}", total);
    println!(
        "{} (first):   {} ({:.1}%)",
        results.first,
        results.first_wins,
        percent(results.first_wins, total)
    );
    println!(
        "{} (second):  {} ({:.1}%)",
        results.second,
        results.second_wins,
        percent(results.second_wins, total)
    );
    println!("Red wins:    {} ({:.1}%)", results.red_wins, percent(results.red_wins, total));
    if results.unfinished > 0 {
        println!("Unfinished:  {}", results.unfinished);
    }
    println!("Avg moves:   {:.1}", results.avg_moves);

    println!("\nGame details:");
    for game in &results.games {
        let winner = match game.winner {
            Some(Entrant::First) => results.first.label(),
            Some(Entrant::Second) => results.second.label(),
            None => "nobody",
        };
        println!(
            "  Game {}: {:?} as Red, {} won in {} moves",
            game.game_number, game.red, winner, game.moves
        );
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(game_number: usize, red: Entrant, winner: Option<Entrant>, moves: usize) -> GameSummary {
        GameSummary {
            game_number,
            red,
            winner,
            moves,
        }
    }

    #[test]
    fn test_compute_match_statistics_empty() {
        let results = compute_match_statistics(Difficulty::Easy, Difficulty::Hard, vec![]);
        assert_eq!(results.first_wins, 0);
        assert_eq!(results.second_wins, 0);
        assert_eq!(results.unfinished, 0);
        assert_eq!(results.avg_moves, 0.0);
    }

    #[test]
    fn test_compute_match_statistics() {
        let games = vec![
            summary(1, Entrant::First, Some(Entrant::First), 10),
            summary(2, Entrant::Second, Some(Entrant::First), 20),
            summary(3, Entrant::First, None, 30),
        ];
        let results = compute_match_statistics(Difficulty::Easy, Difficulty::Hard, games);
        assert_eq!(results.first_wins, 2);
        assert_eq!(results.second_wins, 0);
        assert_eq!(results.red_wins, 1);
        assert_eq!(results.unfinished, 1);
        assert_eq!(results.avg_moves, 20.0);
    }

    #[test]
    fn test_single_game_alternates_colors() {
        let odd = play_single_game(Difficulty::Easy, Difficulty::Medium, 1, 3, 7);
        assert_eq!(odd.red, Entrant::First);
        assert!(odd.winner.is_some());

        let even = play_single_game(Difficulty::Easy, Difficulty::Medium, 2, 3, 7);
        assert_eq!(even.red, Entrant::Second);
        assert!(even.moves >= 5); // 3x3 needs at least three Red stones
    }

    #[test]
    fn test_create_rng_deterministic() {
        let mut rng1 = create_rng(Some(42));
        let mut rng2 = create_rng(Some(42));
        assert_eq!(rng1.gen::<u64>(), rng2.gen::<u64>());
    }
}
