//! Play and watch commands - single games shown on the terminal

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use hexai_core::{
    format_move, play_game, AiConfig, AiPlayer, Board, Difficulty, GameEnd, GameRecord, Player,
    Side, DEFAULT_SIZE, MAX_SIZE, MIN_SIZE,
};

use crate::human::HumanPlayer;

// ============================================================================
// COMMAND ARGUMENTS
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    /// Your color: red connects top-bottom and moves first, blue connects left-right
    #[arg(long, default_value = "red", value_parser = parse_side)]
    pub color: Side,

    /// AI strength (easy, medium, hard)
    #[arg(long, default_value = "medium")]
    pub difficulty: Difficulty,

    /// JSON AI config overriding --difficulty
    #[arg(long, value_name = "FILE")]
    pub ai_config: Option<PathBuf>,

    /// Board side length
    #[arg(long, default_value_t = DEFAULT_SIZE, value_parser = parse_size)]
    pub size: usize,
}

#[derive(Args)]
pub struct WatchArgs {
    /// Red AI strength
    #[arg(long, default_value = "easy")]
    pub red: Difficulty,

    /// Blue AI strength
    #[arg(long, default_value = "hard")]
    pub blue: Difficulty,

    /// Board side length
    #[arg(long, default_value_t = DEFAULT_SIZE, value_parser = parse_size)]
    pub size: usize,
}

// ============================================================================
// COMMANDS
// ============================================================================

/// Human vs AI
pub fn run_play(args: PlayArgs, seed: Option<u64>) -> Result<()> {
    let ai_side = args.color.opponent();
    let mut ai = build_ai(ai_side, args.difficulty, args.ai_config.as_deref(), seed)?;
    let mut human = HumanPlayer::stdio(args.color);

    let human: &mut dyn Player = &mut human;
    let ai: &mut dyn Player = &mut ai;
    let (red, blue) = match args.color {
        Side::Red => (human, ai),
        Side::Blue => (ai, human),
    };

    run_displayed_game(Board::new(args.size), red, blue);
    Ok(())
}

/// AI vs AI, one game
pub fn run_watch(args: WatchArgs, seed: Option<u64>) -> Result<()> {
    let mut red = build_ai(Side::Red, args.red, None, seed)?;
    let mut blue = build_ai(Side::Blue, args.blue, None, seed.map(|s| s.wrapping_add(1)))?;

    run_displayed_game(Board::new(args.size), &mut red, &mut blue);
    Ok(())
}

// ============================================================================
// HELPERS
// ============================================================================

/// AI player from a preset, or from a config file when one is given
pub fn build_ai(
    side: Side,
    difficulty: Difficulty,
    config_path: Option<&Path>,
    seed: Option<u64>,
) -> Result<AiPlayer> {
    let Some(path) = config_path else {
        let mut config = difficulty.config();
        config.seed = seed.or(config.seed);
        return Ok(AiPlayer::new(side, config, format!("{} AI ({})", difficulty, side)));
    };

    let mut config = AiConfig::load(path)
        .with_context(|| format!("Failed to load AI config: {}", path.display()))?;
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let name = format!(
        "Custom AI ({}, {:?} depth {})",
        side, config.algorithm, config.depth
    );
    Ok(AiPlayer::new(side, config, name))
}

fn run_displayed_game(mut board: Board, red: &mut dyn Player, blue: &mut dyn Player) -> GameRecord {
    let red_name = red.name().to_string();
    let blue_name = blue.name().to_string();
    let name_of = |side: Side| match side {
        Side::Red => red_name.as_str(),
        Side::Blue => blue_name.as_str(),
    };

    println!("\n{}", "=".repeat(50));
    println!("  {} (Red)  vs  {} (Blue)", red_name, blue_name);
    println!("{}", "=".repeat(50));
    println!("{}", board);
    tracing::info!(red = %red_name, blue = %blue_name, size = board.size(), "game started");

    let record = play_game(&mut board, red, blue, |board, mv| {
        println!(
            "\n  {} plays {}  ({:.2}s)",
            name_of(mv.side),
            format_move(mv.coord),
            mv.elapsed.as_secs_f64()
        );
        println!("{}", board);
    });

    match record.end {
        GameEnd::Won(side) => {
            println!("\n{}", "*".repeat(50));
            println!("  {} wins in {} moves!", name_of(side), record.moves.len());
            println!("{}", "*".repeat(50));
        }
        GameEnd::Quit(_) => println!("\nGame quit."),
    }
    tracing::info!(end = ?record.end, moves = record.moves.len(), "game finished");

    record
}

pub fn parse_side(s: &str) -> Result<Side, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "red" | "r" | "1" => Ok(Side::Red),
        "blue" | "b" | "2" => Ok(Side::Blue),
        other => Err(format!("unknown color '{}', expected red or blue", other)),
    }
}

pub fn parse_size(s: &str) -> Result<usize, String> {
    let size: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a board size", s))?;
    if (MIN_SIZE..=MAX_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(format!("board size must be between {} and {}", MIN_SIZE, MAX_SIZE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_side() {
        assert_eq!(parse_side("Red"), Ok(Side::Red));
        assert_eq!(parse_side("b"), Ok(Side::Blue));
        assert!(parse_side("green").is_err());
    }

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("11"), Ok(11));
        assert_eq!(parse_size("2"), Ok(2));
        assert!(parse_size("1").is_err());
        assert!(parse_size("27").is_err());
        assert!(parse_size("big").is_err());
    }

    #[test]
    fn test_build_ai_from_preset() {
        let ai = build_ai(Side::Blue, Difficulty::Hard, None, Some(5)).unwrap();
        assert_eq!(ai.name(), "Hard AI (Blue)");
        assert_eq!(ai.config().seed, Some(5));
        assert!(ai.config().move_ordering);
    }

    #[test]
    fn test_build_ai_missing_config_file() {
        let err = build_ai(Side::Red, Difficulty::Easy, Some(Path::new("/no/such/ai.json")), None)
            .err()
            .unwrap();
        assert!(format!("{:#}", err).contains("Failed to load AI config"));
    }
}
