//! Position evaluation
//!
//! All evaluators score from the perspective of the side passed in:
//! positive means good for that side. Scores from different evaluators are
//! never compared with each other.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Side};
use crate::connectivity::connected_count;
use crate::path::shortest_path_cost;

/// Half-width of the uniform noise added by [`StoneCount`]
pub const STONE_NOISE: f64 = 0.5;

/// Weight of the connected-stone difference in [`Advanced`]
pub const CONNECTIVITY_WEIGHT: f64 = 0.3;

/// Static position scorer used at the search horizon
pub trait Evaluator {
    fn score(&mut self, board: &Board, side: Side) -> f64;
}

impl<E: Evaluator + ?Sized> Evaluator for Box<E> {
    fn score(&mut self, board: &Board, side: Side) -> f64 {
        (**self).score(board, side)
    }
}

// ============================================================================
// STRATEGIES
// ============================================================================

/// Stone difference plus uniform noise in [-0.5, 0.5]
///
/// The noise keeps the weakest tier from always picking the same move.
/// The random source is owned by the evaluator so it can be seeded.
#[derive(Clone, Debug)]
pub struct StoneCount<R = ChaCha8Rng> {
    rng: R,
}

impl StoneCount<ChaCha8Rng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Fresh noise every session
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> StoneCount<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Evaluator for StoneCount<R> {
    fn score(&mut self, board: &Board, side: Side) -> f64 {
        let own = board.stone_count(side) as f64;
        let opp = board.stone_count(side.opponent()) as f64;
        own - opp + self.rng.gen_range(-STONE_NOISE..=STONE_NOISE)
    }
}

/// Opponent's remaining path cost minus our own
#[derive(Clone, Copy, Debug, Default)]
pub struct PathDifference;

impl PathDifference {
    pub fn evaluate(board: &Board, side: Side) -> f64 {
        let own = shortest_path_cost(board, side);
        let opp = shortest_path_cost(board, side.opponent());
        opp.difference(own)
    }
}

impl Evaluator for PathDifference {
    fn score(&mut self, board: &Board, side: Side) -> f64 {
        Self::evaluate(board, side)
    }
}

/// Path difference plus a bonus for stones connected to the home edge
#[derive(Clone, Copy, Debug, Default)]
pub struct Advanced;

impl Evaluator for Advanced {
    fn score(&mut self, board: &Board, side: Side) -> f64 {
        let path_score = PathDifference::evaluate(board, side);
        let own = connected_count(board, side) as f64;
        let opp = connected_count(board, side.opponent()) as f64;
        path_score + CONNECTIVITY_WEIGHT * (own - opp)
    }
}

// ============================================================================
// SELECTION
// ============================================================================

/// Named evaluator choice for configuration files and the CLI
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluatorKind {
    StoneCount,
    PathDifference,
    Advanced,
}

impl EvaluatorKind {
    /// Instantiate the evaluator. Only `StoneCount` consumes the seed;
    /// without one its noise is drawn from entropy.
    pub fn build(self, seed: Option<u64>) -> Box<dyn Evaluator + Send> {
        match self {
            EvaluatorKind::StoneCount => match seed {
                Some(seed) => Box::new(StoneCount::seeded(seed)),
                None => Box::new(StoneCount::from_entropy()),
            },
            EvaluatorKind::PathDifference => Box::new(PathDifference),
            EvaluatorKind::Advanced => Box::new(Advanced),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stone_count_noise_bounds() {
        let mut board = Board::new(5);
        board.place(0, 0, Side::Red);
        board.place(1, 1, Side::Red);
        board.place(2, 2, Side::Blue);

        let mut eval = StoneCount::seeded(7);
        for _ in 0..200 {
            let s = eval.score(&board, Side::Red);
            assert!((0.5..=1.5).contains(&s), "score {} outside noise band", s);
            let s = eval.score(&board, Side::Blue);
            assert!((-1.5..=-0.5).contains(&s), "score {} outside noise band", s);
        }
    }

    #[test]
    fn test_stone_count_reproducible_with_seed() {
        let board = Board::new(4);
        let mut a = StoneCount::seeded(123);
        let mut b = StoneCount::seeded(123);
        for _ in 0..10 {
            assert_eq!(a.score(&board, Side::Red), b.score(&board, Side::Red));
        }
    }

    #[test]
    fn test_path_difference_symmetric_on_empty() {
        let board = Board::new(5);
        assert_eq!(PathDifference.score(&board, Side::Red), 0.0);
        assert_eq!(PathDifference.score(&board, Side::Blue), 0.0);
    }

    #[test]
    fn test_path_difference_values() {
        let mut board = Board::new(3);
        board.place(0, 0, Side::Red);
        board.place(1, 0, Side::Red);
        // Red needs 1, Blue: column 0 is blocked at rows 0 and 1,
        // so Blue starts at (2,0) and needs 3.
        assert_eq!(PathDifference.score(&board, Side::Red), 2.0);
        assert_eq!(PathDifference.score(&board, Side::Blue), -2.0);
    }

    #[test]
    fn test_path_difference_blocked_side() {
        let mut board = Board::new(3);
        for c in 0..3 {
            board.place(1, c, Side::Blue);
        }
        assert_eq!(PathDifference.score(&board, Side::Red), f64::NEG_INFINITY);
        assert_eq!(PathDifference.score(&board, Side::Blue), f64::INFINITY);
    }

    #[test]
    fn test_advanced_adds_connectivity() {
        let mut board = Board::new(4);
        board.place(0, 1, Side::Red);
        board.place(1, 1, Side::Red);
        let path = PathDifference.score(&board, Side::Red);
        let advanced = Advanced.score(&board, Side::Red);
        assert!((advanced - (path + 0.6)).abs() < 1e-9);
    }

    #[test]
    fn test_kind_builds_matching_evaluator() {
        let mut board = Board::new(3);
        board.place(0, 0, Side::Red);
        let mut built = EvaluatorKind::PathDifference.build(None);
        assert_eq!(built.score(&board, Side::Red), PathDifference.score(&board, Side::Red));
        let mut built = EvaluatorKind::Advanced.build(Some(1));
        assert_eq!(built.score(&board, Side::Red), Advanced.score(&board, Side::Red));
    }
}
