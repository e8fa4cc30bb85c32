//! Move ordering for alpha-beta
//!
//! Ordering never changes the value a search returns, only how early good
//! moves are tried and therefore how much gets pruned.

use crate::board::{Board, Coord, Side};
use crate::path::shortest_path_cost;

/// Weight of the L1 distance from the board center
pub const CENTER_WEIGHT: f64 = 0.1;

/// Reorders candidate moves before they are searched
pub trait MoveOrderer {
    fn order(&self, board: &Board, side: Side, moves: Vec<Coord>) -> Vec<Coord>;
}

/// Ranks moves by the mover's path cost after playing them, with a small
/// pull toward the center. Lower keys are searched first.
#[derive(Clone, Copy, Debug, Default)]
pub struct PathCostOrderer;

impl PathCostOrderer {
    /// Sort key for one candidate; unreachable costs sort last
    pub fn move_key(board: &Board, side: Side, mv: Coord) -> f64 {
        let center = board.size() as f64 / 2.0;
        let center_dist = (mv.row as f64 - center).abs() + (mv.col as f64 - center).abs();

        let mut child = board.clone();
        child.place(mv.row, mv.col, side);
        shortest_path_cost(&child, side).as_f64() + center_dist * CENTER_WEIGHT
    }
}

impl MoveOrderer for PathCostOrderer {
    fn order(&self, board: &Board, side: Side, moves: Vec<Coord>) -> Vec<Coord> {
        let mut keyed: Vec<(f64, Coord)> = moves
            .into_iter()
            .map(|mv| (Self::move_key(board, side, mv), mv))
            .collect();
        // stable: equal keys keep row-major order
        keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
        keyed.into_iter().map(|(_, mv)| mv).collect()
    }
}
