//! Shortest-path distance to a completed connection
//!
//! Each cell is a node; entering an own stone costs 0, an empty cell 1,
//! and opponent stones are walls. The resulting distance is the number of
//! stones a side still needs to place to join its goal edges.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt;

use crate::board::{Board, Cell, Coord, Side};

/// Result of the shortest-path search
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PathCost {
    /// Stones still needed
    Finite(u32),
    /// Opponent stones wall off every route
    Unreachable,
}

impl PathCost {
    pub fn is_reachable(self) -> bool {
        matches!(self, PathCost::Finite(_))
    }

    /// Numeric view, `Unreachable` maps to +inf
    pub fn as_f64(self) -> f64 {
        match self {
            PathCost::Finite(d) => f64::from(d),
            PathCost::Unreachable => f64::INFINITY,
        }
    }

    /// `self - other`, used as "opponent cost minus own cost".
    ///
    /// Unreachable minus finite is +inf, finite minus unreachable is -inf,
    /// and two unreachable costs cancel to 0.
    pub fn difference(self, other: PathCost) -> f64 {
        match (self, other) {
            (PathCost::Finite(a), PathCost::Finite(b)) => f64::from(a) - f64::from(b),
            (PathCost::Unreachable, PathCost::Finite(_)) => f64::INFINITY,
            (PathCost::Finite(_), PathCost::Unreachable) => f64::NEG_INFINITY,
            (PathCost::Unreachable, PathCost::Unreachable) => 0.0,
        }
    }
}

impl Ord for PathCost {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (PathCost::Finite(a), PathCost::Finite(b)) => a.cmp(b),
            (PathCost::Finite(_), PathCost::Unreachable) => Ordering::Less,
            (PathCost::Unreachable, PathCost::Finite(_)) => Ordering::Greater,
            (PathCost::Unreachable, PathCost::Unreachable) => Ordering::Equal,
        }
    }
}

impl PartialOrd for PathCost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PathCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCost::Finite(d) => write!(f, "{}", d),
            PathCost::Unreachable => f.write_str("unreachable"),
        }
    }
}

/// Cost of entering `cell` for `side`, `None` for opponent stones
fn entry_cost(cell: Cell, side: Side) -> Option<u32> {
    match cell {
        Cell::Empty => Some(1),
        Cell::Stone(owner) if owner == side => Some(0),
        Cell::Stone(_) => None,
    }
}

/// Dijkstra from every open near-edge cell to the first settled far-edge cell.
pub fn shortest_path_cost(board: &Board, side: Side) -> PathCost {
    let size = board.size();
    let mut dist = vec![u32::MAX; size * size];
    let mut heap: BinaryHeap<Reverse<(u32, Coord)>> = BinaryHeap::new();

    // Seeds start at their own entry cost: an empty edge cell still has
    // to be filled.
    for coord in side.near_edge(size) {
        if let Some(cost) = entry_cost(board.cell(coord), side) {
            let idx = coord.row * size + coord.col;
            if cost < dist[idx] {
                dist[idx] = cost;
                heap.push(Reverse((cost, coord)));
            }
        }
    }

    while let Some(Reverse((d, coord))) = heap.pop() {
        if d > dist[coord.row * size + coord.col] {
            continue;
        }
        if side.on_far_edge(coord, size) {
            return PathCost::Finite(d);
        }
        for next in board.neighbors(coord.row, coord.col) {
            let Some(step) = entry_cost(board.cell(next), side) else {
                continue;
            };
            let nd = d + step;
            let idx = next.row * size + next.col;
            if nd < dist[idx] {
                dist[idx] = nd;
                heap.push(Reverse((nd, next)));
            }
        }
    }

    PathCost::Unreachable
}
