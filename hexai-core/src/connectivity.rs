//! Same-side reachability from a player's starting edge
//!
//! Both the win test and the connectivity bonus of the advanced evaluator
//! are the same multi-source BFS; they only differ in whether the search
//! stops at the far edge.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::board::{Board, Cell, Coord, Side};

/// Outcome of a traversal from the near edge
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Traversal {
    /// A reached stone lies on the far goal edge
    pub reached_far_edge: bool,
    /// Number of distinct stones visited
    pub visited: usize,
}

/// BFS over `side`'s stones seeded from every stone on its near edge.
///
/// With `stop_at_far_edge` the search returns as soon as a far-edge cell
/// is dequeued, so `visited` is then only a lower bound.
pub fn traverse(board: &Board, side: Side, stop_at_far_edge: bool) -> Traversal {
    let size = board.size();
    let own = Cell::Stone(side);

    let mut visited: FxHashSet<Coord> = FxHashSet::default();
    let mut queue = VecDeque::new();

    for coord in side.near_edge(size) {
        if board.cell(coord) == own && visited.insert(coord) {
            queue.push_back(coord);
        }
    }

    let mut reached_far_edge = false;
    while let Some(coord) = queue.pop_front() {
        if side.on_far_edge(coord, size) {
            reached_far_edge = true;
            if stop_at_far_edge {
                break;
            }
        }
        for next in board.neighbors(coord.row, coord.col) {
            if board.cell(next) == own && visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    Traversal {
        reached_far_edge,
        visited: visited.len(),
    }
}

/// Has `side` joined its two goal edges?
pub fn has_won(board: &Board, side: Side) -> bool {
    traverse(board, side, true).reached_far_edge
}

/// Size of the same-side group(s) touching `side`'s near edge
pub fn connected_count(board: &Board, side: Side) -> usize {
    traverse(board, side, false).visited
}
