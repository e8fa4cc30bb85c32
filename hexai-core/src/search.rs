//! Fixed-depth minimax and alpha-beta search
//!
//! Scores are always from the root side's point of view. Every explored
//! node works on its own board copy, so sibling branches never see each
//! other's hypothetical stones.

use crate::board::{Board, Coord, Side};
use crate::eval::Evaluator;
use crate::ordering::MoveOrderer;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Base score of a decided game. The remaining depth is added on top so a
/// win found closer to the root outranks a deeper one.
pub const WIN_SCORE: f64 = 1000.0;

// ============================================================================
// SEARCH RESULT
// ============================================================================

/// Outcome of a root search
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchResult {
    /// Score for the root side
    pub score: f64,
    /// Best move, `None` when the root itself was terminal
    pub best_move: Option<Coord>,
    /// Nodes visited, root included
    pub nodes: u64,
}

// ============================================================================
// SEARCH CONTEXT
// ============================================================================

/// A node is either scored on the spot or expanded into candidate moves
enum Node {
    Leaf(f64),
    Expand(Vec<Coord>),
}

struct Search<'a, E: ?Sized> {
    root: Side,
    evaluator: &'a mut E,
    orderer: Option<&'a dyn MoveOrderer>,
    nodes: u64,
}

impl<'a, E: Evaluator + ?Sized> Search<'a, E> {
    fn new(root: Side, evaluator: &'a mut E, orderer: Option<&'a dyn MoveOrderer>) -> Self {
        Self {
            root,
            evaluator,
            orderer,
            nodes: 0,
        }
    }

    /// Terminal checks shared by both algorithms, in order: root side
    /// won, opponent won, depth exhausted, board full.
    fn visit(&mut self, board: &Board, depth: u32, maximizing: bool) -> Node {
        self.nodes += 1;

        if board.check_win(self.root) {
            return Node::Leaf(WIN_SCORE + f64::from(depth));
        }
        if board.check_win(self.root.opponent()) {
            return Node::Leaf(-(WIN_SCORE + f64::from(depth)));
        }
        if depth == 0 {
            return Node::Leaf(self.evaluator.score(board, self.root));
        }

        let moves = board.empty_cells();
        if moves.is_empty() {
            return Node::Leaf(self.evaluator.score(board, self.root));
        }

        Node::Expand(match self.orderer {
            Some(orderer) => orderer.order(board, self.mover(maximizing), moves),
            None => moves,
        })
    }

    fn mover(&self, maximizing: bool) -> Side {
        if maximizing {
            self.root
        } else {
            self.root.opponent()
        }
    }

    fn minimax(&mut self, board: &Board, depth: u32, maximizing: bool) -> (f64, Option<Coord>) {
        let moves = match self.visit(board, depth, maximizing) {
            Node::Expand(moves) => moves,
            Node::Leaf(score) => return (score, None),
        };
        let mover = self.mover(maximizing);

        let mut best_score = if maximizing { f64::NEG_INFINITY } else { f64::INFINITY };
        let mut best_move = None;

        for mv in moves {
            let mut child = board.clone();
            child.place(mv.row, mv.col, mover);
            let (score, _) = self.minimax(&child, depth - 1, !maximizing);

            if best_move.is_none() || improves(score, best_score, maximizing) {
                best_score = score;
                best_move = Some(mv);
            }
        }

        (best_score, best_move)
    }

    fn alpha_beta(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> (f64, Option<Coord>) {
        let moves = match self.visit(board, depth, maximizing) {
            Node::Expand(moves) => moves,
            Node::Leaf(score) => return (score, None),
        };
        let mover = self.mover(maximizing);

        let mut best_score = if maximizing { f64::NEG_INFINITY } else { f64::INFINITY };
        let mut best_move = None;

        for mv in moves {
            let mut child = board.clone();
            child.place(mv.row, mv.col, mover);
            let (score, _) = self.alpha_beta(&child, depth - 1, alpha, beta, !maximizing);

            if best_move.is_none() || improves(score, best_score, maximizing) {
                best_score = score;
                best_move = Some(mv);
            }

            if maximizing {
                alpha = alpha.max(best_score);
            } else {
                beta = beta.min(best_score);
            }
            if alpha >= beta {
                break;
            }
        }

        (best_score, best_move)
    }
}

/// Strict improvement, so the first of several equal moves is kept
fn improves(score: f64, best: f64, maximizing: bool) -> bool {
    if maximizing {
        score > best
    } else {
        score < best
    }
}

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Plain minimax from `side`'s point of view, `side` to move.
pub fn minimax<E: Evaluator + ?Sized>(
    board: &Board,
    depth: u32,
    side: Side,
    evaluator: &mut E,
) -> SearchResult {
    let mut search = Search::new(side, evaluator, None);
    let (score, best_move) = search.minimax(board, depth, true);
    finish("minimax", score, best_move, search.nodes)
}

/// Alpha-beta from `side`'s point of view, `side` to move.
///
/// Returns the same score as [`minimax`] for a deterministic evaluator;
/// the move can only differ between exactly tied candidates.
pub fn alpha_beta<E: Evaluator + ?Sized>(
    board: &Board,
    depth: u32,
    side: Side,
    evaluator: &mut E,
    orderer: Option<&dyn MoveOrderer>,
) -> SearchResult {
    let mut search = Search::new(side, evaluator, orderer);
    let (score, best_move) = search.alpha_beta(board, depth, f64::NEG_INFINITY, f64::INFINITY, true);
    finish("alpha-beta", score, best_move, search.nodes)
}

fn finish(algorithm: &str, score: f64, best_move: Option<Coord>, nodes: u64) -> SearchResult {
    tracing::debug!(algorithm, score, ?best_move, nodes, "search finished");
    SearchResult {
        score,
        best_move,
        nodes,
    }
}

// ============================================================================
// TESTS
// ============================================================================
