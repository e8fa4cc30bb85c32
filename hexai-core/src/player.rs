//! Players: anything that can pick a move for a board

use crate::board::{Board, Coord, Side};
use crate::config::{AiConfig, Algorithm, Difficulty};
use crate::eval::Evaluator;
use crate::ordering::{MoveOrderer, PathCostOrderer};
use crate::search::{alpha_beta, minimax, SearchResult};

/// A participant in a game
pub trait Player {
    fn name(&self) -> &str;

    fn side(&self) -> Side;

    /// Pick a move, or `None` to quit / when no move exists
    fn decide_move(&mut self, board: &Board) -> Option<Coord>;
}

/// Search-based computer player
pub struct AiPlayer {
    side: Side,
    name: String,
    config: AiConfig,
    evaluator: Box<dyn Evaluator + Send>,
    orderer: Option<PathCostOrderer>,
}

impl AiPlayer {
    pub fn new(side: Side, config: AiConfig, name: impl Into<String>) -> Self {
        let evaluator = config.evaluator.build(config.seed);
        let orderer = config.move_ordering.then_some(PathCostOrderer);
        Self {
            side,
            name: name.into(),
            config,
            evaluator,
            orderer,
        }
    }

    /// Player for a preset tier, e.g. "Hard AI (Blue)"
    pub fn from_difficulty(side: Side, difficulty: Difficulty) -> Self {
        Self::new(side, difficulty.config(), format!("{} AI ({})", difficulty, side))
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// Run the configured search for this player's side
    pub fn search(&mut self, board: &Board) -> SearchResult {
        match self.config.algorithm {
            Algorithm::Minimax => {
                minimax(board, self.config.depth, self.side, &mut self.evaluator)
            }
            Algorithm::AlphaBeta => alpha_beta(
                board,
                self.config.depth,
                self.side,
                &mut self.evaluator,
                self.orderer.as_ref().map(|o| o as &dyn MoveOrderer),
            ),
        }
    }
}

impl Player for AiPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn side(&self) -> Side {
        self.side
    }

    fn decide_move(&mut self, board: &Board) -> Option<Coord> {
        let result = self.search(board);
        tracing::debug!(
            player = %self.name,
            score = result.score,
            nodes = result.nodes,
            "AI chose {:?}",
            result.best_move
        );
        result.best_move
    }
}
