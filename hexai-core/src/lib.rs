//! HEXAI Core - Hex engine and AI
//!
//! This crate provides the core game logic for Hex:
//! - Board state, hex adjacency and win detection
//! - Edge-to-edge connectivity and shortest-path cost estimation
//! - Position evaluators of increasing strength
//! - Minimax and alpha-beta search with optional move ordering
//! - AI players configured by difficulty or JSON config
//! - A turn loop that plays two players against each other

pub mod board;
pub mod connectivity;
pub mod path;
pub mod eval;
pub mod ordering;
pub mod search;
pub mod config;
pub mod player;
pub mod game;
pub mod notation;

// Re-exports for convenient access
pub use board::{Board, Cell, Coord, Side, DEFAULT_SIZE, MAX_SIZE, MIN_SIZE};
pub use connectivity::{connected_count, has_won};
pub use path::{shortest_path_cost, PathCost};
pub use eval::{Advanced, Evaluator, EvaluatorKind, PathDifference, StoneCount};
pub use ordering::{MoveOrderer, PathCostOrderer};
pub use search::{alpha_beta, minimax, SearchResult, WIN_SCORE};
pub use config::{AiConfig, Algorithm, ConfigError, Difficulty};
pub use player::{AiPlayer, Player};
pub use game::{play_game, GameEnd, GameRecord, MoveRecord};
pub use notation::{format_move, parse_move, NotationError};
