//! AI configuration and difficulty presets

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::eval::EvaluatorKind;

/// Errors from loading or validating an [`AiConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid AI config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid AI config: {0}")]
    Invalid(String),
    #[error("unknown difficulty '{0}', expected easy, medium or hard")]
    UnknownDifficulty(String),
}

/// Search algorithm
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Minimax,
    AlphaBeta,
}

/// Everything needed to build an AI player
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiConfig {
    pub algorithm: Algorithm,
    /// Search depth in plies
    pub depth: u32,
    pub evaluator: EvaluatorKind,
    /// Order candidates with the path-cost orderer (alpha-beta only)
    #[serde(default)]
    pub move_ordering: bool,
    /// Seed for randomized evaluators (None = default seed)
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for AiConfig {
    fn default() -> Self {
        Difficulty::Hard.config()
    }
}

impl AiConfig {
    /// Minimax at `depth` with the given evaluator
    pub fn minimax(depth: u32, evaluator: EvaluatorKind) -> Self {
        Self {
            algorithm: Algorithm::Minimax,
            depth,
            evaluator,
            move_ordering: false,
            seed: None,
        }
    }

    /// Alpha-beta at `depth` with the given evaluator, no ordering
    pub fn alpha_beta(depth: u32, evaluator: EvaluatorKind) -> Self {
        Self {
            algorithm: Algorithm::AlphaBeta,
            ..Self::minimax(depth, evaluator)
        }
    }

    pub fn with_move_ordering(mut self) -> Self {
        self.move_ordering = true;
        self
    }

    pub fn with_evaluator(mut self, evaluator: EvaluatorKind) -> Self {
        self.evaluator = evaluator;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject configurations the search cannot honor
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 {
            return Err(ConfigError::Invalid("depth must be at least 1".into()));
        }
        if self.move_ordering && self.algorithm != Algorithm::AlphaBeta {
            return Err(ConfigError::Invalid(
                "move ordering is only used by alpha-beta".into(),
            ));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AiConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }
}

/// Named strength tiers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Depth-1 minimax on stone count with noise
    Easy,
    /// Depth-2 minimax on path difference
    Medium,
    /// Depth-3 alpha-beta, advanced evaluation, ordered moves
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn config(self) -> AiConfig {
        match self {
            Difficulty::Easy => AiConfig::minimax(1, EvaluatorKind::StoneCount),
            Difficulty::Medium => AiConfig::minimax(2, EvaluatorKind::PathDifference),
            Difficulty::Hard => {
                AiConfig::alpha_beta(3, EvaluatorKind::Advanced).with_move_ordering()
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "1" => Ok(Difficulty::Easy),
            "medium" | "2" => Ok(Difficulty::Medium),
            "hard" | "3" => Ok(Difficulty::Hard),
            other => Err(ConfigError::UnknownDifficulty(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let easy = Difficulty::Easy.config();
        assert_eq!(easy.algorithm, Algorithm::Minimax);
        assert_eq!(easy.depth, 1);
        assert_eq!(easy.evaluator, EvaluatorKind::StoneCount);

        let medium = Difficulty::Medium.config();
        assert_eq!(medium.depth, 2);
        assert_eq!(medium.evaluator, EvaluatorKind::PathDifference);
        assert!(!medium.move_ordering);

        let hard = Difficulty::Hard.config();
        assert_eq!(hard.algorithm, Algorithm::AlphaBeta);
        assert_eq!(hard.depth, 3);
        assert!(hard.move_ordering);
        assert_eq!(AiConfig::default(), hard);

        for d in Difficulty::ALL {
            assert!(d.config().validate().is_ok());
        }
    }

    #[test]
    fn test_parse_difficulty() {
        assert_eq!("Easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("2".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!(" HARD ".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!("expert".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_from_json() {
        let config = AiConfig::from_json(
            r#"{"algorithm": "alpha_beta", "depth": 2, "evaluator": "path_difference"}"#,
        )
        .unwrap();
        assert_eq!(config, AiConfig::alpha_beta(2, EvaluatorKind::PathDifference));

        let seeded = AiConfig::from_json(
            r#"{"algorithm": "minimax", "depth": 1, "evaluator": "stone_count", "seed": 9}"#,
        )
        .unwrap();
        assert_eq!(seeded.seed, Some(9));
    }

    #[test]
    fn test_invalid_configs() {
        let zero = r#"{"algorithm": "minimax", "depth": 0, "evaluator": "advanced"}"#;
        assert!(matches!(AiConfig::from_json(zero), Err(ConfigError::Invalid(_))));

        let ordered_minimax = AiConfig::minimax(2, EvaluatorKind::Advanced).with_move_ordering();
        assert!(ordered_minimax.validate().is_err());

        assert!(matches!(
            AiConfig::from_json(r#"{"depth": 2}"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = AiConfig::load(Path::new("/nonexistent/hexai.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_json_roundtrip_keeps_preset() {
        let hard = Difficulty::Hard.config().with_seed(3);
        let json = serde_json::to_string(&hard).unwrap();
        assert_eq!(AiConfig::from_json(&json).unwrap(), hard);
    }
}
