//! Strategy description files.
//!
//! A strategy file is a flat list of whitespace-separated `category value`
//! pairs:
//!
//! ```text
//! algorithm alphabeta
//! evalfunc  myscore
//! ```
//!
//! Categories are `algorithm` (`minimax`, `alphabeta` or `human`) and
//! `evalfunc` (`netscore` or `myscore`). Unknown categories and values are
//! reported and skipped, leaving the default `minimax` / `netscore` in place.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::warn;

use crate::board::Player;
use crate::engine::{Contestant, Strategy};
use crate::eval::Evaluator;
use crate::search::Algorithm;

/// Search depths a game may be configured with.
pub const SUPPORTED_DEPTHS: [i32; 2] = [2, 4];

/// Algorithm name that hands a seat to the console.
pub const HUMAN: &str = "human";

/// Errors raised while reading game configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read strategy file '{path}': {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("depth '{0}' must be 2 or 4")]
    InvalidDepth(String),

    #[error("unknown algorithm '{0}', expected minimax, alphabeta or human")]
    UnknownAlgorithm(String),

    #[error("unknown evaluation function '{0}', expected netscore or myscore")]
    UnknownEvaluator(String),

    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    #[error("category '{0}' has no value")]
    MissingValue(String),
}

/// A parsed strategy file: the resulting seat and the entries that were
/// skipped.
#[derive(Debug)]
pub struct StrategyFile {
    pub contestant: Contestant,
    pub ignored: Vec<ConfigError>,
}

/// Parses a search depth, accepting only the supported values.
pub fn parse_depth(s: &str) -> Result<i32, ConfigError> {
    match s.trim().parse::<i32>() {
        Ok(d) if SUPPORTED_DEPTHS.contains(&d) => Ok(d),
        _ => Err(ConfigError::InvalidDepth(s.trim().to_string())),
    }
}

/// Parses an algorithm name. `Ok(None)` means a human seat.
pub fn parse_algorithm(s: &str) -> Result<Option<Algorithm>, ConfigError> {
    if s == HUMAN {
        return Ok(None);
    }
    Algorithm::from_name(s)
        .map(Some)
        .ok_or_else(|| ConfigError::UnknownAlgorithm(s.to_string()))
}

/// Parses an evaluation function name.
pub fn parse_evaluator(s: &str) -> Result<Evaluator, ConfigError> {
    Evaluator::from_name(s).ok_or_else(|| ConfigError::UnknownEvaluator(s.to_string()))
}

/// Builds a seat from resolved names.
pub fn contestant(player: Player, algorithm: Option<Algorithm>, evaluator: Evaluator) -> Contestant {
    match algorithm {
        Some(algorithm) => Contestant::Engine(Strategy::new(player, algorithm, evaluator)),
        None => Contestant::Human(player),
    }
}

/// Parses the text of a strategy file for `player`.
///
/// Never fails: every problem is logged, collected in `ignored`, and the
/// offending entry is skipped.
pub fn parse_strategy(text: &str, player: Player) -> StrategyFile {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let mut algorithm = Some(Algorithm::default());
    let mut evaluator = Evaluator::default();
    let mut ignored = Vec::new();

    for pair in tokens.chunks(2) {
        let entry = match *pair {
            ["algorithm", value] => parse_algorithm(value).map(|a| algorithm = a),
            ["evalfunc", value] => parse_evaluator(value).map(|e| evaluator = e),
            [category, _] => Err(ConfigError::UnknownCategory(category.to_string())),
            [category] => Err(ConfigError::MissingValue(category.to_string())),
            _ => Ok(()),
        };
        if let Err(e) = entry {
            warn!(player = player.number(), "ignoring strategy entry: {}", e);
            ignored.push(e);
        }
    }

    StrategyFile {
        contestant: contestant(player, algorithm, evaluator),
        ignored,
    }
}

/// Reads and parses a strategy file from disk.
pub fn load_strategy(path: &Path, player: Player) -> Result<StrategyFile, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
        path: path.display().to_string(),
        source,
    })?;
    Ok(parse_strategy(&text, player))
}
