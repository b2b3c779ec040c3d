//! Position evaluation.
//!
//! Scores a board from a viewpoint player. The evaluator is picked once per
//! player and dispatched by enum, never by name at search time.

pub(crate) mod heuristic;

use serde::Serialize;

use crate::board::{Board, Player};

pub use heuristic::{net_score, own_score};

/// The leaf scoring function a player searches with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Evaluator {
    /// Own store minus the opponent's store.
    #[default]
    NetScore,
    /// Own store only.
    #[serde(rename = "myscore")]
    OwnScore,
}

/// Both evaluators, in the order they are listed to users.
pub const ALL_EVALUATORS: [Evaluator; 2] = [Evaluator::NetScore, Evaluator::OwnScore];

impl Evaluator {
    /// Returns the name used in strategy files and prompts.
    pub const fn name(self) -> &'static str {
        match self {
            Evaluator::NetScore => "netscore",
            Evaluator::OwnScore => "myscore",
        }
    }

    /// Parses an evaluator from its strategy-file name.
    pub fn from_name(name: &str) -> Option<Evaluator> {
        match name {
            "netscore" => Some(Evaluator::NetScore),
            "myscore" => Some(Evaluator::OwnScore),
            _ => None,
        }
    }

    /// Scores `board` from `viewpoint`'s side.
    pub fn evaluate(self, board: &Board, viewpoint: Player) -> i32 {
        match self {
            Evaluator::NetScore => net_score(board, viewpoint),
            Evaluator::OwnScore => own_score(board, viewpoint),
        }
    }
}
