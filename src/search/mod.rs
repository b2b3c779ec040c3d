//! Search and planning.
//!
//! Explores the game tree on private board copies to choose a full turn:
//! one pit plus any bonus moves it earns. Two interchangeable algorithms
//! share the same contract, and both resolve bonus chains with the same
//! greedy one-ply procedure in [`bonus`].

pub mod alphabeta;
pub mod bonus;
pub mod minimax;

use serde::Serialize;
use tracing::debug;

use crate::board::{Board, Player, INFINITE_SCORE};
use crate::eval::Evaluator;
use crate::session::Session;

/// The pits one player sows in a single turn, in order.
pub type Turn = Vec<usize>;

/// The tree search a player plans with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Minimax,
    AlphaBeta,
}

/// Both algorithms, in the order they are listed to users.
pub const ALL_ALGORITHMS: [Algorithm; 2] = [Algorithm::Minimax, Algorithm::AlphaBeta];

impl Algorithm {
    /// Returns the name used in strategy files and prompts.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Minimax => "minimax",
            Algorithm::AlphaBeta => "alphabeta",
        }
    }

    /// Parses an algorithm from its strategy-file name.
    pub fn from_name(name: &str) -> Option<Algorithm> {
        match name {
            "minimax" => Some(Algorithm::Minimax),
            "alphabeta" => Some(Algorithm::AlphaBeta),
            _ => None,
        }
    }
}

/// Value of a node and the turn that reaches it for the node's mover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub value: i32,
    pub turn: Turn,
}

impl SearchResult {
    /// The starting point of a scan: worse than any reachable value.
    fn worst(maximizing: bool) -> Self {
        SearchResult {
            value: if maximizing { -INFINITE_SCORE } else { INFINITE_SCORE },
            turn: Vec::new(),
        }
    }
}

/// Searches on behalf of one player.
///
/// Every node is scored from `owner`'s side with `evaluator`; the owner
/// maximizes and the opponent minimizes. Board copies are counted in the
/// borrowed session.
pub struct Searcher<'s> {
    owner: Player,
    evaluator: Evaluator,
    session: &'s mut Session,
}

impl<'s> Searcher<'s> {
    pub fn new(owner: Player, evaluator: Evaluator, session: &'s mut Session) -> Self {
        Searcher {
            owner,
            evaluator,
            session,
        }
    }

    /// The player whose evaluation the search optimizes.
    pub fn owner(&self) -> Player {
        self.owner
    }

    /// Runs `algorithm` from `board` with the owner to move.
    pub fn search(&mut self, algorithm: Algorithm, board: &Board, depth: i32) -> SearchResult {
        let boards_before = self.session.boards_created();
        let result = match algorithm {
            Algorithm::Minimax => self.minimax(board, depth, self.owner),
            Algorithm::AlphaBeta => {
                self.alpha_beta(board, depth, -INFINITE_SCORE, INFINITE_SCORE, self.owner)
            }
        };
        debug!(
            player = self.owner.number(),
            algorithm = algorithm.name(),
            evaluator = self.evaluator.name(),
            depth,
            value = result.value,
            turn = ?result.turn,
            boards = self.session.boards_created() - boards_before,
            "search finished"
        );
        result
    }

    /// Scores a position from the owner's side.
    fn evaluate(&self, board: &Board) -> i32 {
        self.evaluator.evaluate(board, self.owner)
    }

    /// A leaf: the position's evaluation and no turn.
    fn leaf(&self, board: &Board) -> SearchResult {
        SearchResult {
            value: self.evaluate(board),
            turn: Vec::new(),
        }
    }

    /// Plays `pit` for `mover` on a fresh copy of `board`, following any bonus
    /// chain with the greedy procedure. Returns the copy and the full turn.
    fn expand(&mut self, board: &Board, mover: Player, pit: usize) -> (Board, Turn) {
        let mut child = self.session.copy_board(board);
        let mut turn = vec![pit];
        if child.sow(mover, pit).is_bonus() {
            turn.extend(self.greedy_chain(&mut child, mover));
        }
        (child, turn)
    }
}

/// Leaf test shared by both algorithms.
fn is_deep_enough(depth: i32, moves: &[usize]) -> bool {
    depth <= 0 || moves.is_empty()
}

/// Strict improvement test; earlier candidates win ties.
fn improves(maximizing: bool, value: i32, best: i32) -> bool {
    if maximizing {
        value > best
    } else {
        value < best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_name_roundtrip() {
        for a in ALL_ALGORITHMS {
            assert_eq!(Algorithm::from_name(a.name()), Some(a));
        }
        assert_eq!(Algorithm::from_name("negamax"), None);
        assert_eq!(Algorithm::default(), Algorithm::Minimax);
    }

    #[test]
    fn improves_is_strict() {
        assert!(improves(true, 3, 2));
        assert!(!improves(true, 2, 2));
        assert!(improves(false, 1, 2));
        assert!(!improves(false, 2, 2));
    }

    #[test]
    fn deep_enough_on_budget_or_no_moves() {
        assert!(is_deep_enough(0, &[1, 2]));
        assert!(is_deep_enough(-1, &[1]));
        assert!(is_deep_enough(3, &[]));
        assert!(!is_deep_enough(1, &[4]));
    }

    #[test]
    fn expand_follows_bonus_chain() {
        // Pit 5 ends in the store; the only follow-up is pit 4, which
        // captures across from pit 5.
        let board = Board::from_pits(
            [0, 0, 0, 0, 1, 1, 30],
            [2, 0, 0, 0, 0, 0, 38],
        )
        .unwrap();
        let mut session = Session::new();
        let mut searcher = Searcher::new(Player::One, Evaluator::NetScore, &mut session);
        let (child, turn) = searcher.expand(&board, Player::One, 5);
        assert_eq!(turn, vec![5, 4]);
        assert_eq!(child.score(Player::One), 34);
        assert!(child.is_exhausted(Player::One));
        assert_eq!(child.total_seeds(), 72);
    }
}
