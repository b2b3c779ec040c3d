//! Greedy resolution of bonus chains.
//!
//! When a sowing ends in the mover's store, the follow-up is not searched.
//! Each legal follow-up is played out (including its own bonus chain) and the
//! resulting position is evaluated once; the best one for the mover's role
//! in the search is kept. Both tree searches share this procedure.

use crate::board::{Board, Player};
use crate::movegen::legal_moves;

use super::{improves, SearchResult, Searcher, Turn};

impl Searcher<'_> {
    /// Chooses and applies the rest of `mover`'s turn on `board`.
    ///
    /// Returns the chosen pits in order, or an empty turn if `mover` has no
    /// legal move. The owner maximizes the evaluation, the opponent
    /// minimizes it, and the earliest candidate in scan order wins ties.
    pub fn greedy_chain(&mut self, board: &mut Board, mover: Player) -> Turn {
        let moves = legal_moves(mover, board);
        if moves.is_empty() {
            return Vec::new();
        }

        let maximizing = mover == self.owner;
        let mut best = SearchResult::worst(maximizing);
        let mut best_board = None;

        for pit in moves {
            let (trial, turn) = self.expand(board, mover, pit);
            let value = self.evaluate(&trial);
            if improves(maximizing, value, best.value) {
                best = SearchResult { value, turn };
                best_board = Some(trial);
            }
        }

        if let Some(chosen) = best_board {
            *board = chosen;
        }
        best.turn
    }
}
