//! Minimax with alpha-beta pruning.
//!
//! Returns the same value and turn as [`Searcher::minimax`] while skipping
//! siblings that cannot change the result. Bounds are fail-soft: a cut node
//! reports the best value it saw.

use crate::board::{Board, Player};
use crate::movegen::legal_moves;

use super::{improves, is_deep_enough, SearchResult, Searcher};

impl Searcher<'_> {
    /// Searches `depth` turns ahead with `mover` to play inside `[alpha, beta]`.
    pub fn alpha_beta(
        &mut self,
        board: &Board,
        depth: i32,
        mut alpha: i32,
        mut beta: i32,
        mover: Player,
    ) -> SearchResult {
        let moves = legal_moves(mover, board);
        if is_deep_enough(depth, &moves) {
            return self.leaf(board);
        }

        let maximizing = mover == self.owner;
        let mut best = SearchResult::worst(maximizing);

        for pit in moves {
            let (child, turn) = self.expand(board, mover, pit);
            let value = self
                .alpha_beta(&child, depth - 1, alpha, beta, mover.opponent())
                .value;
            if improves(maximizing, value, best.value) {
                best = SearchResult { value, turn };
            }

            if maximizing {
                alpha = alpha.max(value);
                if value >= beta {
                    break;
                }
            } else {
                beta = beta.min(value);
                if value <= alpha {
                    break;
                }
            }
        }

        best
    }
}
