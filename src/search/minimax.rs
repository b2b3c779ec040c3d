//! Plain minimax.
//!
//! Every legal move is expanded at every node; the ply budget drops by one
//! per turn no matter how many bonus moves the turn chains together.

use crate::board::{Board, Player};
use crate::movegen::legal_moves;

use super::{improves, is_deep_enough, SearchResult, Searcher};

impl Searcher<'_> {
    /// Searches `depth` turns ahead with `mover` to play.
    pub fn minimax(&mut self, board: &Board, depth: i32, mover: Player) -> SearchResult {
        let moves = legal_moves(mover, board);
        if is_deep_enough(depth, &moves) {
            return self.leaf(board);
        }

        let maximizing = mover == self.owner;
        let mut best = SearchResult::worst(maximizing);

        for pit in moves {
            let (child, turn) = self.expand(board, mover, pit);
            let value = self.minimax(&child, depth - 1, mover.opponent()).value;
            if improves(maximizing, value, best.value) {
                best = SearchResult { value, turn };
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::Evaluator;
    use crate::session::Session;

    fn search(board: &Board, owner: Player, evaluator: Evaluator, depth: i32) -> SearchResult {
        let mut session = Session::new();
        Searcher::new(owner, evaluator, &mut session).minimax(board, depth, owner)
    }

    /// Each side has two quiet moves; only Player Two's pit 1 can capture,
    /// and only after Player One empties its pit 2 into pit 3.
    fn quiet_position() -> Board {
        Board::from_pits([0, 0, 1, 0, 1, 0, 34], [0, 1, 0, 1, 0, 0, 34]).unwrap()
    }

    #[test]
    fn zero_depth_evaluates_in_place() {
        let board = Board::from_pits([6, 6, 6, 6, 6, 0, 5], [6, 6, 6, 6, 6, 1, 6]).unwrap();
        let result = search(&board, Player::One, Evaluator::NetScore, 0);
        assert_eq!(result, SearchResult { value: -1, turn: vec![] });
        let result = search(&board, Player::Two, Evaluator::OwnScore, 0);
        assert_eq!(result, SearchResult { value: 6, turn: vec![] });
    }

    #[test]
    fn no_moves_is_a_leaf() {
        let board = Board::from_pits([0; 7], [6, 6, 6, 6, 6, 6, 36]).unwrap();
        let result = search(&board, Player::One, Evaluator::NetScore, 4);
        assert_eq!(result, SearchResult { value: -36, turn: vec![] });
    }

    #[test]
    fn opening_prefers_bonus_turn() {
        let result = search(&Board::new(), Player::One, Evaluator::NetScore, 1);
        assert_eq!(result, SearchResult { value: 2, turn: vec![0, 1] });
    }

    #[test]
    fn bonus_chain_into_capture() {
        let board = Board::from_pits([0, 0, 0, 0, 1, 1, 30], [2, 0, 0, 0, 0, 0, 38]).unwrap();
        let result = search(&board, Player::One, Evaluator::NetScore, 1);
        assert_eq!(result, SearchResult { value: -4, turn: vec![5, 4] });
    }

    #[test]
    fn equal_values_keep_scan_order() {
        let board = quiet_position();
        assert_eq!(search(&board, Player::One, Evaluator::NetScore, 1).turn, vec![2]);
        assert_eq!(search(&board, Player::Two, Evaluator::NetScore, 1).turn, vec![3]);
    }

    #[test]
    fn second_ply_sees_reply_capture() {
        let result = search(&quiet_position(), Player::One, Evaluator::NetScore, 2);
        assert_eq!(result, SearchResult { value: 0, turn: vec![4] });
    }
}
