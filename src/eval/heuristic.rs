//! Store-count heuristics.
//!
//! Both scores read only the two stores; neither looks ahead.

use crate::board::{Board, Player};

/// Own store minus the opponent's store.
pub fn net_score(board: &Board, player: Player) -> i32 {
    board.net_score(player)
}

/// Own store only.
pub fn own_score(board: &Board, player: Player) -> i32 {
    i32::from(board.score(player))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_board_scores_zero() {
        let board = Board::new();
        assert_eq!(net_score(&board, Player::One), 0);
        assert_eq!(own_score(&board, Player::Two), 0);
    }

    #[test]
    fn scores_follow_stores() {
        let board = Board::from_pits(
            [3, 3, 3, 3, 3, 3, 12],
            [3, 3, 3, 3, 3, 3, 24],
        )
        .unwrap();
        assert_eq!(net_score(&board, Player::One), -12);
        assert_eq!(net_score(&board, Player::Two), 12);
        assert_eq!(own_score(&board, Player::One), 12);
        assert_eq!(own_score(&board, Player::Two), 24);
    }
}
