//! Legal move generation.
//!
//! A legal move is any of the mover's pits that holds seeds. The scan order
//! differs per player and decides which of several equally scored moves the
//! search keeps, so it is part of the engine's observable behaviour.

use crate::board::{Board, Player, PITS};

/// Returns the mover's non-empty pits in scan order.
///
/// Player One scans pits low to high, Player Two high to low.
pub fn legal_moves(player: Player, board: &Board) -> Vec<usize> {
    let mut moves = Vec::with_capacity(PITS);
    match player {
        Player::One => {
            for pit in 0..PITS {
                if board.seeds(player, pit) > 0 {
                    moves.push(pit);
                }
            }
        }
        Player::Two => {
            for pit in (0..PITS).rev() {
                if board.seeds(player, pit) > 0 {
                    moves.push(pit);
                }
            }
        }
    }
    moves
}

/// Returns true if the player has at least one legal move.
pub fn has_moves(player: Player, board: &Board) -> bool {
    !board.is_exhausted(player)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_moves_in_scan_order() {
        let board = Board::new();
        assert_eq!(legal_moves(Player::One, &board), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(legal_moves(Player::Two, &board), vec![5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn empty_pits_are_skipped() {
        let board = Board::from_pits(
            [0, 3, 0, 2, 0, 1, 30],
            [4, 0, 0, 5, 0, 0, 27],
        )
        .unwrap();
        assert_eq!(legal_moves(Player::One, &board), vec![1, 3, 5]);
        assert_eq!(legal_moves(Player::Two, &board), vec![3, 0]);
    }

    #[test]
    fn exhausted_side_has_no_moves() {
        let board = Board::from_pits(
            [0, 0, 0, 0, 0, 0, 40],
            [1, 1, 1, 1, 1, 1, 26],
        )
        .unwrap();
        assert!(legal_moves(Player::One, &board).is_empty());
        assert!(!has_moves(Player::One, &board));
        assert!(has_moves(Player::Two, &board));
    }
}
