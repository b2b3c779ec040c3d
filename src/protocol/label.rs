//! Pit labels.
//!
//! On the console each pit is named by one letter. Player One's pits 0..5
//! are `f e d c b a`; Player Two's pits 5..0 are `A B C D E F`. Read left to
//! right, the printed board then shows both rows in label order.

use crate::board::{Board, Player, PITS};
use crate::movegen::legal_moves;

/// Returns the console label of a pit.
pub fn pit_label(player: Player, pit: usize) -> char {
    debug_assert!(pit < PITS);
    match player {
        Player::One => (b'f' - pit as u8) as char,
        Player::Two => (b'A' + (PITS - 1 - pit) as u8) as char,
    }
}

/// Parses a console label into a pit index for `player`.
///
/// Labels belonging to the other player, or to no pit, yield `None`.
pub fn label_pit(player: Player, label: char) -> Option<usize> {
    match player {
        Player::One if ('a'..='f').contains(&label) => Some((b'f' - label as u8) as usize),
        Player::Two if ('A'..='F').contains(&label) => {
            Some(PITS - 1 - (label as u8 - b'A') as usize)
        }
        _ => None,
    }
}

/// Returns the labels of the player's legal moves, in scan order.
pub fn legal_labels(player: Player, board: &Board) -> Vec<char> {
    legal_moves(player, board)
        .into_iter()
        .map(|pit| pit_label(player, pit))
        .collect()
}
