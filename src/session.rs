//! Per-game bookkeeping.
//!
//! A `Session` owns the ledger of played moves and the count of board
//! instances created, both for the game itself and for every search branch.
//! The driver creates one per game and lends it to the turn controller and
//! the search by mutable reference.

use serde::Serialize;

use crate::board::{Board, Player};

/// A single-pit move that was played on the live board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayedMove {
    pub player: Player,
    pub pit: usize,
}

/// Move ledger and board-instance counter for one game.
#[derive(Debug, Default)]
pub struct Session {
    boards_created: u64,
    record: Vec<PlayedMove>,
}

impl Session {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a starting board and counts it.
    pub fn new_board(&mut self) -> Board {
        self.boards_created += 1;
        Board::new()
    }

    /// Takes an independent snapshot of `board` and counts it.
    pub fn copy_board(&mut self, board: &Board) -> Board {
        self.boards_created += 1;
        *board
    }

    /// Appends a played move to the ledger.
    pub fn record(&mut self, player: Player, pit: usize) {
        self.record.push(PlayedMove { player, pit });
    }

    /// Every move played so far, oldest first.
    pub fn moves(&self) -> &[PlayedMove] {
        &self.record
    }

    /// Board instances created so far, including search copies.
    pub fn boards_created(&self) -> u64 {
        self.boards_created
    }

    /// Boards created beyond the live board and one per played move.
    pub fn boards_expanded(&self) -> u64 {
        self.boards_created
            .saturating_sub(self.record.len() as u64 + 1)
    }
}
