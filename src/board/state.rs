//! Board state and sowing rules.
//!
//! A Kalah position is 14 seed counts: six pits and one store per player.
//! The struct is `Copy`, so search branches take private snapshots by
//! assignment and never observe each other's mutations.

use thiserror::Error;

use super::player::{Player, ALL_PLAYERS};

/// Number of sowing pits per player.
pub const PITS: usize = 6;
/// Index of a player's store within their row.
pub const STORE: usize = 6;
/// Seeds placed in every pit at the start of a game.
pub const INITIAL_SEEDS: u8 = 6;
/// Seeds in play for the whole game.
pub const TOTAL_SEEDS: u32 = 2 * PITS as u32 * INITIAL_SEEDS as u32;
/// A score no position can reach, used as the search bound.
pub const INFINITE_SCORE: i32 = TOTAL_SEEDS as i32 + 1;

/// Errors raised when building a board from explicit counts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board holds {0} seeds, expected 72")]
    WrongSeedTotal(u32),
}

/// Where the last seed of a sowing came to rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    /// In the mover's own store; the mover plays again.
    Store,
    /// In one of the mover's own pits. `captured` counts the seeds moved to
    /// the store by a capture, including the landing seed, or 0.
    Own { pit: usize, captured: u8 },
    /// In one of the opponent's pits.
    Opponent { pit: usize },
}

impl Landing {
    /// Returns true if the sowing grants a bonus move.
    pub const fn is_bonus(self) -> bool {
        matches!(self, Landing::Store)
    }
}

/// A complete Kalah position.
///
/// Row `player.index()` holds that player's pits at 0..6 and store at 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[u8; PITS + 1]; 2],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates the starting position: six seeds per pit, empty stores.
    pub fn new() -> Self {
        let mut row = [INITIAL_SEEDS; PITS + 1];
        row[STORE] = 0;
        Board { cells: [row, row] }
    }

    /// Creates a position from explicit rows, pits first and store last.
    ///
    /// Rejects rows that do not hold exactly `TOTAL_SEEDS` seeds between them.
    pub fn from_pits(one: [u8; PITS + 1], two: [u8; PITS + 1]) -> Result<Self, BoardError> {
        let board = Board { cells: [one, two] };
        let total = board.total_seeds();
        if total != TOTAL_SEEDS {
            return Err(BoardError::WrongSeedTotal(total));
        }
        Ok(board)
    }

    /// Seeds in a pit (0..6) or the store (6).
    pub fn seeds(&self, player: Player, pit: usize) -> u8 {
        self.cells[player.index()][pit]
    }

    /// Seeds in the player's store.
    pub fn score(&self, player: Player) -> u8 {
        self.cells[player.index()][STORE]
    }

    /// Own store minus the opponent's store.
    pub fn net_score(&self, player: Player) -> i32 {
        i32::from(self.score(player)) - i32::from(self.score(player.opponent()))
    }

    /// Seeds left in the player's six pits.
    pub fn side_seeds(&self, player: Player) -> u32 {
        self.cells[player.index()][..PITS]
            .iter()
            .map(|&s| u32::from(s))
            .sum()
    }

    /// Seeds on the whole board, stores included.
    pub fn total_seeds(&self) -> u32 {
        ALL_PLAYERS
            .iter()
            .flat_map(|p| self.cells[p.index()].iter())
            .map(|&s| u32::from(s))
            .sum()
    }

    /// Returns true if the player has no seeds to sow.
    pub fn is_exhausted(&self, player: Player) -> bool {
        self.side_seeds(player) == 0
    }

    /// Sows the seeds of `pit` for `player` and applies any capture.
    ///
    /// Seeds travel through the mover's remaining pits, the mover's store and
    /// the opponent's pits, skipping the opponent's store.
    pub fn sow(&mut self, player: Player, pit: usize) -> Landing {
        debug_assert!(pit < PITS, "pit {} out of range", pit);

        let own = player.index();
        let opp = player.opponent().index();
        let mut seeds = std::mem::take(&mut self.cells[own][pit]);
        let mut pos = pit;
        let mut own_side = true;

        while seeds > 0 {
            pos += 1;
            if own_side && pos > STORE {
                pos = 0;
                own_side = false;
            } else if !own_side && pos >= PITS {
                pos = 0;
                own_side = true;
            }
            let row = if own_side { own } else { opp };
            self.cells[row][pos] += 1;
            seeds -= 1;
        }

        if !own_side {
            return Landing::Opponent { pit: pos };
        }
        if pos == STORE {
            return Landing::Store;
        }

        let mut captured = 0;
        if self.cells[own][pos] == 1 {
            let mirror = PITS - 1 - pos;
            let across = self.cells[opp][mirror];
            if across > 0 {
                self.cells[opp][mirror] = 0;
                self.cells[own][pos] = 0;
                captured = across + 1;
                self.cells[own][STORE] += captured;
            }
        }
        Landing::Own { pit: pos, captured }
    }

    /// Moves every seed left in the player's pits into the player's store.
    /// Returns the number of seeds moved.
    pub fn gather(&mut self, player: Player) -> u8 {
        let row = &mut self.cells[player.index()];
        let mut gathered = 0;
        for pit in row[..PITS].iter_mut() {
            gathered += std::mem::take(pit);
        }
        row[STORE] += gathered;
        gathered
    }
}
