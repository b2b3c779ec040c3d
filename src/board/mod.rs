//! Board representation and game-state types.
//!
//! Contains the player identities and the 14-cell Kalah position with its
//! sowing, capture and gathering transitions.

pub mod player;
pub mod state;

pub use player::{Player, ALL_PLAYERS};
pub use state::{
    Board, BoardError, Landing, INFINITE_SCORE, INITIAL_SEEDS, PITS, STORE, TOTAL_SEEDS,
};
