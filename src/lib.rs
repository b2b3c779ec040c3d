//! Kalah engine library.
//!
//! Exposes the board, move enumeration, evaluation, search, turn control and
//! console protocol modules for use by integration tests and the binary
//! entry point.

pub mod board;
pub mod engine;
pub mod eval;
pub mod game;
pub mod movegen;
pub mod protocol;
pub mod search;
pub mod session;
