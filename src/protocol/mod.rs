//! Console and file boundary.
//!
//! Everything that turns text into game configuration or moves, and game
//! state back into text: pit labels, board rendering, strategy files,
//! command-line arguments and interactive prompts.

pub mod args;
pub mod display;
pub mod label;
pub mod prompt;
pub mod strategy;

pub use args::{parse_args, ArgsError, Invocation};
pub use display::{replay_line, write_board, write_replay};
pub use label::{label_pit, legal_labels, pit_label};
pub use prompt::{ask_move, prompt_config};
pub use strategy::{load_strategy, parse_depth, parse_strategy, ConfigError, StrategyFile};
