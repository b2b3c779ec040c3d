//! Kalah -- two strategies play a full game on the console.
//!
//! Usage:
//!   kalah [--json]
//!   kalah -d <2|4> -1 <file> -2 <file> [--json]
//!
//! With no strategy files the depth and both strategies are asked for on
//! the console. Logging goes to stderr and is controlled by `RUST_LOG`.

use std::env;
use std::io::{self, BufWriter, Write};
use std::process;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use kalah::board::Player;
use kalah::game::{write_summary_json, Game, GameConfig};
use kalah::protocol::args::{parse_args, ArgsError, Invocation};
use kalah::protocol::prompt::prompt_config;
use kalah::protocol::strategy::{load_strategy, ConfigError};

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Args(#[from] ArgsError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            CliError::Args(_) | CliError::Config(_) => 2,
            CliError::Io(_) => 1,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(e) = run(&args) {
        eprintln!("kalah: {}", e);
        if matches!(e, CliError::Args(_)) {
            print_usage();
        }
        process::exit(e.exit_code());
    }
}

fn run(args: &[String]) -> Result<(), CliError> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let (config, json) = match parse_args(args)? {
        Invocation::Help => {
            print_usage();
            return Ok(());
        }
        Invocation::Interactive { json } => {
            let (depth, players) = prompt_config(&mut input, &mut out)?;
            (GameConfig { depth, players }, json)
        }
        Invocation::Files {
            depth,
            player1,
            player2,
            json,
        } => {
            let one = load_strategy(&player1, Player::One)?;
            let two = load_strategy(&player2, Player::Two)?;
            let players = [one.contestant, two.contestant];
            (GameConfig { depth, players }, json)
        }
    };

    let mut game = Game::new(config);
    let result = game.play(&mut input, &mut out)?;
    let summary = game.summary(result);
    game.write_summary(&summary, &mut out)?;
    if json {
        write_summary_json(&summary, &mut out)?;
    }
    out.flush()?;
    Ok(())
}

fn print_usage() {
    eprintln!("Usage: kalah [-d <2|4> -1 <strategy file> -2 <strategy file>] [--json]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -d N       Search depth, 2 or 4");
    eprintln!("  -1 FILE    Strategy file for player 1");
    eprintln!("  -2 FILE    Strategy file for player 2");
    eprintln!("  --json     Also print the game summary as JSON");
    eprintln!("  -h, --help Show this help");
    eprintln!();
    eprintln!("Strategy files hold 'algorithm minimax|alphabeta|human' and");
    eprintln!("'evalfunc netscore|myscore' pairs.");
}
