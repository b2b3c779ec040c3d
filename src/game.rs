//! Game driver.
//!
//! Alternates turns between the two seats until one of them cannot move,
//! echoing every board and move to the console, then builds the end-of-game
//! summary with its statistics.

use std::fs;
use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::info;

use crate::board::{Board, Player, ALL_PLAYERS};
use crate::engine::{apply_move, finish, Contestant, GameResult, TurnOutcome};
use crate::movegen::has_moves;
use crate::protocol::display::{replay_line, write_board, write_replay};
use crate::protocol::label::pit_label;
use crate::protocol::prompt::ask_move;
use crate::session::Session;

/// Depth and seats for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub depth: i32,
    pub players: [Contestant; 2],
}

/// End-of-game figures, printed as text and optionally as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct GameSummary {
    pub result: GameResult,
    pub depth: i32,
    pub players: [Contestant; 2],
    pub scores: [u8; 2],
    pub turns: u32,
    pub replay: [String; 2],
    pub boards_generated: u64,
    pub boards_expanded: u64,
    pub elapsed_secs: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peak_memory_kb: Option<u64>,
}

/// A game in progress.
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    board: Board,
    session: Session,
    turns: u32,
    elapsed: Duration,
}

impl Game {
    /// Sets up a game on the starting board.
    pub fn new(config: GameConfig) -> Self {
        let mut session = Session::new();
        let board = session.new_board();
        Game {
            config,
            board,
            session,
            turns: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// Sets up a game continuing from an arbitrary position.
    pub fn with_board(config: GameConfig, board: &Board) -> Self {
        let mut session = Session::new();
        let board = session.copy_board(board);
        Game {
            config,
            board,
            session,
            turns: 0,
            elapsed: Duration::ZERO,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Number of turns in which a player moved.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Plays to the end, Player One first. Human seats read from `input`.
    pub fn play<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> io::Result<GameResult> {
        let started = Instant::now();
        for seat in &self.config.players {
            write_seat(seat, out)?;
        }
        info!(depth = self.config.depth, "game started");

        let mut mover = Player::One;
        let result = loop {
            writeln!(out, "Game before turn {}", self.turns + 1)?;
            write_board(&self.board, out)?;

            let seat = self.config.players[mover.index()];
            let outcome = match seat {
                Contestant::Engine(strategy) => {
                    let played = self.session.moves().len();
                    let outcome = strategy.take_turn(&mut self.board, &mut self.session, self.config.depth);
                    for m in &self.session.moves()[played..] {
                        echo_move(m.player, m.pit, out)?;
                    }
                    outcome
                }
                Contestant::Human(player) => self.human_turn(player, input, out)?,
            };

            match outcome {
                TurnOutcome::Continue => {
                    self.turns += 1;
                    writeln!(out, "Game after turn {}", self.turns)?;
                    write_board(&self.board, out)?;
                    mover = mover.opponent();
                }
                TurnOutcome::Finished(result) => break result,
            }
        };
        self.elapsed += started.elapsed();
        Ok(result)
    }

    /// Reads moves from the console until the turn ends.
    fn human_turn<R: BufRead, W: Write>(
        &mut self,
        player: Player,
        input: &mut R,
        out: &mut W,
    ) -> io::Result<TurnOutcome> {
        if !has_moves(player, &self.board) {
            return Ok(TurnOutcome::Finished(finish(&mut self.board, player)));
        }
        loop {
            let pit = ask_move(player, &self.board, input, out)?;
            let landing = apply_move(&mut self.board, &mut self.session, player, pit);
            echo_move(player, pit, out)?;
            if !landing.is_bonus() || !has_moves(player, &self.board) {
                return Ok(TurnOutcome::Continue);
            }
        }
    }

    /// Collects the end-of-game figures.
    pub fn summary(&self, result: GameResult) -> GameSummary {
        let moves = self.session.moves();
        GameSummary {
            result,
            depth: self.config.depth,
            players: self.config.players,
            scores: ALL_PLAYERS.map(|p| self.board.score(p)),
            turns: self.turns,
            replay: ALL_PLAYERS.map(|p| replay_line(p, moves)),
            boards_generated: self.session.boards_created(),
            boards_expanded: self.session.boards_expanded(),
            elapsed_secs: self.elapsed.as_secs_f64(),
            peak_memory_kb: peak_memory_kb(),
        }
    }

    /// Writes the final board, the result, the replay and the statistics.
    pub fn write_summary<W: Write>(&self, summary: &GameSummary, out: &mut W) -> io::Result<()> {
        writeln!(out, "Game FINAL:")?;
        write_board(&self.board, out)?;
        match summary.result {
            GameResult::Tie => writeln!(out, "The game was TIED!")?,
            GameResult::Winner(player) => writeln!(out, "Player {} WINS!", player.number())?,
        }
        write_replay(self.session.moves(), out)?;
        writeln!(out, "Game played {} turns.", summary.turns)?;
        writeln!(out, "Game nodes generated: {}", summary.boards_generated)?;
        writeln!(out, "Game nodes expanded: {}", summary.boards_expanded)?;
        writeln!(out, "Game played in {:.3} secs.", summary.elapsed_secs)?;
        if let Some(kb) = summary.peak_memory_kb {
            writeln!(out, "Max. memory usage: {}k", kb)?;
        }
        Ok(())
    }
}

/// Writes the summary as a single JSON line.
pub fn write_summary_json<W: Write>(summary: &GameSummary, out: &mut W) -> io::Result<()> {
    serde_json::to_writer(&mut *out, summary)?;
    writeln!(out)
}

fn write_seat<W: Write>(seat: &Contestant, out: &mut W) -> io::Result<()> {
    match seat {
        Contestant::Engine(strategy) => writeln!(
            out,
            "Player {}: algorithm: {} evalfunc: {}",
            strategy.player.number(),
            strategy.algorithm.name(),
            strategy.evaluator.name()
        ),
        Contestant::Human(player) => writeln!(out, "Player {}: human", player.number()),
    }
}

fn echo_move<W: Write>(player: Player, pit: usize, out: &mut W) -> io::Result<()> {
    writeln!(out, "Player {}: moves {}", player.number(), pit_label(player, pit))
}

/// Peak resident set size of this process, from `/proc/self/status`.
fn peak_memory_kb() -> Option<u64> {
    let status = fs::read_to_string("/proc/self/status").ok()?;
    parse_vm_hwm(&status)
}

fn parse_vm_hwm(status: &str) -> Option<u64> {
    status
        .lines()
        .find_map(|line| line.strip_prefix("VmHWM:"))
        .and_then(|rest| rest.split_whitespace().next())
        .and_then(|kb| kb.parse().ok())
}
