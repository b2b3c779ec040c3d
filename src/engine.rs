//! Turn control.
//!
//! Drives one player's turn on the live board: plans it with the player's
//! search, applies every pit of the turn, records it in the session, and
//! settles the game when the player to move has no seeds left.

use serde::Serialize;
use tracing::info;

use crate::board::{Board, Landing, Player};
use crate::eval::Evaluator;
use crate::movegen::has_moves;
use crate::search::{Algorithm, Searcher, Turn};
use crate::session::Session;

/// Final outcome of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    Winner(Player),
    Tie,
}

/// What happened when a player was asked to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The player moved; the opponent is next.
    Continue,
    /// The player had no move; seeds were gathered and the game is over.
    Finished(GameResult),
}

/// A computer player: its seat, search algorithm and evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Strategy {
    pub player: Player,
    pub algorithm: Algorithm,
    pub evaluator: Evaluator,
}

/// Who controls a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Contestant {
    Engine(Strategy),
    /// Moves are read from the console.
    Human(Player),
}

impl Contestant {
    /// The seat this contestant plays.
    pub fn player(&self) -> Player {
        match self {
            Contestant::Engine(strategy) => strategy.player,
            Contestant::Human(player) => *player,
        }
    }
}

impl Strategy {
    pub fn new(player: Player, algorithm: Algorithm, evaluator: Evaluator) -> Self {
        Strategy {
            player,
            algorithm,
            evaluator,
        }
    }

    /// Plans a full turn from `board` without touching it.
    ///
    /// Returns an empty turn only if the player has no legal move. When the
    /// budget is exhausted at the root the search yields no turn, so the
    /// greedy chain procedure picks one instead.
    pub fn plan_turn(&self, board: &Board, session: &mut Session, depth: i32) -> Turn {
        let mut searcher = Searcher::new(self.player, self.evaluator, session);
        let result = searcher.search(self.algorithm, board, depth);
        if !result.turn.is_empty() || !has_moves(self.player, board) {
            return result.turn;
        }
        let mut scratch = *board;
        searcher.greedy_chain(&mut scratch, self.player)
    }

    /// Plays this player's turn on the live board.
    pub fn take_turn(&self, board: &mut Board, session: &mut Session, depth: i32) -> TurnOutcome {
        let turn = self.plan_turn(board, session, depth);
        if turn.is_empty() {
            return TurnOutcome::Finished(finish(board, self.player));
        }
        apply_turn(board, session, self.player, &turn);
        TurnOutcome::Continue
    }
}

/// Sows one pit on the live board and records it.
pub fn apply_move(board: &mut Board, session: &mut Session, player: Player, pit: usize) -> Landing {
    let landing = board.sow(player, pit);
    session.record(player, pit);
    info!(player = player.number(), pit, ?landing, "move played");
    landing
}

/// Sows every pit of `turn` in order on the live board.
pub fn apply_turn(board: &mut Board, session: &mut Session, player: Player, turn: &[usize]) {
    for &pit in turn {
        apply_move(board, session, player, pit);
    }
}

/// Ends the game after `stuck` found no legal move.
///
/// The opponent's remaining seeds go to the opponent's store, then the stores
/// are compared directly: equal stores are a tie, otherwise the larger wins.
pub fn finish(board: &mut Board, stuck: Player) -> GameResult {
    let other = stuck.opponent();
    let gathered = board.gather(other);
    let result = result_of(board);
    info!(
        stuck = stuck.number(),
        gathered,
        player1 = board.score(Player::One),
        player2 = board.score(Player::Two),
        ?result,
        "game over"
    );
    result
}

/// Compares the two stores.
pub fn result_of(board: &Board) -> GameResult {
    let one = board.score(Player::One);
    let two = board.score(Player::Two);
    match one.cmp(&two) {
        std::cmp::Ordering::Greater => GameResult::Winner(Player::One),
        std::cmp::Ordering::Less => GameResult::Winner(Player::Two),
        std::cmp::Ordering::Equal => GameResult::Tie,
    }
}
