//! Console prompts: game configuration and human moves.
//!
//! Every prompt repeats until it gets an acceptable answer. Running out of
//! input is an `UnexpectedEof` error.

use std::io::{self, BufRead, Write};

use crate::board::{Board, Player, ALL_PLAYERS};
use crate::engine::Contestant;
use crate::eval::Evaluator;

use super::label::{label_pit, legal_labels};
use super::strategy::{contestant, parse_algorithm, parse_depth};

/// Reads one trimmed line, failing on end of input.
fn read_answer<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }
    Ok(line.trim().to_string())
}

/// Asks `question` until `parse` accepts the answer, printing `hint` after
/// each rejection.
fn ask<R, W, T, E>(
    input: &mut R,
    out: &mut W,
    question: &str,
    hint: &str,
    parse: impl Fn(&str) -> Result<T, E>,
) -> io::Result<T>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(out, "{}", question)?;
        out.flush()?;
        match parse(&read_answer(input)?) {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(out, "{}", hint)?,
        }
    }
}

/// Asks for the search depth and both players' strategies.
pub fn prompt_config<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> io::Result<(i32, [Contestant; 2])> {
    let depth = ask(
        input,
        out,
        "What depth do you want the Kalah strategy to go? ",
        "Depths supported are 2 or 4.",
        parse_depth,
    )?;

    let mut seats = ALL_PLAYERS.map(Contestant::Human);
    for (seat, player) in seats.iter_mut().zip(ALL_PLAYERS) {
        let n = player.number();
        let algorithm = ask(
            input,
            out,
            &format!("What is Player {}'s search algorithm? ", n),
            "Algorithms are: minimax, alphabeta or human.",
            parse_algorithm,
        )?;
        let evaluator = match algorithm {
            Some(_) => ask(
                input,
                out,
                &format!("What is Player {}'s evaluation function? ", n),
                "Evaluation functions are: netscore or myscore.",
                |s| Evaluator::from_name(s).ok_or(()),
            )?,
            None => Evaluator::default(),
        };
        *seat = contestant(player, algorithm, evaluator);
    }
    Ok((depth, seats))
}

/// Asks a human player for one pit, showing the legal labels.
///
/// The caller guarantees the player has at least one legal move.
pub fn ask_move<R: BufRead, W: Write>(
    player: Player,
    board: &Board,
    input: &mut R,
    out: &mut W,
) -> io::Result<usize> {
    let labels = legal_labels(player, board);
    let shown: Vec<String> = labels.iter().map(char::to_string).collect();
    let question = format!(
        "Player {}: Select hole to move: {} -> ",
        player.number(),
        shown.join(" ")
    );
    ask(input, out, &question, "Not a legal hole.", |answer| {
        let mut chars = answer.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if labels.contains(&c) => label_pit(player, c).ok_or(()),
            _ => Err(()),
        }
    })
}
