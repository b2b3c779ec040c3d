//! Console rendering of boards and move replays.

use std::io::{self, Write};

use crate::board::{Board, Player, ALL_PLAYERS, PITS};
use crate::session::PlayedMove;

use super::label::pit_label;

/// Writes the board with Player Two's row on top, each pit as `label-seeds`.
///
/// Player Two's store leads its row; Player One's store trails its row.
pub fn write_board<W: Write>(board: &Board, out: &mut W) -> io::Result<()> {
    writeln!(out, "PLAYER 2")?;
    write!(out, "{}", board.score(Player::Two))?;
    for pit in (0..PITS).rev() {
        write!(out, "\t{}-{}", pit_label(Player::Two, pit), board.seeds(Player::Two, pit))?;
    }
    writeln!(out)?;

    for pit in 0..PITS {
        write!(out, "\t{}-{}", pit_label(Player::One, pit), board.seeds(Player::One, pit))?;
    }
    writeln!(out, "\t{}", board.score(Player::One))?;
    writeln!(out, "PLAYER 1")
}

/// One player's moves in game order, with a blank wherever the other
/// player moved.
pub fn replay_line(player: Player, moves: &[PlayedMove]) -> String {
    moves
        .iter()
        .map(|m| {
            if m.player == player {
                pit_label(player, m.pit)
            } else {
                ' '
            }
        })
        .collect()
}

/// Writes the replay of every move, one line per player.
pub fn write_replay<W: Write>(moves: &[PlayedMove], out: &mut W) -> io::Result<()> {
    writeln!(out, "Game moves:")?;
    for player in ALL_PLAYERS {
        writeln!(out, "{}: {}", player.number(), replay_line(player, moves))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_board_rendering() {
        let mut out = Vec::new();
        write_board(&Board::new(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "PLAYER 2\n\
             0\tA-6\tB-6\tC-6\tD-6\tE-6\tF-6\n\
             \tf-6\te-6\td-6\tc-6\tb-6\ta-6\t0\n\
             PLAYER 1\n"
        );
    }

    #[test]
    fn rendering_tracks_pits() {
        let mut board = Board::new();
        board.sow(Player::One, 0);
        let mut out = Vec::new();
        write_board(&board, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows[2], "\tf-0\te-7\td-7\tc-7\tb-7\ta-7\t1");
    }

    #[test]
    fn replay_interleaves_players() {
        let moves = [
            PlayedMove { player: Player::One, pit: 0 },
            PlayedMove { player: Player::One, pit: 1 },
            PlayedMove { player: Player::Two, pit: 5 },
            PlayedMove { player: Player::One, pit: 5 },
        ];
        assert_eq!(replay_line(Player::One, &moves), "fe a");
        assert_eq!(replay_line(Player::Two, &moves), "  A ");

        let mut out = Vec::new();
        write_replay(&moves, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Game moves:\n1: fe a\n2:   A \n");
    }
}
