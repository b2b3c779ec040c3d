//! Player identities.
//!
//! Kalah always has exactly two sides. Player One moves first and owns the
//! bottom row of the board; Player Two owns the top row.

use serde::Serialize;

/// One of the two sides of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Player {
    One,
    Two,
}

/// Both players in turn order.
pub const ALL_PLAYERS: [Player; 2] = [Player::One, Player::Two];

impl Player {
    /// Returns the other side.
    pub const fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Returns the row index of this player in the board array.
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Returns the 1-based number shown on the console.
    pub const fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Parses a player from its 1-based number.
    pub fn from_number(n: u8) -> Option<Player> {
        match n {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_is_involution() {
        for p in ALL_PLAYERS {
            assert_ne!(p.opponent(), p);
            assert_eq!(p.opponent().opponent(), p);
        }
    }

    #[test]
    fn number_roundtrip() {
        for p in ALL_PLAYERS {
            assert_eq!(Player::from_number(p.number()), Some(p));
        }
        assert_eq!(Player::from_number(0), None);
        assert_eq!(Player::from_number(3), None);
    }

    #[test]
    fn indices_are_distinct() {
        assert_eq!(Player::One.index(), 0);
        assert_eq!(Player::Two.index(), 1);
    }
}
