//! Player identification.
//!
//! Backgammon is strictly two-player: White and Black. White checkers are
//! stored as positive point counts and travel from point 24 toward point 1;
//! Black checkers are negative and travel from point 1 toward point 24.

use serde::{Deserialize, Serialize};

/// One of the two backgammon players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    White,
    Black,
}

impl Player {
    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Sign of this player's checkers in `BoardState::points`.
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Player::White => 1,
            Player::Black => -1,
        }
    }

    /// Whether `point` (1-24) lies in this player's home board.
    ///
    /// White's home board is points 1-6, Black's is 19-24.
    #[must_use]
    pub const fn is_home_point(self, point: u8) -> bool {
        match self {
            Player::White => point >= 1 && point <= 6,
            Player::Black => point >= 19 && point <= 24,
        }
    }

    /// Distance from `point` (1-24) to bearing off for this player.
    #[must_use]
    pub const fn distance(self, point: u8) -> u8 {
        match self {
            Player::White => point,
            Player::Black => 25 - point,
        }
    }

    /// Bar re-entry point for a die value (1-6).
    ///
    /// White re-enters on points 1-6 (die value = point), Black on
    /// points 19-24.
    #[must_use]
    pub const fn entry_point(self, die: u8) -> u8 {
        match self {
            Player::White => die,
            Player::Black => 25 - die,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::White => write!(f, "white"),
            Player::Black => write!(f, "black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::White.opponent(), Player::Black);
        assert_eq!(Player::Black.opponent(), Player::White);
    }

    #[test]
    fn test_home_points() {
        assert!(Player::White.is_home_point(1));
        assert!(Player::White.is_home_point(6));
        assert!(!Player::White.is_home_point(7));
        assert!(Player::Black.is_home_point(19));
        assert!(Player::Black.is_home_point(24));
        assert!(!Player::Black.is_home_point(18));
    }

    #[test]
    fn test_distance_is_mirror_symmetric() {
        for p in 1..=24u8 {
            assert_eq!(Player::White.distance(p), Player::Black.distance(25 - p));
        }
    }

    #[test]
    fn test_entry_points_lie_in_home() {
        for die in 1..=6u8 {
            assert!(Player::White.is_home_point(Player::White.entry_point(die)));
            assert!(Player::Black.is_home_point(Player::Black.entry_point(die)));
        }
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Player::White).unwrap(), "\"white\"");
        let p: Player = serde_json::from_str("\"black\"").unwrap();
        assert_eq!(p, Player::Black);
    }
}
