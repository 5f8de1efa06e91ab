//! Board state: an immutable snapshot of a backgammon position.
//!
//! ## Representation
//!
//! `points[i]` holds the checker count on board point `i + 1`, numbered 1-24
//! from White's perspective. Positive counts are White checkers, negative are
//! Black, so a point can never hold both colors at once. Bar and borne-off
//! checkers are tracked separately per side.
//!
//! ## Invariants
//!
//! Each side always accounts for exactly 15 checkers across points, bar and
//! off. The doubling cube value is a power of two. [`BoardState::validate`]
//! checks both; rule application preserves them by construction.
//!
//! `BoardState` is a value type: rule application and search never mutate a
//! state in place, they derive a new one. Cloning is a flat 40-byte copy.

use serde::{Deserialize, Serialize};

use super::error::EngineError;
use super::player::Player;

/// Total checkers per side.
pub const CHECKERS_PER_SIDE: u8 = 15;

/// A complete backgammon position plus turn, cube and match metadata.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    /// Checker counts per point, index 0-23 = points 1-24 (White's
    /// perspective). Positive = White, negative = Black.
    pub points: [i8; 24],

    /// White checkers on the bar.
    pub bar_white: u8,
    /// Black checkers on the bar.
    pub bar_black: u8,

    /// White checkers borne off.
    pub off_white: u8,
    /// Black checkers borne off.
    pub off_black: u8,

    /// Whose turn it is.
    pub player_to_move: Player,

    /// Doubling cube multiplier (power of two, >= 1).
    pub cube_value: u32,

    /// Who may next double; `None` = centered cube, either side may.
    pub cube_owner: Option<Player>,

    /// Match context. `match_length == 0` means a money game.
    pub match_score_white: u32,
    pub match_score_black: u32,
    pub match_length: u32,
}

impl BoardState {
    /// The standard starting position with White to move.
    ///
    /// White: 2 on point 24, 5 on 13, 3 on 8, 5 on 6.
    /// Black mirrors: 2 on 1, 5 on 12, 3 on 17, 5 on 19.
    #[must_use]
    pub fn starting() -> Self {
        let mut points = [0i8; 24];
        points[24 - 1] = 2;
        points[13 - 1] = 5;
        points[8 - 1] = 3;
        points[6 - 1] = 5;
        points[1 - 1] = -2;
        points[12 - 1] = -5;
        points[17 - 1] = -3;
        points[19 - 1] = -5;

        Self {
            points,
            bar_white: 0,
            bar_black: 0,
            off_white: 0,
            off_black: 0,
            player_to_move: Player::White,
            cube_value: 1,
            cube_owner: None,
            match_score_white: 0,
            match_score_black: 0,
            match_length: 0,
        }
    }

    /// An empty board (no checkers anywhere) for test construction.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            points: [0; 24],
            bar_white: 0,
            bar_black: 0,
            off_white: 0,
            off_black: 0,
            player_to_move: Player::White,
            cube_value: 1,
            cube_owner: None,
            match_score_white: 0,
            match_score_black: 0,
            match_length: 0,
        }
    }

    /// Signed checker count on `point` (1-24).
    #[must_use]
    pub fn point(&self, point: u8) -> i8 {
        debug_assert!((1..=24).contains(&point));
        self.points[point as usize - 1]
    }

    /// Number of `player`'s checkers on `point` (1-24), zero if the point is
    /// empty or held by the opponent.
    #[must_use]
    pub fn checkers_on(&self, point: u8, player: Player) -> u8 {
        let v = self.point(point);
        if v.signum() == player.sign() {
            v.unsigned_abs()
        } else {
            0
        }
    }

    /// Checkers `player` has on the bar.
    #[must_use]
    pub fn bar(&self, player: Player) -> u8 {
        match player {
            Player::White => self.bar_white,
            Player::Black => self.bar_black,
        }
    }

    /// Checkers `player` has borne off.
    #[must_use]
    pub fn off(&self, player: Player) -> u8 {
        match player {
            Player::White => self.off_white,
            Player::Black => self.off_black,
        }
    }

    /// Total checkers `player` has on points + bar + off.
    #[must_use]
    pub fn checker_count(&self, player: Player) -> u32 {
        let on_points: u32 = (1..=24u8)
            .map(|p| u32::from(self.checkers_on(p, player)))
            .sum();
        on_points + u32::from(self.bar(player)) + u32::from(self.off(player))
    }

    /// Whether every one of `player`'s remaining checkers is in their home
    /// board with none on the bar - the bear-off precondition.
    #[must_use]
    pub fn all_home(&self, player: Player) -> bool {
        if self.bar(player) > 0 {
            return false;
        }
        (1..=24u8)
            .filter(|&p| !player.is_home_point(p))
            .all(|p| self.checkers_on(p, player) == 0)
    }

    /// Pip count for `player`: total dice pips needed to bear everything off.
    ///
    /// A barred checker is charged 7 pips (the worst re-entry distance plus
    /// one, since it must re-enter before moving on).
    #[must_use]
    pub fn pip_count(&self, player: Player) -> u32 {
        let on_points: u32 = (1..=24u8)
            .map(|p| u32::from(self.checkers_on(p, player)) * u32::from(player.distance(p)))
            .sum();
        on_points + 7 * u32::from(self.bar(player))
    }

    /// A copy of this state with the turn passed to the opponent.
    ///
    /// Used when a player has no legal move for a roll.
    #[must_use]
    pub fn flipped_turn(&self) -> Self {
        let mut next = self.clone();
        next.player_to_move = self.player_to_move.opponent();
        next
    }

    /// Check the structural invariants.
    ///
    /// Point-sign exclusivity and non-negative counts hold by representation;
    /// this verifies the 15-checker conservation law per side, point
    /// magnitudes, and the cube value.
    pub fn validate(&self) -> Result<(), EngineError> {
        for (i, &v) in self.points.iter().enumerate() {
            if v.unsigned_abs() > CHECKERS_PER_SIDE {
                return Err(EngineError::InvalidState(format!(
                    "point {} holds {} checkers",
                    i + 1,
                    v.unsigned_abs()
                )));
            }
        }

        for player in [Player::White, Player::Black] {
            let total = self.checker_count(player);
            if total != u32::from(CHECKERS_PER_SIDE) {
                return Err(EngineError::InvalidState(format!(
                    "{player} accounts for {total} checkers, expected {CHECKERS_PER_SIDE}"
                )));
            }
        }

        if self.cube_value == 0 || !self.cube_value.is_power_of_two() {
            return Err(EngineError::InvalidState(format!(
                "cube value {} is not a power of two",
                self.cube_value
            )));
        }

        Ok(())
    }
}
