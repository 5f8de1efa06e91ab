//! Dice rolls.
//!
//! A roll is two dice in 1-6. Doubles grant four moves of the same value.
//! There are 21 distinct rolls (6 doubles + 15 unordered pairs); the search
//! engine averages over them when simulating opponent replies.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::EngineError;

/// A roll of two dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceRoll {
    pub die1: u8,
    pub die2: u8,
}

impl DiceRoll {
    /// Create a roll. Values are not checked here; use [`DiceRoll::validate`]
    /// at the boundary (deserialized input may be out of range).
    #[must_use]
    pub const fn new(die1: u8, die2: u8) -> Self {
        Self { die1, die2 }
    }

    /// Check both dice are in 1-6.
    pub fn validate(&self) -> Result<(), EngineError> {
        for die in [self.die1, self.die2] {
            if !(1..=6).contains(&die) {
                return Err(EngineError::InvalidDice(die));
            }
        }
        Ok(())
    }

    /// Whether both dice show the same value.
    #[must_use]
    pub const fn is_double(&self) -> bool {
        self.die1 == self.die2
    }

    /// The usable die values: two for a normal roll, four for a double.
    #[must_use]
    pub fn values(&self) -> SmallVec<[u8; 4]> {
        if self.is_double() {
            SmallVec::from_slice(&[self.die1; 4])
        } else {
            SmallVec::from_slice(&[self.die1, self.die2])
        }
    }

    /// All 21 distinct rolls, in a fixed enumeration order.
    #[must_use]
    pub fn all() -> Vec<DiceRoll> {
        let mut rolls = Vec::with_capacity(21);
        for die1 in 1..=6u8 {
            for die2 in die1..=6u8 {
                rolls.push(DiceRoll::new(die1, die2));
            }
        }
        rolls
    }
}

impl std::fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.die1, self.die2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(DiceRoll::new(1, 6).validate().is_ok());
        assert!(matches!(
            DiceRoll::new(0, 3).validate(),
            Err(EngineError::InvalidDice(0))
        ));
        assert!(matches!(
            DiceRoll::new(3, 7).validate(),
            Err(EngineError::InvalidDice(7))
        ));
    }

    #[test]
    fn test_double_yields_four_values() {
        let roll = DiceRoll::new(4, 4);
        assert!(roll.is_double());
        assert_eq!(roll.values().as_slice(), &[4, 4, 4, 4]);
    }

    #[test]
    fn test_normal_roll_yields_two_values() {
        let roll = DiceRoll::new(3, 5);
        assert!(!roll.is_double());
        assert_eq!(roll.values().as_slice(), &[3, 5]);
    }

    #[test]
    fn test_all_enumerates_21_distinct_rolls() {
        let rolls = DiceRoll::all();
        assert_eq!(rolls.len(), 21);
        let doubles = rolls.iter().filter(|r| r.is_double()).count();
        assert_eq!(doubles, 6);
        // No unordered pair appears twice.
        for (i, a) in rolls.iter().enumerate() {
            for b in &rolls[i + 1..] {
                assert!(!(a.die1 == b.die2 && a.die2 == b.die1));
            }
        }
    }
}
