//! Checker moves: single steps, complete-turn sequences, and candidates.
//!
//! A [`MoveStep`] moves one checker once. A [`MoveSequence`] is the 1-4 steps
//! making up a complete turn, applied atomically; ordering can matter for
//! legality (vacating a point first, say) but not for the final counts.
//! A [`CandidateMove`] pairs a sequence with the position it produces - the
//! unit the rules engine emits and the search engine scores.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::BoardState;

/// Symbolic source point for a bar re-entry.
pub const BAR: u8 = 0;

/// Symbolic target point for bearing off.
pub const OFF: u8 = 25;

/// A single checker movement.
///
/// `from` is 1-24 or [`BAR`]; `to` is 1-24 or [`OFF`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveStep {
    pub from: u8,
    pub to: u8,
}

impl MoveStep {
    #[must_use]
    pub const fn new(from: u8, to: u8) -> Self {
        Self { from, to }
    }

    /// Whether this step re-enters a checker from the bar.
    #[must_use]
    pub const fn is_entry(&self) -> bool {
        self.from == BAR
    }

    /// Whether this step bears a checker off.
    #[must_use]
    pub const fn is_bear_off(&self) -> bool {
        self.to == OFF
    }
}

impl std::fmt::Display for MoveStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.from, self.to) {
            (BAR, to) => write!(f, "bar/{to}"),
            (from, OFF) => write!(f, "{from}/off"),
            (from, to) => write!(f, "{from}/{to}"),
        }
    }
}

/// An ordered list of 1-4 steps forming a complete turn.
///
/// Backed by a `SmallVec` sized for the four-move doubles case, so sequences
/// never touch the heap. An empty sequence means the turn passes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveSequence {
    steps: SmallVec<[MoveStep; 4]>,
}

impl MoveSequence {
    /// The empty sequence (no legal move, turn passes).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[must_use]
    pub fn steps(&self) -> &[MoveStep] {
        &self.steps
    }

    pub fn push(&mut self, step: MoveStep) {
        debug_assert!(self.steps.len() < 4, "a turn has at most four steps");
        self.steps.push(step);
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoveStep> {
        self.steps.iter()
    }
}

impl FromIterator<MoveStep> for MoveSequence {
    fn from_iter<I: IntoIterator<Item = MoveStep>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

impl From<&[MoveStep]> for MoveSequence {
    fn from(steps: &[MoveStep]) -> Self {
        Self {
            steps: SmallVec::from_slice(steps),
        }
    }
}

impl std::fmt::Display for MoveSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.steps.is_empty() {
            return write!(f, "(no play)");
        }
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

/// A legal complete turn paired with the position it produces.
///
/// The resulting state already has the turn passed to the opponent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateMove {
    pub sequence: MoveSequence,
    pub state: BoardState,
}
