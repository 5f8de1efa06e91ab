//! Model-free positional heuristic.
//!
//! A weighted blend of the pip-count race, bear-off progress, and blot
//! exposure, squashed through tanh into the evaluator contract range.
//! Deterministic, cheap, and good enough to drive the search when no
//! learned model is configured.

use crate::core::{BoardState, Player};

use super::traits::Evaluator;

/// Linear-features evaluator squashed into (-1, 1).
#[derive(Clone, Debug)]
pub struct HeuristicEvaluator {
    /// Weight on the normalized pip-count lead.
    pip_weight: f64,
    /// Weight on the borne-off checker lead.
    off_weight: f64,
    /// Penalty weight on the blot-count difference.
    blot_weight: f64,
}

impl Default for HeuristicEvaluator {
    fn default() -> Self {
        Self {
            pip_weight: 2.0,
            off_weight: 1.0,
            blot_weight: 0.25,
        }
    }
}

impl HeuristicEvaluator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of lone (hittable) checkers `player` has on the board.
    fn blots(state: &BoardState, player: Player) -> u32 {
        (1..=24u8)
            .filter(|&p| state.checkers_on(p, player) == 1)
            .count() as u32
    }
}

impl Evaluator for HeuristicEvaluator {
    fn score(&self, state: &BoardState) -> f64 {
        let mover = state.player_to_move;
        let opp = mover.opponent();

        // Finished games are certain.
        if state.off(mover) == 15 {
            return 1.0;
        }
        if state.off(opp) == 15 {
            return -1.0;
        }

        // 167 pips is each side's count in the starting position.
        let pip_lead =
            (f64::from(state.pip_count(opp)) - f64::from(state.pip_count(mover))) / 167.0;
        let off_lead = (f64::from(state.off(mover)) - f64::from(state.off(opp))) / 15.0;
        let blot_lead =
            (f64::from(Self::blots(state, opp)) - f64::from(Self::blots(state, mover))) / 15.0;

        (self.pip_weight * pip_lead + self.off_weight * off_lead + self.blot_weight * blot_lead)
            .tanh()
    }
}
