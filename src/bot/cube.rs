//! Doubling cube policy.
//!
//! Cube decisions are a separate capability consumed by the controller:
//! absent a policy, decisions simply carry `cube_action: None`. The stock
//! [`ThresholdCubePolicy`] implements single-position equity thresholds;
//! anything smarter (match equity tables, recube vig) belongs to a custom
//! implementation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::{BoardState, Player};
use crate::eval::Evaluator;

/// A doubling cube action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CubeAction {
    /// Offer the cube.
    Double,
    /// Accept an offered cube.
    Take,
    /// Decline an offered cube and concede the game.
    Pass,
}

/// Cube decision capability.
///
/// Consulted once per decision for the player to move; `None` means no cube
/// action is recommended.
pub trait CubePolicy: Send + Sync {
    fn cube_action(&self, state: &BoardState) -> Option<CubeAction>;
}

/// Equity-threshold cube policy.
///
/// Recommends a double when the mover may double and their equity is at or
/// above `double_point`; [`ThresholdCubePolicy::respond`] answers an offered
/// cube, taking unless equity has fallen below `take_point`.
pub struct ThresholdCubePolicy {
    evaluator: Arc<dyn Evaluator>,
    double_point: f64,
    take_point: f64,
}

impl ThresholdCubePolicy {
    /// Conventional money-game thresholds: double at +0.5 equity, take
    /// down to -0.5.
    pub fn new(evaluator: Arc<dyn Evaluator>) -> Self {
        Self {
            evaluator,
            double_point: 0.5,
            take_point: -0.5,
        }
    }

    pub fn with_double_point(mut self, equity: f64) -> Self {
        self.double_point = equity;
        self
    }

    pub fn with_take_point(mut self, equity: f64) -> Self {
        self.take_point = equity;
        self
    }

    /// Whether `player` controls (or shares) the cube in `state`.
    fn may_double(state: &BoardState, player: Player) -> bool {
        state.cube_owner.map_or(true, |owner| owner == player)
    }

    /// Answer an offered double from the perspective of `state`'s mover.
    #[must_use]
    pub fn respond(&self, state: &BoardState) -> CubeAction {
        if self.evaluator.score(state) >= self.take_point {
            CubeAction::Take
        } else {
            CubeAction::Pass
        }
    }
}

impl CubePolicy for ThresholdCubePolicy {
    fn cube_action(&self, state: &BoardState) -> Option<CubeAction> {
        let mover = state.player_to_move;
        if !Self::may_double(state, mover) {
            return None;
        }
        let equity = self.evaluator.score(state);
        (equity >= self.double_point).then_some(CubeAction::Double)
    }
}
