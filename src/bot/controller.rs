//! Decision controller: the engine's top-level entry points.
//!
//! Orchestrates one decision: validate input, enumerate and search, consult
//! the cube policy, time the whole thing. The controller is stateless per
//! request - everything mutable (the RNG) is passed in - so one instance may
//! serve concurrent decisions behind an `Arc` with no locking.
//!
//! Evaluators are wired at build time, one default plus optional
//! per-difficulty overrides so each difficulty can run its own model.
//! Building without any evaluator is a fatal configuration error; the
//! engine never falls back to a default score.

use std::sync::Arc;
use std::time::Instant;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{BoardState, DiceRoll, EngineError, GameRng, MoveSequence};
use crate::eval::Evaluator;
use crate::search::{DifficultyProfile, SearchEngine};

use super::cube::{CubeAction, CubePolicy};

/// The outcome of one decision.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecisionResult {
    /// The chosen complete turn; empty when there is no legal play.
    pub moves: MoveSequence,

    /// Noise-free evaluation of the chosen candidate, in [-1, 1].
    pub evaluation: f64,

    /// Wall-clock duration of the whole decision.
    pub elapsed_millis: u64,

    /// Recommended cube action, if a cube policy is configured.
    pub cube_action: Option<CubeAction>,
}

/// Builder for [`DecisionController`].
#[derive(Default)]
pub struct DecisionControllerBuilder {
    default_evaluator: Option<Arc<dyn Evaluator>>,
    profile_evaluators: FxHashMap<String, Arc<dyn Evaluator>>,
    cube_policy: Option<Box<dyn CubePolicy>>,
}

impl DecisionControllerBuilder {
    /// Set the evaluator used by profiles without a specific override.
    pub fn with_evaluator(mut self, evaluator: Arc<dyn Evaluator>) -> Self {
        self.default_evaluator = Some(evaluator);
        self
    }

    /// Set a per-difficulty evaluator, keyed by profile name.
    pub fn with_profile_evaluator(
        mut self,
        profile_name: impl Into<String>,
        evaluator: Arc<dyn Evaluator>,
    ) -> Self {
        self.profile_evaluators.insert(profile_name.into(), evaluator);
        self
    }

    /// Set the optional cube policy.
    pub fn with_cube_policy(mut self, policy: Box<dyn CubePolicy>) -> Self {
        self.cube_policy = Some(policy);
        self
    }

    /// Build the controller.
    ///
    /// Fails with [`EngineError::EvaluatorUnavailable`] when no default
    /// evaluator was supplied - evaluator absence is a configuration error,
    /// not a per-call one.
    pub fn build(self) -> Result<DecisionController, EngineError> {
        let default_evaluator = self
            .default_evaluator
            .ok_or(EngineError::EvaluatorUnavailable)?;
        Ok(DecisionController {
            default_evaluator,
            profile_evaluators: self.profile_evaluators,
            cube_policy: self.cube_policy,
        })
    }
}

/// Top-level decision engine.
pub struct DecisionController {
    default_evaluator: Arc<dyn Evaluator>,
    profile_evaluators: FxHashMap<String, Arc<dyn Evaluator>>,
    cube_policy: Option<Box<dyn CubePolicy>>,
}

impl DecisionController {
    #[must_use]
    pub fn builder() -> DecisionControllerBuilder {
        DecisionControllerBuilder::default()
    }

    fn evaluator_for(&self, profile: &DifficultyProfile) -> &dyn Evaluator {
        self.profile_evaluators
            .get(&profile.name)
            .unwrap_or(&self.default_evaluator)
            .as_ref()
    }

    /// Decide a complete turn for `state` and `dice` under `profile`.
    ///
    /// Validates the dice and the board invariants, then runs the rules and
    /// search engines. An empty `moves` result means the turn passes (a
    /// closed-out roll is not an error).
    pub fn decide(
        &self,
        state: &BoardState,
        dice: DiceRoll,
        profile: &DifficultyProfile,
        rng: &mut GameRng,
    ) -> Result<DecisionResult, EngineError> {
        let start = Instant::now();
        dice.validate()?;
        state.validate()?;

        let search = SearchEngine::new(self.evaluator_for(profile));
        let selection = search.select(state, dice, profile, rng);

        let cube_action = self
            .cube_policy
            .as_ref()
            .and_then(|policy| policy.cube_action(state));

        let elapsed_millis = start.elapsed().as_millis() as u64;
        debug!(
            profile = %profile.name,
            %dice,
            moves = %selection.sequence,
            evaluation = selection.evaluation,
            elapsed_millis,
            "decision"
        );

        Ok(DecisionResult {
            moves: selection.sequence,
            evaluation: selection.evaluation,
            elapsed_millis,
            cube_action,
        })
    }

    /// Statically evaluate `state` with `profile`'s evaluator, without move
    /// selection. Same invariant validation as [`DecisionController::decide`].
    pub fn evaluate_only(
        &self,
        state: &BoardState,
        profile: &DifficultyProfile,
    ) -> Result<f64, EngineError> {
        state.validate()?;
        Ok(self.evaluator_for(profile).score(state))
    }
}
