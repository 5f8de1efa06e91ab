//! Evaluation traits: the scoring contract the engine consumes.
//!
//! The engine never sees a model framework. It consumes exactly one
//! capability: `score(state) -> [-1, 1]`, positive favoring the player to
//! move. Learned models plug in behind [`ValueNetwork`] via
//! [`NetworkEvaluator`]; [`HeuristicEvaluator`](super::HeuristicEvaluator)
//! is the model-free variant.

use crate::core::BoardState;

use super::encoder::{BoardEncoder, EncodedBoard};

/// Position evaluation contract.
///
/// Implementations must be deterministic for identical input and safe to
/// call from concurrent decisions (`Send + Sync`). Scores are in [-1, 1],
/// positive favoring `state.player_to_move`.
pub trait Evaluator: Send + Sync {
    fn score(&self, state: &BoardState) -> f64;
}

/// Value model over encoded board features.
///
/// The concrete architecture (and its loading) belongs to the surrounding
/// service; the engine only needs a single forward pass. Output is the
/// position value for the player to move, nominally in [-1, 1].
pub trait ValueNetwork: Send + Sync {
    fn predict(&self, input: &EncodedBoard) -> f32;
}

/// Evaluator backed by a learned value model.
///
/// Encodes the board into the 28-feature input layout and clamps the model
/// output into the contract range.
pub struct NetworkEvaluator<N: ValueNetwork> {
    encoder: BoardEncoder,
    network: N,
}

impl<N: ValueNetwork> NetworkEvaluator<N> {
    pub fn new(network: N) -> Self {
        Self {
            encoder: BoardEncoder,
            network,
        }
    }
}

impl<N: ValueNetwork> Evaluator for NetworkEvaluator<N> {
    fn score(&self, state: &BoardState) -> f64 {
        let encoded = self.encoder.encode(state);
        f64::from(self.network.predict(&encoded)).clamp(-1.0, 1.0)
    }
}

/// Scores every position 0.0. Baseline for tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroEvaluator;

impl Evaluator for ZeroEvaluator {
    fn score(&self, _state: &BoardState) -> f64 {
        0.0
    }
}
