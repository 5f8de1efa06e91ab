//! Error taxonomy for the decision engine.
//!
//! Three failure classes, all surfaced to the caller:
//!
//! - [`EngineError::InvalidState`] — a board invariant is violated
//!   (checker count mismatch, negative counts, bad cube value).
//! - [`EngineError::InvalidDice`] — a die value outside 1-6.
//! - [`EngineError::EvaluatorUnavailable`] — no evaluator was configured.
//!   Raised at build time, never per decision; the engine never substitutes
//!   a default score for a missing evaluator.
//!
//! "No legal moves" is deliberately absent: an empty candidate set is a
//! valid outcome (the turn passes), not an error.

use thiserror::Error;

/// Errors produced by the decision engine.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid board state: {0}")]
    InvalidState(String),

    #[error("die value {0} outside 1-6")]
    InvalidDice(u8),

    #[error("no evaluator configured")]
    EvaluatorUnavailable,
}
