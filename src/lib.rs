//! # rust-bg
//!
//! A backgammon rules + decision engine for a difficulty-profiled bot.
//!
//! ## Design Principles
//!
//! 1. **Immutable Values**: `BoardState` is never mutated in place. Every
//!    rule application builds a new state from an old one, so candidate
//!    exploration is aliasing-free and safe to parallelize.
//!
//! 2. **Pluggable Evaluation**: The engine only knows the narrow
//!    [`Evaluator`] contract (`score(state) -> [-1, 1]`). Heuristic and
//!    learned-model evaluators are interchangeable at configuration time.
//!
//! 3. **Injected Randomness**: Noise and mistake sampling flow through an
//!    explicit [`GameRng`]. A fixed seed reproduces every decision exactly.
//!
//! ## Architecture
//!
//! - **Rules first**: [`legal_move_sequences`] enumerates every legal
//!   complete turn (bar re-entry, maximal dice use, doubles, hits, bear-off).
//!
//! - **Depth-bounded search**: [`SearchEngine`] scores candidates statically
//!   or via expectiminimax over the 21 distinct dice rolls, then applies the
//!   difficulty profile's noise and deliberate-mistake policy.
//!
//! - **Stateless decisions**: [`DecisionController::decide`] shares nothing
//!   mutable between calls; concurrent decisions need no locking.
//!
//! ## Modules
//!
//! - `core`: Board state, dice, moves, RNG, error taxonomy
//! - `rules`: Legal move enumeration and move application
//! - `eval`: Evaluator contract, heuristic baseline, network adapter
//! - `search`: Difficulty profiles and candidate selection
//! - `bot`: Decision orchestration and cube policy

pub mod core;
pub mod rules;
pub mod eval;
pub mod search;
pub mod bot;

// Re-export commonly used types
pub use crate::core::{
    BoardState, CandidateMove, DiceRoll, EngineError, GameRng, MoveSequence, MoveStep, Player,
    BAR, OFF,
};

pub use crate::rules::{apply_sequence, apply_step, legal_move_sequences};

pub use crate::eval::{
    BoardEncoder, EncodedBoard, Evaluator, HeuristicEvaluator, NetworkEvaluator, ValueNetwork,
    ZeroEvaluator,
};

pub use crate::search::{DifficultyProfile, SearchEngine, Selection};

pub use crate::bot::{
    CubeAction, CubePolicy, DecisionController, DecisionControllerBuilder, DecisionResult,
    ThresholdCubePolicy,
};
