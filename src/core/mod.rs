//! Core value types: players, board state, dice, moves, RNG, errors.

pub mod board;
pub mod dice;
pub mod error;
pub mod moves;
pub mod player;
pub mod rng;

pub use board::BoardState;
pub use dice::DiceRoll;
pub use error::EngineError;
pub use moves::{CandidateMove, MoveSequence, MoveStep, BAR, OFF};
pub use player::Player;
pub use rng::GameRng;
