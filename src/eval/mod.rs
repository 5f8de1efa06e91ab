//! Position evaluation: the narrow scoring contract and its variants.

pub mod encoder;
pub mod heuristic;
pub mod traits;

pub use encoder::{BoardEncoder, EncodedBoard, FEATURE_COUNT};
pub use heuristic::HeuristicEvaluator;
pub use traits::{Evaluator, NetworkEvaluator, ValueNetwork, ZeroEvaluator};
