//! Decision orchestration: validation, search, timing, cube policy.

pub mod controller;
pub mod cube;

pub use controller::{DecisionController, DecisionControllerBuilder, DecisionResult};
pub use cube::{CubeAction, CubePolicy, ThresholdCubePolicy};
