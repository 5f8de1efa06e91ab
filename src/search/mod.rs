//! Candidate selection: difficulty profiles and the search engine.

pub mod engine;
pub mod profile;

pub use engine::{SearchEngine, Selection};
pub use profile::DifficultyProfile;
