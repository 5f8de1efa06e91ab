//! Difficulty profiles: named skill configurations.
//!
//! A profile controls three knobs, each applied exactly where the search
//! engine documents it:
//!
//! | name   | search_depth | noise_factor | mistake_probability |
//! |--------|--------------|--------------|---------------------|
//! | easy   | 1            | 0.3          | 0.15                |
//! | medium | 2            | 0.1          | 0.05                |
//! | hard   | 3            | 0.0          | 0.0                 |
//!
//! The set is open: services can define additional profiles in their config
//! (profiles deserialize with serde) or via the builder methods, with no
//! engine changes.

use serde::{Deserialize, Serialize};

/// A named skill configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// Profile name, used to pick a per-difficulty evaluator.
    pub name: String,

    /// Search depth in half-turns. 1 = static evaluation of candidates;
    /// deeper values simulate replies via expectiminimax over dice.
    pub search_depth: u8,

    /// Standard deviation of the Gaussian noise added to each candidate's
    /// score before selection. 0 disables noise.
    pub noise_factor: f64,

    /// Probability of discarding the selection and playing a uniformly
    /// random candidate instead.
    pub mistake_probability: f64,
}

impl DifficultyProfile {
    /// Create a custom profile.
    pub fn new(
        name: impl Into<String>,
        search_depth: u8,
        noise_factor: f64,
        mistake_probability: f64,
    ) -> Self {
        Self {
            name: name.into(),
            search_depth,
            noise_factor,
            mistake_probability,
        }
    }

    /// Shallow, noisy, mistake-prone.
    #[must_use]
    pub fn easy() -> Self {
        Self::new("easy", 1, 0.3, 0.15)
    }

    /// One reply ply, light noise.
    #[must_use]
    pub fn medium() -> Self {
        Self::new("medium", 2, 0.1, 0.05)
    }

    /// Full-depth, deterministic best play.
    #[must_use]
    pub fn hard() -> Self {
        Self::new("hard", 3, 0.0, 0.0)
    }

    /// Look up one of the built-in profiles by name.
    #[must_use]
    pub fn named(name: &str) -> Option<Self> {
        match name {
            "easy" => Some(Self::easy()),
            "medium" => Some(Self::medium()),
            "hard" => Some(Self::hard()),
            _ => None,
        }
    }

    pub fn with_search_depth(mut self, depth: u8) -> Self {
        self.search_depth = depth;
        self
    }

    pub fn with_noise_factor(mut self, sigma: f64) -> Self {
        self.noise_factor = sigma;
        self
    }

    pub fn with_mistake_probability(mut self, probability: f64) -> Self {
        self.mistake_probability = probability;
        self
    }
}
