//! Candidate scoring and selection.
//!
//! ## Algorithm
//!
//! 1. Enumerate candidates via the rules engine; no candidates means the
//!    turn passes (empty sequence, evaluation 0.0).
//! 2. Score each candidate: at depth 1 the evaluator's static score of the
//!    resulting position (negated - the opponent is on roll there); deeper,
//!    expectiminimax over the 21 distinct dice rolls, uniformly weighted,
//!    with the opponent picking their best reply each ply. Depth counts
//!    half-turns.
//! 3. Perturb each score once with independent Gaussian noise
//!    (`noise_factor` as sigma).
//! 4. Pick the maximal perturbed score; ties go to the first-enumerated
//!    candidate, so selection is deterministic under a fixed seed.
//! 5. With `mistake_probability`, throw the selection away and play a
//!    uniformly random candidate.
//! 6. Report the noise-free base score of whatever was finally chosen.

use tracing::{debug, trace};

use crate::core::{BoardState, DiceRoll, GameRng, MoveSequence};
use crate::eval::Evaluator;
use crate::rules::legal_move_sequences;

use super::profile::DifficultyProfile;

/// The selected sequence and its noise-free evaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    pub sequence: MoveSequence,
    pub evaluation: f64,
}

/// Depth-bounded search over legal move sequences.
///
/// Borrows the evaluator for the duration of one decision; holds no other
/// state, so decisions are independent.
pub struct SearchEngine<'a> {
    evaluator: &'a dyn Evaluator,
}

impl<'a> SearchEngine<'a> {
    pub fn new(evaluator: &'a dyn Evaluator) -> Self {
        Self { evaluator }
    }

    /// Select a move sequence for `state` and `dice` under `profile`.
    pub fn select(
        &self,
        state: &BoardState,
        dice: DiceRoll,
        profile: &DifficultyProfile,
        rng: &mut GameRng,
    ) -> Selection {
        let candidates = legal_move_sequences(state, dice);
        if candidates.is_empty() {
            trace!(%dice, "no legal play, turn passes");
            return Selection {
                sequence: MoveSequence::empty(),
                evaluation: 0.0,
            };
        }

        let depth = profile.search_depth.max(1);
        let base_scores: Vec<f64> = candidates
            .iter()
            .map(|c| -self.value(&c.state, depth - 1))
            .collect();

        // Argmax over perturbed scores; strict comparison keeps the
        // first-enumerated candidate on ties.
        let mut best_index = 0;
        let mut best_score = f64::NEG_INFINITY;
        for (i, &base) in base_scores.iter().enumerate() {
            let perturbed = if profile.noise_factor > 0.0 {
                base + rng.gaussian(profile.noise_factor)
            } else {
                base
            };
            trace!(candidate = i, base, perturbed, "scored candidate");
            if perturbed > best_score {
                best_score = perturbed;
                best_index = i;
            }
        }

        let mut chosen = best_index;
        if profile.mistake_probability > 0.0 && rng.gen_bool(profile.mistake_probability) {
            chosen = rng.gen_range_usize(0..candidates.len());
            debug!(
                profile = %profile.name,
                instead_of = best_index,
                chosen,
                "deliberate mistake"
            );
        }

        Selection {
            sequence: candidates[chosen].sequence.clone(),
            evaluation: base_scores[chosen],
        }
    }

    /// Expected value of `state` for its player to move, searching `depth`
    /// further half-turns. Depth 0 is the evaluator's static score.
    fn value(&self, state: &BoardState, depth: u8) -> f64 {
        if depth == 0 {
            return self.evaluator.score(state);
        }

        let mut total = 0.0;
        let rolls = DiceRoll::all();
        let roll_count = rolls.len() as f64;
        for roll in rolls {
            let candidates = legal_move_sequences(state, roll);
            let best = if candidates.is_empty() {
                // Dance: the turn passes with the board unchanged.
                -self.value(&state.flipped_turn(), depth - 1)
            } else {
                candidates
                    .iter()
                    .map(|c| -self.value(&c.state, depth - 1))
                    .fold(f64::NEG_INFINITY, f64::max)
            };
            total += best;
        }
        total / roll_count
    }
}
