//! Board encoding for value-model input.
//!
//! Flattens a position into 28 features for a value model's input layer:
//! 24 point counts, both bars, both offs. Features are mover-relative
//! (the mover's checkers positive, board oriented in the mover's direction of
//! travel) so a single model serves both colors.

use serde::{Deserialize, Serialize};

use crate::core::{BoardState, Player};

/// Number of input features: 24 points + 2 bars + 2 offs.
pub const FEATURE_COUNT: usize = 28;

/// A flat feature vector for one position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedBoard {
    /// Features normalized by the 15-checker set size.
    pub features: [f32; FEATURE_COUNT],
}

impl EncodedBoard {
    #[must_use]
    pub fn zeros() -> Self {
        Self {
            features: [0.0; FEATURE_COUNT],
        }
    }
}

/// Encodes a [`BoardState`] into an [`EncodedBoard`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BoardEncoder;

impl BoardEncoder {
    /// Encode from the perspective of `state.player_to_move`.
    ///
    /// Feature layout:
    /// - `[0..24]`: point counts along the mover's direction of travel
    ///   (index 0 = the mover's 1-point), mover positive, opponent negative,
    ///   scaled by 1/15;
    /// - `[24]`, `[25]`: mover / opponent bar counts, scaled;
    /// - `[26]`, `[27]`: mover / opponent off counts, scaled.
    #[must_use]
    pub fn encode(&self, state: &BoardState) -> EncodedBoard {
        let mover = state.player_to_move;
        let scale = 1.0 / 15.0f32;
        let mut encoded = EncodedBoard::zeros();

        for i in 0..24 {
            let value = match mover {
                Player::White => state.points[i],
                // Mirror the board and flip signs so the mover is positive.
                Player::Black => -state.points[23 - i],
            };
            encoded.features[i] = f32::from(value) * scale;
        }

        encoded.features[24] = f32::from(state.bar(mover)) * scale;
        encoded.features[25] = f32::from(state.bar(mover.opponent())) * scale;
        encoded.features[26] = f32::from(state.off(mover)) * scale;
        encoded.features[27] = f32::from(state.off(mover.opponent())) * scale;

        encoded
    }
}
