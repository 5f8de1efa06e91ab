//! Legal move enumeration and move application.

pub mod engine;

pub use engine::{apply_sequence, apply_step, legal_move_sequences};
