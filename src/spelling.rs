//! Spelling correction for Turkish words.
//!
//! Corrections are searched at edit distance 0, 1 and 2 over the fixed
//! Turkish edit alphabet; the first distance that yields any known word wins
//! and the most frequent of those words is returned.

pub mod corrector;
mod edits;

pub use corrector::{
    Correction, CorrectorConfig, MAX_EDIT_DISTANCE, SpellCorrector, auto_correct, correct,
};
