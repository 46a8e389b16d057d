//! Frequency-ranked spelling corrector.

use std::cmp::Ordering;

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrnlpError};
use crate::lexicon::Lexicon;
use crate::spelling::edits::{edits1, known, known_edits2};

/// Largest supported edit distance.
pub const MAX_EDIT_DISTANCE: usize = 2;

/// Configuration for the spelling corrector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectorConfig {
    /// Maximum edit distance searched (0, 1 or 2).
    pub max_distance: usize,
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        CorrectorConfig {
            max_distance: MAX_EDIT_DISTANCE,
        }
    }
}

impl CorrectorConfig {
    /// Reject distances the corrector cannot search.
    pub fn validate(&self) -> Result<()> {
        if self.max_distance > MAX_EDIT_DISTANCE {
            return Err(TrnlpError::invalid_argument(format!(
                "max_distance must be at most {MAX_EDIT_DISTANCE}, got {}",
                self.max_distance
            )));
        }
        Ok(())
    }
}

/// Outcome of correcting a single word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
    /// The word as given.
    pub original: String,
    /// The chosen correction, or the original when nothing was found.
    pub corrected: String,
    /// Edit distance of the tier that produced the correction.
    pub distance: Option<usize>,
    /// Lexicon frequency of the corrected word.
    pub frequency: u64,
}

impl Correction {
    /// Whether the corrected word differs from the input.
    pub fn is_changed(&self) -> bool {
        self.original != self.corrected
    }
}

/// Corrects words against a borrowed lexicon.
///
/// The lexicon is only read, so one corrector can serve many threads.
///
/// ```
/// use trnlp::lexicon::Lexicon;
/// use trnlp::spelling::SpellCorrector;
///
/// let lexicon = Lexicon::from_frequencies([("merhaba", 100), ("dünya", 50)]);
/// let corrector = SpellCorrector::new(&lexicon);
/// assert_eq!(corrector.correct("mehraba"), "merhaba");
/// assert_eq!(corrector.correct("dünya"), "dünya");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SpellCorrector<'a> {
    lexicon: &'a Lexicon,
    config: CorrectorConfig,
}

impl<'a> SpellCorrector<'a> {
    /// Create a corrector searching up to distance 2.
    pub fn new(lexicon: &'a Lexicon) -> Self {
        SpellCorrector {
            lexicon,
            config: CorrectorConfig::default(),
        }
    }

    /// Create a corrector with a custom configuration.
    pub fn with_config(lexicon: &'a Lexicon, config: CorrectorConfig) -> Result<Self> {
        config.validate()?;
        Ok(SpellCorrector { lexicon, config })
    }

    /// Get the active configuration.
    pub fn config(&self) -> &CorrectorConfig {
        &self.config
    }

    /// Known candidates from the closest non-empty distance tier.
    fn closest_candidates(&self, word: &str) -> Option<(usize, Vec<String>)> {
        if self.lexicon.is_known(word) {
            return Some((0, vec![word.to_string()]));
        }
        if self.config.max_distance == 0 {
            return None;
        }

        let first_edits = edits1(word);
        let found = known(&first_edits, self.lexicon);
        if !found.is_empty() {
            debug!("{word}: {} candidates at distance 1", found.len());
            return Some((1, found.into_iter().collect()));
        }
        if self.config.max_distance < 2 {
            return None;
        }

        let found = known_edits2(&first_edits, self.lexicon);
        if !found.is_empty() {
            debug!("{word}: {} candidates at distance 2", found.len());
            return Some((2, found.into_iter().collect()));
        }

        debug!("{word}: no known word within distance {}", self.config.max_distance);
        None
    }

    /// Higher frequency first, then alphabetical.
    fn rank(&self, a: &str, b: &str) -> Ordering {
        self.lexicon
            .frequency(b)
            .cmp(&self.lexicon.frequency(a))
            .then_with(|| a.cmp(b))
    }

    /// Candidates of the closest tier, best first, with their frequencies.
    pub fn candidates(&self, word: &str) -> Vec<(String, u64)> {
        let Some((_, mut words)) = self.closest_candidates(word) else {
            return Vec::new();
        };
        words.sort_by(|a, b| self.rank(a, b));
        words
            .into_iter()
            .map(|candidate| {
                let frequency = self.lexicon.frequency(&candidate);
                (candidate, frequency)
            })
            .collect()
    }

    /// Correct a word and report which distance tier won.
    ///
    /// Among equally frequent candidates the alphabetically smallest wins.
    pub fn correction(&self, word: &str) -> Correction {
        let best = self.closest_candidates(word).and_then(|(distance, words)| {
            words
                .into_iter()
                .min_by(|a, b| self.rank(a, b))
                .map(|candidate| (distance, candidate))
        });

        match best {
            Some((distance, corrected)) => Correction {
                original: word.to_string(),
                frequency: self.lexicon.frequency(&corrected),
                corrected,
                distance: Some(distance),
            },
            None => Correction {
                original: word.to_string(),
                corrected: word.to_string(),
                distance: None,
                frequency: self.lexicon.frequency(word),
            },
        }
    }

    /// Correct a single word.
    pub fn correct(&self, word: &str) -> String {
        self.correction(word).corrected
    }

    /// Correct each word independently, preserving order.
    pub fn auto_correct<S: AsRef<str>>(&self, words: &[S]) -> Vec<String> {
        words.iter().map(|word| self.correct(word.as_ref())).collect()
    }

    /// Like [`auto_correct`](Self::auto_correct), spread over the rayon pool.
    pub fn auto_correct_parallel<S: AsRef<str> + Sync>(&self, words: &[S]) -> Vec<String> {
        words
            .par_iter()
            .map(|word| self.correct(word.as_ref()))
            .collect()
    }

    /// Detailed corrections for each word, spread over the rayon pool.
    pub fn corrections_parallel<S: AsRef<str> + Sync>(&self, words: &[S]) -> Vec<Correction> {
        words
            .par_iter()
            .map(|word| self.correction(word.as_ref()))
            .collect()
    }
}

/// Correct `word` against `lexicon` with the default configuration.
pub fn correct(word: &str, lexicon: &Lexicon) -> String {
    SpellCorrector::new(lexicon).correct(word)
}

/// Correct every word against `lexicon`, preserving order.
pub fn auto_correct<S: AsRef<str>>(words: &[S], lexicon: &Lexicon) -> Vec<String> {
    SpellCorrector::new(lexicon).auto_correct(words)
}
