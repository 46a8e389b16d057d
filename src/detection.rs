//! Lexicon-based Turkish language detection.
//!
//! A text is considered Turkish when the share of its tokens found in the
//! lexicon is strictly greater than a threshold (0.65 by default). Only
//! tokens longer than two characters can count as matches, but every token
//! counts toward the total.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::tokenize;
use crate::error::{Result, TrnlpError};
use crate::lexicon::Lexicon;

/// Configuration for the language detector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Match ratio that must be exceeded for a positive result.
    pub threshold: f64,
    /// Tokens must be longer than this (in characters) to count as matches.
    pub min_token_len: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        DetectorConfig {
            threshold: 0.65,
            min_token_len: 2,
        }
    }
}

impl DetectorConfig {
    /// Reject thresholds outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(TrnlpError::invalid_argument(format!(
                "threshold must be within [0, 1], got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}

/// Input accepted by the detector: raw text is tokenized first, token
/// sequences are scored as given.
#[derive(Debug, Clone, Copy)]
pub enum DetectorInput<'a> {
    /// Raw text, tokenized before scoring.
    Text(&'a str),
    /// Pre-tokenized owned words.
    Tokens(&'a [String]),
    /// Pre-tokenized borrowed words.
    Words(&'a [&'a str]),
}

impl<'a> From<&'a str> for DetectorInput<'a> {
    fn from(text: &'a str) -> Self {
        DetectorInput::Text(text)
    }
}

impl<'a> From<&'a String> for DetectorInput<'a> {
    fn from(text: &'a String) -> Self {
        DetectorInput::Text(text.as_str())
    }
}

impl<'a> From<&'a [String]> for DetectorInput<'a> {
    fn from(tokens: &'a [String]) -> Self {
        DetectorInput::Tokens(tokens)
    }
}

impl<'a> From<&'a Vec<String>> for DetectorInput<'a> {
    fn from(tokens: &'a Vec<String>) -> Self {
        DetectorInput::Tokens(tokens.as_slice())
    }
}

impl<'a, const N: usize> From<&'a [String; N]> for DetectorInput<'a> {
    fn from(tokens: &'a [String; N]) -> Self {
        DetectorInput::Tokens(tokens.as_slice())
    }
}

impl<'a, 'b: 'a> From<&'a [&'b str]> for DetectorInput<'a> {
    fn from(words: &'a [&'b str]) -> Self {
        DetectorInput::Words(words)
    }
}

impl<'a, 'b: 'a, const N: usize> From<&'a [&'b str; N]> for DetectorInput<'a> {
    fn from(words: &'a [&'b str; N]) -> Self {
        DetectorInput::Words(words.as_slice())
    }
}

/// Details of a detection run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectionReport {
    /// Tokens long enough to count that were found in the lexicon.
    pub matches: usize,
    /// All tokens scored.
    pub total: usize,
    /// `matches / total`.
    pub accuracy: f64,
    /// Whether `accuracy` exceeded the threshold.
    pub is_turkish: bool,
}

/// Scores token sequences against a borrowed lexicon.
#[derive(Debug, Clone, Copy)]
pub struct LanguageDetector<'a> {
    lexicon: &'a Lexicon,
    config: DetectorConfig,
}

impl<'a> LanguageDetector<'a> {
    /// Create a detector with the default threshold.
    pub fn new(lexicon: &'a Lexicon) -> Self {
        LanguageDetector {
            lexicon,
            config: DetectorConfig::default(),
        }
    }

    /// Create a detector with a custom configuration.
    pub fn with_config(lexicon: &'a Lexicon, config: DetectorConfig) -> Result<Self> {
        config.validate()?;
        Ok(LanguageDetector { lexicon, config })
    }

    /// Get the active configuration.
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Score raw text or a token sequence.
    pub fn detect<'b, I: Into<DetectorInput<'b>>>(&self, input: I) -> Result<DetectionReport> {
        match input.into() {
            DetectorInput::Text(text) => self.score(tokenize(text).as_slice()),
            DetectorInput::Tokens(tokens) => self.score(tokens),
            DetectorInput::Words(words) => self.score(words),
        }
    }

    /// Decide whether raw text or a token sequence is Turkish.
    ///
    /// Fails with [`TrnlpError::EmptyInput`] when there are no tokens.
    pub fn is_turkish<'b, I: Into<DetectorInput<'b>>>(&self, input: I) -> Result<bool> {
        Ok(self.detect(input)?.is_turkish)
    }

    /// Score an already tokenized sequence.
    pub fn score<S: AsRef<str>>(&self, tokens: &[S]) -> Result<DetectionReport> {
        if tokens.is_empty() {
            return Err(TrnlpError::empty_input(
                "language detection needs at least one token",
            ));
        }

        let matches = tokens
            .iter()
            .filter(|token| {
                let token: &str = token.as_ref();
                token.chars().count() > self.config.min_token_len && self.lexicon.contains(token)
            })
            .count();
        let total = tokens.len();
        let accuracy = matches as f64 / total as f64;
        let is_turkish = accuracy > self.config.threshold;

        debug!("detection: {matches}/{total} tokens known (accuracy {accuracy:.3})");
        Ok(DetectionReport {
            matches,
            total,
            accuracy,
            is_turkish,
        })
    }
}

/// Decide whether `input` is Turkish using the default threshold.
///
/// ```
/// use trnlp::detection::is_turkish;
/// use trnlp::lexicon::Lexicon;
///
/// let lexicon = Lexicon::from_frequencies([("merhaba", 1), ("dünya", 1)]);
/// assert!(is_turkish("Merhaba dünya!", &lexicon).unwrap());
/// assert!(is_turkish("123", &lexicon).is_err());
/// ```
pub fn is_turkish<'b, I: Into<DetectorInput<'b>>>(input: I, lexicon: &Lexicon) -> Result<bool> {
    LanguageDetector::new(lexicon).is_turkish(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        Lexicon::from_frequencies([("merhaba", 1), ("dünya", 1), ("ve", 9), ("nadir", 0)])
    }

    #[test]
    fn test_two_of_three_is_turkish() {
        let lexicon = lexicon();
        let tokens = vec!["merhaba".to_string(), "dünya".to_string(), "xyz".to_string()];
        let report = LanguageDetector::new(&lexicon).detect(&tokens).unwrap();

        assert_eq!(report.matches, 2);
        assert_eq!(report.total, 3);
        assert!(report.accuracy > 0.66 && report.accuracy < 0.67);
        assert!(report.is_turkish);
    }

    #[test]
    fn test_threshold_is_strict() {
        let lexicon = lexicon();
        let detector = LanguageDetector::new(&lexicon);

        // 13 of 20 is exactly 0.65.
        let mut words = vec!["merhaba"; 13];
        words.extend(vec!["yok"; 7]);
        let report = detector.score(&words).unwrap();
        assert_eq!(report.accuracy, 0.65);
        assert!(!report.is_turkish);

        let mut words = vec!["merhaba"; 14];
        words.extend(vec!["yok"; 6]);
        assert!(detector.score(&words).unwrap().is_turkish);
    }

    #[test]
    fn test_short_tokens_count_only_in_total() {
        let lexicon = lexicon();
        let words: &[&str] = &["ve", "merhaba"];
        let report = LanguageDetector::new(&lexicon).detect(words).unwrap();
        assert_eq!(report.matches, 1);
        assert_eq!(report.total, 2);
        assert!(!report.is_turkish);
    }

    #[test]
    fn test_zero_frequency_word_counts_as_member() {
        let lexicon = lexicon();
        let words: &[&str] = &["nadir"];
        assert!(is_turkish(words, &lexicon).unwrap());
    }

    #[test]
    fn test_raw_text_is_tokenized() {
        let lexicon = lexicon();
        assert!(is_turkish("Merhaba, DÜNYA!", &lexicon).unwrap());
        assert!(!is_turkish("hello brave new world", &lexicon).unwrap());

        let owned = String::from("merhaba dünya xyz");
        assert!(is_turkish(&owned, &lexicon).unwrap());
    }

    #[test]
    fn test_word_arrays_are_accepted() {
        let lexicon = lexicon();
        assert!(is_turkish(&["merhaba", "dünya", "xyz"], &lexicon).unwrap());

        let owned = [String::from("merhaba"), String::from("xyz"), String::from("abc")];
        assert!(!is_turkish(&owned, &lexicon).unwrap());

        let text = String::from("merhaba dünya");
        let words: Vec<&str> = text.split(' ').collect();
        let borrowed = [words[0], words[1]];
        let report = LanguageDetector::new(&lexicon).detect(&borrowed).unwrap();
        assert_eq!(report.matches, 2);

        let empty: [&str; 0] = [];
        assert!(matches!(
            is_turkish(&empty, &lexicon),
            Err(TrnlpError::EmptyInput(_))
        ));
    }

    #[test]
    fn test_empty_input_is_an_error() {
        let lexicon = lexicon();
        let tokens: Vec<String> = Vec::new();
        let err = is_turkish(&tokens, &lexicon).unwrap_err();
        assert!(matches!(err, TrnlpError::EmptyInput(_)));

        let err = is_turkish("2024 - 12, !!", &lexicon).unwrap_err();
        assert!(matches!(err, TrnlpError::EmptyInput(_)));
    }

    #[test]
    fn test_empty_lexicon_is_never_turkish() {
        let lexicon = Lexicon::new();
        assert!(!is_turkish("merhaba dünya", &lexicon).unwrap());
    }

    #[test]
    fn test_custom_threshold() {
        let lexicon = lexicon();
        let config = DetectorConfig {
            threshold: 0.4,
            ..Default::default()
        };
        let detector = LanguageDetector::with_config(&lexicon, config).unwrap();
        assert!(detector.is_turkish("merhaba hello").unwrap());

        let config = DetectorConfig {
            threshold: 1.5,
            ..Default::default()
        };
        assert!(LanguageDetector::with_config(&lexicon, config).is_err());
    }
}
