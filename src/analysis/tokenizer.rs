//! Word tokenizer for Turkish-alphabet text.

use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::analysis::token::{Token, TokenStream};
use crate::error::{Result, TrnlpError};

/// Maximal runs of ASCII letters and the six Turkish-specific letters.
pub const TURKISH_WORD_PATTERN: &str = "[a-zöçüğış]+";

static DEFAULT_TOKENIZER: LazyLock<TurkishWordTokenizer> =
    LazyLock::new(TurkishWordTokenizer::default);

/// Trait for tokenizers that convert text into tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Lowercases text and extracts runs of Turkish word characters.
///
/// Digits, punctuation, whitespace and letters outside the class (for
/// example `â`) separate tokens and are dropped.
#[derive(Clone, Debug)]
pub struct TurkishWordTokenizer {
    pattern: Arc<Regex>,
}

impl TurkishWordTokenizer {
    /// Create a tokenizer using [`TURKISH_WORD_PATTERN`].
    pub fn new() -> Result<Self> {
        Self::with_pattern(TURKISH_WORD_PATTERN)
    }

    /// Create a tokenizer with a custom pattern applied to the lowercased text.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| TrnlpError::invalid_argument(format!("Invalid regex pattern: {e}")))?;

        Ok(TurkishWordTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Tokenize into owned word strings, skipping the token metadata.
    pub fn words(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.pattern
            .find_iter(&lowered)
            .map(|mat| mat.as_str().to_string())
            .collect()
    }
}

impl Default for TurkishWordTokenizer {
    fn default() -> Self {
        Self::new().expect("Default regex pattern should be valid")
    }
}

impl Tokenizer for TurkishWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let lowered = text.to_lowercase();

        let tokens: Vec<Token> = self
            .pattern
            .find_iter(&lowered)
            .enumerate()
            .map(|(position, mat)| {
                Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "turkish_word"
    }
}

/// Split `text` into lowercase Turkish words.
///
/// ```
/// use trnlp::analysis::tokenize;
///
/// assert_eq!(tokenize("Merhaba, Dünya! 123"), vec!["merhaba", "dünya"]);
/// assert!(tokenize("42 - 7").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    DEFAULT_TOKENIZER.words(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::is_word_char;

    #[test]
    fn test_tokenize_drops_punctuation_and_digits() {
        assert_eq!(tokenize("Merhaba, Dünya! 123"), vec!["merhaba", "dünya"]);
        assert_eq!(tokenize("a1b2c"), vec!["a", "b", "c"]);
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ,.;!? 2024").is_empty());
    }

    #[test]
    fn test_turkish_letters_are_kept() {
        assert_eq!(
            tokenize("ÇOĞUŞ ığdır öğrenci"),
            vec!["çoğuş", "ığdır", "öğrenci"]
        );
    }

    #[test]
    fn test_letters_outside_class_split_words() {
        // 'â' is not in the class and behaves as a separator.
        assert_eq!(tokenize("kâğıt"), vec!["k", "ğıt"]);
    }

    #[test]
    fn test_tokens_carry_offsets() {
        let tokenizer = TurkishWordTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("Çay, şeker").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "çay");
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 4);

        assert_eq!(tokens[1].text, "şeker");
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[1].start_offset, 6);
        assert_eq!(tokens[1].end_offset, 12);
        assert_eq!(tokens[1].char_len(), 5);
    }

    #[test]
    fn test_every_token_char_is_in_class() {
        let text = "Günaydın! Bugün hava 23°C, çok güzel; değil mi?";
        for word in tokenize(text) {
            assert!(!word.is_empty());
            assert!(word.chars().all(is_word_char), "{word}");
        }
    }

    #[test]
    fn test_tokenize_is_idempotent() {
        let text = "Bir Zamanlar Anadolu'da bir köy vardı";
        let first = tokenize(text);
        let second = tokenize(&first.join(" "));
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let result = TurkishWordTokenizer::with_pattern("[a-");
        assert!(matches!(result, Err(TrnlpError::InvalidArgument(_))));
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(TurkishWordTokenizer::default().name(), "turkish_word");
    }
}
