//! Token types produced by the tokenizer.
//!
//! # Examples
//!
//! ```
//! use trnlp::analysis::token::Token;
//!
//! let token = Token::with_offsets("dünya", 1, 9, 15);
//! assert_eq!(token.text, "dünya");
//! assert_eq!(token.char_len(), 5);
//! assert_eq!(token.end_offset - token.start_offset, 6);
//! ```

use serde::{Deserialize, Serialize};

/// A single word extracted from text.
///
/// Offsets are byte offsets into the *lowercased* input, since lowercasing
/// can change the byte length of some characters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The lowercase text of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// Byte offset where this token starts in the lowercased text
    pub start_offset: usize,

    /// Byte offset where this token ends in the lowercased text
    pub end_offset: usize,
}

impl Token {
    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }

    /// Length of the token in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// A stream of tokens.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
