//! Error types for the trnlp library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`TrnlpError`] enum. Tokenization and syllabication never fail; errors only
//! come from language detection on empty input, from lexicon providers, and
//! from the CLI layer.
//!
//! # Examples
//!
//! ```
//! use trnlp::error::{Result, TrnlpError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TrnlpError::invalid_argument("max distance must be at most 2"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for trnlp operations.
#[derive(Error, Debug)]
pub enum TrnlpError {
    /// Language detection received zero tokens.
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// The lexicon provider could not supply a table.
    #[error("Lexicon unavailable: {0}")]
    LexiconUnavailable(String),

    /// I/O errors (lexicon files, CLI output)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A caller-supplied value is out of range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for operations that may fail with TrnlpError.
pub type Result<T> = std::result::Result<T, TrnlpError>;

impl TrnlpError {
    /// Create a new empty input error.
    pub fn empty_input<S: Into<String>>(msg: S) -> Self {
        TrnlpError::EmptyInput(msg.into())
    }

    /// Create a new lexicon unavailable error.
    pub fn lexicon_unavailable<S: Into<String>>(msg: S) -> Self {
        TrnlpError::LexiconUnavailable(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TrnlpError::InvalidArgument(msg.into())
    }

    /// Whether the error means no lexicon could be obtained.
    ///
    /// Detection and correction cannot proceed after such an error;
    /// syllabication is unaffected.
    pub fn is_lexicon_unavailable(&self) -> bool {
        matches!(self, TrnlpError::LexiconUnavailable(_))
    }
}
