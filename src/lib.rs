//! # trnlp
//!
//! Turkish text utilities built around a word-frequency lexicon.
//!
//! ## Features
//!
//! - Language detection by lexicon coverage
//! - Frequency-ranked spelling correction up to edit distance 2
//! - Rule-based syllabication
//! - Plain text and checksummed binary lexicon formats
//!
//! ```
//! use trnlp::prelude::*;
//!
//! let lexicon = Lexicon::from_frequencies([("merhaba", 120), ("dünya", 80), ("kitap", 40)]);
//!
//! assert!(is_turkish("Merhaba dünya!", &lexicon).unwrap());
//! assert_eq!(correct("mehraba", &lexicon), "merhaba");
//! assert_eq!(syllabicate("kitap"), vec!["ki", "tap"]);
//! assert_eq!(tokenize("Merhaba, Dünya! 123"), vec!["merhaba", "dünya"]);
//! ```

pub mod alphabet;
pub mod analysis;
pub mod cli;
pub mod config;
pub mod detection;
pub mod error;
pub mod lexicon;
pub mod spelling;
pub mod syllable;

pub mod prelude {
    pub use crate::analysis::tokenize;
    pub use crate::config::TrnlpConfig;
    pub use crate::detection::{DetectionReport, DetectorConfig, LanguageDetector, is_turkish};
    pub use crate::error::{Result, TrnlpError};
    pub use crate::lexicon::{Lexicon, LexiconBuilder, LexiconProvider, provider_for_path};
    pub use crate::spelling::{Correction, CorrectorConfig, SpellCorrector, auto_correct, correct};
    pub use crate::syllable::{hyphenate, syllabicate, syllabicate_sentence};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
