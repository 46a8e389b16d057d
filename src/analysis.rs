//! Text analysis for trnlp.
//!
//! Turns raw text into the lowercase word tokens consumed by language
//! detection, spelling correction and sentence syllabication.

pub mod token;
pub mod tokenizer;

pub use token::{Token, TokenStream};
pub use tokenizer::{Tokenizer, TurkishWordTokenizer, tokenize};
