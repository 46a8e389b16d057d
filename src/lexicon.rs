//! Word-frequency lexicon and the providers that load it.
//!
//! The [`Lexicon`] is built once and never mutated afterwards; every
//! operation that needs it takes it by reference, so a single table can be
//! shared across threads (wrap it in an `Arc` when ownership must be shared).
//! Providers in [`provider`] read lexicons from in-memory lists, plain text
//! files and the versioned binary format in [`binary`].

pub mod binary;
pub mod provider;
pub mod table;

pub use binary::{load_binary, read_lexicon, save_binary, write_lexicon};
pub use provider::{
    BinaryLexiconProvider, FrequencyFileProvider, LexiconProvider, StaticProvider,
    WordListProvider, provider_for_path,
};
pub use table::{Lexicon, LexiconBuilder};
