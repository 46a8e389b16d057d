//! Lexicon providers.
//!
//! A provider is the only way the rest of the crate obtains a [`Lexicon`].
//! None of them reach out to the network or guess storage locations; file
//! based providers take an explicit path.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::{Result, TrnlpError};
use crate::lexicon::binary::load_binary;
use crate::lexicon::table::{Lexicon, LexiconBuilder};

/// Supplies an immutable lexicon to the core.
///
/// An empty table is a valid result; a provider that cannot produce any
/// table returns [`TrnlpError::LexiconUnavailable`].
pub trait LexiconProvider: Send + Sync {
    /// Load the lexicon.
    fn load(&self) -> Result<Lexicon>;

    /// Get the name of this provider (for logging and diagnostics).
    fn name(&self) -> &'static str;
}

/// Provider backed by an in-memory `(word, frequency)` list.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    entries: Vec<(String, u64)>,
}

impl StaticProvider {
    /// Create a provider from `(word, frequency)` pairs.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        StaticProvider {
            entries: entries
                .into_iter()
                .map(|(word, frequency)| (word.into(), frequency))
                .collect(),
        }
    }
}

impl LexiconProvider for StaticProvider {
    fn load(&self) -> Result<Lexicon> {
        Ok(Lexicon::from_frequencies(
            self.entries.iter().map(|(word, frequency)| (word, *frequency)),
        ))
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

/// Text file with comma-separated words on each line.
///
/// Every occurrence of a word counts once toward its frequency, so a
/// corpus dump doubles as a frequency table.
#[derive(Debug, Clone)]
pub struct WordListProvider {
    path: PathBuf,
}

impl WordListProvider {
    /// Create a provider reading from `path`.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        WordListProvider { path: path.into() }
    }
}

impl LexiconProvider for WordListProvider {
    fn load(&self) -> Result<Lexicon> {
        let reader = open_text(&self.path)?;
        let mut builder = LexiconBuilder::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = read_line(&self.path, line_num, line)?;
            for word in line.trim().split(',') {
                let word = word.trim();
                if !word.is_empty() {
                    builder.increment_word(word);
                }
            }
        }

        debug!(
            "loaded {} words from word list {}",
            builder.len(),
            self.path.display()
        );
        Ok(builder.build())
    }

    fn name(&self) -> &'static str {
        "word_list"
    }
}

/// Text file with `word frequency` on each line.
///
/// Blank lines and lines starting with `#` are ignored; malformed lines are
/// skipped with a warning.
#[derive(Debug, Clone)]
pub struct FrequencyFileProvider {
    path: PathBuf,
}

impl FrequencyFileProvider {
    /// Create a provider reading from `path`.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        FrequencyFileProvider { path: path.into() }
    }
}

impl LexiconProvider for FrequencyFileProvider {
    fn load(&self) -> Result<Lexicon> {
        let reader = open_text(&self.path)?;
        let mut builder = LexiconBuilder::new();
        let mut skipped = 0usize;

        for (line_num, line) in reader.lines().enumerate() {
            let line = read_line(&self.path, line_num, line)?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split_whitespace().collect();
            match parts.as_slice() {
                [word, frequency] => match frequency.parse::<u64>() {
                    Ok(frequency) => {
                        builder.add_occurrences(word, frequency);
                    }
                    Err(e) => {
                        warn!("{}:{}: bad frequency: {e}", self.path.display(), line_num + 1);
                        skipped += 1;
                    }
                },
                _ => {
                    warn!(
                        "{}:{}: expected `word frequency`",
                        self.path.display(),
                        line_num + 1
                    );
                    skipped += 1;
                }
            }
        }

        debug!(
            "loaded {} words from frequency file {} ({skipped} lines skipped)",
            builder.len(),
            self.path.display()
        );
        Ok(builder.build())
    }

    fn name(&self) -> &'static str {
        "frequency_file"
    }
}

/// File in the versioned binary format (see [`crate::lexicon::binary`]).
#[derive(Debug, Clone)]
pub struct BinaryLexiconProvider {
    path: PathBuf,
}

impl BinaryLexiconProvider {
    /// Create a provider reading from `path`.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        BinaryLexiconProvider { path: path.into() }
    }
}

impl LexiconProvider for BinaryLexiconProvider {
    fn load(&self) -> Result<Lexicon> {
        let lexicon = load_binary(&self.path)?;
        debug!(
            "loaded {} words from binary lexicon {}",
            lexicon.len(),
            self.path.display()
        );
        Ok(lexicon)
    }

    fn name(&self) -> &'static str {
        "binary"
    }
}

/// Pick a provider from the file extension.
///
/// `.trlx` is the binary format, `.freq` and `.tsv` are frequency files,
/// anything else is read as a word list.
pub fn provider_for_path<P: AsRef<Path>>(path: P) -> Box<dyn LexiconProvider> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("trlx") => Box::new(BinaryLexiconProvider::new(path)),
        Some("freq") | Some("tsv") => Box::new(FrequencyFileProvider::new(path)),
        _ => Box::new(WordListProvider::new(path)),
    }
}

fn open_text(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| {
        TrnlpError::lexicon_unavailable(format!("cannot open {}: {e}", path.display()))
    })?;
    Ok(BufReader::new(file))
}

/// A line that cannot be read (for example invalid UTF-8) makes the whole
/// file unusable.
fn read_line(path: &Path, line_num: usize, line: io::Result<String>) -> Result<String> {
    line.map_err(|e| {
        TrnlpError::lexicon_unavailable(format!("{}:{}: {e}", path.display(), line_num + 1))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::binary::save_binary;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    #[test]
    fn test_static_provider() {
        let provider = StaticProvider::new([("merhaba", 1), ("dünya", 1)]);
        let lexicon = provider.load().unwrap();
        assert_eq!(lexicon.len(), 2);
        assert_eq!(provider.name(), "static");
    }

    #[test]
    fn test_word_list_counts_occurrences() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "ev,okul, kitap").unwrap();
        writeln!(temp_file, "Ev,,kalem").unwrap();
        writeln!(temp_file).unwrap();
        temp_file.flush().unwrap();

        let lexicon = WordListProvider::new(temp_file.path()).load().unwrap();
        assert_eq!(lexicon.frequency("ev"), 2);
        assert_eq!(lexicon.frequency("kitap"), 1);
        assert_eq!(lexicon.frequency("kalem"), 1);
        assert_eq!(lexicon.len(), 4);
    }

    #[test]
    fn test_frequency_file_skips_bad_lines() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "# comment").unwrap();
        writeln!(temp_file, "merhaba 100").unwrap();
        writeln!(temp_file, "dünya\t50").unwrap();
        writeln!(temp_file, "bozuk satır burada").unwrap();
        writeln!(temp_file, "sayı yok").unwrap();
        temp_file.flush().unwrap();

        let lexicon = FrequencyFileProvider::new(temp_file.path()).load().unwrap();
        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.frequency("merhaba"), 100);
        assert_eq!(lexicon.frequency("dünya"), 50);
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let err = WordListProvider::new("/nonexistent/kelimeler.txt")
            .load()
            .unwrap_err();
        assert!(err.is_lexicon_unavailable());

        let err = FrequencyFileProvider::new("/nonexistent/words.freq")
            .load()
            .unwrap_err();
        assert!(err.is_lexicon_unavailable());
    }

    #[test]
    fn test_provider_for_path_dispatches_on_extension() {
        assert_eq!(provider_for_path("words.trlx").name(), "binary");
        assert_eq!(provider_for_path("words.FREQ").name(), "frequency_file");
        assert_eq!(provider_for_path("words.tsv").name(), "frequency_file");
        assert_eq!(provider_for_path("kelimeler.txt").name(), "word_list");
        assert_eq!(provider_for_path("kelimeler").name(), "word_list");
    }

    #[test]
    fn test_binary_provider_loads_saved_lexicon() {
        let temp_file = Builder::new().suffix(".trlx").tempfile().unwrap();
        let lexicon = Lexicon::from_frequencies([("kitap", 7)]);
        save_binary(&lexicon, temp_file.path()).unwrap();

        let loaded = provider_for_path(temp_file.path()).load().unwrap();
        assert_eq!(loaded.frequency("kitap"), 7);
    }

    #[test]
    fn test_unreadable_lines_are_unavailable() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"merhaba,\xff\xfe\n").unwrap();
        temp_file.flush().unwrap();
        let err = WordListProvider::new(temp_file.path()).load().unwrap_err();
        assert!(err.is_lexicon_unavailable(), "{err:?}");

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"merhaba 1\n\xff 2\n").unwrap();
        temp_file.flush().unwrap();
        let err = FrequencyFileProvider::new(temp_file.path()).load().unwrap_err();
        assert!(err.is_lexicon_unavailable(), "{err:?}");
        assert!(err.to_string().contains(":2:"), "{err}");
    }
}
