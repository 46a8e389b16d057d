//! The immutable word-frequency table.

use std::sync::Arc;

use ahash::AHashMap;

/// An immutable mapping from lowercase word to occurrence count.
///
/// Membership and ranking are deliberately separate: a word stored with
/// frequency 0 is a member (it counts for language detection) but is never
/// offered as a spelling correction.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    frequencies: AHashMap<String, u64>,
    total_frequency: u64,
}

impl Lexicon {
    /// Create an empty lexicon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a lexicon from `(word, frequency)` pairs.
    ///
    /// Words are lowercased; repeated words have their frequencies summed.
    pub fn from_frequencies<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: AsRef<str>,
    {
        let mut builder = LexiconBuilder::new();
        for (word, frequency) in entries {
            builder.add_occurrences(word.as_ref(), frequency);
        }
        builder.build()
    }

    /// Build a lexicon by counting every occurrence in a word list.
    ///
    /// ```
    /// use trnlp::lexicon::Lexicon;
    ///
    /// let lexicon = Lexicon::from_words(["ev", "okul", "ev"]);
    /// assert_eq!(lexicon.frequency("ev"), 2);
    /// assert_eq!(lexicon.frequency("okul"), 1);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = LexiconBuilder::new();
        for word in words {
            builder.increment_word(word.as_ref());
        }
        builder.build()
    }

    /// Check whether `word` is a member of the lexicon.
    ///
    /// Lookups are exact; keys are stored lowercase, so callers pass
    /// lowercase words (tokenizer output already is).
    pub fn contains(&self, word: &str) -> bool {
        self.frequencies.contains_key(word)
    }

    /// Get the frequency of a word, 0 when absent.
    pub fn frequency(&self, word: &str) -> u64 {
        self.frequencies.get(word).copied().unwrap_or(0)
    }

    /// A word usable as a correction: present with a positive frequency.
    pub(crate) fn is_known(&self, word: &str) -> bool {
        self.frequency(word) > 0
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// Whether the lexicon holds no words at all.
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Sum of all frequencies.
    pub fn total_frequency(&self) -> u64 {
        self.total_frequency
    }

    /// Iterate over `(word, frequency)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.frequencies
            .iter()
            .map(|(word, frequency)| (word.as_str(), *frequency))
    }

    /// The `limit` most frequent words, ties ordered alphabetically.
    pub fn most_frequent(&self, limit: usize) -> Vec<(String, u64)> {
        let mut entries: Vec<(&str, u64)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
            .into_iter()
            .take(limit)
            .map(|(word, frequency)| (word.to_string(), frequency))
            .collect()
    }

    /// Move the lexicon behind an `Arc` for sharing between threads.
    pub fn into_shared(self) -> Arc<Lexicon> {
        Arc::new(self)
    }
}

/// Mutable accumulator used by providers to assemble a [`Lexicon`].
#[derive(Debug, Clone, Default)]
pub struct LexiconBuilder {
    frequencies: AHashMap<String, u64>,
}

impl LexiconBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the frequency of a word, replacing any previous value.
    pub fn add_word(&mut self, word: &str, frequency: u64) -> &mut Self {
        self.frequencies.insert(word.to_lowercase(), frequency);
        self
    }

    /// Add `count` occurrences of a word.
    pub fn add_occurrences(&mut self, word: &str, count: u64) -> &mut Self {
        let entry = self.frequencies.entry(word.to_lowercase()).or_insert(0);
        *entry = entry.saturating_add(count);
        self
    }

    /// Count one more occurrence of a word.
    pub fn increment_word(&mut self, word: &str) -> &mut Self {
        self.add_occurrences(word, 1)
    }

    /// Number of distinct words collected so far.
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// Whether nothing has been added yet.
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Freeze the collected words into a lexicon.
    pub fn build(self) -> Lexicon {
        let total_frequency = self
            .frequencies
            .values()
            .fold(0u64, |acc, &frequency| acc.saturating_add(frequency));

        Lexicon {
            frequencies: self.frequencies,
            total_frequency,
        }
    }
}
