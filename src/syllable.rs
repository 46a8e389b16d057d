//! Turkish syllabication.
//!
//! Words are split in a single left-to-right scan. A syllable is closed in
//! front of a character whenever the character after it is a vowel and
//! either the previous character was a consonant or the current character
//! is a consonant. A single consonant between two vowels therefore starts
//! the following syllable (`ki-tap`), and of two consonants between vowels
//! the second one does (`an-ka-ra`).
//!
//! Concatenating the syllables always gives back the lowercased word.

use rayon::prelude::*;

use crate::alphabet::is_vowel;
use crate::analysis::tokenize;

/// Split a word into syllables.
///
/// ```
/// use trnlp::syllable::syllabicate;
///
/// assert_eq!(syllabicate("kitap"), vec!["ki", "tap"]);
/// assert_eq!(syllabicate("Ankara"), vec!["an", "ka", "ra"]);
/// assert!(syllabicate("").is_empty());
/// ```
pub fn syllabicate(word: &str) -> Vec<String> {
    let word = word.to_lowercase();
    let chars: Vec<(usize, char)> = word.char_indices().collect();

    let mut syllables = Vec::new();
    // Byte offset where the syllable being built starts.
    let mut start = 0;
    let mut last_was_vowel = false;

    for (index, &(offset, ch)) in chars.iter().enumerate() {
        let Some(&(_, next)) = chars.get(index + 1) else {
            syllables.push(word[start..].to_string());
            break;
        };

        let current_is_vowel = is_vowel(ch);
        let has_pending = offset > start;

        if is_vowel(next) && has_pending && (!last_was_vowel || !current_is_vowel) {
            syllables.push(word[start..offset].to_string());
            start = offset;
        }

        last_was_vowel = current_is_vowel;
    }

    syllables
}

/// Tokenize a sentence and syllabicate every word, keeping word order.
pub fn syllabicate_sentence(sentence: &str) -> Vec<Vec<String>> {
    tokenize(sentence)
        .iter()
        .map(|word| syllabicate(word))
        .collect()
}

/// Syllabicate many words on the rayon pool, keeping input order.
pub fn syllabicate_all<S: AsRef<str> + Sync>(words: &[S]) -> Vec<Vec<String>> {
    words
        .par_iter()
        .map(|word| syllabicate(word.as_ref()))
        .collect()
}

/// Join the syllables of `word` with `separator`.
pub fn hyphenate(word: &str, separator: &str) -> String {
    syllabicate(word).join(separator)
}

/// Number of syllables in `word`.
pub fn syllable_count(word: &str) -> usize {
    syllabicate(word).len()
}
