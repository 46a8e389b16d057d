//! The fixed Turkish alphabet and vowel classification.
//!
//! [`EDIT_ALPHABET`] is the universe used for substitutions and insertions
//! during spelling correction. [`VOWELS`] drives syllable boundaries. Any
//! character outside the vowel set is treated as a consonant.

/// The 29 Turkish letters plus `-`, `:` and `=`.
pub const EDIT_ALPHABET: [char; 32] = [
    'a', 'b', 'c', 'ç', 'd', 'e', 'f', 'g', 'ğ', 'h', 'ı', 'i', 'j', 'k', 'l', 'm', 'n', 'o',
    'ö', 'p', 'r', 's', 'ş', 't', 'u', 'ü', 'v', 'y', 'z', '-', ':', '=',
];

/// The eight Turkish vowels.
pub const VOWELS: [char; 8] = ['a', 'ı', 'o', 'u', 'e', 'i', 'ö', 'ü'];

/// Letters the tokenizer accepts on top of ASCII `a-z`.
pub const TURKISH_SPECIFIC_LETTERS: [char; 6] = ['ö', 'ç', 'ü', 'ğ', 'ı', 'ş'];

/// Check whether `ch` is a (lowercase) Turkish vowel.
#[inline]
pub fn is_vowel(ch: char) -> bool {
    VOWELS.contains(&ch)
}

/// Check whether `ch` belongs to the tokenizer's word-character class.
#[inline]
pub fn is_word_char(ch: char) -> bool {
    ch.is_ascii_lowercase() || TURKISH_SPECIFIC_LETTERS.contains(&ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_is_closed_and_unique() {
        let mut sorted = EDIT_ALPHABET.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 32);
        assert!(!EDIT_ALPHABET.contains(&'q'));
        assert!(!EDIT_ALPHABET.contains(&'w'));
        assert!(!EDIT_ALPHABET.contains(&'x'));
    }

    #[test]
    fn test_vowels_are_letters_of_the_alphabet() {
        for vowel in VOWELS {
            assert!(EDIT_ALPHABET.contains(&vowel));
            assert!(is_vowel(vowel));
        }
        assert!(!is_vowel('k'));
        assert!(!is_vowel('ğ'));
        assert!(!is_vowel('-'));
    }

    #[test]
    fn test_word_chars() {
        assert!(is_word_char('a'));
        assert!(is_word_char('q'));
        assert!(is_word_char('ş'));
        assert!(!is_word_char('A'));
        assert!(!is_word_char(','));
        assert!(!is_word_char('1'));
        assert!(!is_word_char('â'));
    }
}
