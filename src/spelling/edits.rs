//! Bounded edit generation.
//!
//! A word of `n` characters has `n` deletions, `n - 1` transpositions,
//! `32 n` substitutions and `32 (n + 1)` insertions, so distance-2 search
//! re-expands on the order of `(66 n + 31)` words. Distance-2 results are
//! filtered against the lexicon while they are generated and never
//! materialised as a whole.

use ahash::AHashSet;

use crate::alphabet::EDIT_ALPHABET;
use crate::lexicon::Lexicon;

/// Visit every string one deletion, adjacent transposition, substitution or
/// insertion away from `word`. Duplicates are visited more than once.
fn for_each_edit<F: FnMut(&str)>(word: &str, mut visit: F) {
    // Byte offset of every char boundary, including the end of the word.
    let bounds: Vec<usize> = word
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(word.len()))
        .collect();
    let char_count = bounds.len() - 1;
    let mut buf = String::with_capacity(word.len() + 4);
    let mut ch_buf = [0u8; 4];

    for split in 0..=char_count {
        let left = &word[..bounds[split]];
        let right = &word[bounds[split]..];

        if split < char_count {
            let rest = &word[bounds[split + 1]..];

            // Deletion
            buf.clear();
            buf.push_str(left);
            buf.push_str(rest);
            visit(&buf);

            // Transposition of the next two characters
            if split + 1 < char_count {
                let first = &word[bounds[split]..bounds[split + 1]];
                let second = &word[bounds[split + 1]..bounds[split + 2]];
                buf.clear();
                buf.push_str(left);
                buf.push_str(second);
                buf.push_str(first);
                buf.push_str(&word[bounds[split + 2]..]);
                visit(&buf);
            }

            // Substitutions
            for &ch in &EDIT_ALPHABET {
                buf.clear();
                buf.push_str(left);
                buf.push_str(ch.encode_utf8(&mut ch_buf));
                buf.push_str(rest);
                visit(&buf);
            }
        }

        // Insertions
        for &ch in &EDIT_ALPHABET {
            buf.clear();
            buf.push_str(left);
            buf.push_str(ch.encode_utf8(&mut ch_buf));
            buf.push_str(right);
            visit(&buf);
        }
    }
}

/// All distinct strings one edit away from `word`.
pub(crate) fn edits1(word: &str) -> AHashSet<String> {
    let char_count = word.chars().count();
    let mut edits =
        AHashSet::with_capacity(char_count * (2 * EDIT_ALPHABET.len() + 2) + EDIT_ALPHABET.len());
    for_each_edit(word, |candidate| {
        if !edits.contains(candidate) {
            edits.insert(candidate.to_owned());
        }
    });
    edits
}

/// Members of `candidates` usable as corrections.
pub(crate) fn known<'a, I>(candidates: I, lexicon: &Lexicon) -> AHashSet<String>
where
    I: IntoIterator<Item = &'a String>,
{
    candidates
        .into_iter()
        .filter(|candidate| lexicon.is_known(candidate))
        .cloned()
        .collect()
}

/// Known words one edit away from any member of `first_edits`.
///
/// `first_edits` is the already computed [`edits1`] of the input word.
pub(crate) fn known_edits2(first_edits: &AHashSet<String>, lexicon: &Lexicon) -> AHashSet<String> {
    let mut found = AHashSet::new();
    for edit in first_edits {
        for_each_edit(edit, |candidate| {
            if lexicon.is_known(candidate) && !found.contains(candidate) {
                found.insert(candidate.to_owned());
            }
        });
    }
    found
}
