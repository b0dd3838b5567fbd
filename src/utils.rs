use std::ops::Range;
use unicode_normalization::char::canonical_combining_class;

#[inline]
pub fn is_combining(c: char) -> bool {
    canonical_combining_class(c) > 0
}

/// Letters, digits and underscore, plus combining marks so that a decomposed
/// diacritic never splits a word in two.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || is_combining(c)
}

pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

pub fn is_all_punctuation(text: &str) -> bool {
    text.chars()
        .all(|c| c.is_ascii_punctuation() || c.is_whitespace())
}

pub fn has_sequential_caps(text: &str) -> bool {
    // Non-ASCII chars never encode to ASCII bytes in UTF-8, so adjacent
    // ASCII bytes are adjacent chars
    text.as_bytes()
        .windows(2)
        .any(|pair| pair[0].is_ascii_uppercase() && pair[1].is_ascii_uppercase())
}

/// Maximal runs of word characters.
pub fn words(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.split(|c: char| !is_word_char(c))
        .filter(|word| !word.is_empty())
}

/// Byte ranges of the whitespace-separated tokens in `text`.
pub fn tokens(text: &str) -> impl Iterator<Item = Range<usize>> + '_ {
    let mut start = None;
    text.char_indices()
        .chain(std::iter::once((text.len(), ' ')))
        .filter_map(move |(i, c)| {
            if c.is_whitespace() {
                start.take().map(|s| s..i)
            } else {
                if start.is_none() {
                    start = Some(i);
                }
                None
            }
        })
}
