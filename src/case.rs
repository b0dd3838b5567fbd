use crate::utils::is_word_char;

/// Lower-case everything, then upper-case each ASCII letter that starts a word.
///
/// Only ASCII letters are promoted; a word starting with e.g. "é" keeps its
/// lower-case initial.
pub fn title_case(text: &str) -> String {
    let lower = text.to_lowercase();
    let mut result = String::with_capacity(lower.len());
    let mut at_boundary = true;

    for c in lower.chars() {
        if at_boundary && c.is_ascii_lowercase() {
            result.push(c.to_ascii_uppercase());
        } else {
            result.push(c);
        }
        at_boundary = !is_word_char(c);
    }

    result
}

/// Number of words whose first character is an ASCII capital.
pub fn count_title_case_words(text: &str) -> usize {
    let mut count = 0;
    let mut at_boundary = true;

    for c in text.chars() {
        if at_boundary && c.is_ascii_uppercase() {
            count += 1;
        }
        at_boundary = !is_word_char(c);
    }

    count
}

const MAC_PREFIXES: [&str; 2] = ["mac", "mc"];

#[inline]
fn mac_prefix_len(rest: &str) -> Option<usize> {
    MAC_PREFIXES.iter().find_map(|prefix| {
        let n = prefix.len();
        let matches = rest
            .get(..n)
            .map_or(false, |head| head.eq_ignore_ascii_case(prefix))
            && rest.as_bytes().get(n).map_or(false, u8::is_ascii_alphabetic);
        if matches {
            Some(n)
        } else {
            None
        }
    })
}

/// Upper-case the letter after every "Mac" or "Mc", wherever it occurs.
pub fn capitalize_after_mac(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut i = 0;

    while i < text.len() {
        let rest = &text[i..];
        if let Some(n) = mac_prefix_len(rest) {
            result.push_str(&rest[..n]);
            result.push(char::from(rest.as_bytes()[n].to_ascii_uppercase()));
            i += n + 1;
        } else if let Some(c) = rest.chars().next() {
            result.push(c);
            i += c.len_utf8();
        }
    }

    result
}
