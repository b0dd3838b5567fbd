use crate::utils;
use smallvec::SmallVec;
use std::ops::Range;

static PARTICLES: phf::Set<&'static str> = include!(concat!(env!("OUT_DIR"), "/particles.rs"));

static COMPOUND_PARTICLES: phf::Set<&'static str> =
    include!(concat!(env!("OUT_DIR"), "/compound_particles.rs"));

// Only forced to lower case when rewriting, and only before "-" and a letter
const LOWER_PREFIXES: [&str; 2] = ["al-", "el-"];

// Counted as exceptions to title case when checking an existing name
const EXCEPTION_PREFIXES: [&str; 3] = ["al-", "el-", "d'"];

pub type Matches = SmallVec<[Range<usize>; 4]>;

/// The two places particles are looked for, which disagree on case
/// sensitivity and on whether the ends of the text count as a boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Context {
    /// Ignores ASCII case; a match may touch either end of the text.
    Rewrite,
    /// Exact case; a match needs whitespace on both sides.
    Detect,
}

impl Context {
    #[inline]
    fn is_bounded(self, text: &str, range: &Range<usize>) -> bool {
        match self {
            Context::Rewrite => true,
            Context::Detect => range.start > 0 && range.end < text.len(),
        }
    }

    fn lookup(self, set: &phf::Set<&'static str>, first: &str, second: Option<&str>) -> bool {
        let mut key: SmallVec<[u8; 16]> = SmallVec::new();
        key.extend_from_slice(first.as_bytes());
        if let Some(second) = second {
            key.push(b' ');
            key.extend_from_slice(second.as_bytes());
        }
        if self == Context::Rewrite {
            key.make_ascii_lowercase();
        }
        std::str::from_utf8(&key).map_or(false, |key| set.contains(key))
    }
}

#[inline]
fn is_single_space(gap: &str) -> bool {
    let mut chars = gap.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_whitespace())
}

/// Whole-token particles, preferring a two-word particle ("de la") over a
/// one-word particle starting at the same token.
pub fn find_particles(text: &str, context: Context) -> Matches {
    let tokens: SmallVec<[Range<usize>; 8]> = utils::tokens(text).collect();
    let mut found = Matches::new();
    let mut i = 0;

    while i < tokens.len() {
        let token = &tokens[i];

        if let Some(next) = tokens.get(i + 1) {
            let pair = token.start..next.end;
            if is_single_space(&text[token.end..next.start])
                && context.is_bounded(text, &pair)
                && context.lookup(
                    &COMPOUND_PARTICLES,
                    &text[token.clone()],
                    Some(&text[next.clone()]),
                )
            {
                found.push(pair);
                i += 2;
                continue;
            }
        }

        if context.is_bounded(text, token) && context.lookup(&PARTICLES, &text[token.clone()], None)
        {
            found.push(token.clone());
        }
        i += 1;
    }

    found
}

/// Prefixes such as "al-" at the start of a token that follows whitespace
/// and precedes an ASCII letter.
///
/// When rewriting, the returned ranges cover only the letters ("al"), since
/// those are what gets lower-cased. When detecting, they cover the whole
/// prefix including its punctuation.
pub fn find_prefixes(text: &str, context: Context) -> Matches {
    let prefixes: &[&str] = match context {
        Context::Rewrite => &LOWER_PREFIXES[..],
        Context::Detect => &EXCEPTION_PREFIXES[..],
    };

    utils::tokens(text)
        .filter(|token| token.start > 0)
        .filter_map(|token| {
            let word = &text[token.clone()];
            prefixes.iter().find_map(|prefix| {
                let n = prefix.len();
                let head_matches = word.get(..n).map_or(false, |head| match context {
                    Context::Rewrite => head.eq_ignore_ascii_case(prefix),
                    Context::Detect => head == *prefix,
                });
                let letter_follows = word.as_bytes().get(n).map_or(false, u8::is_ascii_alphabetic);
                if !(head_matches && letter_follows) {
                    None
                } else if context == Context::Rewrite {
                    Some(token.start..token.start + n - 1)
                } else {
                    Some(token.start..token.start + n)
                }
            })
        })
        .collect()
}
