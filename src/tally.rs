use crate::case;
use crate::particle::{self, Context};
use crate::utils;
use crate::whitespace;

/// The counts behind [`is_normalised`](crate::is_normalised).
///
/// A well-formed name has one capitalised initial per word, except for words
/// inside particles and prefixes, and no spare whitespace. So the name is
/// normalised exactly when `words + extra_whitespace` is balanced by
/// `title_case_words + exception_words`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub words: usize,
    pub extra_whitespace: usize,
    pub title_case_words: usize,
    pub exception_words: usize,
}

impl Tally {
    pub fn of(text: &str) -> Tally {
        Tally {
            words: utils::words(text).count(),
            extra_whitespace: whitespace::count_unnecessary(text),
            title_case_words: case::count_title_case_words(text),
            exception_words: count_exception_words(text),
        }
    }

    /// Zero for a normalised name; positive when words are missing their
    /// capital or whitespace needs collapsing.
    pub fn balance(&self) -> i64 {
        (self.words + self.extra_whitespace) as i64
            - (self.title_case_words + self.exception_words) as i64
    }

    #[inline]
    pub fn is_balanced(&self) -> bool {
        self.balance() == 0
    }
}

fn count_exception_words(text: &str) -> usize {
    let particles = particle::find_particles(text, Context::Detect);
    let prefixes = particle::find_prefixes(text, Context::Detect);

    particles
        .into_iter()
        .chain(prefixes)
        .map(|range| utils::words(&text[range]).count())
        .sum()
}

pub fn is_normalised(text: &str) -> bool {
    if utils::is_blank(text) || utils::is_all_punctuation(text) || utils::has_sequential_caps(text) {
        return false;
    }

    Tally::of(text).is_balanced()
}
