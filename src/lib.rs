//! Normalise the capitalisation and spacing of personal names.
//!
//! Names arrive in all sorts of states: "HENDRIK VAN DER  POST",
//! " arron  james-smith  ", "mAria della rosa". This crate rewrites them
//! following the HURIDOCS conventions for recording names of persons, which
//! keep particles such as "van der" or "de la" in lower case, capitalise the
//! letter after "Mac" and "Mc", and treat hyphens and apostrophes as word
//! boundaries:
//!
//! ```
//! assert_eq!("Hendrik van der Post", name_case::normalise("HENDRIK VAN DER  POST"));
//! assert_eq!("Martin MacBride", name_case::normalise("MARTIN MACBRIDE"));
//! assert_eq!("John O'Farrell", name_case::normalise("john o'farrell"));
//! ```
//!
//! Names that already look deliberately capitalised are left alone, apart
//! from their whitespace:
//!
//! ```
//! assert!(name_case::is_normalised("Anne Maclaren"));
//! assert_eq!("Anne Maclaren", name_case::normalise("  Anne   Maclaren "));
//! ```
//!
//! Every function accepts either a `&str` or an `Option<&str>`, and treats
//! `None` the same as blank input.

#![cfg_attr(feature = "bench", feature(test))]

#[cfg(feature = "bench")]
extern crate test;

mod case;
mod particle;
mod rules;
mod tally;
mod utils;
mod whitespace;

#[cfg(feature = "ffi")]
pub mod external;

#[cfg(feature = "serialization")]
mod serialization;

use std::borrow::Cow;
use tracing::trace;

pub use rules::{Rule, RULES};
pub use tally::Tally;

/// Collapse every run of whitespace into a single space and trim the ends.
///
/// Returns an empty string for `None`. Borrows the input when it is already
/// clean.
pub fn normalise_whitespace_to_empty<'a, S>(text: S) -> Cow<'a, str>
where
    S: Into<Option<&'a str>>,
{
    match text.into() {
        Some(text) => whitespace::collapse(text),
        None => Cow::Borrowed(""),
    }
}

/// Whether `name` already follows the capitalisation conventions and has no
/// redundant whitespace.
///
/// Always `false` for `None`, blank or punctuation-only input, and for any
/// name containing two consecutive capital letters.
pub fn is_normalised<'a, S>(name: S) -> bool
where
    S: Into<Option<&'a str>>,
{
    name.into().map_or(false, tally::is_normalised)
}

/// Fix the spacing of `name` and, unless it is already well-formed, its
/// capitalisation.
///
/// Returns an empty string for `None`, blank or punctuation-only input.
pub fn normalise<'a, S>(name: S) -> Cow<'a, str>
where
    S: Into<Option<&'a str>>,
{
    let name = match name.into() {
        Some(name) if !utils::is_blank(name) && !utils::is_all_punctuation(name) => name,
        _ => {
            trace!("no name to normalise");
            return Cow::Borrowed("");
        }
    };

    let name = whitespace::collapse(name);
    if tally::is_normalised(&name) {
        trace!(name = %name, "already normalised");
        return name;
    }

    let rewritten = RULES
        .iter()
        .fold(name.into_owned(), |text, rule| rule.apply(&text));
    trace!(name = %rewritten, "rewrote name");
    Cow::Owned(rewritten)
}

/// The outcome of normalising one name, for reporting.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize))]
pub struct Normalisation<'a> {
    pub input: &'a str,
    pub normalised: Cow<'a, str>,
    pub was_normalised: bool,
}

impl<'a> Normalisation<'a> {
    pub fn of(input: &'a str) -> Normalisation<'a> {
        Normalisation {
            input,
            normalised: normalise(input),
            was_normalised: is_normalised(input),
        }
    }

    /// Whether normalising changed anything beyond whitespace.
    pub fn changed_case(&self) -> bool {
        *normalise_whitespace_to_empty(self.input) != *self.normalised
    }
}
