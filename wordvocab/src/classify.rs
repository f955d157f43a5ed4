//! Decides what to do with the punctuation in a single whitespace-delimited fragment of text.
//!
//! The heuristic is deliberately simple.  Only the *last* character of a fragment is ever
//! considered for removal, plus a whole-fragment lookup in a list of recognized abbreviations.
//! Punctuation anywhere else in a fragment (apostrophes in "can't", hyphens in "mother-in-law",
//! the `&` in "AT&T", commas in "1,000", the `@` in an email address, the `:` in "1:00", and so
//! on) is never targeted, so it survives untouched.
use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// The abbreviations recognized out of the box.
pub const DEFAULT_ABBREVIATIONS: &[&str] = &[
    "e.g.", "i.e.", "etc.", "Mr.", "Mrs.", "Dr.", "Jr.", "Sr.", "U.S.", "U.K.", "a.m.", "p.m.",
    "vs.", "Ave.",
];

/// A fixed, case-sensitive set of abbreviations which keep their trailing punctuation.
///
/// Matching is by exact string only; there is no prefix or pattern matching.  Cloning is cheap
/// since the set itself is shared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Abbreviations(Arc<FxHashSet<String>>);

impl Abbreviations {
    pub fn new<I, S>(abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(Arc::new(abbreviations.into_iter().map(Into::into).collect()))
    }

    /// An empty set, which recognizes no abbreviations at all.
    pub fn none() -> Self {
        Self::new(std::iter::empty::<String>())
    }

    /// A copy of this set with some more abbreviations added to it.
    pub fn extended<I, S>(&self, more: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = (*self.0).clone();
        set.extend(more.into_iter().map(Into::into));

        Self(Arc::new(set))
    }

    pub fn contains(&self, fragment: &str) -> bool {
        self.0.contains(fragment)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for Abbreviations {
    fn default() -> Self {
        static DEFAULT: Lazy<Abbreviations> =
            Lazy::new(|| Abbreviations::new(DEFAULT_ABBREVIATIONS.iter().copied()));

        DEFAULT.clone()
    }
}

/// Punctuation in the sense used by this crate: the ASCII punctuation characters
/// ``!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~``.
#[inline]
pub fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
}

/// Classify one whitespace-delimited fragment, returning the text of the token it normalizes to,
/// or `None` if the fragment should be dropped entirely.
///
/// - A fragment which doesn't end in punctuation is kept verbatim.
/// - A fragment which ends in punctuation and is a recognized abbreviation is kept verbatim.
/// - A fragment made up of nothing but punctuation is dropped.
/// - Anything else has exactly one trailing character stripped ("read." becomes "read", but
///   "wait..." becomes "wait..").
///
/// The returned string always borrows from `fragment`.
pub fn classify_fragment<'a>(fragment: &'a str, abbreviations: &Abbreviations) -> Option<&'a str> {
    let last = fragment.chars().next_back()?;

    if !is_punctuation(last) {
        // The last character is itself a non-punctuation character, so the fragment can't be pure
        // punctuation and is always kept
        return Some(fragment);
    }

    if abbreviations.contains(fragment) {
        Some(fragment)
    } else if fragment.chars().all(is_punctuation) {
        None
    } else {
        // `last` is ASCII, so it's exactly one byte wide
        Some(&fragment[..fragment.len() - 1])
    }
}
