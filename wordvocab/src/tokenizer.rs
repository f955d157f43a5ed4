//! Splits a document into word-level tokens, implemented as a Rust [`Iterator`].
use crate::classify::{classify_fragment, Abbreviations};
use std::str::SplitWhitespace;
use tracing::*;

/// Yields the tokens of a document in order, one whitespace-delimited fragment at a time.
///
/// Each fragment is run through [`classify_fragment`]; fragments which classify as droppable are
/// skipped.  The tokens borrow from the input text, so no token text is allocated here.
#[derive(Clone, Debug)]
pub struct Fragments<'a> {
    fragments: SplitWhitespace<'a>,
    abbreviations: Abbreviations,
}

impl<'a> Fragments<'a> {
    pub fn new(text: &'a str, abbreviations: &Abbreviations) -> Self {
        Self {
            // `split_whitespace` already ignores leading and trailing whitespace
            fragments: text.split_whitespace(),
            abbreviations: abbreviations.clone(),
        }
    }
}

impl<'a> Iterator for Fragments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        for fragment in self.fragments.by_ref() {
            match classify_fragment(fragment, &self.abbreviations) {
                Some(token) => return Some(token),
                None => trace!(fragment, "Dropping punctuation-only fragment"),
            }
        }

        None
    }
}

/// Tokenize `text` into an ordered sequence of tokens.
///
/// This is a pure function; the same input always produces the same output.  The result is empty
/// if the text is only whitespace and punctuation.
pub fn tokenize<'a>(text: &'a str, abbreviations: &Abbreviations) -> Vec<&'a str> {
    Fragments::new(text, abbreviations).collect()
}
