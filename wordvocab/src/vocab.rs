//! Per-document sub-vocabularies, and the overall vocabulary they are merged into.
use crate::count::CountTable;
use crate::error::{InvalidThresholdSnafu, MalformedTokenSnafu};
use crate::token::Token;
use crate::Result;
use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};
use tracing::*;

/// The tokens derived from exactly one document's [`CountTable`] and a minimum frequency.
///
/// Tokens which occurred at least `min_frequency` times are included as known tokens.  Every
/// other token is replaced by its own freshly minted unknown token.  Known tokens come first, in
/// the order they were first seen in the document, followed by the unknowns.
///
/// Sub-vocabularies are immutable once built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubVocabulary {
    tokens: Vec<Token>,
}

impl SubVocabulary {
    /// Threshold the counts in `counts` into a sub-vocabulary.
    ///
    /// Fails with [`crate::WordVocabError::InvalidThreshold`] if `min_frequency` is 0, since that
    /// would make every token trivially known.
    pub fn build(counts: &CountTable, min_frequency: usize) -> Result<Self> {
        if min_frequency == 0 {
            return InvalidThresholdSnafu { min_frequency }.fail();
        }

        let mut tokens = Vec::with_capacity(counts.len());
        let mut excluded = 0usize;

        for (text, count) in counts.iter() {
            if count >= min_frequency {
                tokens.push(Token::known(text));
            } else {
                excluded += 1;
            }
        }

        // One unknown per excluded word, each with its own identity
        tokens.extend(std::iter::repeat_with(Token::unknown).take(excluded));

        debug!(
            known = tokens.len() - excluded,
            unknown = excluded,
            min_frequency,
            "Built sub-vocabulary"
        );

        Ok(Self { tokens })
    }

    /// Assemble a sub-vocabulary from tokens obtained elsewhere.
    ///
    /// Duplicates are collapsed, keeping the first occurrence.  The tokens aren't validated here;
    /// that happens when the sub-vocabulary is merged.
    pub fn from_tokens<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Token>,
    {
        let mut seen = HashSet::default();
        let tokens = tokens
            .into_iter()
            .map(Into::into)
            .filter(|token| seen.insert(token.clone()))
            .collect();

        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, token: &Token) -> bool {
        self.tokens.contains(token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// The text of every known token
    pub fn known(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().filter_map(Token::as_known)
    }

    pub fn unknown_count(&self) -> usize {
        self.tokens.iter().filter(|token| token.is_unknown()).count()
    }
}

impl<'a> IntoIterator for &'a SubVocabulary {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// The accumulated, de-duplicated set of every token accepted so far, across all merged
/// sub-vocabularies.
///
/// This is an ordered set: tokens keep the position they were first inserted at, so iteration
/// order is reproducible and a token's position can double as its integer id (for example as a
/// row in an embedding table).  Positions never change once assigned.
///
/// The vocabulary has no size bound.  It lives as long as the caller keeps it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Vocabulary {
    tokens: Vec<Token>,

    /// Position of each token in `tokens`
    index: HashMap<Token, usize>,
}

impl Vocabulary {
    /// Create an empty vocabulary
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a vocabulary pre-populated with some tokens.
    ///
    /// Duplicates in `seed` collapse.  Fails if any seed token is malformed, in which case no
    /// vocabulary is created.
    pub fn with_seed<I, T>(seed: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<Token>,
    {
        let mut vocab = Self::new();
        vocab.merge(&SubVocabulary::from_tokens(seed))?;

        Ok(vocab)
    }

    /// Merge `sub` into this vocabulary, so that it becomes the set union of the two.
    ///
    /// Known tokens already present are not duplicated.  Unknown tokens are only ever equal to
    /// themselves, so every unknown token in `sub` that isn't literally already here is added.
    ///
    /// This is all or nothing: every token in `sub` is validated before any of them is inserted,
    /// so on error this vocabulary is unchanged.  Returns the number of tokens that were added.
    pub fn merge(&mut self, sub: &SubVocabulary) -> Result<usize> {
        for token in sub {
            validate_token(token)?;
        }

        let before = self.tokens.len();
        for token in sub {
            self.insert(token);
        }
        let added = self.tokens.len() - before;

        debug!(
            added,
            offered = sub.len(),
            size = self.tokens.len(),
            "Merged sub-vocabulary"
        );

        Ok(added)
    }

    fn insert(&mut self, token: &Token) {
        if !self.index.contains_key(token) {
            self.index.insert(token.clone(), self.tokens.len());
            self.tokens.push(token.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, token: &Token) -> bool {
        self.index.contains_key(token)
    }

    /// Is there a known token with this exact text?
    pub fn contains_known(&self, text: &str) -> bool {
        self.contains(&Token::known(text))
    }

    /// The position at which `token` was inserted, if it's present.
    pub fn position(&self, token: &Token) -> Option<usize> {
        self.index.get(token).copied()
    }

    /// The token inserted at `position`
    pub fn get(&self, position: usize) -> Option<&Token> {
        self.tokens.get(position)
    }

    /// All tokens, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// The text of every known token, in insertion order
    pub fn known(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().filter_map(Token::as_known)
    }

    pub fn unknown_count(&self) -> usize {
        self.tokens.iter().filter(|token| token.is_unknown()).count()
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Known tokens must be non-empty and free of whitespace, same as anything the tokenizer yields.
fn validate_token(token: &Token) -> Result<()> {
    if let Token::Known(text) = token {
        if text.is_empty() {
            return MalformedTokenSnafu {
                text: text.clone(),
                reason: "token text is empty",
            }
            .fail();
        }
        if text.chars().any(char::is_whitespace) {
            return MalformedTokenSnafu {
                text: text.clone(),
                reason: "token text contains whitespace",
            }
            .fail();
        }
    }

    Ok(())
}
