//! The token type produced by the tokenizer and stored in vocabularies.
use std::fmt;
use uuid::Uuid;

/// The literal text a `<UNK>` token renders as.
pub const UNKNOWN_TOKEN_TEXT: &str = "<UNK>";

/// The synthetic identity of an unknown token.
///
/// Each one is minted fresh when a sub-vocabulary excludes a word, so two unknown tokens are only
/// ever equal if one is a clone of the other.  UUIDv7 values are ordered by creation time, which
/// keeps the `Ord` impl of [`Token`] meaningful for unknowns as well.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnknownId(Uuid);

impl UnknownId {
    pub(crate) fn mint() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UnknownId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A single entry in a vocabulary.
///
/// Known tokens compare by their text.  Unknown tokens stand in for words that were too rare in
/// the document they came from, and compare by their [`UnknownId`], never by text.  That means a
/// vocabulary can hold any number of distinct unknown tokens.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Token {
    Known(String),
    Unknown(UnknownId),
}

impl Token {
    pub fn known(text: impl Into<String>) -> Self {
        Self::Known(text.into())
    }

    /// Make a brand new unknown token, distinct from every other unknown token in existence.
    pub fn unknown() -> Self {
        Self::Unknown(UnknownId::mint())
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }

    /// The text of a known token, or `None` for unknowns.
    pub fn as_known(&self) -> Option<&str> {
        match self {
            Self::Known(text) => Some(text),
            Self::Unknown(_) => None,
        }
    }
}

impl fmt::Display for Token {
    /// Known tokens render as their text, unknowns as `<UNK>`.  The alternate form (`{:#}`)
    /// includes the id of unknown tokens, which is handy when debugging.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(text) => f.write_str(text),
            Self::Unknown(id) if f.alternate() => write!(f, "{UNKNOWN_TOKEN_TEXT} - {id}"),
            Self::Unknown(_) => f.write_str(UNKNOWN_TOKEN_TEXT),
        }
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        Self::known(text)
    }
}

impl From<String> for Token {
    fn from(text: String) -> Self {
        Self::Known(text)
    }
}
