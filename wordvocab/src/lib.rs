//! Word-level tokenization of free text, and incremental building of a de-duplicated vocabulary
//! from the tokens of many documents.
//!
//! Text is split on whitespace, and each fragment has its trailing punctuation handled by a
//! small heuristic (see [`classify_fragment`]) which keeps abbreviations like "Mr." and
//! punctuation inside words like "can't" or "AT&T" intact.  The tokens of each document are
//! counted, and those which occur less often than a configured minimum frequency are replaced by
//! unknown tokens.  The resulting [`SubVocabulary`] is then merged into an overall
//! [`Vocabulary`].
//!
//! ```
//! use wordvocab::{word_level_tokenize, TokenizeConfig, Vocabulary};
//!
//! let mut vocab = Vocabulary::with_seed(["help"])?;
//! word_level_tokenize("Mr. Smith, meet Mr. Jones.", &mut vocab, &TokenizeConfig::default())?;
//!
//! assert_eq!(vec!["help", "Mr."], vocab.known().collect::<Vec<_>>());
//! assert_eq!(3, vocab.unknown_count());
//! # Ok::<(), wordvocab::WordVocabError>(())
//! ```
mod classify;
mod config;
mod count;
mod error;
mod input;
mod pipeline;
mod shared;
mod token;
mod tokenizer;
mod vocab;

pub use classify::*;
pub use config::*;
pub use count::*;
pub use error::*;
pub use input::*;
pub use pipeline::*;
pub use shared::*;
pub use token::*;
pub use tokenizer::*;
pub use vocab::*;

pub type Result<T> = std::result::Result<T, WordVocabError>;
