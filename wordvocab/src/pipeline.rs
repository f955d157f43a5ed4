//! The full pipeline from raw text to an updated overall vocabulary.
//!
//! Each stage is a plain function returning a `Result`, composed here with `?`:
//!
//! text -> [`tokenize`] -> [`CountTable`] -> [`SubVocabulary`] -> [`Vocabulary::merge`]
//!
//! Only a failure of the merge stage is wrapped in [`crate::WordVocabError::VocabMerge`], with
//! the underlying error kept as its source.  Errors from earlier stages propagate as they are.
use crate::config::TokenizeConfig;
use crate::count::CountTable;
use crate::error::VocabMergeSnafu;
use crate::shared::SharedVocabulary;
use crate::tokenizer::{tokenize, Fragments};
use crate::vocab::{SubVocabulary, Vocabulary};
use crate::Result;
use snafu::ResultExt;
use tracing::*;

/// Tokenize `text`, threshold its tokens into a sub-vocabulary according to `config`, and merge
/// that into `vocab`.
///
/// If this fails, `vocab` is left exactly as it was.
pub fn word_level_tokenize(
    text: &str,
    vocab: &mut Vocabulary,
    config: &TokenizeConfig,
) -> Result<()> {
    let sub = build_sub_vocabulary(text, config)?;
    vocab.merge(&sub).context(VocabMergeSnafu)?;

    Ok(())
}

/// The stages of the pipeline up to, but not including, the merge.
fn build_sub_vocabulary(text: &str, config: &TokenizeConfig) -> Result<SubVocabulary> {
    let tokens = tokenize(text, &config.abbreviations);
    let counts = CountTable::count(&tokens);

    debug!(
        tokens = tokens.len(),
        distinct = counts.len(),
        "Tokenized document"
    );

    SubVocabulary::build(&counts, config.min_frequency)
}

/// A reusable tokenizer bound to one validated [`TokenizeConfig`].
///
/// Instances are cheap to clone and can be shared between threads.  To have several threads
/// contribute to one overall vocabulary, give each a clone of this and of a [`SharedVocabulary`]
/// and call [`Self::tokenize_into_shared`].
#[derive(Clone, Debug)]
pub struct WordTokenizer {
    config: TokenizeConfig,
}

impl WordTokenizer {
    /// Fails if the configuration is invalid, so that a bad threshold is caught before any text
    /// is processed.
    pub fn new(config: TokenizeConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    pub fn config(&self) -> &TokenizeConfig {
        &self.config
    }

    /// Iterate over the tokens of `text` lazily.
    pub fn fragments<'a>(&self, text: &'a str) -> Fragments<'a> {
        Fragments::new(text, &self.config.abbreviations)
    }

    /// The ordered token sequence of `text`
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        tokenize(text, &self.config.abbreviations)
    }

    /// Count the tokens of `text`
    pub fn count(&self, text: &str) -> CountTable {
        CountTable::count(self.fragments(text))
    }

    /// Everything short of merging: tokenize, count and threshold `text`.
    pub fn sub_vocabulary(&self, text: &str) -> Result<SubVocabulary> {
        build_sub_vocabulary(text, &self.config)
    }

    /// See [`word_level_tokenize`]
    pub fn tokenize_into(&self, text: &str, vocab: &mut Vocabulary) -> Result<()> {
        word_level_tokenize(text, vocab, &self.config)
    }

    /// Like [`Self::tokenize_into`], but for a vocabulary shared between threads.  Only the merge
    /// holds the vocabulary's lock.
    pub fn tokenize_into_shared(&self, text: &str, vocab: &SharedVocabulary) -> Result<()> {
        let sub = self.sub_vocabulary(text)?;
        vocab.merge(&sub).context(VocabMergeSnafu)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::init_test_logging;
    use crate::{Abbreviations, Token, WordVocabError};
    use assert_matches::assert_matches;
    use std::error::Error;

    const TEXT: &str = "Hello, my name is bob. I can't walk & I cannot read. What is your name? \
        Where don't you work? I work at AT&T. My phone number is (+1)404-483-9833.";

    #[test]
    fn tokenizes_into_vocabulary() {
        init_test_logging();

        let mut vocab = Vocabulary::with_seed(["Hello", "there", "how", "are", "you"]).unwrap();
        word_level_tokenize(TEXT, &mut vocab, &TokenizeConfig::default()).unwrap();

        // "name", "is", "I" and "work" occur at least twice.  "Hello" and "you" were seeded, so
        // they stay known even though they're rare in this text
        assert_eq!(
            vec!["Hello", "there", "how", "are", "you", "name", "is", "I", "work"],
            vocab.known().collect::<Vec<_>>()
        );

        // Every other distinct word becomes an unknown
        let distinct = CountTable::count(tokenize(TEXT, &Abbreviations::default())).len();
        assert_eq!(distinct - 4, vocab.unknown_count());
    }

    #[test]
    fn zero_threshold_leaves_vocabulary_unchanged() {
        let mut vocab = Vocabulary::with_seed(["help"]).unwrap();
        let before = vocab.clone();

        let config = TokenizeConfig::default().with_min_frequency(0);
        assert_matches!(
            word_level_tokenize(TEXT, &mut vocab, &config),
            Err(WordVocabError::InvalidThreshold { min_frequency: 0 })
        );
        assert_eq!(before, vocab);

        assert_matches!(
            WordTokenizer::new(config),
            Err(WordVocabError::InvalidThreshold { .. })
        );
    }

    #[test]
    fn merge_failure_keeps_its_cause() {
        let shared = SharedVocabulary::default();

        let poisoner = shared.clone();
        let _ = std::thread::spawn(move || {
            let _: Result<()> = poisoner.with(|_| panic!("poison the lock"));
        })
        .join();

        let tokenizer = WordTokenizer::new(TokenizeConfig::default()).unwrap();
        let err = tokenizer.tokenize_into_shared(TEXT, &shared).unwrap_err();

        assert_matches!(
            &err,
            WordVocabError::VocabMerge { source } if matches!(**source, WordVocabError::LockPoisoned)
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn threads_tokenize_into_one_shared_vocabulary() {
        let tokenizer = WordTokenizer::new(TokenizeConfig::default()).unwrap();
        let shared = SharedVocabulary::new(Vocabulary::with_seed(["help"]).unwrap());

        std::thread::scope(|scope| {
            for thread in 0..4 {
                let tokenizer = tokenizer.clone();
                let shared = shared.clone();
                scope.spawn(move || {
                    // Each document repeats its own word, and mentions two rare ones
                    let text = format!("word{thread} word{thread}. rare{thread} odd{thread}!");
                    tokenizer.tokenize_into_shared(&text, &shared).unwrap();
                });
            }
        });

        let vocab = shared.snapshot().unwrap();

        assert!(vocab.contains_known("help"));
        for thread in 0..4 {
            assert!(vocab.contains_known(&format!("word{thread}")));
            assert!(!vocab.contains_known(&format!("rare{thread}")));
        }
        assert_eq!(1 + 4, vocab.known().count());
        assert_eq!(2 * 4, vocab.unknown_count());
    }

    #[test]
    fn empty_text_adds_nothing() {
        let mut vocab = Vocabulary::with_seed(["help"]).unwrap();

        word_level_tokenize("  ... !! ", &mut vocab, &TokenizeConfig::default()).unwrap();

        assert_eq!(1, vocab.len());
    }

    #[test]
    fn repeated_documents_duplicate_only_unknowns() {
        let tokenizer = WordTokenizer::new(TokenizeConfig::default()).unwrap();
        let mut vocab = Vocabulary::new();

        tokenizer.tokenize_into(TEXT, &mut vocab).unwrap();
        let known_once = vocab.known().map(str::to_string).collect::<Vec<_>>();
        let unknown_once = vocab.unknown_count();

        tokenizer.tokenize_into(TEXT, &mut vocab).unwrap();

        assert_eq!(known_once, vocab.known().collect::<Vec<_>>());
        assert_eq!(2 * unknown_once, vocab.unknown_count());
    }

    #[test]
    fn stages() {
        let tokenizer =
            WordTokenizer::new(TokenizeConfig::default().with_min_frequency(1)).unwrap();

        assert_eq!(vec!["Mr.", "Smith"], tokenizer.tokenize("Mr. Smith."));
        assert_eq!(
            tokenizer.tokenize("a b a"),
            tokenizer.fragments("a b a").collect::<Vec<_>>()
        );
        assert_eq!(2, tokenizer.count("a b a").get("a"));

        let sub = tokenizer.sub_vocabulary("AT&T works.").unwrap();
        assert_eq!(vec!["AT&T", "works"], sub.known().collect::<Vec<_>>());
        assert!(sub.iter().all(Token::is_known));
    }
}
