//! Property tests for the tokenizing and vocabulary building pipeline, with generated documents.
use proptest::prelude::*;
use wordvocab::{
    tokenize, word_level_tokenize, Abbreviations, CountTable, SubVocabulary, TokenizeConfig,
    Vocabulary,
};

/// Documents built from a small set of words and punctuation, so that words actually repeat and
/// thresholds have something to do
fn document() -> impl Strategy<Value = String> {
    let fragment = prop_oneof![
        "[a-e]{1,3}",
        "[a-e]{1,3}[.,!?]",
        "[.,!?&]{1,2}",
        Just("Mr.".to_string()),
        Just("can't".to_string()),
        Just("AT&T".to_string()),
    ];

    prop::collection::vec((fragment, "[ \t\n]{1,2}"), 0..60).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(fragment, space)| format!("{fragment}{space}"))
            .collect()
    })
}

fn sub_vocabulary(text: &str, min_frequency: usize) -> SubVocabulary {
    let counts = CountTable::count(tokenize(text, &Abbreviations::default()));
    SubVocabulary::build(&counts, min_frequency).unwrap()
}

proptest! {
    #[test]
    fn tokenizing_is_idempotent(text in "\\PC*") {
        let abbreviations = Abbreviations::default();

        prop_assert_eq!(tokenize(&text, &abbreviations), tokenize(&text, &abbreviations));
    }

    #[test]
    fn tokens_are_never_empty_or_contain_whitespace(text in "\\PC*") {
        for token in tokenize(&text, &Abbreviations::default()) {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.chars().any(char::is_whitespace));
        }
    }

    #[test]
    fn raising_the_threshold_never_adds_known_tokens(text in document(), low in 1usize..5, step in 0usize..5) {
        let high = low + step;

        let low_sub = sub_vocabulary(&text, low);
        let high_sub = sub_vocabulary(&text, high);

        let low_known = low_sub.known().collect::<Vec<_>>();
        prop_assert!(high_sub.known().all(|token| low_known.contains(&token)));
        prop_assert!(high_sub.unknown_count() >= low_sub.unknown_count());

        // Every distinct token is accounted for exactly once either way
        prop_assert_eq!(low_sub.len(), high_sub.len());
    }

    #[test]
    fn merging_twice_keeps_the_same_known_tokens(text in document(), min_frequency in 1usize..4) {
        let config = TokenizeConfig::default().with_min_frequency(min_frequency);

        let mut once = Vocabulary::new();
        word_level_tokenize(&text, &mut once, &config).unwrap();

        let mut twice = once.clone();
        word_level_tokenize(&text, &mut twice, &config).unwrap();

        prop_assert_eq!(once.known().collect::<Vec<_>>(), twice.known().collect::<Vec<_>>());

        // Each build mints new unknowns, so those pile up
        prop_assert_eq!(2 * once.unknown_count(), twice.unknown_count());
    }

    #[test]
    fn sequential_merges_are_a_union(first in document(), second in document(), min_frequency in 1usize..4) {
        // Keep most words apart from the first document's.  Any overlap left over ("AT&T") is
        // handled by only expecting the second document's known tokens which are new.
        let second = second.to_uppercase();

        let first_sub = sub_vocabulary(&first, min_frequency);
        let second_sub = sub_vocabulary(&second, min_frequency);

        let config = TokenizeConfig::default().with_min_frequency(min_frequency);
        let mut vocab = Vocabulary::new();
        word_level_tokenize(&first, &mut vocab, &config).unwrap();
        word_level_tokenize(&second, &mut vocab, &config).unwrap();

        let mut expected_known = first_sub.known().collect::<Vec<_>>();
        expected_known.extend(second_sub.known().filter(|token| !first_sub.known().any(|t| t == *token)));

        prop_assert_eq!(expected_known, vocab.known().collect::<Vec<_>>());
        prop_assert_eq!(
            first_sub.unknown_count() + second_sub.unknown_count(),
            vocab.unknown_count()
        );
    }
}
