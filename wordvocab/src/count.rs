//! Tallies how often each token occurs within a single document.
use rustc_hash::FxHashMap as HashMap;

/// Occurrence counts for the tokens of one document.
///
/// Keys are kept in the order they were first seen, so that everything derived from a count
/// table (sub-vocabularies, and in turn the overall vocabulary) is reproducible from run to run.
/// Count tables are built fresh for each document and never merged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CountTable {
    /// `(token, count)` pairs in first-occurrence order
    entries: Vec<(String, usize)>,

    /// Position of each token in `entries`
    index: HashMap<String, usize>,
}

impl CountTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the occurrences of every token in `tokens`.
    pub fn count<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for token in tokens {
            table.add(token.as_ref());
        }

        table
    }

    /// Record one more occurrence of `token`, returning its updated count.
    pub fn add(&mut self, token: &str) -> usize {
        let position = match self.index.get(token) {
            Some(&position) => position,
            None => {
                let position = self.entries.len();
                self.entries.push((token.to_string(), 0));
                self.index.insert(token.to_string(), position);
                position
            }
        };

        let count = &mut self.entries[position].1;
        *count += 1;
        *count
    }

    /// The number of times `token` occurred, which is 0 if it never did.
    pub fn get(&self, token: &str) -> usize {
        self.index
            .get(token)
            .map(|&position| self.entries[position].1)
            .unwrap_or(0)
    }

    /// The number of distinct tokens counted
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The total number of token occurrences counted
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// All `(token, count)` pairs, in the order each token was first seen.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries
            .iter()
            .map(|(token, count)| (token.as_str(), *count))
    }
}

impl<S: AsRef<str>> FromIterator<S> for CountTable {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::count(iter)
    }
}
