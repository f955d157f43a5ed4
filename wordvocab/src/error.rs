use snafu::Snafu;
use std::path::PathBuf;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum WordVocabError {
    #[snafu(display("The minimum frequency must be a positive integer, but got {min_frequency}"))]
    InvalidThreshold { min_frequency: usize },

    #[snafu(display("Token {text:?} can't be part of a vocabulary: {reason}"))]
    MalformedToken { text: String, reason: &'static str },

    #[snafu(display("The shared vocabulary lock was poisoned by a panic during an earlier merge"))]
    LockPoisoned,

    #[snafu(display("Could not merge sub-vocabulary into overall vocabulary"))]
    VocabMerge {
        #[snafu(source(from(WordVocabError, Box::new)))]
        source: Box<WordVocabError>,
    },

    #[snafu(display("File I/O error on file '{}'", path.display()))]
    FileIo {
        path: PathBuf,
        source: std::io::Error,
    },
}
