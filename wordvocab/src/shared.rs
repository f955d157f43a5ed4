//! An overall vocabulary that several threads can merge into.
use crate::error::LockPoisonedSnafu;
use crate::vocab::{SubVocabulary, Vocabulary};
use crate::Result;
use std::sync::{Arc, Mutex, MutexGuard};

/// A cheaply cloneable handle to a [`Vocabulary`] shared between threads.
///
/// Only the merge itself is a critical section.  Callers tokenize, count and build their
/// sub-vocabularies without holding any lock, and then [`Self::merge`] takes the lock for the
/// union-and-replace step, so that exactly one merge is in flight at a time and no merge can lose
/// another's additions.
#[derive(Clone, Debug, Default)]
pub struct SharedVocabulary {
    inner: Arc<Mutex<Vocabulary>>,
}

impl SharedVocabulary {
    pub fn new(vocab: Vocabulary) -> Self {
        Self {
            inner: Arc::new(Mutex::new(vocab)),
        }
    }

    /// Merge `sub` into the shared vocabulary.  See [`Vocabulary::merge`].
    pub fn merge(&self, sub: &SubVocabulary) -> Result<usize> {
        self.lock()?.merge(sub)
    }

    /// Run `f` against the vocabulary while holding the lock.
    pub fn with<R>(&self, f: impl FnOnce(&Vocabulary) -> R) -> Result<R> {
        let vocab = self.lock()?;
        Ok(f(&*vocab))
    }

    /// A copy of the vocabulary as it is right now
    pub fn snapshot(&self) -> Result<Vocabulary> {
        self.with(Vocabulary::clone)
    }

    pub fn len(&self) -> Result<usize> {
        self.with(Vocabulary::len)
    }

    pub fn is_empty(&self) -> Result<bool> {
        self.with(Vocabulary::is_empty)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vocabulary>> {
        // A merge validates everything before it mutates, so a poisoned lock means something far
        // stranger than a bad token happened.  Refuse to go on.
        self.inner.lock().map_err(|_| LockPoisonedSnafu.build())
    }
}

impl From<Vocabulary> for SharedVocabulary {
    fn from(vocab: Vocabulary) -> Self {
        Self::new(vocab)
    }
}
