use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::results::Matches;

/// Where a worker's matches go. Selected once per search by mode; the two
/// variants are never both populated.
pub(crate) enum ResultSink {
    /// Count-only mode: every match bumps the counter, nothing is buffered.
    Count(AtomicUsize),

    /// Collect mode: workers buffer locally and append under the lock once
    /// their chunk is done.
    Collect(Mutex<Vec<String>>),
}

impl ResultSink {
    pub(crate) fn new(collect: bool) -> Self {
        if collect {
            Self::Collect(Mutex::new(Vec::new()))
        } else {
            Self::Count(AtomicUsize::new(0))
        }
    }

    /// Whether workers need a local buffer.
    pub(crate) fn buffers(&self) -> bool {
        matches!(self, Self::Collect(_))
    }

    /// Record one match. Counts go straight to the shared counter; words go
    /// into the worker's own buffer.
    pub(crate) fn record(&self, word: &str, local: &mut Vec<String>) {
        match self {
            Self::Count(n)   => {
                n.fetch_add(1, Ordering::Relaxed);
            }
            Self::Collect(_) => local.push(word.to_owned()),
        }
    }

    /// Append a finished worker's buffer. The lock is held only for the
    /// append, so merges never interleave and never overlap a scan.
    pub(crate) fn merge(&self, local: Vec<String>) {
        if let Self::Collect(all) = self {
            if local.is_empty() {
                return;
            }
            // Appends are all-or-nothing, so a poisoned lock still guards a
            // consistent Vec.
            let mut all = all.lock().unwrap_or_else(PoisonError::into_inner);
            all.extend(local);
        }
    }

    pub(crate) fn finish(self) -> Matches {
        match self {
            Self::Count(n)     => Matches::Count(n.into_inner()),
            Self::Collect(all) => {
                Matches::Words(all.into_inner().unwrap_or_else(PoisonError::into_inner))
            }
        }
    }
}
