use std::time::Duration;

/// The output of a completed search over a non-empty word list.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// Wall-clock time from worker launch until every worker joined.
    pub elapsed: Duration,

    /// Matched words or their count, depending on mode.
    pub matches: Matches,

    /// Scan performance statistics.
    pub stats: ScanStats,
}

impl Outcome {
    /// Number of matches in either mode.
    pub fn match_count(&self) -> usize {
        match &self.matches {
            Matches::Words(w) => w.len(),
            Matches::Count(n) => *n,
        }
    }

    /// The matched words, if the search ran in collect mode.
    pub fn words(&self) -> Option<&[String]> {
        match &self.matches {
            Matches::Words(w) => Some(w),
            Matches::Count(_) => None,
        }
    }
}

/// What a search produced. Exactly one of the two, chosen by mode.
///
/// In collect mode the word order is **not deterministic**: each worker
/// appends its chunk's matches when it finishes, and workers finish in any
/// order. Within one chunk, matches keep their word-list order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matches {
    Words(Vec<String>),
    Count(usize),
}

/// Performance statistics for a completed scan.
#[derive(Debug, Clone)]
pub struct ScanStats {
    /// Number of words scanned.
    pub words: usize,

    /// Number of workers actually launched (after clamping).
    pub workers: usize,

    /// Same as [`Outcome::elapsed`].
    pub duration: Duration,

    /// Words scanned per second, clamped to 0 on zero-duration runs.
    pub words_per_sec: usize,
}

impl ScanStats {
    pub(crate) fn compute(words: usize, workers: usize, duration: Duration) -> Self {
        let wps = if duration.as_secs_f64() > 0.0 {
            (words as f64 / duration.as_secs_f64()) as usize
        } else {
            0
        };
        Self {
            words,
            workers,
            duration,
            words_per_sec: wps,
        }
    }
}
