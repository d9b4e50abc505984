use tracing::debug;

use crate::engine::{resolve_workers, run, EngineOptions};
use crate::error::WordscanError;
use crate::pattern::PatternSpec;
use crate::results::Outcome;
use crate::traits::Matcher;

// ---------------------------------------------------------------------------
// SearchBuilder
// ---------------------------------------------------------------------------

/// Entry point for configuring and executing a search.
///
/// Created via [`wordscan::search()`](crate::search). Configure with chained
/// builder methods, then call [`run()`](SearchBuilder::run) to execute.
///
/// # Example
///
/// ```rust
/// let words = ["cat", "dog", "catalog", "doghouse"];
///
/// let outcome = wordscan::search(&words)
///     .pattern("cat")
///     .threads(2)
///     .run()?
///     .expect("word list is not empty");
///
/// let mut found = outcome.words().unwrap().to_vec();
/// found.sort();
/// assert_eq!(found, ["cat", "catalog"]);
/// # Ok::<(), wordscan::WordscanError>(())
/// ```
pub struct SearchBuilder<'a, S> {
    words:           &'a [S],
    pattern:         PatternSpec,
    matcher:         Option<Box<dyn Matcher + 'a>>,
    threads:         Option<usize>,
    collect_matches: bool,
}

impl<'a, S> SearchBuilder<'a, S>
where
    S: AsRef<str> + Sync,
{
    pub(crate) fn new(words: &'a [S]) -> Self {
        Self {
            words,
            pattern:         PatternSpec::default(),
            matcher:         None,
            threads:         None,
            collect_matches: true,
        }
    }

    // ── Matcher ───────────────────────────────────────────────────────────

    /// The literal pattern to look for. Empty (the default) matches every word.
    ///
    /// Metacharacters such as `.` or `*` are matched literally.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern.pattern = pattern.into();
        self
    }

    /// Match regardless of letter case. Off by default.
    pub fn ignore_case(mut self, yes: bool) -> Self {
        self.pattern.ignore_case = yes;
        self
    }

    /// Set a custom matcher, replacing the compiled pattern.
    ///
    /// Any type implementing [`Matcher`] is accepted. When set,
    /// `.pattern()` and `.ignore_case()` are ignored.
    pub fn with_matcher(mut self, m: impl Matcher + 'a) -> Self {
        self.matcher = Some(Box::new(m));
        self
    }

    // ── Options ───────────────────────────────────────────────────────────

    /// Collect matched words into the outcome. Enabled by default.
    pub fn collect_matches(mut self, yes: bool) -> Self {
        self.collect_matches = yes;
        self
    }

    /// Report only the number of matches. Inverse of `.collect_matches()`.
    pub fn count_only(mut self, yes: bool) -> Self {
        self.collect_matches = !yes;
        self
    }

    /// Number of workers to split the scan across.
    ///
    /// Defaults to the available parallelism, at most 8. Values larger than
    /// the word count are clamped to it. `0` is rejected by `run()`.
    pub fn threads(mut self, n: usize) -> Self {
        self.threads = Some(n);
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Execute the search.
    ///
    /// Returns `Ok(None)` for an empty word list. Blocks until every worker
    /// has finished.
    ///
    /// # Errors
    ///
    /// [`WordscanError::InvalidWorkerCount`] for a zero override, raised
    /// before any worker starts. [`WordscanError::WorkerFailure`] if any
    /// worker panicked; no partial result is returned.
    pub fn run(self) -> Result<Option<Outcome>, WordscanError> {
        if self.words.is_empty() {
            debug!("empty word list, nothing to search");
            return Ok(None);
        }

        let workers = resolve_workers(self.threads, self.words.len())?;

        let compiled;
        let matcher: &dyn Matcher = match &self.matcher {
            Some(m) => m.as_ref(),
            None    => {
                compiled = self.pattern.compile();
                debug!(expression = compiled.expression(), "compiled pattern");
                &compiled
            }
        };

        run(EngineOptions {
            words: self.words,
            matcher,
            workers,
            collect: self.collect_matches,
        })
        .map(Some)
    }
}
