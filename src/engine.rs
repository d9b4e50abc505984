use std::any::Any;
use std::thread;
use std::time::Instant;

use tracing::{debug, trace};

use crate::error::WordscanError;
use crate::partition::{partition, Chunk};
use crate::results::{Outcome, ScanStats};
use crate::sink::ResultSink;
use crate::traits::Matcher;

/// Upper bound on the default worker count. An explicit override may exceed it.
pub const MAX_DEFAULT_WORKERS: usize = 8;

// ---------------------------------------------------------------------------
// Worker count
// ---------------------------------------------------------------------------

/// The worker count used when the caller does not override it:
/// available parallelism capped at [`MAX_DEFAULT_WORKERS`].
pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
        .min(MAX_DEFAULT_WORKERS)
}

/// Resolve the number of workers for a list of `len` words.
///
/// An override of `0` is rejected. The result never exceeds `len`, so every
/// worker receives at least one word.
pub fn resolve_workers(requested: Option<usize>, len: usize) -> Result<usize, WordscanError> {
    let workers = match requested {
        Some(0) => return Err(WordscanError::InvalidWorkerCount(0)),
        Some(n) => n,
        None    => default_workers(),
    };
    Ok(workers.min(len).max(1))
}

// ---------------------------------------------------------------------------
// Engine options
// ---------------------------------------------------------------------------

/// Internal options passed from the builder to `run()`.
pub(crate) struct EngineOptions<'a, S> {
    pub words:   &'a [S],
    pub matcher: &'a dyn Matcher,
    pub workers: usize,
    pub collect: bool,
}

// ---------------------------------------------------------------------------
// run()
// ---------------------------------------------------------------------------

/// Scan `words` with one scoped thread per chunk and aggregate the results.
///
/// Every spawned worker is joined before this returns, on success and on
/// failure. If any worker panics (or cannot be spawned) the whole search
/// fails and partial results are dropped.
///
/// The caller guarantees `words` is non-empty and `workers` is resolved.
pub(crate) fn run<S>(opts: EngineOptions<'_, S>) -> Result<Outcome, WordscanError>
where
    S: AsRef<str> + Sync,
{
    let EngineOptions { words, matcher, workers, collect } = opts;

    let chunks = partition(words.len(), workers);
    debug!(words = words.len(), workers = chunks.len(), collect, "partitioned word list");

    let sink = ResultSink::new(collect);
    let start = Instant::now();

    let failure = thread::scope(|scope| {
        let mut handles = Vec::with_capacity(chunks.len());
        let mut failure = None;

        for (worker, &chunk) in chunks.iter().enumerate() {
            let sink = &sink;
            let spawned = thread::Builder::new()
                .name(format!("wordscan-{worker}"))
                .spawn_scoped(scope, move || scan_chunk(worker, words, matcher, chunk, sink));

            match spawned {
                Ok(handle) => handles.push((worker, handle)),
                Err(e) => {
                    failure = Some(WordscanError::WorkerFailure {
                        worker,
                        reason: format!("could not spawn worker: {e}"),
                    });
                    break;
                }
            }
        }

        // Join everything explicitly; an unjoined panicked thread would make
        // the scope itself panic.
        for (worker, handle) in handles {
            if let Err(payload) = handle.join() {
                failure.get_or_insert(WordscanError::WorkerFailure {
                    worker,
                    reason: panic_reason(payload.as_ref()),
                });
            }
        }

        failure
    });

    let elapsed = start.elapsed();

    if let Some(err) = failure {
        return Err(err);
    }

    let matches = sink.finish();
    debug!(elapsed_us = elapsed.as_micros() as u64, "all workers joined");

    Ok(Outcome {
        elapsed,
        matches,
        stats: ScanStats::compute(words.len(), chunks.len(), elapsed),
    })
}

// ---------------------------------------------------------------------------
// Worker
// ---------------------------------------------------------------------------

/// Test every word in `chunk`. No shared state is touched during the scan
/// except the atomic counter in count-only mode.
fn scan_chunk<S>(worker: usize, words: &[S], matcher: &dyn Matcher, chunk: Chunk, sink: &ResultSink)
where
    S: AsRef<str>,
{
    let mut local = Vec::new();

    for word in &words[chunk.range()] {
        let word = word.as_ref();
        if matcher.is_match(word) {
            sink.record(word, &mut local);
        }
    }

    trace!(worker, start = chunk.start, len = chunk.len(), buffered = local.len(), "chunk scanned");

    if sink.buffers() {
        sink.merge(local);
    }
}

fn panic_reason(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "worker panicked".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::PatternSpec;
    use crate::results::Matches;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn rejects_zero_override() {
        assert!(matches!(
            resolve_workers(Some(0), 10),
            Err(WordscanError::InvalidWorkerCount(0))
        ));
    }

    #[test]
    fn clamps_override_to_word_count() {
        assert_eq!(resolve_workers(Some(64), 5).unwrap(), 5);
        assert_eq!(resolve_workers(Some(2), 5).unwrap(), 2);
    }

    #[test]
    fn default_is_bounded() {
        let n = resolve_workers(None, 1_000).unwrap();
        assert!((1..=MAX_DEFAULT_WORKERS).contains(&n));
        assert_eq!(resolve_workers(None, 1).unwrap(), 1);
    }

    #[test]
    fn counts_across_workers() {
        let list = words(&["cat", "dog", "catalog", "doghouse", "bobcat"]);
        let matcher = PatternSpec::new("cat", false).compile();
        let outcome = run(EngineOptions {
            words:   &list,
            matcher: &matcher,
            workers: 3,
            collect: false,
        })
        .unwrap();

        assert_eq!(outcome.matches, Matches::Count(3));
        assert_eq!(outcome.stats.workers, 3);
        assert_eq!(outcome.stats.words, 5);
    }

    #[test]
    fn panicking_worker_fails_search() {
        struct Explodes;
        impl Matcher for Explodes {
            fn is_match(&self, word: &str) -> bool {
                if word == "boom" {
                    panic!("matcher exploded");
                }
                true
            }
        }

        let list = words(&["a", "b", "boom", "c"]);
        let err = run(EngineOptions {
            words:   &list,
            matcher: &Explodes,
            workers: 4,
            collect: true,
        })
        .unwrap_err();

        match err {
            WordscanError::WorkerFailure { worker, reason } => {
                assert_eq!(worker, 2);
                assert_eq!(reason, "matcher exploded");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
