//! # wordscan
//!
//! Parallel pattern search over an in-memory word list.
//!
//! wordscan splits a word list into contiguous chunks, scans each chunk on
//! its own worker thread, and aggregates the matches. It either collects the
//! matching words or only counts them. Patterns are always literal; the
//! default matcher accepts any word that contains the pattern.
//!
//! # Quick Start
//!
//! ```rust
//! let words = ["apple", "banana", "app", "application", "snapple"];
//!
//! let outcome = wordscan::search(&words)
//!     .pattern("APP")
//!     .ignore_case(true)
//!     .count_only(true)
//!     .run()
//!     .unwrap()
//!     .expect("word list is not empty");
//!
//! assert_eq!(outcome.match_count(), 4);
//! println!("Found {} matches in {:.3}ms",
//!     outcome.match_count(),
//!     outcome.elapsed.as_secs_f64() * 1000.0,
//! );
//! ```
//!
//! An empty word list produces no outcome at all rather than zero matches:
//!
//! ```rust
//! let words: Vec<String> = Vec::new();
//! assert!(wordscan::search(&words).pattern("x").run().unwrap().is_none());
//! ```
//!
//! # Custom Matchers
//!
//! Implement [`Matcher`] for matching logic beyond a literal pattern:
//!
//! ```rust
//! use wordscan::Matcher;
//!
//! struct Palindrome;
//!
//! impl Matcher for Palindrome {
//!     fn is_match(&self, word: &str) -> bool {
//!         word.chars().eq(word.chars().rev())
//!     }
//! }
//!
//! let words = ["level", "lever", "noon"];
//! let outcome = wordscan::search(&words)
//!     .with_matcher(Palindrome)
//!     .count_only(true)
//!     .run()
//!     .unwrap()
//!     .unwrap();
//!
//! assert_eq!(outcome.match_count(), 2);
//! ```

#![forbid(unsafe_code)]

pub mod bench_log;
pub mod engine;
pub mod pattern;
pub mod wordlist;

mod builder;
mod error;
mod partition;
mod results;
mod sink;
mod traits;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::SearchBuilder;
pub use error::WordscanError;
pub use partition::{partition, Chunk};
pub use pattern::{CompiledPattern, MatchStyle, PatternSpec};
pub use results::{Matches, Outcome, ScanStats};
pub use traits::Matcher;

// ── Entry point ───────────────────────────────────────────────────────────────

/// Create a new [`SearchBuilder`] over `words`.
///
/// The list is borrowed read-only for the duration of the search and is
/// never modified.
///
/// # Example
///
/// ```rust
/// let words = vec!["cat".to_string(), "dog".to_string(), "catalog".to_string()];
///
/// let outcome = wordscan::search(&words)
///     .pattern("cat")
///     .count_only(true)
///     .run()
///     .unwrap()
///     .unwrap();
///
/// assert_eq!(outcome.match_count(), 2);
/// ```
pub fn search<S>(words: &[S]) -> SearchBuilder<'_, S>
where
    S: AsRef<str> + Sync,
{
    SearchBuilder::new(words)
}
