/// Determines whether a word is a match.
///
/// Implement this to plug in matching logic beyond the built-in literal
/// pattern: anagram checks, length filters, dictionary lookups, anything
/// that can answer yes or no for a single word.
///
/// # Thread Safety
///
/// `Send + Sync` are required. One matcher is shared read-only by every
/// worker and called concurrently on different words.
///
/// # Example
///
/// ```rust
/// use wordscan::Matcher;
///
/// struct MinLength(usize);
///
/// impl Matcher for MinLength {
///     fn is_match(&self, word: &str) -> bool {
///         word.chars().count() >= self.0
///     }
/// }
///
/// assert!(MinLength(3).is_match("cat"));
/// assert!(!MinLength(4).is_match("cat"));
/// ```
pub trait Matcher: Send + Sync {
    /// Returns `true` if this word should be included in results.
    fn is_match(&self, word: &str) -> bool;
}
