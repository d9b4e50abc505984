//! Literal pattern compilation.
//!
//! A pattern is always a literal string. It compiles into an alternation of
//! [`MatchStyle`]s (exact, suffix, prefix, contains) and a word matches
//! when any style accepts it. Since `Contains` accepts everything the other
//! three do, the default alternation behaves as plain substring containment.

use crate::traits::Matcher;

/// Characters that carry meaning in a wildcard expression. They are escaped
/// when the alternation is rendered so the pattern stays literal.
pub const METACHARACTERS: &str = "^$.*+?()[]{}|\\";

/// The raw input to the compiler.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PatternSpec {
    pub pattern: String,
    pub ignore_case: bool,
}

impl PatternSpec {
    pub fn new(pattern: impl Into<String>, ignore_case: bool) -> Self {
        Self {
            pattern: pattern.into(),
            ignore_case,
        }
    }

    /// Compile into a matcher using the full four-way alternation.
    pub fn compile(&self) -> CompiledPattern {
        CompiledPattern::new(self)
    }
}

/// One arm of the alternation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStyle {
    /// The word equals the pattern.
    Exact,
    /// The word ends with the pattern.
    Suffix,
    /// The word starts with the pattern.
    Prefix,
    /// The pattern occurs anywhere in the word.
    Contains,
}

impl MatchStyle {
    /// Default alternation order.
    pub const ALL: [MatchStyle; 4] = [
        MatchStyle::Exact,
        MatchStyle::Suffix,
        MatchStyle::Prefix,
        MatchStyle::Contains,
    ];

    /// Test `word` against `needle`. Both must already be case-folded.
    pub fn test(self, word: &str, needle: &str) -> bool {
        match self {
            Self::Exact    => word == needle,
            Self::Suffix   => word.ends_with(needle),
            Self::Prefix   => word.starts_with(needle),
            Self::Contains => word.contains(needle),
        }
    }

    /// Render this arm as an anchored expression around an escaped literal.
    fn expression(self, escaped: &str) -> String {
        match self {
            Self::Exact    => format!("^{escaped}$"),
            Self::Suffix   => format!("^.*{escaped}$"),
            Self::Prefix   => format!("^{escaped}.*$"),
            Self::Contains => format!("^.*{escaped}.*$"),
        }
    }
}

/// Escape every metacharacter in `pattern` with a backslash.
pub fn escape_literal(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    for c in pattern.chars() {
        if METACHARACTERS.contains(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Lower-case `s` one character at a time.
///
/// Unlike `str::to_lowercase`, this ignores context, so a capital sigma folds
/// to `σ` whether or not it ends a word and the needle and words always agree.
pub fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// An immutable, compiled literal pattern.
///
/// Compiled once per search and shared read-only by every worker.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    needle:      String,
    ignore_case: bool,
    styles:      Vec<MatchStyle>,
    expression:  String,
}

impl CompiledPattern {
    pub fn new(spec: &PatternSpec) -> Self {
        Self::with_styles(spec, &MatchStyle::ALL)
    }

    /// Compile with a custom alternation. An empty `styles` slice matches
    /// nothing.
    pub fn with_styles(spec: &PatternSpec, styles: &[MatchStyle]) -> Self {
        let needle = if spec.ignore_case {
            fold_case(&spec.pattern)
        } else {
            spec.pattern.clone()
        };

        let escaped = escape_literal(&spec.pattern);
        let expression = styles
            .iter()
            .map(|s| s.expression(&escaped))
            .collect::<Vec<_>>()
            .join("|");

        Self {
            needle,
            ignore_case: spec.ignore_case,
            styles: styles.to_vec(),
            expression,
        }
    }

    /// The textual alternation this pattern is equivalent to, with the
    /// literal escaped. Diagnostic only; matching never parses it.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn styles(&self) -> &[MatchStyle] {
        &self.styles
    }

    pub fn ignore_case(&self) -> bool {
        self.ignore_case
    }
}

impl Matcher for CompiledPattern {
    fn is_match(&self, word: &str) -> bool {
        if self.ignore_case {
            let folded = fold_case(word);
            self.styles.iter().any(|s| s.test(&folded, &self.needle))
        } else {
            self.styles.iter().any(|s| s.test(word, &self.needle))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(pattern: &str, ignore_case: bool, word: &str) -> bool {
        PatternSpec::new(pattern, ignore_case).compile().is_match(word)
    }

    #[test]
    fn behaves_as_substring_containment() {
        let words = ["apple", "banana", "app", "application", "snapple"];
        let hits: Vec<_> = words.iter().filter(|w| matches("app", false, w)).collect();
        assert_eq!(hits, [&"apple", &"app", &"application", &"snapple"]);
    }

    #[test]
    fn case_sensitivity_flag() {
        assert!(matches("apple", true, "Apple"));
        assert!(!matches("apple", false, "Apple"));
        assert!(matches("APP", true, "snapple"));
    }

    #[test]
    fn ignore_case_never_loses_a_case_sensitive_match() {
        // Word-final capital sigma must fold the same way as a lone one.
        assert!(matches("Σ", false, "ΟΔΟΣ"));
        assert!(matches("Σ", true, "ΟΔΟΣ"));
        assert!(matches("σ", true, "ΟΔΟΣ"));
        assert!(matches("οδοσ", true, "ΟΔΟΣ"));
        assert_eq!(fold_case("ΟΔΟΣ"), "οδοσ");
    }

    #[test]
    fn empty_pattern_matches_everything() {
        assert!(matches("", false, "anything"));
        assert!(matches("", false, ""));
        assert!(matches("", true, "MiXeD"));
    }

    #[test]
    fn metacharacters_are_literal() {
        assert!(!matches("a.c", false, "abc"));
        assert!(matches("a.c", false, "xa.cx"));
        assert!(!matches(".*", false, "anything"));
        assert!(matches("(x)", false, "f(x)"));
    }

    #[test]
    fn escape_covers_every_metacharacter() {
        assert_eq!(escape_literal("a.b"), "a\\.b");
        assert_eq!(escape_literal("plain"), "plain");
        let escaped = escape_literal(METACHARACTERS);
        assert_eq!(escaped.len(), METACHARACTERS.len() * 2);
    }

    #[test]
    fn expression_renders_four_way_alternation() {
        let compiled = PatternSpec::new("a+", false).compile();
        assert_eq!(
            compiled.expression(),
            "^a\\+$|^.*a\\+$|^a\\+.*$|^.*a\\+.*$"
        );
        assert_eq!(compiled.styles(), &MatchStyle::ALL);
    }

    #[test]
    fn narrower_styles_diverge() {
        let spec = PatternSpec::new("cat", false);
        let prefix = CompiledPattern::with_styles(&spec, &[MatchStyle::Prefix]);
        assert!(prefix.is_match("catalog"));
        assert!(!prefix.is_match("bobcat"));

        let exact = CompiledPattern::with_styles(&spec, &[MatchStyle::Exact]);
        assert!(exact.is_match("cat"));
        assert!(!exact.is_match("cats"));

        let none = CompiledPattern::with_styles(&spec, &[]);
        assert!(!none.is_match("cat"));
    }
}
