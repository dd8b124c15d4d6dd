//! Outcome of one element parser invocation.

use std::cmp::Ordering;
use std::fmt;

/// How much of an element matched, from worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParseResultType {
    NoMatch,
    PartialMatch,
    FullMatch,
}

impl ParseResultType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoMatch => "NO_MATCH",
            Self::PartialMatch => "PARTIAL_MATCH",
            Self::FullMatch => "FULL_MATCH",
        }
    }
}

/// Result type plus the number of (non-trivia) tokens consumed.
///
/// Ordered so that any full match beats any partial match, a partial match
/// with more tokens beats one with fewer, and no match is worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParseResult {
    kind: ParseResultType,
    matched_tokens: usize,
}

impl ParseResult {
    pub const fn no_match() -> Self {
        Self {
            kind: ParseResultType::NoMatch,
            matched_tokens: 0,
        }
    }

    pub const fn full(matched_tokens: usize) -> Self {
        Self {
            kind: ParseResultType::FullMatch,
            matched_tokens,
        }
    }

    pub const fn partial(matched_tokens: usize) -> Self {
        Self {
            kind: ParseResultType::PartialMatch,
            matched_tokens,
        }
    }

    pub fn kind(&self) -> ParseResultType {
        self.kind
    }

    pub fn matched_tokens(&self) -> usize {
        self.matched_tokens
    }

    /// Full or partial
    pub fn is_match(&self) -> bool {
        self.kind != ParseResultType::NoMatch
    }

    pub fn is_full(&self) -> bool {
        self.kind == ParseResultType::FullMatch
    }

    pub fn is_partial(&self) -> bool {
        self.kind == ParseResultType::PartialMatch
    }

    pub fn is_no_match(&self) -> bool {
        self.kind == ParseResultType::NoMatch
    }

    pub fn is_better_than(&self, other: &ParseResult) -> bool {
        self > other
    }
}

impl Default for ParseResult {
    fn default() -> Self {
        Self::no_match()
    }
}

impl Ord for ParseResult {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.kind, other.kind) {
            (ParseResultType::NoMatch, ParseResultType::NoMatch) => Ordering::Equal,
            (a, b) if a != b => a.cmp(&b),
            _ => self.matched_tokens.cmp(&other.matched_tokens),
        }
    }
}

impl PartialOrd for ParseResult {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ParseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} tokens)", self.kind.as_str(), self.matched_tokens)
    }
}
