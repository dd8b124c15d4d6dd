//! Syntax error types
//!
//! A [`SyntaxError`] marks where a committed partial match stopped: what was
//! expected, what was found, an optional hint and related locations such as
//! the opening token of an unclosed wrapper.

use crate::base::TextRange;

use super::codes::ErrorCode;

/// A secondary location attached to an error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub message: String,
    pub range: TextRange,
}

impl RelatedInfo {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

/// A syntax error anchored in the token stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// "expected X, found Y"
    pub message: String,
    /// Range of the offending token, empty at end of input
    pub range: TextRange,
    pub code: ErrorCode,
    /// Suggestion for fixing the error
    pub hint: Option<String>,
    /// Related source locations
    pub related: Vec<RelatedInfo>,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, range: TextRange, code: ErrorCode) -> Self {
        Self {
            message: message.into(),
            range,
            code,
            hint: None,
            related: Vec::new(),
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
