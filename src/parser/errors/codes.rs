//! Error codes for parser diagnostics
//!
//! Codes follow `E{category}{number}`:
//! - E01xx: token stream errors (premature end, trailing tokens)
//! - E02xx: missing leaf errors (tokens, identifiers, delimiters)
//! - E03xx: incomplete composite errors (sequences, iterations, names)

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Token stream errors
    // =========================================================================
    /// Input ended while a required element was still expected
    E0102,
    /// Tokens left over after the root rule matched
    E0103,

    // =========================================================================
    // E02xx: Missing leaf errors
    // =========================================================================
    /// Expected a specific token
    E0201,
    /// Expected an identifier
    E0202,
    /// Missing closing delimiter of a wrapper
    E0203,

    // =========================================================================
    // E03xx: Incomplete composite errors
    // =========================================================================
    /// Required element of a sequence is missing
    E0301,
    /// Missing element after an iteration separator
    E0302,
    /// Qualified name ends in a separator or misses a part
    E0303,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0102 => "E0102",
            Self::E0103 => "E0103",
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0203 => "E0203",
            Self::E0301 => "E0301",
            Self::E0302 => "E0302",
            Self::E0303 => "E0303",
        }
    }

    /// Delimiter-related codes keep their own code at end of input instead
    /// of collapsing into E0102
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::E0203 | Self::E0302 | Self::E0303)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
