//! Per-parse configuration.

use crate::base::Name;

/// Default recursion guard for [`ParserOptions::max_depth`]
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Settings for one parse invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    /// Dialect language version; children declared for a later version are
    /// skipped
    pub language_version: u32,
    /// Speculative scan mode in one-of elements: keep the best partial
    /// alternative instead of giving up
    pub recovery: bool,
    /// Maximum element nesting before the parse is aborted
    pub max_depth: usize,
    /// Text of the completion placeholder token, which matches any token or
    /// identifier element
    pub placeholder: Option<Name>,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            language_version: u32::MAX,
            recovery: true,
            max_depth: DEFAULT_MAX_DEPTH,
            placeholder: None,
        }
    }
}

impl ParserOptions {
    pub fn with_language_version(mut self, version: u32) -> Self {
        self.language_version = version;
        self
    }

    pub fn with_recovery(mut self, recovery: bool) -> Self {
        self.recovery = recovery;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<Name>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }
}
