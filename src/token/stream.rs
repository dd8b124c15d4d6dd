//! Tokens as handed over by the external tokenizer.

use text_size::{TextRange, TextSize};

use crate::base::TokenTypeId;

/// A token with its type, text, and position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenTypeId,
    pub text: &'a str,
    pub offset: TextSize,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenTypeId, text: &'a str, offset: TextSize) -> Self {
        Self { kind, text, offset }
    }

    /// Source range covered by this token
    pub fn range(&self) -> TextRange {
        TextRange::at(self.offset, TextSize::of(self.text))
    }
}
