//! Arena indices.
//!
//! Grammar elements and token types are stored in flat vectors owned by their
//! bundles. Everything else refers to them through these `Copy` indices, which
//! is what lets mutually recursive rules exist without cyclic ownership.

use std::fmt;

/// Index of an element inside a [`GrammarBundle`](crate::grammar::GrammarBundle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(u32);

impl ElementId {
    pub fn new(index: usize) -> Self {
        Self(u32::try_from(index).expect("grammar element arena overflow"))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Index of a token type inside a [`TokenTypeBundle`](crate::token::TokenTypeBundle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenTypeId(u16);

impl TokenTypeId {
    pub fn new(index: usize) -> Self {
        Self(u16::try_from(index).expect("token type bundle overflow"))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TokenTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "token#{}", self.0)
    }
}
