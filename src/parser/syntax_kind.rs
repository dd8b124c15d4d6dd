//! Syntax kinds for the Rowan-based CST
//!
//! Grammar elements are dialect data, so the lossless tree only distinguishes
//! tokens by category and nodes by the element kind that produced them. The
//! element id of each node is kept on the typed [`ParseTree`](super::ParseTree).

use crate::grammar::NodeKind;
use crate::token::TokenTypeCategory;

/// All syntax kinds (tokens and nodes) of the SQL parse tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    WHITESPACE = 0,
    COMMENT,

    // =========================================================================
    // TOKENS (by token type category)
    // =========================================================================
    KEYWORD,
    FUNCTION,
    PARAMETER,
    DATATYPE,
    IDENT,
    OPERATOR,
    CHARACTER,
    LITERAL,
    NUMERIC,
    CHAMELEON,
    UNKNOWN,

    // =========================================================================
    // NODES (by element kind)
    // =========================================================================
    ROOT,
    TOKEN_NODE,
    IDENTIFIER_NODE,
    SEQUENCE,
    WRAPPER,
    ITERATION,
    QUALIFIED_IDENTIFIER,

    // Special
    ERROR,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::COMMENT)
    }

    /// Check if this is a node kind
    pub fn is_node(self) -> bool {
        (self as u16) >= (Self::ROOT as u16) && (self as u16) <= (Self::QUALIFIED_IDENTIFIER as u16)
    }

    /// Token kind for a token type category
    pub fn from_category(category: TokenTypeCategory) -> Self {
        match category {
            TokenTypeCategory::Keyword => Self::KEYWORD,
            TokenTypeCategory::Function => Self::FUNCTION,
            TokenTypeCategory::Parameter => Self::PARAMETER,
            TokenTypeCategory::Datatype => Self::DATATYPE,
            TokenTypeCategory::Identifier => Self::IDENT,
            TokenTypeCategory::Operator => Self::OPERATOR,
            TokenTypeCategory::Character => Self::CHARACTER,
            TokenTypeCategory::Literal => Self::LITERAL,
            TokenTypeCategory::Numeric => Self::NUMERIC,
            TokenTypeCategory::Chameleon => Self::CHAMELEON,
            TokenTypeCategory::Whitespace => Self::WHITESPACE,
            TokenTypeCategory::Comment => Self::COMMENT,
            TokenTypeCategory::Unknown => Self::UNKNOWN,
        }
    }
}

impl From<NodeKind> for SyntaxKind {
    fn from(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Token => Self::TOKEN_NODE,
            NodeKind::Identifier => Self::IDENTIFIER_NODE,
            NodeKind::Sequence => Self::SEQUENCE,
            NodeKind::Wrapper => Self::WRAPPER,
            NodeKind::Iteration => Self::ITERATION,
            NodeKind::QualifiedIdentifier => Self::QUALIFIED_IDENTIFIER,
        }
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SqlLanguage {}

impl rowan::Language for SqlLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<SqlLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<SqlLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<SqlLanguage>;
