//! Grammar elements
//!
//! The typed rule tree. Elements live in the bundle's arena and point at each
//! other by [`ElementId`]; a rule that mentions another rule holds a
//! [`ElementKind::Reference`] to it instead of owning it.

use std::fmt;
use std::sync::OnceLock;

use super::lookup::LookupCache;
use crate::base::{ElementId, Name, TokenTypeId};
use crate::token::TokenTypeCategory;

/// A child slot of a composite element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementRef {
    pub element: ElementId,
    pub optional: bool,
    /// Minimum dialect language version in which this child is active
    pub version: u32,
}

impl ElementRef {
    pub fn required(element: ElementId) -> Self {
        Self {
            element,
            optional: false,
            version: 0,
        }
    }
}

/// Whether an identifier introduces a name or refers to one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum IdentifierKind {
    #[default]
    Reference,
    Definition,
}

/// The variant payload of an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    /// Matches exactly one token type
    Token {
        token: TokenTypeId,
        /// Restricts the match to this (case-insensitive) text
        text: Option<Name>,
        /// Overrides the token's category in this position
        flavor: Option<TokenTypeCategory>,
    },
    /// Matches an identifier, or contextually a suppressible reserved word
    Identifier {
        kind: IdentifierKind,
        alias: bool,
        object_type: Option<Name>,
    },
    /// Children matched in order
    Sequence { children: Vec<ElementRef> },
    /// Content bracketed by begin/end tokens
    Wrapper {
        begin: ElementId,
        content: ElementRef,
        end: ElementId,
        /// Zero or more balanced pairs instead of exactly one
        repeated: bool,
    },
    /// Exactly one of the alternatives
    OneOf {
        children: Vec<ElementRef>,
        sortable: bool,
    },
    /// One or more repetitions, optionally separated
    Iteration {
        iterated: ElementId,
        separator: Option<ElementId>,
    },
    /// Dotted name; each variant is a list of name parts
    QualifiedIdentifier {
        variants: Vec<Vec<ElementId>>,
        separator: ElementId,
    },
    /// Indirection to a named rule
    Reference { target: ElementId },
}

impl ElementKind {
    /// Debug label used in logs and error messages
    pub fn label(&self) -> &'static str {
        match self {
            Self::Token { .. } => "token",
            Self::Identifier { .. } => "identifier",
            Self::Sequence { .. } => "sequence",
            Self::Wrapper { .. } => "wrapper",
            Self::OneOf { .. } => "one-of",
            Self::Iteration { .. } => "iteration",
            Self::QualifiedIdentifier { .. } => "qualified-identifier",
            Self::Reference { .. } => "reference",
        }
    }

    /// The kind of parse tree node this element produces, if any.
    ///
    /// One-of and reference elements are transparent: the tree only shows the
    /// alternative or rule that actually matched.
    pub fn node_kind(&self) -> Option<NodeKind> {
        match self {
            Self::Token { .. } => Some(NodeKind::Token),
            Self::Identifier { .. } => Some(NodeKind::Identifier),
            Self::Sequence { .. } => Some(NodeKind::Sequence),
            Self::Wrapper { .. } => Some(NodeKind::Wrapper),
            Self::Iteration { .. } => Some(NodeKind::Iteration),
            Self::QualifiedIdentifier { .. } => Some(NodeKind::QualifiedIdentifier),
            Self::OneOf { .. } | Self::Reference { .. } => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Token { .. } | Self::Identifier { .. })
    }
}

/// Kinds of nodes in the parse tree, mirroring the element that produced them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Token,
    Identifier,
    Sequence,
    Wrapper,
    Iteration,
    QualifiedIdentifier,
}

/// One node of the grammar.
///
/// Everything except the two lazy caches is fixed when the bundle is built.
#[derive(Debug)]
pub struct Element {
    pub(crate) id: ElementId,
    pub(crate) name: Name,
    pub(crate) rule: Option<Name>,
    pub(crate) kind: ElementKind,
    pub(crate) parent: Option<ElementId>,
    pub(crate) lookup: OnceLock<LookupCache>,
    pub(crate) sorted: OnceLock<Box<[ElementRef]>>,
}

impl Element {
    pub(crate) fn new(
        id: ElementId,
        name: Name,
        rule: Option<Name>,
        kind: ElementKind,
        parent: Option<ElementId>,
    ) -> Self {
        Self {
            id,
            name,
            rule,
            kind,
            parent,
            lookup: OnceLock::new(),
            sorted: OnceLock::new(),
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Stable name: the rule name for rule roots, `rule#n` otherwise
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The rule this element is the root of
    pub fn rule(&self) -> Option<&Name> {
        self.rule.as_ref()
    }

    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    /// Non-owning back-reference to the enclosing element
    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    pub fn is_identifier(&self) -> bool {
        matches!(self.kind, ElementKind::Identifier { .. })
    }

    /// Identifier in a definition position that is not an alias
    pub fn is_definition(&self) -> bool {
        matches!(
            self.kind,
            ElementKind::Identifier {
                kind: IdentifierKind::Definition,
                alias: false,
                ..
            }
        )
    }

    pub fn is_alias(&self) -> bool {
        matches!(self.kind, ElementKind::Identifier { alias: true, .. })
    }

    /// Whether the sorted order of a one-of has been computed yet
    pub fn is_sorted(&self) -> bool {
        self.sorted.get().is_some()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.kind.label(), self.name)
    }
}
