//! Declarative element definitions
//!
//! An external loader (or a test) describes rules as [`ElementDef`] trees
//! that mention tokens and other rules by name. [`GrammarBuilder`] lowers
//! them into the element arena and resolves every name.
//!
//! ```ignore
//! use sqlgrammar::grammar::ElementDef as E;
//!
//! let select = E::sequence([
//!     E::token("KW_SELECT").into(),
//!     E::iteration(E::identifier(), Some("CHR_COMMA")).into(),
//!     E::rule("from_clause").optional(),
//! ]);
//! ```
//!
//! [`GrammarBuilder`]: super::GrammarBuilder

use super::element::IdentifierKind;
use crate::base::Name;
use crate::token::TokenTypeCategory;

/// A child definition with its slot attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildDef {
    pub def: ElementDef,
    pub optional: bool,
    pub version: u32,
}

impl ChildDef {
    /// Only active from the given dialect language version on
    pub fn since(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

impl From<ElementDef> for ChildDef {
    fn from(def: ElementDef) -> Self {
        Self {
            def,
            optional: false,
            version: 0,
        }
    }
}

/// Definition of one grammar element, referring to tokens and rules by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementDef {
    Token {
        token: Name,
        text: Option<Name>,
        flavor: Option<TokenTypeCategory>,
    },
    Identifier {
        kind: IdentifierKind,
        alias: bool,
        object_type: Option<Name>,
    },
    Sequence(Vec<ChildDef>),
    Wrapper {
        begin: Name,
        content: Box<ChildDef>,
        end: Name,
        repeated: bool,
    },
    OneOf {
        children: Vec<ChildDef>,
        sortable: bool,
    },
    Iteration {
        iterated: Box<ElementDef>,
        separator: Option<Name>,
    },
    QualifiedIdentifier {
        variants: Vec<Vec<ElementDef>>,
        separator: Name,
    },
    Reference(Name),
}

impl ElementDef {
    pub fn token(token: impl Into<Name>) -> Self {
        Self::Token {
            token: token.into(),
            text: None,
            flavor: None,
        }
    }

    /// Token element restricted to a specific text, e.g. a non-reserved word
    /// lexed as a plain identifier
    pub fn token_text(token: impl Into<Name>, text: &str) -> Self {
        Self::Token {
            token: token.into(),
            text: Some(Name::new(text)),
            flavor: None,
        }
    }

    /// Token element whose category is overridden in this position
    pub fn token_flavored(token: impl Into<Name>, flavor: TokenTypeCategory) -> Self {
        Self::Token {
            token: token.into(),
            text: None,
            flavor: Some(flavor),
        }
    }

    /// Identifier referring to an existing object
    pub fn identifier() -> Self {
        Self::Identifier {
            kind: IdentifierKind::Reference,
            alias: false,
            object_type: None,
        }
    }

    /// Identifier introducing a new object of the given type
    pub fn definition(object_type: &str) -> Self {
        Self::Identifier {
            kind: IdentifierKind::Definition,
            alias: false,
            object_type: Some(Name::new(object_type)),
        }
    }

    /// Identifier introducing an alias
    pub fn alias() -> Self {
        Self::Identifier {
            kind: IdentifierKind::Definition,
            alias: true,
            object_type: None,
        }
    }

    pub fn sequence<I, C>(children: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<ChildDef>,
    {
        Self::Sequence(children.into_iter().map(Into::into).collect())
    }

    pub fn wrapper(begin: impl Into<Name>, content: impl Into<ChildDef>, end: impl Into<Name>) -> Self {
        Self::Wrapper {
            begin: begin.into(),
            content: Box::new(content.into()),
            end: end.into(),
            repeated: false,
        }
    }

    /// Allow any number of `begin` tokens around this element, each closed
    /// by its own `end`: `x`, `(x)` and `((x))` all match
    pub fn wrapped(self, begin: impl Into<Name>, end: impl Into<Name>) -> Self {
        Self::Wrapper {
            begin: begin.into(),
            content: Box::new(self.into()),
            end: end.into(),
            repeated: true,
        }
    }

    pub fn one_of<I, C>(children: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<ChildDef>,
    {
        Self::OneOf {
            children: children.into_iter().map(Into::into).collect(),
            sortable: false,
        }
    }

    /// Mark a one-of as sortable (no-op on other variants)
    pub fn sortable(self) -> Self {
        match self {
            Self::OneOf { children, .. } => Self::OneOf {
                children,
                sortable: true,
            },
            other => other,
        }
    }

    pub fn iteration(iterated: ElementDef, separator: Option<&str>) -> Self {
        Self::Iteration {
            iterated: Box::new(iterated),
            separator: separator.map(Name::new),
        }
    }

    pub fn qualified<I>(variants: I, separator: &str) -> Self
    where
        I: IntoIterator<Item = Vec<ElementDef>>,
    {
        Self::QualifiedIdentifier {
            variants: variants.into_iter().collect(),
            separator: Name::new(separator),
        }
    }

    /// Reference to a named rule
    pub fn rule(name: impl Into<Name>) -> Self {
        Self::Reference(name.into())
    }

    /// Wrap into an optional child slot
    pub fn optional(self) -> ChildDef {
        ChildDef::from(self).optional()
    }

    /// Wrap into a child slot active from `version` on
    pub fn since(self, version: u32) -> ChildDef {
        ChildDef::from(self).since(version)
    }
}
