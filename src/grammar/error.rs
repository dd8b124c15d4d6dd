//! Grammar definition errors.
//!
//! Any of these is fatal at load time: a bundle is only ever handed out once
//! every rule resolved and validated.

use thiserror::Error;

use crate::base::Name;

/// Errors raised while building token bundles or grammar bundles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    /// A token type name was referenced that the dialect does not declare.
    #[error("Unknown token type: {0}")]
    UnknownTokenType(Name),

    /// The same token type name was declared twice.
    #[error("Duplicate token type: {0}")]
    DuplicateTokenType(Name),

    /// The same rule name was declared twice.
    #[error("Duplicate rule: {0}")]
    DuplicateRule(Name),

    /// A rule or token name is not a valid identifier.
    #[error("Invalid {kind} name: {name:?}")]
    InvalidName { kind: &'static str, name: Name },

    /// A rule references another rule that does not exist.
    #[error("Unresolved reference to rule '{reference}' in rule '{rule}'")]
    UnresolvedReference { rule: Name, reference: Name },

    /// A composite element was declared without children.
    #[error("Empty {kind} in rule '{rule}'")]
    Empty { kind: &'static str, rule: Name },

    /// An element is structurally malformed.
    #[error("Invalid element in rule '{rule}': {message}")]
    InvalidElement { rule: Name, message: String },

    /// A rule can reach itself again without consuming a token.
    #[error("Rule '{rule}' is left-recursive through '{via}'")]
    LeftRecursion { rule: Name, via: Name },

    /// The declared root rule does not exist.
    #[error("Unknown root rule: {0}")]
    UnknownRoot(Name),

    /// The grammar declares no rules at all.
    #[error("Grammar '{0}' declares no rules")]
    NoRules(Name),
}

impl GrammarError {
    /// Create an invalid element error.
    pub fn invalid(rule: impl Into<Name>, message: impl Into<String>) -> Self {
        Self::InvalidElement {
            rule: rule.into(),
            message: message.into(),
        }
    }
}
