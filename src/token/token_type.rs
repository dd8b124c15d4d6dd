//! Token types and their static properties.

use std::fmt;

use crate::base::{Name, TokenTypeId};

/// Lexical category of a token type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenTypeCategory {
    Keyword,
    Function,
    Parameter,
    Datatype,
    Identifier,
    Operator,
    Character,
    Literal,
    Numeric,
    /// A block whose content is lexed lazily by another language
    Chameleon,
    Whitespace,
    Comment,
    Unknown,
}

impl TokenTypeCategory {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Function => "function",
            Self::Parameter => "parameter",
            Self::Datatype => "datatype",
            Self::Identifier => "identifier",
            Self::Operator => "operator",
            Self::Character => "character",
            Self::Literal => "literal",
            Self::Numeric => "numeric",
            Self::Chameleon => "chameleon",
            Self::Whitespace => "whitespace",
            Self::Comment => "comment",
            Self::Unknown => "unknown",
        }
    }

    /// Parse a category from its string representation
    pub fn from_name(name: &str) -> Option<Self> {
        let category = match name {
            "keyword" => Self::Keyword,
            "function" => Self::Function,
            "parameter" => Self::Parameter,
            "datatype" => Self::Datatype,
            "identifier" => Self::Identifier,
            "operator" => Self::Operator,
            "character" => Self::Character,
            "literal" => Self::Literal,
            "numeric" => Self::Numeric,
            "chameleon" => Self::Chameleon,
            "whitespace" => Self::Whitespace,
            "comment" => Self::Comment,
            "unknown" => Self::Unknown,
            _ => return None,
        };
        Some(category)
    }

    /// Keywords, functions, parameters and datatypes are reserved words
    pub fn is_reserved_word(&self) -> bool {
        matches!(
            self,
            Self::Keyword | Self::Function | Self::Parameter | Self::Datatype
        )
    }
}

impl fmt::Display for TokenTypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lexical category of one dialect.
///
/// Immutable once the owning bundle is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenType {
    pub(crate) id: TokenTypeId,
    pub(crate) name: Name,
    pub(crate) value: Option<Name>,
    pub(crate) category: TokenTypeCategory,
    pub(crate) suppressible: bool,
}

impl TokenType {
    pub fn id(&self) -> TokenTypeId {
        self.id
    }

    /// Stable id, e.g. `KW_SELECT` or `CHR_DOT`
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Source text for fixed tokens (`select`, `.`), `None` for open classes
    pub fn value(&self) -> Option<&Name> {
        self.value.as_ref()
    }

    pub fn category(&self) -> TokenTypeCategory {
        self.category
    }

    pub fn is_identifier(&self) -> bool {
        self.category == TokenTypeCategory::Identifier
    }

    pub fn is_keyword(&self) -> bool {
        self.category == TokenTypeCategory::Keyword
    }

    pub fn is_reserved_word(&self) -> bool {
        self.category.is_reserved_word()
    }

    /// A reserved word that may be read as an identifier in some positions
    pub fn is_suppressible_reserved_word(&self) -> bool {
        self.suppressible && self.is_reserved_word()
    }

    pub fn is_chameleon(&self) -> bool {
        self.category == TokenTypeCategory::Chameleon
    }

    pub fn is_function(&self) -> bool {
        self.category == TokenTypeCategory::Function
    }

    pub fn is_character(&self) -> bool {
        self.category == TokenTypeCategory::Character
    }

    /// Whitespace and comments
    pub fn is_trivia(&self) -> bool {
        matches!(
            self.category,
            TokenTypeCategory::Whitespace | TokenTypeCategory::Comment
        )
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} ({})", value, self.category),
            None => write!(f, "{} ({})", self.name, self.category),
        }
    }
}
