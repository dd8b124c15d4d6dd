//! Per-dialect token type registry.

use std::sync::Arc;

use indexmap::IndexMap;

use super::token_type::{TokenType, TokenTypeCategory};
use super::{CHR_COMMA, CHR_DOT, CHR_LEFT_PARENTHESIS, CHR_RIGHT_PARENTHESIS};
use crate::base::{Name, TokenTypeId, is_valid_name};
use crate::grammar::GrammarError;

/// Token types every SQL dialect shares and the parsers consult directly
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SharedTokenTypes {
    pub left_parenthesis: Option<TokenTypeId>,
    pub right_parenthesis: Option<TokenTypeId>,
    pub dot: Option<TokenTypeId>,
    pub comma: Option<TokenTypeId>,
}

/// All token types of one dialect, indexed by [`TokenTypeId`].
#[derive(Debug)]
pub struct TokenTypeBundle {
    dialect: Name,
    types: Vec<TokenType>,
    by_name: IndexMap<Name, TokenTypeId>,
    shared: SharedTokenTypes,
}

impl TokenTypeBundle {
    pub fn builder(dialect: impl Into<Name>) -> TokenTypeBundleBuilder {
        TokenTypeBundleBuilder::new(dialect)
    }

    pub fn dialect(&self) -> &Name {
        &self.dialect
    }

    /// Get a token type by id.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this bundle.
    pub fn get(&self, id: TokenTypeId) -> &TokenType {
        &self.types[id.index()]
    }

    /// Look up a token type id by name
    pub fn lookup(&self, name: &str) -> Option<TokenTypeId> {
        self.by_name.get(name).copied()
    }

    /// Look up a token type id by name, failing with a definition error
    pub fn resolve(&self, name: &str) -> Result<TokenTypeId, GrammarError> {
        self.lookup(name)
            .ok_or_else(|| GrammarError::UnknownTokenType(Name::new(name)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &TokenType> {
        self.types.iter()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn shared(&self) -> &SharedTokenTypes {
        &self.shared
    }

    /// Every token type of the identifier category
    pub fn identifier_tokens(&self) -> impl Iterator<Item = TokenTypeId> + '_ {
        self.types
            .iter()
            .filter(|t| t.is_identifier())
            .map(TokenType::id)
    }

    /// Every reserved word that may be read as an identifier
    pub fn suppressible_tokens(&self) -> impl Iterator<Item = TokenTypeId> + '_ {
        self.types
            .iter()
            .filter(|t| t.is_suppressible_reserved_word())
            .map(TokenType::id)
    }
}

/// Builder collecting token type declarations for a dialect
#[derive(Debug)]
pub struct TokenTypeBundleBuilder {
    dialect: Name,
    declared: Vec<(Name, Option<Name>, TokenTypeCategory, bool)>,
}

impl TokenTypeBundleBuilder {
    pub fn new(dialect: impl Into<Name>) -> Self {
        Self {
            dialect: dialect.into(),
            declared: Vec::new(),
        }
    }

    /// Declare a token type of any category
    pub fn token(
        mut self,
        name: impl Into<Name>,
        value: Option<&str>,
        category: TokenTypeCategory,
    ) -> Self {
        self.declared
            .push((name.into(), value.map(Name::new), category, false));
        self
    }

    /// Declare a reserved keyword
    pub fn keyword(self, name: impl Into<Name>, value: &str) -> Self {
        self.token(name, Some(value), TokenTypeCategory::Keyword)
    }

    /// Declare a reserved word that may double as an identifier
    pub fn suppressible(
        mut self,
        name: impl Into<Name>,
        value: &str,
        category: TokenTypeCategory,
    ) -> Self {
        self.declared
            .push((name.into(), Some(Name::new(value)), category, true));
        self
    }

    /// Declare a single-character token
    pub fn character(self, name: impl Into<Name>, value: &str) -> Self {
        self.token(name, Some(value), TokenTypeCategory::Character)
    }

    pub fn build(self) -> Result<Arc<TokenTypeBundle>, GrammarError> {
        let mut types = Vec::with_capacity(self.declared.len());
        let mut by_name = IndexMap::with_capacity(self.declared.len());

        for (index, (name, value, category, suppressible)) in
            self.declared.into_iter().enumerate()
        {
            if !is_valid_name(&name) {
                return Err(GrammarError::InvalidName {
                    kind: "token type",
                    name,
                });
            }
            let id = TokenTypeId::new(index);
            if by_name.insert(name.clone(), id).is_some() {
                return Err(GrammarError::DuplicateTokenType(name));
            }
            types.push(TokenType {
                id,
                name,
                value,
                category,
                suppressible,
            });
        }

        let shared = SharedTokenTypes {
            left_parenthesis: by_name.get(CHR_LEFT_PARENTHESIS).copied(),
            right_parenthesis: by_name.get(CHR_RIGHT_PARENTHESIS).copied(),
            dot: by_name.get(CHR_DOT).copied(),
            comma: by_name.get(CHR_COMMA).copied(),
        };

        tracing::debug!(
            dialect = %self.dialect,
            token_types = types.len(),
            "built token type bundle"
        );

        Ok(Arc::new(TokenTypeBundle {
            dialect: self.dialect,
            types,
            by_name,
            shared,
        }))
    }
}
