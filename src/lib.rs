//! # sqlgrammar-base
//!
//! Grammar-driven parsing engine for SQL-family dialects: a composable
//! grammar of typed elements, predictive lookup caches, ambiguity detection,
//! and speculative backtracking with best-partial-match recovery.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! parser    → Element parsers, token cursor, parse path, results, CST
//!   ↓
//! grammar   → Element arena, rule builder, lookup caches, registry
//!   ↓
//! token     → Token types, per-dialect token bundle, token slices
//!   ↓
//! base      → Primitives (ElementId, TokenTypeId, Name, TextRange)
//! ```
//!
//! Lexing is not part of this crate: callers hand [`parse`] a slice of
//! [`Token`]s produced by their own tokenizer.

// ============================================================================
// MODULES (dependency order: base → token → grammar → parser)
// ============================================================================

/// Foundation types: ids, names, TextRange
pub mod base;

/// Token model: categories, token types, dialect token bundles
pub mod token;

/// Grammar model: elements, builder, lookup caches, ambiguity warnings
pub mod grammar;

/// Parser: cursor, element parsers, parse tree, diagnostics
pub mod parser;

// Re-export foundation types
pub use base::{ElementId, Name, TextRange, TextSize, TokenTypeId};

// Re-export the main entry points
pub use grammar::{ElementDef, GrammarBuilder, GrammarBundle, GrammarError, GrammarRegistry};
pub use parser::{Parse, ParseFailure, ParseResult, ParserOptions, parse, parse_batch, parse_with_cancel};
pub use token::{Token, TokenTypeBundle, TokenTypeCategory};
