//! Parse entry points.

use thiserror::Error;
use tokio_util::sync::CancellationToken;

use super::context::ParserContext;
use super::elements::parse_element;
use super::errors::{ErrorCode, SyntaxError};
use super::options::ParserOptions;
use super::result::ParseResult;
use super::tree::{ParseNode, ParseTree};
use crate::base::{ElementId, Name, TextRange, TextSize};
use crate::grammar::GrammarBundle;
use crate::token::Token;

/// Why a parse produced no tree at all
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    /// The root rule does not match the first token.
    #[error("No match for the root rule at offset {offset:?}")]
    NoMatch { offset: TextSize },

    /// The requested root rule is not part of the grammar.
    #[error("Unknown rule: {0}")]
    UnknownRule(Name),

    /// The cancellation token fired during the parse.
    #[error("Parse cancelled")]
    Cancelled,

    /// Element nesting exceeded [`ParserOptions::max_depth`].
    #[error("Maximum parse depth of {depth} exceeded")]
    DepthExceeded { depth: usize },
}

/// A parse tree plus the diagnostics of the committed partial matches
#[derive(Debug, Clone)]
pub struct Parse {
    pub tree: ParseTree,
    pub result: ParseResult,
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    pub fn root(&self) -> &ParseNode {
        self.tree.root()
    }

    /// Check if parsing matched fully without errors
    pub fn ok(&self) -> bool {
        self.result.is_full() && self.errors.is_empty()
    }
}

/// Parse `tokens` against the rule named `root`, or the bundle's default root
pub fn parse(
    bundle: &GrammarBundle,
    tokens: &[Token<'_>],
    root: Option<&str>,
    options: &ParserOptions,
) -> Result<Parse, ParseFailure> {
    run(bundle, tokens, root, options, None)
}

/// Like [`parse`], aborting with [`ParseFailure::Cancelled`] once `cancel`
/// fires
pub fn parse_with_cancel(
    bundle: &GrammarBundle,
    tokens: &[Token<'_>],
    root: Option<&str>,
    options: &ParserOptions,
    cancel: &CancellationToken,
) -> Result<Parse, ParseFailure> {
    run(bundle, tokens, root, options, Some(cancel))
}

pub(crate) fn run(
    bundle: &GrammarBundle,
    tokens: &[Token<'_>],
    root: Option<&str>,
    options: &ParserOptions,
    cancel: Option<&CancellationToken>,
) -> Result<Parse, ParseFailure> {
    let root = resolve_root(bundle, root)?;
    tracing::debug!(
        dialect = %bundle.dialect(),
        root = %bundle.element(root),
        tokens = tokens.len(),
        "parsing"
    );

    let mut ctx = ParserContext::new(bundle, tokens, options, cancel);
    let offset = ctx.builder().current_range().start();
    let result = parse_element(&mut ctx, root, None);

    if result.is_match() && !ctx.builder().eof() {
        let builder = ctx.builder();
        let start = builder.current_range().start();
        let end = tokens
            .last()
            .map(|token| token.range().end())
            .unwrap_or(start);
        let error = SyntaxError::new(
            format!("unexpected '{}' after statement", builder.token_text().unwrap_or_default()),
            TextRange::new(start, end),
            ErrorCode::E0103,
        );
        ctx.builder_mut().error(error);
    }

    let (builder, failure) = ctx.finish();
    if let Some(failure) = failure {
        return Err(failure);
    }
    if result.is_no_match() {
        return Err(ParseFailure::NoMatch { offset });
    }

    let (tree, errors) = ParseTree::build(bundle, tokens, builder.finish());
    let tree = tree.ok_or(ParseFailure::NoMatch { offset })?;
    tracing::debug!(%result, errors = errors.len(), "parsed");
    Ok(Parse {
        tree,
        result,
        errors,
    })
}

fn resolve_root(bundle: &GrammarBundle, root: Option<&str>) -> Result<ElementId, ParseFailure> {
    match root {
        Some(name) => bundle
            .rule(name)
            .ok_or_else(|| ParseFailure::UnknownRule(Name::new(name))),
        None => Ok(bundle.root()),
    }
}
