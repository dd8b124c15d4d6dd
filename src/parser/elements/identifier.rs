//! Identifier element parser
//!
//! A true identifier token always matches. A suppressible reserved word
//! matches when any of these holds:
//! - it was waved at this position by a token element that declined it
//! - the element defines a new object and is not an alias
//! - the element is a part of a qualified name
//! - the token after it can follow the identifier here (or input ends), so
//!   reading the word as a name keeps the statement well formed

use super::consume_leaf;
use crate::base::TokenTypeId;
use crate::grammar::NodeKind;
use crate::parser::context::ParserContext;
use crate::parser::path::ParsePathNode;
use crate::parser::result::ParseResult;

pub(super) fn parse(ctx: &mut ParserContext<'_>, path: &ParsePathNode<'_>) -> ParseResult {
    let builder = ctx.builder();
    let Some(current) = builder.token_type() else {
        return ParseResult::no_match();
    };
    if builder.is_dummy_token() {
        return consume_leaf(ctx, path.element);
    }

    let token_type = ctx.bundle().token_types().get(current);
    if token_type.is_identifier() {
        return consume_leaf(ctx, path.element);
    }
    if token_type.is_suppressible_reserved_word() && accepts_reserved_word(ctx, path, current) {
        tracing::trace!(
            token = %token_type.name(),
            position = ctx.builder().position(),
            "reserved word read as identifier"
        );
        return consume_leaf(ctx, path.element);
    }
    ParseResult::no_match()
}

fn accepts_reserved_word(ctx: &ParserContext<'_>, path: &ParsePathNode<'_>, token: TokenTypeId) -> bool {
    if ctx.is_waved(token) {
        return true;
    }
    if ctx.bundle().element(path.element).is_definition() {
        return true;
    }
    if path.enclosing(ctx, NodeKind::QualifiedIdentifier).is_some() {
        return true;
    }
    match ctx.builder().look_ahead(1) {
        Some(next) => path.is_next_possible_token(ctx, next),
        None => true,
    }
}
