//! Element parsers
//!
//! One algorithm per element kind, all with the same shape: given the
//! context and the path frame of the element, match at the cursor and return
//! a [`ParseResult`]. A no-match never leaves the cursor moved.

mod identifier;
mod iteration;
mod one_of;
mod qualified;
mod sequence;
mod token;
mod wrapper;

use super::context::ParserContext;
use super::errors::{ErrorCode, SyntaxError};
use super::path::ParsePathNode;
use super::result::ParseResult;
use crate::base::ElementId;
use crate::grammar::{ElementKind, GrammarBundle};

/// Parse `element` at the cursor as a child of `parent`
pub(crate) fn parse_element(
    ctx: &mut ParserContext<'_>,
    element: ElementId,
    parent: Option<&ParsePathNode<'_>>,
) -> ParseResult {
    if !ctx.enter() {
        return ParseResult::no_match();
    }

    let path = ParsePathNode::new(element, parent);
    let bundle = ctx.bundle();
    let result = match bundle.element(element).kind() {
        ElementKind::Token { .. } => token::parse(ctx, &path),
        ElementKind::Identifier { .. } => identifier::parse(ctx, &path),
        ElementKind::Sequence { children } => sequence::parse(ctx, &path, children),
        ElementKind::Wrapper {
            begin,
            content,
            end,
            repeated: false,
        } => wrapper::parse(ctx, &path, *begin, content, *end),
        ElementKind::Wrapper {
            begin,
            content,
            end,
            repeated: true,
        } => wrapper::parse_balanced(ctx, &path, *begin, content, *end),
        ElementKind::OneOf { .. } => one_of::parse(ctx, &path),
        ElementKind::Iteration {
            iterated,
            separator,
        } => iteration::parse(ctx, &path, *iterated, *separator),
        ElementKind::QualifiedIdentifier {
            variants,
            separator,
        } => qualified::parse(ctx, &path, variants, *separator),
        ElementKind::Reference { target } => parse_element(ctx, *target, Some(&path)),
    };
    ctx.leave();

    tracing::trace!(
        element = %bundle.element(element),
        position = ctx.builder().position(),
        %result,
        "parsed element"
    );
    result
}

/// Consume the current token as a leaf node of `element`
fn consume_leaf(ctx: &mut ParserContext<'_>, element: ElementId) -> ParseResult {
    let builder = ctx.builder_mut();
    let marker = builder.mark();
    builder.advance();
    builder.done(marker, element);
    ParseResult::full(1)
}

/// Human-readable description of what `element` would have matched
fn describe(bundle: &GrammarBundle, element: ElementId) -> String {
    let target = bundle.element(bundle.resolve(element));
    match target.kind() {
        ElementKind::Token { token, text, .. } => {
            let token_type = bundle.token_types().get(*token);
            match text.as_ref().or(token_type.value()) {
                Some(value) => format!("'{}'", value),
                None => token_type.name().to_string(),
            }
        }
        ElementKind::Identifier { .. } | ElementKind::QualifiedIdentifier { .. } => {
            "identifier".to_string()
        }
        _ => match target.rule() {
            Some(rule) => rule.to_string(),
            None => target.kind().label().to_string(),
        },
    }
}

/// Record that `expected` was missing at the cursor
fn expected(ctx: &mut ParserContext<'_>, code: ErrorCode, expected: ElementId) {
    let bundle = ctx.bundle();
    let builder = ctx.builder();
    let range = builder.current_range();
    let (code, found) = match builder.token_text() {
        Some(text) => (code, format!("'{}'", text)),
        None if code.is_structural() => (code, "end of input".to_string()),
        None => (ErrorCode::E0102, "end of input".to_string()),
    };
    let mut error = SyntaxError::new(
        format!("expected {}, found {}", describe(bundle, expected), found),
        range,
        code,
    );
    if let Some(token) = builder.token_type()
        && bundle.token_types().get(token).is_reserved_word()
        && bundle.element(bundle.resolve(expected)).is_identifier()
    {
        error = error.with_hint(format!(
            "'{}' is a reserved word and cannot be used as a name here",
            builder.token_text().unwrap_or_default()
        ));
    }
    ctx.builder_mut().error(error);
}

/// Error code for a required element that did not match
fn missing_code(bundle: &GrammarBundle, element: ElementId) -> ErrorCode {
    match bundle.element(bundle.resolve(element)).kind() {
        ElementKind::Token { .. } => ErrorCode::E0201,
        ElementKind::Identifier { .. } => ErrorCode::E0202,
        _ => ErrorCode::E0301,
    }
}
