//! Token element parser.

use super::consume_leaf;
use crate::grammar::ElementKind;
use crate::parser::context::ParserContext;
use crate::parser::path::ParsePathNode;
use crate::parser::result::ParseResult;

pub(super) fn parse(ctx: &mut ParserContext<'_>, path: &ParsePathNode<'_>) -> ParseResult {
    let bundle = ctx.bundle();
    let ElementKind::Token {
        token,
        text,
        flavor,
    } = bundle.element(path.element).kind()
    else {
        unreachable!("token parser dispatched on a non-token element");
    };

    let builder = ctx.builder();
    let Some(current) = builder.token_type() else {
        return ParseResult::no_match();
    };
    if builder.is_dummy_token() {
        return consume_leaf(ctx, path.element);
    }
    if current != *token {
        return ParseResult::no_match();
    }
    if let Some(text) = text
        && !builder
            .token_text()
            .is_some_and(|actual| actual.eq_ignore_ascii_case(text))
    {
        return ParseResult::no_match();
    }

    let token_types = bundle.token_types();
    let token_type = token_types.get(current);
    if token_type.is_suppressible_reserved_word() {
        let next = builder.look_ahead(1);
        let shared = token_types.shared();

        // `date.column`: the word qualifies a name here
        if let Some(dot) = shared.dot
            && next == Some(dot)
            && !path.is_next_possible_token(ctx, dot)
        {
            ctx.wave(current);
            return ParseResult::no_match();
        }

        // A function name only counts as a call when its argument list follows
        if flavor.is_none()
            && token_type.is_function()
            && let Some(left_parenthesis) = shared.left_parenthesis
            && next != Some(left_parenthesis)
            && path.is_next_required_token(ctx, left_parenthesis)
        {
            ctx.wave(current);
            return ParseResult::no_match();
        }
    }

    consume_leaf(ctx, path.element)
}
