//! Sequence element parser.

use super::{expected, missing_code, parse_element};
use crate::grammar::ElementRef;
use crate::parser::context::ParserContext;
use crate::parser::path::ParsePathNode;
use crate::parser::result::ParseResult;

/// Match the children in order.
///
/// A required child that fails before any token was consumed makes the whole
/// sequence a no-match. Once tokens were consumed the sequence is committed:
/// a missing required child, or a child that only partially matched, ends it
/// as a partial match anchored at the cursor.
pub(super) fn parse(
    ctx: &mut ParserContext<'_>,
    path: &ParsePathNode<'_>,
    children: &[ElementRef],
) -> ParseResult {
    let marker = ctx.builder_mut().mark();
    let mut matched = 0;
    let mut complete = true;

    for (index, child) in children.iter().enumerate() {
        if !ctx.check(child) {
            continue;
        }
        let here = path.at(index);
        let result = parse_element(ctx, child.element, Some(&here));

        if result.is_match() {
            matched += result.matched_tokens();
            if result.is_partial() {
                complete = false;
                break;
            }
            continue;
        }
        if child.optional {
            continue;
        }
        if matched == 0 {
            ctx.builder_mut().rollback_to(marker);
            return ParseResult::no_match();
        }
        let code = missing_code(ctx.bundle(), child.element);
        expected(ctx, code, child.element);
        complete = false;
        break;
    }

    if matched == 0 {
        ctx.builder_mut().rollback_to(marker);
        return ParseResult::no_match();
    }
    ctx.builder_mut().done(marker, path.element);
    if complete {
        ParseResult::full(matched)
    } else {
        ParseResult::partial(matched)
    }
}
