//! Iteration element parser: `item (separator item)*`.

use super::{expected, parse_element};
use crate::base::ElementId;
use crate::parser::context::ParserContext;
use crate::parser::errors::ErrorCode;
use crate::parser::path::ParsePathNode;
use crate::parser::result::ParseResult;

const ITERATED: usize = 0;
const SEPARATOR: usize = 1;

/// Match one or more repetitions.
///
/// Stops cleanly when no separator follows an item. An item missing after a
/// consumed separator is not absorbed: the iteration ends as a partial match
/// with the error anchored where the item should have started.
pub(super) fn parse(
    ctx: &mut ParserContext<'_>,
    path: &ParsePathNode<'_>,
    iterated: ElementId,
    separator: Option<ElementId>,
) -> ParseResult {
    let marker = ctx.builder_mut().mark();
    let item = path.at(ITERATED);

    let first = parse_element(ctx, iterated, Some(&item));
    if first.is_no_match() {
        ctx.builder_mut().rollback_to(marker);
        return ParseResult::no_match();
    }
    let mut matched = first.matched_tokens();
    let mut complete = first.is_full();

    while complete {
        if let Some(separator) = separator {
            let here = path.at(SEPARATOR);
            if !parse_element(ctx, separator, Some(&here)).is_match() {
                break;
            }
            matched += 1;

            let result = parse_element(ctx, iterated, Some(&item));
            if result.is_no_match() {
                expected(ctx, ErrorCode::E0302, iterated);
                complete = false;
                break;
            }
            matched += result.matched_tokens();
            complete = result.is_full();
        } else {
            let result = parse_element(ctx, iterated, Some(&item));
            if result.is_no_match() {
                break;
            }
            matched += result.matched_tokens();
            complete = result.is_full();
        }
    }

    ctx.builder_mut().done(marker, path.element);
    if complete {
        ParseResult::full(matched)
    } else {
        ParseResult::partial(matched)
    }
}
