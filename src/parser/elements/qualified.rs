//! Qualified identifier parser: `part (. part)*` for each declared variant.

use std::cmp::Reverse;

use super::{expected, parse_element};
use crate::base::ElementId;
use crate::parser::context::ParserContext;
use crate::parser::errors::ErrorCode;
use crate::parser::path::ParsePathNode;
use crate::parser::result::ParseResult;

/// Try the variants longest first and commit the first full match. Without
/// one, the variant that got furthest is re-parsed and reported.
pub(super) fn parse(
    ctx: &mut ParserContext<'_>,
    path: &ParsePathNode<'_>,
    variants: &[Vec<ElementId>],
    separator: ElementId,
) -> ParseResult {
    let mut order: Vec<usize> = (0..variants.len()).collect();
    order.sort_by_key(|&index| Reverse(variants[index].len()));

    let node = ctx.builder_mut().mark();
    let mut best: Option<(usize, ParseResult)> = None;

    for index in order {
        let marker = ctx.builder_mut().mark();
        let result = parse_variant(ctx, path, &variants[index], separator, false);
        if result.is_full() {
            ctx.builder_mut().drop(marker);
            ctx.builder_mut().done(node, path.element);
            return result;
        }
        ctx.builder_mut().rollback_to(marker);
        if result.is_partial() && best.is_none_or(|(_, previous)| result.is_better_than(&previous)) {
            best = Some((index, result));
        }
    }

    match best {
        Some((index, _)) => {
            let result = parse_variant(ctx, path, &variants[index], separator, true);
            ctx.builder_mut().done(node, path.element);
            result
        }
        None => {
            ctx.builder_mut().rollback_to(node);
            ParseResult::no_match()
        }
    }
}

fn parse_variant(
    ctx: &mut ParserContext<'_>,
    path: &ParsePathNode<'_>,
    parts: &[ElementId],
    separator: ElementId,
    report: bool,
) -> ParseResult {
    let mut matched = 0;
    for (index, part) in parts.iter().enumerate() {
        let here = path.at(index);
        if index > 0 {
            if !parse_element(ctx, separator, Some(&here)).is_match() {
                if report {
                    expected(ctx, ErrorCode::E0303, separator);
                }
                return ParseResult::partial(matched);
            }
            matched += 1;
        }
        if !parse_element(ctx, *part, Some(&here)).is_match() {
            if report {
                expected(ctx, ErrorCode::E0303, *part);
            }
            return if matched == 0 {
                ParseResult::no_match()
            } else {
                ParseResult::partial(matched)
            };
        }
        matched += 1;
    }
    ParseResult::full(matched)
}
