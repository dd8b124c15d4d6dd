//! Wrapper element parsers: `begin content end`, and the repeated form
//! `begin* content end*` where every consumed `end` closes the innermost
//! open `begin`.

use super::{expected, missing_code, parse_element};
use crate::base::ElementId;
use crate::grammar::ElementRef;
use crate::parser::context::ParserContext;
use crate::parser::errors::ErrorCode;
use crate::parser::path::ParsePathNode;
use crate::parser::result::ParseResult;

const BEGIN: usize = 0;
const CONTENT: usize = 1;
const END: usize = 2;

pub(super) fn parse(
    ctx: &mut ParserContext<'_>,
    path: &ParsePathNode<'_>,
    begin: ElementId,
    content: &ElementRef,
    end: ElementId,
) -> ParseResult {
    let marker = ctx.builder_mut().mark();
    let opened = ctx.builder().current_range();

    let here = path.at(BEGIN);
    if !parse_element(ctx, begin, Some(&here)).is_match() {
        ctx.builder_mut().rollback_to(marker);
        return ParseResult::no_match();
    }
    let mut matched = 1;
    let mut complete = true;

    if ctx.check(content) {
        let here = path.at(CONTENT);
        let result = parse_element(ctx, content.element, Some(&here));
        matched += result.matched_tokens();
        if result.is_partial() {
            complete = false;
        } else if result.is_no_match() && !content.optional {
            let code = missing_code(ctx.bundle(), content.element);
            expected(ctx, code, content.element);
            complete = false;
        }
    }

    let here = path.at(END);
    if parse_element(ctx, end, Some(&here)).is_match() {
        matched += 1;
    } else if complete {
        // Content errors already cover the position; only report the
        // delimiter when it is the sole problem
        expected(ctx, ErrorCode::E0203, end);
        ctx.builder_mut().annotate_last_error("opened here", opened);
        complete = false;
    }

    ctx.builder_mut().done(marker, path.element);
    if complete {
        ParseResult::full(matched)
    } else {
        ParseResult::partial(matched)
    }
}

/// Repeated wrapper. Without any `begin` token no wrapper node is created and
/// the content stands alone.
pub(super) fn parse_balanced(
    ctx: &mut ParserContext<'_>,
    path: &ParsePathNode<'_>,
    begin: ElementId,
    content: &ElementRef,
    end: ElementId,
) -> ParseResult {
    let marker = ctx.builder_mut().mark();

    let here = path.at(BEGIN);
    let mut opened = Vec::new();
    loop {
        let range = ctx.builder().current_range();
        if !parse_element(ctx, begin, Some(&here)).is_match() {
            break;
        }
        opened.push(range);
    }

    let here = path.at(CONTENT);
    let result = if ctx.check(content) {
        parse_element(ctx, content.element, Some(&here))
    } else {
        ParseResult::no_match()
    };
    if opened.is_empty() {
        if result.is_no_match() {
            ctx.builder_mut().rollback_to(marker);
        } else {
            ctx.builder_mut().drop(marker);
        }
        return result;
    }

    let mut matched = opened.len() + result.matched_tokens();
    let mut complete = !result.is_partial();
    if result.is_no_match() && !content.optional {
        let code = missing_code(ctx.bundle(), content.element);
        expected(ctx, code, content.element);
        complete = false;
    }

    let here = path.at(END);
    let mut closed = 0;
    while closed < opened.len() && parse_element(ctx, end, Some(&here)).is_match() {
        closed += 1;
    }
    matched += closed;
    if closed < opened.len() && complete {
        expected(ctx, ErrorCode::E0203, end);
        let innermost = opened[opened.len() - closed - 1];
        ctx.builder_mut().annotate_last_error("opened here", innermost);
        complete = false;
    }
    tracing::trace!(opened = opened.len(), closed, "balanced wrapper");

    ctx.builder_mut().done(marker, path.element);
    if complete {
        ParseResult::full(matched)
    } else {
        ParseResult::partial(matched)
    }
}
