//! One-of element parser
//!
//! Alternatives are tried in their (possibly sorted) order after a fast
//! rejection against each alternative's first-possible set. Committed mode
//! takes the first full match. Scan mode additionally keeps the recorded
//! events of the best partial alternative and replays them once every
//! alternative failed to match fully, so no alternative is parsed twice.

use super::parse_element;
use crate::parser::builder::Snapshot;
use crate::parser::context::ParserContext;
use crate::parser::path::ParsePathNode;
use crate::parser::result::ParseResult;

pub(super) fn parse(ctx: &mut ParserContext<'_>, path: &ParsePathNode<'_>) -> ParseResult {
    let bundle = ctx.bundle();
    let children = bundle.children(path.element);

    let builder = ctx.builder();
    let Some(current) = builder.token_type() else {
        return ParseResult::no_match();
    };
    // Chameleon content and the completion placeholder cannot be predicted
    let unfiltered =
        builder.is_dummy_token() || bundle.token_types().get(current).is_chameleon();

    let mut best: Option<(usize, ParseResult, Snapshot)> = None;
    for (index, child) in children.iter().enumerate() {
        if !ctx.check(child) {
            continue;
        }
        if !unfiltered && !bundle.lookup(child.element).could_start_with(current) {
            continue;
        }

        let here = path.at(index);
        let marker = ctx.builder_mut().mark();
        let result = parse_element(ctx, child.element, Some(&here));
        if result.is_full() {
            ctx.builder_mut().drop(marker);
            return result;
        }

        if ctx.is_scan()
            && result.is_partial()
            && best
                .as_ref()
                .is_none_or(|(_, previous, _)| result.is_better_than(previous))
        {
            let snapshot = ctx.builder_mut().rollback_saving(marker);
            best = Some((index, result, snapshot));
        } else {
            ctx.builder_mut().rollback_to(marker);
        }
    }

    let Some((index, candidate, snapshot)) = best else {
        return ParseResult::no_match();
    };
    tracing::debug!(
        element = %bundle.element(path.element),
        alternative = %bundle.element(children[index].element),
        %candidate,
        end = snapshot.end(),
        "keeping best partial alternative"
    );
    ctx.builder_mut().restore(snapshot);
    candidate
}
