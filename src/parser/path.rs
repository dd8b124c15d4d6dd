//! Ancestor chain of the elements being matched
//!
//! Every recursive parser call gets a fresh [`ParsePathNode`] that points at
//! its caller's node. Nodes are never mutated; a parent that moves on to its
//! next child slot hands out a copy with the new `position`. Context questions
//! ("can this token follow here?", "am I inside a qualified name?") are pure
//! functions of the chain.

use super::context::ParserContext;
use crate::base::{ElementId, TokenTypeId};
use crate::grammar::{ElementKind, NodeKind};

/// One frame of the parse path
#[derive(Debug, Clone, Copy)]
pub struct ParsePathNode<'p> {
    pub element: ElementId,
    /// Child slot of `element` currently being parsed.
    ///
    /// Sequence and one-of: child index. Wrapper: 0 begin, 1 content, 2 end
    /// (a repeated wrapper stays on a slot while that slot's token repeats).
    /// Iteration: 0 iterated, 1 separator. Qualified identifier: part index.
    pub position: usize,
    pub parent: Option<&'p ParsePathNode<'p>>,
}

impl<'p> ParsePathNode<'p> {
    pub fn new(element: ElementId, parent: Option<&'p ParsePathNode<'p>>) -> Self {
        Self {
            element,
            position: 0,
            parent,
        }
    }

    /// The same frame, moved to another child slot
    pub fn at(&self, position: usize) -> Self {
        Self { position, ..*self }
    }

    /// Number of frames in the chain, including this one
    pub fn depth(&self) -> usize {
        self.ancestors().count() + 1
    }

    /// Enclosing frames, innermost first
    pub fn ancestors(&self) -> impl Iterator<Item = &'p ParsePathNode<'p>> {
        std::iter::successors(self.parent, |node| node.parent)
    }

    /// Innermost enclosing frame whose element produces `kind` nodes
    pub fn enclosing(&self, ctx: &ParserContext<'_>, kind: NodeKind) -> Option<&'p ParsePathNode<'p>> {
        let bundle = ctx.bundle();
        self.ancestors()
            .find(|node| bundle.element(node.element).kind().node_kind() == Some(kind))
    }

    /// Whether `token` may appear right after the element of this frame
    /// completes
    pub fn is_next_possible_token(&self, ctx: &ParserContext<'_>, token: TokenTypeId) -> bool {
        let bundle = ctx.bundle();
        let could_start = |id: ElementId| bundle.lookup(id).could_start_with(token);

        let mut current = self;
        while let Some(parent) = current.parent {
            let slot = parent.position;
            match bundle.element(parent.element).kind() {
                ElementKind::Sequence { children } => {
                    for child in children.iter().skip(slot + 1).filter(|c| ctx.check(c)) {
                        if could_start(child.element) {
                            return true;
                        }
                        if !child.optional {
                            return false;
                        }
                    }
                }
                ElementKind::Wrapper {
                    begin,
                    content,
                    end,
                    repeated,
                } => match slot {
                    0 => {
                        let active = ctx.check(content);
                        if (*repeated && could_start(*begin))
                            || (active && could_start(content.element))
                        {
                            return true;
                        }
                        return (!active || content.optional) && could_start(*end);
                    }
                    // A repeated wrapper may have opened nothing, so whatever
                    // follows it is possible too
                    1 if !*repeated => return could_start(*end),
                    _ => {
                        if *repeated && could_start(*end) {
                            return true;
                        }
                    }
                },
                ElementKind::Iteration {
                    iterated,
                    separator,
                } => {
                    let repeat = match (slot, separator) {
                        (0, Some(separator)) => *separator,
                        _ => *iterated,
                    };
                    if could_start(repeat) {
                        return true;
                    }
                    if slot == 1 {
                        return false;
                    }
                }
                ElementKind::QualifiedIdentifier { separator, .. } => {
                    if could_start(*separator) {
                        return true;
                    }
                }
                ElementKind::OneOf { .. }
                | ElementKind::Reference { .. }
                | ElementKind::Token { .. }
                | ElementKind::Identifier { .. } => {}
            }
            current = parent;
        }
        false
    }

    /// Whether every continuation after this frame must begin with `token`
    pub fn is_next_required_token(&self, ctx: &ParserContext<'_>, token: TokenTypeId) -> bool {
        let bundle = ctx.bundle();
        let should_start = |id: ElementId| bundle.lookup(id).should_start_with(token);

        let mut current = self;
        while let Some(parent) = current.parent {
            let slot = parent.position;
            match bundle.element(parent.element).kind() {
                ElementKind::Sequence { children } => {
                    if let Some(next) = children.iter().skip(slot + 1).find(|c| ctx.check(c)) {
                        return !next.optional && should_start(next.element);
                    }
                }
                // The number of open delimiters is not known here
                ElementKind::Wrapper { repeated: true, .. } => return false,
                ElementKind::Wrapper { content, end, .. } => match slot {
                    0 if ctx.check(content) => {
                        return !content.optional && should_start(content.element);
                    }
                    0 | 1 => return should_start(*end),
                    _ => {}
                },
                ElementKind::Iteration { iterated, .. } => {
                    return slot == 1 && should_start(*iterated);
                }
                ElementKind::QualifiedIdentifier { .. } => return false,
                ElementKind::OneOf { .. }
                | ElementKind::Reference { .. }
                | ElementKind::Token { .. }
                | ElementKind::Identifier { .. } => {}
            }
            current = parent;
        }
        false
    }
}
