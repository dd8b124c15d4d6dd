//! Typed parse tree
//!
//! Each [`ParseNode`] mirrors the grammar element that produced it and
//! carries the span of tokens it consumed. One-of and reference elements do
//! not produce nodes; only the alternative or rule that matched shows up.
//!
//! [`ParseTree::to_green`] converts the tree into a lossless rowan green tree
//! that also contains the trivia and any unconsumed tokens, for highlighting.

use std::ops::Range;

use rowan::{GreenNode, GreenNodeBuilder};

use super::builder::Event;
use super::errors::SyntaxError;
use super::syntax_kind::{SyntaxKind, SyntaxNode};
use crate::base::{ElementId, TextRange};
use crate::grammar::{GrammarBundle, NodeKind};
use crate::token::{Token, TokenTypeBundle};

/// A node of the parse tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNode {
    element: ElementId,
    kind: NodeKind,
    range: TextRange,
    tokens: Range<usize>,
    children: Vec<ParseNode>,
}

impl ParseNode {
    /// The grammar element that produced this node
    pub fn element(&self) -> ElementId {
        self.element
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Source range from the first to the last consumed token
    pub fn range(&self) -> TextRange {
        self.range
    }

    /// Indices into the parsed token slice (trivia inside the span included)
    pub fn tokens(&self) -> Range<usize> {
        self.tokens.clone()
    }

    pub fn children(&self) -> &[ParseNode] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Token | NodeKind::Identifier)
    }

    /// This node and all nodes below it, in pre-order
    pub fn descendants(&self) -> impl Iterator<Item = &ParseNode> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    /// Texts of the consumed (non-trivia) tokens under this node
    pub fn token_texts<'t>(&self, tokens: &[Token<'t>]) -> Vec<&'t str> {
        let mut texts = Vec::new();
        for node in self.descendants().filter(|node| node.is_leaf()) {
            texts.extend(tokens[node.tokens.clone()].iter().map(|token| token.text));
        }
        texts
    }
}

/// The tree produced by a successful parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTree {
    root: ParseNode,
}

impl ParseTree {
    pub fn root(&self) -> &ParseNode {
        &self.root
    }

    /// Every node, in pre-order
    pub fn nodes(&self) -> impl Iterator<Item = &ParseNode> {
        self.root.descendants()
    }

    /// Assemble the tree from the builder's events.
    ///
    /// Returns `None` when the events do not describe exactly one root node.
    pub(crate) fn build(
        bundle: &GrammarBundle,
        tokens: &[Token<'_>],
        events: Vec<Event>,
    ) -> (Option<ParseTree>, Vec<SyntaxError>) {
        struct Frame {
            element: ElementId,
            first: usize,
            span: Option<(usize, usize)>,
            children: Vec<ParseNode>,
        }

        fn extend(span: &mut Option<(usize, usize)>, start: usize, end: usize) {
            *span = Some(match *span {
                Some((first, last)) => (first.min(start), last.max(end)),
                None => (start, end),
            });
        }

        let mut stack: Vec<Frame> = Vec::new();
        let mut roots: Vec<ParseNode> = Vec::new();
        let mut errors = Vec::new();

        for event in events {
            match event {
                Event::Tombstone => {}
                Event::Start { element, first } => stack.push(Frame {
                    element,
                    first,
                    span: None,
                    children: Vec::new(),
                }),
                Event::Token { index } => {
                    if let Some(frame) = stack.last_mut() {
                        extend(&mut frame.span, index, index + 1);
                    }
                }
                Event::Finish => {
                    let Some(frame) = stack.pop() else {
                        continue;
                    };
                    let Some(kind) = bundle.element(frame.element).kind().node_kind() else {
                        continue;
                    };
                    let (tokens_range, range) = match frame.span {
                        Some((start, end)) => (
                            start..end,
                            TextRange::new(tokens[start].range().start(), tokens[end - 1].range().end()),
                        ),
                        None => {
                            let offset = tokens
                                .get(frame.first)
                                .map(|token| token.offset)
                                .or_else(|| tokens.last().map(|token| token.range().end()))
                                .unwrap_or_default();
                            (frame.first..frame.first, TextRange::empty(offset))
                        }
                    };
                    let node = ParseNode {
                        element: frame.element,
                        kind,
                        range,
                        tokens: tokens_range.clone(),
                        children: frame.children,
                    };
                    match stack.last_mut() {
                        Some(parent) => {
                            if !tokens_range.is_empty() {
                                extend(&mut parent.span, tokens_range.start, tokens_range.end);
                            }
                            parent.children.push(node);
                        }
                        None => roots.push(node),
                    }
                }
                Event::Error(error) => errors.push(error),
            }
        }

        debug_assert!(stack.is_empty(), "unbalanced parse events");
        let tree = match roots.len() {
            1 => roots.pop().map(|root| ParseTree { root }),
            _ => None,
        };
        (tree, errors)
    }

    /// Build a lossless rowan tree over `tokens`.
    ///
    /// Trivia between nodes is attached to the enclosing node; tokens the
    /// parse did not consume end up in a trailing `ERROR` node.
    pub fn to_green(&self, bundle: &GrammarBundle, tokens: &[Token<'_>]) -> GreenNode {
        let types = bundle.token_types();
        let mut builder = GreenNodeBuilder::new();
        let mut next = 0;

        builder.start_node(SyntaxKind::ROOT.into());
        emit_node(&mut builder, &self.root, tokens, types, &mut next);

        let mut in_error = false;
        for token in &tokens[next..] {
            if !in_error && !types.get(token.kind).is_trivia() {
                builder.start_node(SyntaxKind::ERROR.into());
                in_error = true;
            }
            emit_token(&mut builder, token, types);
        }
        if in_error {
            builder.finish_node();
        }
        builder.finish_node();
        builder.finish()
    }

    /// Root of the rowan tree over `tokens`
    pub fn syntax(&self, bundle: &GrammarBundle, tokens: &[Token<'_>]) -> SyntaxNode {
        SyntaxNode::new_root(self.to_green(bundle, tokens))
    }
}

fn emit_node(
    builder: &mut GreenNodeBuilder<'static>,
    node: &ParseNode,
    tokens: &[Token<'_>],
    types: &TokenTypeBundle,
    next: &mut usize,
) {
    emit_until(builder, node.tokens.start, tokens, types, next);
    builder.start_node(SyntaxKind::from(node.kind).into());
    if node.children.is_empty() {
        emit_until(builder, node.tokens.end, tokens, types, next);
    } else {
        for child in &node.children {
            emit_node(builder, child, tokens, types, next);
        }
    }
    builder.finish_node();
}

fn emit_until(
    builder: &mut GreenNodeBuilder<'static>,
    end: usize,
    tokens: &[Token<'_>],
    types: &TokenTypeBundle,
    next: &mut usize,
) {
    while *next < end {
        emit_token(builder, &tokens[*next], types);
        *next += 1;
    }
}

fn emit_token(builder: &mut GreenNodeBuilder<'static>, token: &Token<'_>, types: &TokenTypeBundle) {
    let kind = SyntaxKind::from_category(types.get(token.kind).category());
    builder.token(kind.into(), token.text);
}
