//! Per-invocation parse state.

use rustc_hash::FxHashSet;
use tokio_util::sync::CancellationToken;

use super::builder::ParserBuilder;
use super::options::ParserOptions;
use super::parse::ParseFailure;
use crate::base::TokenTypeId;
use crate::grammar::{ElementRef, GrammarBundle};
use crate::token::Token;

/// Mutable state of one parse, exclusively owned by it.
///
/// Holds the token cursor, the recursion depth, the scan flag and the waved
/// tokens: reserved words that a token element declined at a given cursor
/// position so an identifier alternative may claim them there.
#[derive(Debug)]
pub struct ParserContext<'a> {
    bundle: &'a GrammarBundle,
    builder: ParserBuilder<'a>,
    options: &'a ParserOptions,
    cancel: Option<&'a CancellationToken>,
    depth: usize,
    scan: bool,
    waved: FxHashSet<(usize, TokenTypeId)>,
    failure: Option<ParseFailure>,
}

impl<'a> ParserContext<'a> {
    pub fn new(
        bundle: &'a GrammarBundle,
        tokens: &'a [Token<'a>],
        options: &'a ParserOptions,
        cancel: Option<&'a CancellationToken>,
    ) -> Self {
        Self {
            bundle,
            builder: ParserBuilder::new(tokens, bundle.token_types(), options.placeholder.clone()),
            options,
            cancel,
            depth: 0,
            scan: options.recovery,
            waved: FxHashSet::default(),
            failure: None,
        }
    }

    pub fn bundle(&self) -> &'a GrammarBundle {
        self.bundle
    }

    pub fn builder(&self) -> &ParserBuilder<'a> {
        &self.builder
    }

    pub fn builder_mut(&mut self) -> &mut ParserBuilder<'a> {
        &mut self.builder
    }

    pub fn options(&self) -> &'a ParserOptions {
        self.options
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Speculative mode: one-of elements keep their best partial alternative
    pub fn is_scan(&self) -> bool {
        self.scan
    }

    pub fn set_scan(&mut self, scan: bool) {
        self.scan = scan;
    }

    /// Allow `token` to be read as an identifier at the current position
    pub fn wave(&mut self, token: TokenTypeId) {
        let position = self.builder.position();
        tracing::trace!(position, token = %token, "waved reserved word");
        self.waved.insert((position, token));
    }

    pub fn is_waved(&self, token: TokenTypeId) -> bool {
        self.waved.contains(&(self.builder.position(), token))
    }

    /// Whether a child slot is active in the configured language version
    pub fn check(&self, child: &ElementRef) -> bool {
        child.version <= self.options.language_version
    }

    /// The abort reason, once cancellation or the depth guard tripped
    pub fn failure(&self) -> Option<&ParseFailure> {
        self.failure.as_ref()
    }

    /// Account for entering an element.
    ///
    /// Returns false once the parse is aborted; callers then report no match
    /// so every open marker unwinds normally.
    pub(crate) fn enter(&mut self) -> bool {
        if self.failure.is_some() {
            return false;
        }
        if self.cancel.is_some_and(CancellationToken::is_cancelled) {
            tracing::debug!(position = self.builder.position(), "parse cancelled");
            self.failure = Some(ParseFailure::Cancelled);
            return false;
        }
        if self.depth >= self.options.max_depth {
            tracing::warn!(depth = self.depth, "parse exceeded maximum depth");
            self.failure = Some(ParseFailure::DepthExceeded {
                depth: self.options.max_depth,
            });
            return false;
        }
        self.depth += 1;
        true
    }

    pub(crate) fn leave(&mut self) {
        self.depth -= 1;
    }

    pub(crate) fn finish(self) -> (ParserBuilder<'a>, Option<ParseFailure>) {
        (self.builder, self.failure)
    }
}
