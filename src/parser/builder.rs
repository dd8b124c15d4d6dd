//! Token cursor with mark/rollback
//!
//! [`ParserBuilder`] is the single-owner view over one token slice. Element
//! parsers read the current token, [`mark`](ParserBuilder::mark) a rollback
//! point before anything speculative, and terminate every mark exactly once:
//!
//! - [`rollback_to`](ParserBuilder::rollback_to) restores the cursor and
//!   discards everything recorded since the mark
//! - [`rollback_saving`](ParserBuilder::rollback_saving) restores the cursor
//!   but hands the recorded attempt back as a [`Snapshot`] that
//!   [`restore`](ParserBuilder::restore) can replay later
//! - [`drop`](ParserBuilder::drop) keeps the consumed tokens without a node
//! - [`done`](ParserBuilder::done) keeps them and closes a tree node
//!
//! The builder records a flat event list that is turned into a
//! [`ParseTree`](super::ParseTree) once the parse completes. A mark reserves
//! a tombstone event that `done` overwrites with the node start.

use crate::base::{ElementId, Name, TextRange, TextSize, TokenTypeId};
use crate::parser::errors::{RelatedInfo, SyntaxError};
use crate::token::{Token, TokenTypeBundle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Event {
    /// Reserved by a mark that was dropped or is still open
    Tombstone,
    Start {
        element: ElementId,
        /// Raw index of the first token the node may cover
        first: usize,
    },
    /// Raw index of a consumed token
    Token { index: usize },
    Finish,
    Error(SyntaxError),
}

/// A rollback point.
///
/// Move-only; every marker must be handed back to exactly one of
/// `rollback_to`, `drop` or `done`. Losing one panics in debug builds.
#[must_use = "markers must be rolled back, dropped or completed"]
#[derive(Debug)]
pub struct Marker {
    position: usize,
    event: usize,
    completed: bool,
}

impl Marker {
    /// Cursor position when the mark was taken
    pub fn position(&self) -> usize {
        self.position
    }

    fn complete(mut self) -> (usize, usize) {
        self.completed = true;
        (self.position, self.event)
    }
}

/// Events and cursor of an attempt taken back by
/// [`rollback_saving`](ParserBuilder::rollback_saving)
#[derive(Debug)]
pub struct Snapshot {
    start: usize,
    end: usize,
    event: usize,
    events: Vec<Event>,
}

impl Snapshot {
    /// Cursor position the attempt had reached
    pub fn end(&self) -> usize {
        self.end
    }
}

impl Drop for Marker {
    fn drop(&mut self) {
        if cfg!(debug_assertions) && !self.completed && !std::thread::panicking() {
            panic!("marker at position {} was never completed", self.position);
        }
    }
}

/// Cursor over the significant (non-trivia) tokens of one parse
#[derive(Debug)]
pub struct ParserBuilder<'a> {
    tokens: &'a [Token<'a>],
    /// Raw indices of the non-trivia tokens
    significant: Vec<usize>,
    position: usize,
    events: Vec<Event>,
    placeholder: Option<Name>,
    open: usize,
}

impl<'a> ParserBuilder<'a> {
    /// # Panics
    /// Panics if a token's kind was not issued by `types`.
    pub fn new(tokens: &'a [Token<'a>], types: &TokenTypeBundle, placeholder: Option<Name>) -> Self {
        let significant = tokens
            .iter()
            .enumerate()
            .filter(|(_, token)| !types.get(token.kind).is_trivia())
            .map(|(index, _)| index)
            .collect();
        Self {
            tokens,
            significant,
            position: 0,
            events: Vec::new(),
            placeholder,
            open: 0,
        }
    }

    /// Index of the current token among the significant tokens
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn eof(&self) -> bool {
        self.position >= self.significant.len()
    }

    /// Number of significant tokens in the stream
    pub fn len(&self) -> usize {
        self.significant.len()
    }

    pub fn is_empty(&self) -> bool {
        self.significant.is_empty()
    }

    /// The `n`-th significant token from the current one
    pub fn nth(&self, n: usize) -> Option<&'a Token<'a>> {
        let tokens = self.tokens;
        self.significant
            .get(self.position + n)
            .map(|&index| &tokens[index])
    }

    pub fn token_type(&self) -> Option<TokenTypeId> {
        self.look_ahead(0)
    }

    pub fn look_ahead(&self, n: usize) -> Option<TokenTypeId> {
        self.nth(n).map(|token| token.kind)
    }

    pub fn token_text(&self) -> Option<&'a str> {
        self.nth(0).map(|token| token.text)
    }

    /// Range of the current token, or an empty range at the end of input
    pub fn current_range(&self) -> TextRange {
        match self.nth(0) {
            Some(token) => token.range(),
            None => TextRange::empty(self.end_offset()),
        }
    }

    /// Whether the current token is the completion placeholder
    pub fn is_dummy_token(&self) -> bool {
        match (&self.placeholder, self.token_text()) {
            (Some(placeholder), Some(text)) => placeholder == text,
            _ => false,
        }
    }

    /// Consume the current token.
    ///
    /// # Panics
    /// Panics at end of input.
    pub fn advance(&mut self) {
        let index = self.significant[self.position];
        self.events.push(Event::Token { index });
        self.position += 1;
    }

    pub fn mark(&mut self) -> Marker {
        let event = self.events.len();
        self.events.push(Event::Tombstone);
        self.open += 1;
        Marker {
            position: self.position,
            event,
            completed: false,
        }
    }

    /// Restore the cursor to the mark and forget everything recorded since
    pub fn rollback_to(&mut self, marker: Marker) {
        let (position, event) = marker.complete();
        self.events.truncate(event);
        self.position = position;
        self.open -= 1;
    }

    /// Like [`rollback_to`](Self::rollback_to), but keep the discarded
    /// attempt so it can be replayed without parsing it again
    pub fn rollback_saving(&mut self, marker: Marker) -> Snapshot {
        let (position, event) = marker.complete();
        let events = self.events.split_off(event);
        let snapshot = Snapshot {
            start: position,
            end: self.position,
            event,
            events,
        };
        self.position = position;
        self.open -= 1;
        snapshot
    }

    /// Replay a saved attempt as if it had just been parsed.
    ///
    /// # Panics
    /// Panics unless the cursor and event list are back where the attempt
    /// was started.
    pub fn restore(&mut self, snapshot: Snapshot) {
        assert_eq!(
            (self.position, self.events.len()),
            (snapshot.start, snapshot.event),
            "snapshot restored away from its mark"
        );
        self.events.extend(snapshot.events);
        self.position = snapshot.end;
    }

    /// Keep what was consumed since the mark without creating a node
    pub fn drop(&mut self, marker: Marker) {
        marker.complete();
        self.open -= 1;
    }

    /// Close a node for `element` covering everything since the mark
    pub fn done(&mut self, marker: Marker, element: ElementId) {
        let (position, event) = marker.complete();
        let first = self
            .significant
            .get(position)
            .copied()
            .unwrap_or(self.tokens.len());
        self.events[event] = Event::Start { element, first };
        self.events.push(Event::Finish);
        self.open -= 1;
    }

    /// Record a diagnostic; discarded again if an enclosing mark rolls back
    pub fn error(&mut self, error: SyntaxError) {
        self.events.push(Event::Error(error));
    }

    /// Attach a related location to the most recent diagnostic
    pub fn annotate_last_error(&mut self, message: &str, range: TextRange) {
        let last = self.events.iter_mut().rev().find_map(|event| match event {
            Event::Error(error) => Some(error),
            _ => None,
        });
        if let Some(error) = last {
            error.related.push(RelatedInfo::new(message, range));
        }
    }

    pub(crate) fn finish(self) -> Vec<Event> {
        assert_eq!(self.open, 0, "parse finished with open markers");
        self.events
    }

    fn end_offset(&self) -> TextSize {
        self.tokens
            .last()
            .map(|token| token.range().end())
            .unwrap_or_default()
    }
}
