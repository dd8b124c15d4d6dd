//! Grammar-driven parser
//!
//! Turns a token slice into a typed parse tree by walking a
//! [`GrammarBundle`](crate::grammar::GrammarBundle):
//!
//! ```text
//! Tokens (external tokenizer)
//!     ↓
//! ParserBuilder → cursor with mark/rollback, records events
//!     ↓
//! Element parsers → one algorithm per element kind, ParseResult per call
//!     ↓
//! ParseTree → typed nodes with token spans
//!     ↓
//! GreenNode (rowan) → lossless tree for highlighting
//! ```
//!
//! Soft failures are data: every element parser returns a [`ParseResult`]
//! and speculative attempts are undone through the cursor, never through
//! unwinding. Only an aborted parse (cancelled, too deep) or a root that does
//! not match at all is a [`ParseFailure`].

mod batch;
mod builder;
mod context;
mod elements;
pub mod errors;
mod options;
mod parse;
mod path;
mod result;
mod syntax_kind;
mod tree;

pub use batch::{parse_batch, parse_batch_with_cancel};
pub use builder::{Marker, ParserBuilder, Snapshot};
pub use context::ParserContext;
pub use errors::{ErrorCode, RelatedInfo, SyntaxError};
pub use options::{DEFAULT_MAX_DEPTH, ParserOptions};
pub use parse::{Parse, ParseFailure, parse, parse_with_cancel};
pub use path::ParsePathNode;
pub use result::{ParseResult, ParseResultType};
pub use syntax_kind::{SqlLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};
pub use tree::{ParseNode, ParseTree};

/// Re-export rowan types for convenience
pub use rowan::GreenNode;
