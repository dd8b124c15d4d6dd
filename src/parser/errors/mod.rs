//! Parser diagnostics
//!
//! Soft parse outcomes are data ([`ParseResult`](super::ParseResult)); these
//! types describe where a committed partial match stopped so an editor can
//! anchor an annotation there:
//! - Categorized error codes for filtering and documentation
//! - Expected/found messages built from the grammar element that was missing
//! - Related span tracking (e.g. "opened here" for an unclosed wrapper)

mod codes;
mod error;

pub use codes::ErrorCode;
pub use error::{RelatedInfo, SyntaxError};
