//! Foundation types for the grammar engine.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`ElementId`] - Index of a grammar element in a bundle arena
//! - [`TokenTypeId`] - Index of a token type in a dialect token bundle
//! - [`Name`] - Cheap-to-clone rule, token and dialect names
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//!
//! This module has NO dependencies on other crate modules.

mod ids;
mod name;

pub use ids::{ElementId, TokenTypeId};
pub use name::{Name, is_valid_name};

// Re-export text-size types for convenience
pub use text_size::{self, TextRange, TextSize};
