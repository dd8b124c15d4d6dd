//! Token model
//!
//! Token types are the lexical categories of a dialect: keywords, functions,
//! identifiers, operators, literals and the lazily-lexed "chameleon" blocks.
//! They are created once when a dialect is loaded and shared by every parse.
//!
//! The engine never lexes. An external tokenizer hands it a slice of
//! [`Token`]s whose `kind` indexes into the dialect's [`TokenTypeBundle`].

mod bundle;
mod stream;
mod token_type;

pub use bundle::{SharedTokenTypes, TokenTypeBundle, TokenTypeBundleBuilder};
pub use stream::Token;
pub use token_type::{TokenType, TokenTypeCategory};

/// Well-known id of the `(` token type
pub const CHR_LEFT_PARENTHESIS: &str = "CHR_LEFT_PARENTHESIS";
/// Well-known id of the `)` token type
pub const CHR_RIGHT_PARENTHESIS: &str = "CHR_RIGHT_PARENTHESIS";
/// Well-known id of the `.` token type
pub const CHR_DOT: &str = "CHR_DOT";
/// Well-known id of the `,` token type
pub const CHR_COMMA: &str = "CHR_COMMA";
