//! Minimal tokenizer for the fixture dialect.
//!
//! Good enough for test inputs: words, integers, quoted strings and
//! identifiers, `--` comments, `$$` blocks and single-character punctuation.

use sqlgrammar::{TextSize, Token, TokenTypeBundle, TokenTypeId};

pub fn lex<'s>(types: &TokenTypeBundle, source: &'s str) -> Vec<Token<'s>> {
    let id = |name: &str| {
        types
            .lookup(name)
            .unwrap_or_else(|| panic!("fixture dialect lacks {name}"))
    };

    let mut tokens = Vec::new();
    let mut start = 0;
    while start < source.len() {
        let rest = &source[start..];
        let first = rest.chars().next().unwrap();

        let (kind, len) = if first.is_whitespace() {
            let len = rest
                .find(|c: char| !c.is_whitespace())
                .unwrap_or(rest.len());
            (id("WHITESPACE"), len)
        } else if rest.starts_with("--") {
            (id("COMMENT"), rest.find('\n').unwrap_or(rest.len()))
        } else if rest.starts_with("$$") {
            let len = rest[2..].find("$$").map_or(rest.len(), |end| end + 4);
            (id("PLSQL_BLOCK"), len)
        } else if first == '\'' {
            (id("STRING"), quoted(rest, '\''))
        } else if first == '"' {
            (id("QUOTED_IDENTIFIER"), quoted(rest, '"'))
        } else if first.is_ascii_alphanumeric() || first == '_' {
            let len = rest
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(rest.len());
            (word(types, &rest[..len]), len)
        } else {
            let kind = match first {
                '(' => id("CHR_LEFT_PARENTHESIS"),
                ')' => id("CHR_RIGHT_PARENTHESIS"),
                '.' => id("CHR_DOT"),
                ',' => id("CHR_COMMA"),
                ';' => id("CHR_SEMICOLON"),
                '*' => id("CHR_STAR"),
                '=' => id("OPR_EQUALS"),
                _ => id("UNKNOWN"),
            };
            (kind, first.len_utf8())
        };

        let offset = TextSize::try_from(start).unwrap();
        tokens.push(Token::new(kind, &source[start..start + len], offset));
        start += len;
    }
    tokens
}

fn quoted(rest: &str, quote: char) -> usize {
    rest[1..].find(quote).map_or(rest.len(), |end| end + 2)
}

fn word(types: &TokenTypeBundle, word: &str) -> TokenTypeId {
    if word.chars().all(|c| c.is_ascii_digit()) {
        return types.lookup("INTEGER").unwrap();
    }
    types
        .iter()
        .find(|token_type| {
            token_type.is_reserved_word()
                && token_type
                    .value()
                    .is_some_and(|value| value.eq_ignore_ascii_case(word))
        })
        .map(|token_type| token_type.id())
        .unwrap_or_else(|| types.lookup("IDENTIFIER").unwrap())
}
