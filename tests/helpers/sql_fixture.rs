//! A small SQL dialect used across the integration tests.
//!
//! The `statement` rule covers select, insert and create table. The other
//! rules are entry points for exercising one element parser in isolation.

use std::sync::Arc;

use once_cell::sync::Lazy;
use sqlgrammar::grammar::ElementDef as E;
use sqlgrammar::{
    GrammarBuilder, GrammarBundle, GrammarError, Parse, ParseFailure, ParserOptions, Token,
    TokenTypeBundle, TokenTypeCategory, TokenTypeId,
};

use super::lexer::lex;

pub static TOKENS: Lazy<Arc<TokenTypeBundle>> = Lazy::new(token_types);

pub static GRAMMAR: Lazy<GrammarBundle> =
    Lazy::new(|| grammar().expect("fixture grammar must build"));

pub fn token_types() -> Arc<TokenTypeBundle> {
    TokenTypeBundle::builder("fixture")
        .keyword("KW_SELECT", "select")
        .keyword("KW_DISTINCT", "distinct")
        .keyword("KW_FROM", "from")
        .keyword("KW_WHERE", "where")
        .keyword("KW_AS", "as")
        .keyword("KW_INSERT", "insert")
        .keyword("KW_INTO", "into")
        .keyword("KW_VALUES", "values")
        .keyword("KW_CREATE", "create")
        .keyword("KW_TABLE", "table")
        .token("KW_VARCHAR", Some("varchar"), TokenTypeCategory::Datatype)
        .suppressible("KW_DATE", "date", TokenTypeCategory::Datatype)
        .suppressible("KW_COUNT", "count", TokenTypeCategory::Function)
        .suppressible("KW_USER", "user", TokenTypeCategory::Keyword)
        .token("IDENTIFIER", None, TokenTypeCategory::Identifier)
        .token("QUOTED_IDENTIFIER", None, TokenTypeCategory::Identifier)
        .token("INTEGER", None, TokenTypeCategory::Numeric)
        .token("STRING", None, TokenTypeCategory::Literal)
        .token("PLSQL_BLOCK", None, TokenTypeCategory::Chameleon)
        .character("CHR_LEFT_PARENTHESIS", "(")
        .character("CHR_RIGHT_PARENTHESIS", ")")
        .character("CHR_DOT", ".")
        .character("CHR_COMMA", ",")
        .character("CHR_SEMICOLON", ";")
        .character("CHR_STAR", "*")
        .token("OPR_EQUALS", Some("="), TokenTypeCategory::Operator)
        .token("WHITESPACE", None, TokenTypeCategory::Whitespace)
        .token("COMMENT", None, TokenTypeCategory::Comment)
        .token("UNKNOWN", None, TokenTypeCategory::Unknown)
        .build()
        .expect("fixture token types must build")
}

pub fn grammar_builder(tokens: Arc<TokenTypeBundle>) -> GrammarBuilder {
    let id = E::identifier;
    let mut builder = GrammarBuilder::new(tokens);
    builder
        .rule(
            "statement",
            E::one_of([
                E::rule("select_statement"),
                E::rule("insert_statement"),
                E::rule("create_table"),
            ]),
        )
        .rule(
            "select_statement",
            E::sequence([
                E::token("KW_SELECT").into(),
                E::token("KW_DISTINCT").optional().since(2),
                E::rule("select_list").into(),
                E::rule("from_clause").optional(),
                E::rule("where_clause").optional(),
            ]),
        )
        .rule(
            "select_list",
            E::one_of([
                E::token("CHR_STAR"),
                E::iteration(E::rule("select_item"), Some("CHR_COMMA")),
            ]),
        )
        .rule(
            "select_item",
            E::sequence([
                E::rule("expression").into(),
                E::rule("alias_clause").optional(),
            ]),
        )
        .rule(
            "alias_clause",
            E::sequence([E::token("KW_AS").optional(), E::alias().into()]),
        )
        .rule(
            "expression",
            E::one_of([
                E::rule("column_ref"),
                E::rule("function_call"),
                E::rule("date_literal"),
                E::token("INTEGER"),
                E::token("STRING"),
                E::rule("paren_expression"),
            ])
            .sortable(),
        )
        .rule(
            "date_literal",
            E::sequence([E::token("KW_DATE"), E::token("STRING")]),
        )
        .rule(
            "function_call",
            E::sequence([
                E::token("KW_COUNT"),
                E::wrapper(
                    "CHR_LEFT_PARENTHESIS",
                    E::one_of([E::token("CHR_STAR"), E::rule("expression")]),
                    "CHR_RIGHT_PARENTHESIS",
                ),
            ]),
        )
        .rule(
            "column_ref",
            E::qualified(
                [vec![id(), id(), id()], vec![id(), id()], vec![id()]],
                "CHR_DOT",
            ),
        )
        .rule(
            "paren_expression",
            E::wrapper(
                "CHR_LEFT_PARENTHESIS",
                E::rule("expression"),
                "CHR_RIGHT_PARENTHESIS",
            ),
        )
        .rule(
            "from_clause",
            E::sequence([
                E::token("KW_FROM"),
                E::iteration(E::rule("table_ref"), Some("CHR_COMMA")),
            ]),
        )
        .rule(
            "table_ref",
            E::sequence([
                E::rule("table_source").into(),
                E::rule("alias_clause").optional(),
            ]),
        )
        .rule(
            "table_source",
            E::one_of([E::rule("table_name"), E::rule("subquery")]),
        )
        .rule(
            "subquery",
            E::wrapper(
                "CHR_LEFT_PARENTHESIS",
                E::rule("select_statement")
                    .wrapped("CHR_LEFT_PARENTHESIS", "CHR_RIGHT_PARENTHESIS"),
                "CHR_RIGHT_PARENTHESIS",
            ),
        )
        .rule(
            "table_name",
            E::qualified([vec![id(), id()], vec![id()]], "CHR_DOT"),
        )
        .rule(
            "where_clause",
            E::sequence([E::token("KW_WHERE"), E::rule("condition")]),
        )
        .rule(
            "condition",
            E::sequence([
                E::rule("expression"),
                E::token("OPR_EQUALS"),
                E::rule("expression"),
            ]),
        )
        .rule(
            "insert_statement",
            E::sequence([
                E::token("KW_INSERT").into(),
                E::token("KW_INTO").into(),
                E::rule("table_name").into(),
                E::wrapper(
                    "CHR_LEFT_PARENTHESIS",
                    E::iteration(id(), Some("CHR_COMMA")),
                    "CHR_RIGHT_PARENTHESIS",
                )
                .optional(),
                E::token("KW_VALUES").into(),
                E::wrapper(
                    "CHR_LEFT_PARENTHESIS",
                    E::iteration(E::rule("expression"), Some("CHR_COMMA")),
                    "CHR_RIGHT_PARENTHESIS",
                )
                .into(),
            ]),
        )
        .rule(
            "create_table",
            E::sequence([
                E::token("KW_CREATE"),
                E::token("KW_TABLE"),
                E::definition("table"),
                E::wrapper(
                    "CHR_LEFT_PARENTHESIS",
                    E::iteration(E::rule("column_definition"), Some("CHR_COMMA")),
                    "CHR_RIGHT_PARENTHESIS",
                ),
            ]),
        )
        .rule(
            "column_definition",
            E::sequence([E::definition("column"), E::rule("datatype")]),
        )
        .rule(
            "datatype",
            E::one_of([E::token("KW_DATE"), E::token("KW_VARCHAR")]),
        )
        // Entry points for focused tests
        .rule("column_list", E::iteration(id(), Some("CHR_COMMA")))
        .rule(
            "qualified_pair",
            E::qualified([vec![id(), id()]], "CHR_DOT"),
        )
        .rule("bare_identifier", id())
        .rule(
            "grouped_select",
            E::rule("select_statement").wrapped("CHR_LEFT_PARENTHESIS", "CHR_RIGHT_PARENTHESIS"),
        )
        .rule("call", E::one_of([E::rule("function_call"), id()]))
        .rule(
            "define_table",
            E::sequence([
                E::token("KW_CREATE"),
                E::definition("table"),
                E::token("CHR_SEMICOLON"),
            ]),
        )
        .rule(
            "refer_table",
            E::sequence([
                E::token("KW_CREATE"),
                id(),
                E::token("CHR_SEMICOLON"),
            ]),
        )
        .rule(
            "rollback_pick",
            E::one_of([
                E::sequence([E::token("KW_SELECT"), id(), E::token("KW_FROM"), id()]),
                E::sequence([E::token("KW_SELECT"), id()]),
            ]),
        )
        .rule(
            "scan_pick",
            E::one_of([
                E::sequence([E::token("KW_SELECT"), id(), E::token("KW_FROM"), id()]),
                E::sequence([
                    E::token("KW_SELECT"),
                    id(),
                    E::token("KW_WHERE"),
                    id(),
                    id(),
                ]),
            ]),
        )
        .rule(
            "nested",
            E::one_of([
                E::wrapper(
                    "CHR_LEFT_PARENTHESIS",
                    E::rule("nested"),
                    "CHR_RIGHT_PARENTHESIS",
                ),
                id(),
            ]),
        )
        .rule(
            "script",
            E::iteration(
                E::sequence([E::rule("statement"), E::token("CHR_SEMICOLON")]),
                None,
            ),
        )
        .rule(
            "anonymous_block",
            E::sequence([E::token("KW_CREATE").optional(), E::token("PLSQL_BLOCK").into()]),
        )
        .root("statement");
    builder
}

pub fn grammar() -> Result<GrammarBundle, GrammarError> {
    grammar_builder(Arc::clone(&TOKENS)).build()
}

/// Id of a fixture token type
pub fn token(name: &str) -> TokenTypeId {
    TOKENS
        .lookup(name)
        .unwrap_or_else(|| panic!("fixture dialect lacks {name}"))
}

pub fn tokens(source: &str) -> Vec<Token<'_>> {
    lex(&TOKENS, source)
}

/// Parse `source` against `rule` of the fixture grammar
pub fn parse_rule(rule: &str, source: &str, options: &ParserOptions) -> Result<Parse, ParseFailure> {
    let tokens = tokens(source);
    sqlgrammar::parse(&GRAMMAR, &tokens, Some(rule), options)
}

pub fn parse_statement(source: &str) -> Result<Parse, ParseFailure> {
    parse_rule("statement", source, &ParserOptions::default())
}

/// Texts of the tokens consumed under the root node
pub fn consumed(parse: &Parse, source: &str) -> Vec<String> {
    let tokens = tokens(source);
    parse
        .root()
        .token_texts(&tokens)
        .into_iter()
        .map(str::to_string)
        .collect()
}
