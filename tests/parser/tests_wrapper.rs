#![allow(clippy::unwrap_used)]

use sqlgrammar::grammar::NodeKind;
use sqlgrammar::{ParseResult, ParserOptions};

use crate::helpers::sql_fixture::{GRAMMAR, parse_rule, parse_statement};

#[test]
fn test_wrapped_content() {
    let parse = parse_rule("paren_expression", "(a)", &ParserOptions::default()).unwrap();

    assert_eq!(parse.result, ParseResult::full(3));
    assert_eq!(parse.root().kind(), NodeKind::Wrapper);
    let kinds: Vec<NodeKind> = parse.root().children().iter().map(|n| n.kind()).collect();
    assert_eq!(
        kinds,
        [NodeKind::Token, NodeKind::QualifiedIdentifier, NodeKind::Token]
    );
}

#[test]
fn test_unclosed_wrapper_points_at_opening_token() {
    let parse = parse_rule("paren_expression", "( a", &ParserOptions::default()).unwrap();

    assert_eq!(parse.result, ParseResult::partial(2));
    assert_eq!(parse.errors.len(), 1);
    let error = &parse.errors[0];
    assert_eq!(error.code.as_str(), "E0203");
    assert_eq!(error.message, "expected ')', found end of input");
    assert_eq!(error.related.len(), 1);
    assert_eq!(error.related[0].message, "opened here");
    assert_eq!(u32::from(error.related[0].range.start()), 0);
    assert_eq!(u32::from(error.related[0].range.end()), 1);
}

#[test]
fn test_missing_content_still_consumes_closing_token() {
    let parse = parse_rule("paren_expression", "( )", &ParserOptions::default()).unwrap();

    assert_eq!(parse.result, ParseResult::partial(2));
    assert_eq!(parse.errors.len(), 1);
    assert_eq!(parse.errors[0].code.as_str(), "E0301");
    assert_eq!(parse.errors[0].message, "expected expression, found ')'");
}

#[test]
fn test_no_match_without_opening_token() {
    assert!(parse_rule("paren_expression", "a )", &ParserOptions::default()).is_err());
}

#[test]
fn test_nested_wrappers() {
    let parse = parse_rule("nested", "((a))", &ParserOptions::default()).unwrap();

    assert_eq!(parse.result, ParseResult::full(5));
    let depth = parse
        .tree
        .nodes()
        .filter(|node| node.kind() == NodeKind::Wrapper)
        .count();
    assert_eq!(depth, 2);
}

#[test]
fn test_repeated_wrapper_without_delimiters_is_transparent() {
    let parse = parse_rule("grouped_select", "select a", &ParserOptions::default()).unwrap();

    assert_eq!(parse.result, ParseResult::full(2));
    assert_eq!(parse.root().element(), GRAMMAR.rule("select_statement").unwrap());
    assert!(parse.errors.is_empty());
}

#[test]
fn test_repeated_wrapper_keeps_every_delimiter() {
    let parse = parse_rule("grouped_select", "((select a))", &ParserOptions::default()).unwrap();

    assert_eq!(parse.result, ParseResult::full(6));
    assert_eq!(parse.root().kind(), NodeKind::Wrapper);
    let kinds: Vec<NodeKind> = parse.root().children().iter().map(|n| n.kind()).collect();
    assert_eq!(
        kinds,
        [
            NodeKind::Token,
            NodeKind::Token,
            NodeKind::Sequence,
            NodeKind::Token,
            NodeKind::Token
        ]
    );
}

#[test]
fn test_repeated_wrapper_reports_unbalanced_opening() {
    let parse = parse_rule("grouped_select", "((select a)", &ParserOptions::default()).unwrap();

    assert_eq!(parse.result, ParseResult::partial(5));
    assert_eq!(parse.errors.len(), 1);
    let error = &parse.errors[0];
    assert_eq!(error.code.as_str(), "E0203");
    assert_eq!(error.message, "expected ')', found end of input");
    assert_eq!(error.related[0].message, "opened here");
    assert_eq!(u32::from(error.related[0].range.start()), 0);
}

#[test]
fn test_repeated_wrapper_closes_only_what_it_opened() {
    let parse = parse_rule("grouped_select", "(select a))", &ParserOptions::default()).unwrap();

    assert_eq!(parse.result, ParseResult::full(4));
    assert_eq!(parse.errors.len(), 1);
    assert_eq!(parse.errors[0].code.as_str(), "E0103");
    assert_eq!(parse.errors[0].message, "unexpected ')' after statement");
}

#[test]
fn test_subquery_with_redundant_parentheses() {
    let source = "select a from ((select b)) x";
    let parse = parse_statement(source).unwrap();

    assert_eq!(parse.result, ParseResult::full(10));
    let wrappers = parse
        .tree
        .nodes()
        .filter(|node| node.kind() == NodeKind::Wrapper)
        .count();
    assert_eq!(wrappers, 2);
}

#[test]
fn test_unclosed_subquery_points_at_its_parenthesis() {
    let parse = parse_statement("select a from ((select b) x").unwrap();

    assert_eq!(parse.result, ParseResult::partial(8));
    assert_eq!(parse.errors.len(), 2);
    let error = &parse.errors[0];
    assert_eq!(error.code.as_str(), "E0203");
    assert_eq!(error.message, "expected ')', found 'x'");
    assert_eq!(u32::from(error.related[0].range.start()), 14);
    assert_eq!(parse.errors[1].code.as_str(), "E0103");
}
