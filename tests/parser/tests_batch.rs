#![allow(clippy::unwrap_used)]

use sqlgrammar::parser::parse_batch_with_cancel;
use sqlgrammar::{ParseFailure, ParseResult, ParserOptions, Token, parse_batch};
use tokio_util::sync::CancellationToken;

use crate::helpers::sql_fixture::{GRAMMAR, parse_statement, tokens};

const SOURCES: [&str; 4] = [
    "select a, b from t",
    "insert into t values (1)",
    "create table t (d date)",
    "select count from t where count = 1",
];

fn documents() -> Vec<(String, Vec<Token<'static>>)> {
    (0..64)
        .map(|i| {
            let source: &'static str = SOURCES[i % SOURCES.len()];
            (source.to_string(), tokens(source))
        })
        .collect()
}

#[test]
fn test_batch_matches_sequential_results() {
    let documents = documents();
    let streams: Vec<&[Token<'static>]> = documents.iter().map(|(_, t)| t.as_slice()).collect();

    let results = parse_batch(&GRAMMAR, &streams, Some("statement"), &ParserOptions::default());

    assert_eq!(results.len(), documents.len());
    for ((source, _), result) in documents.iter().zip(results) {
        let parse = result.unwrap();
        let expected = parse_statement(source).unwrap();
        assert_eq!(parse.result, expected.result, "{source}");
        assert_eq!(parse.tree, expected.tree, "{source}");
        assert!(parse.ok(), "{source}: {:?}", parse.errors);
    }
}

#[test]
fn test_batch_reports_failures_per_document() {
    let good = tokens("select a");
    let bad = tokens("values");
    let results = parse_batch(
        &GRAMMAR,
        &[good.clone(), bad, good],
        None,
        &ParserOptions::default(),
    );

    assert_eq!(results[0].as_ref().unwrap().result, ParseResult::full(2));
    assert!(matches!(results[1], Err(ParseFailure::NoMatch { .. })));
    assert!(results[2].is_ok());
}

#[test]
fn test_batch_cancellation() {
    let documents = documents();
    let streams: Vec<&[Token<'static>]> = documents.iter().map(|(_, t)| t.as_slice()).collect();
    let cancel = CancellationToken::new();
    cancel.cancel();

    let results =
        parse_batch_with_cancel(&GRAMMAR, &streams, None, &ParserOptions::default(), &cancel);
    assert!(results.iter().all(|r| matches!(r, Err(ParseFailure::Cancelled))));
}
