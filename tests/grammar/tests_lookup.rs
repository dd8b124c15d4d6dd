#![allow(clippy::unwrap_used)]

use std::collections::BTreeSet;
use std::thread;

use rstest::rstest;
use sqlgrammar::grammar::LookupCache;
use sqlgrammar::{ElementId, TokenTypeId};

use crate::helpers::sql_fixture::{GRAMMAR, grammar, token};

fn first_possible(rule: &str) -> BTreeSet<TokenTypeId> {
    let cache = GRAMMAR.lookup(GRAMMAR.rule(rule).unwrap());
    cache.first_possible_tokens().iter().copied().collect()
}

fn first_required(rule: &str) -> BTreeSet<TokenTypeId> {
    let cache = GRAMMAR.lookup(GRAMMAR.rule(rule).unwrap());
    cache.first_required_tokens().iter().copied().collect()
}

fn set(names: &[&str]) -> BTreeSet<TokenTypeId> {
    names.iter().map(|name| token(name)).collect()
}

#[rstest]
#[case("select_statement", &["KW_SELECT"])]
#[case("statement", &["KW_SELECT", "KW_INSERT", "KW_CREATE"])]
#[case("alias_clause", &["KW_AS", "IDENTIFIER", "QUOTED_IDENTIFIER", "KW_DATE", "KW_COUNT", "KW_USER"])]
#[case("paren_expression", &["CHR_LEFT_PARENTHESIS"])]
#[case("datatype", &["KW_DATE", "KW_VARCHAR"])]
#[case("anonymous_block", &["KW_CREATE", "PLSQL_BLOCK"])]
#[case("grouped_select", &["CHR_LEFT_PARENTHESIS", "KW_SELECT"])]
#[case("subquery", &["CHR_LEFT_PARENTHESIS"])]
fn test_first_possible_tokens(#[case] rule: &str, #[case] expected: &[&str]) {
    assert_eq!(first_possible(rule), set(expected));
}

#[rstest]
#[case("select_statement", &["KW_SELECT"])]
#[case("statement", &[])]
#[case("paren_expression", &["CHR_LEFT_PARENTHESIS"])]
#[case("rollback_pick", &["KW_SELECT"])]
#[case("column_ref", &[])]
#[case("anonymous_block", &[])]
#[case("grouped_select", &[])]
#[case("subquery", &["CHR_LEFT_PARENTHESIS"])]
fn test_first_required_tokens(#[case] rule: &str, #[case] expected: &[&str]) {
    assert_eq!(first_required(rule), set(expected));
}

#[test]
fn test_first_sets_of_recursive_rules_terminate() {
    let expected = set(&[
        "CHR_LEFT_PARENTHESIS",
        "IDENTIFIER",
        "QUOTED_IDENTIFIER",
        "KW_DATE",
        "KW_COUNT",
        "KW_USER",
    ]);
    assert_eq!(first_possible("nested"), expected);
    assert!(first_required("nested").is_empty());
}

#[test]
fn test_expression_first_set_spans_all_alternatives() {
    let cache = GRAMMAR.lookup(GRAMMAR.rule("expression").unwrap());
    for name in ["KW_COUNT", "KW_DATE", "INTEGER", "STRING", "CHR_LEFT_PARENTHESIS", "IDENTIFIER"] {
        assert!(cache.could_start_with(token(name)), "{name}");
    }
    assert!(!cache.could_start_with(token("KW_SELECT")));
    assert!(!cache.should_start_with(token("INTEGER")));
}

#[rstest]
#[case("column_ref", true)]
#[case("expression", true)]
#[case("function_call", false)]
#[case("date_literal", false)]
#[case("alias_clause", true)]
#[case("select_statement", false)]
#[case("grouped_select", false)]
#[case("table_source", true)]
fn test_starts_with_identifier(#[case] rule: &str, #[case] expected: bool) {
    let cache = GRAMMAR.lookup(GRAMMAR.rule(rule).unwrap());
    assert_eq!(cache.starts_with_identifier(), expected);
}

#[test]
fn test_sortable_children_are_sorted_once() {
    let expression = GRAMMAR.rule("expression").unwrap();
    let first: Vec<ElementId> = GRAMMAR.children(expression).iter().map(|c| c.element).collect();
    let second: Vec<ElementId> = GRAMMAR.children(expression).iter().map(|c| c.element).collect();
    assert_eq!(first, second);
    assert!(GRAMMAR.element(expression).is_sorted());

    // Identifier-shaped alternatives go last, the rest keep their order
    let rules: Vec<&str> = first
        .iter()
        .map(|id| GRAMMAR.element(GRAMMAR.resolve(*id)))
        .map(|element| element.rule().map_or("-", |rule| rule.as_str()))
        .collect();
    assert_eq!(
        rules,
        ["function_call", "date_literal", "-", "-", "paren_expression", "column_ref"]
    );
}

#[test]
fn test_unsortable_children_keep_declaration_order() {
    let call = GRAMMAR.rule("call").unwrap();
    let children = GRAMMAR.children(call);
    assert_eq!(
        GRAMMAR.resolve(children[0].element),
        GRAMMAR.rule("function_call").unwrap()
    );
    assert!(GRAMMAR.element(GRAMMAR.resolve(children[1].element)).is_identifier());
}

#[test]
fn test_caches_built_concurrently_agree() {
    let bundle = grammar().unwrap();
    let ids: Vec<ElementId> = bundle.elements().map(|e| e.id()).collect();
    let (bundle, ids) = (&bundle, &ids);

    let snapshots: Vec<Vec<(LookupCache, Vec<ElementId>)>> = thread::scope(|scope| {
        let workers: Vec<_> = (0..8)
            .map(|worker| {
                scope.spawn(move || {
                    // Walk in different orders so threads race on different cells
                    let mut order = ids.clone();
                    order.rotate_left(worker * ids.len() / 8);
                    let mut snapshot: Vec<(ElementId, LookupCache, Vec<ElementId>)> = order
                        .iter()
                        .map(|&id| {
                            let children: Vec<ElementId> =
                                bundle.children(id).iter().map(|c| c.element).collect();
                            (id, bundle.lookup(id).clone(), children)
                        })
                        .collect();
                    snapshot.sort_by_key(|(id, _, _)| *id);
                    snapshot
                        .into_iter()
                        .map(|(_, cache, children)| (cache, children))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        workers.into_iter().map(|w| w.join().unwrap()).collect()
    });

    let serial = grammar().unwrap();
    let expected: Vec<(LookupCache, Vec<ElementId>)> = ids
        .iter()
        .map(|&id| {
            let children: Vec<ElementId> =
                serial.children(id).iter().map(|c| c.element).collect();
            (serial.lookup(id).clone(), children)
        })
        .collect();
    for snapshot in snapshots {
        assert_eq!(snapshot, expected);
    }
}
