//! Lookup caches
//!
//! Per-element predictive sets: which token types can begin a match
//! ("first possible"), which token types every match must begin with
//! ("first required"), and whether a match can begin identifier-shaped.
//!
//! Caches are computed on first use and memoized in the element's
//! `OnceLock`. A traversal never initializes another element's cache; it only
//! reuses caches that are already complete, so there is no nested
//! initialization and racing builders cannot block each other.

use rustc_hash::FxHashSet;

use super::bundle::GrammarBundle;
use super::element::ElementKind;
use crate::base::{ElementId, TokenTypeId};

/// Precomputed predictive sets of one element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupCache {
    first_possible: FxHashSet<TokenTypeId>,
    first_required: FxHashSet<TokenTypeId>,
    starts_with_identifier: bool,
}

impl LookupCache {
    /// Compute the cache of `id` from scratch
    pub(crate) fn compute(bundle: &GrammarBundle, id: ElementId) -> Self {
        let mut first_possible = FxHashSet::default();
        collect_first_possible(bundle, id, &mut FxHashSet::default(), &mut first_possible);

        let first_required = collect_first_required(bundle, id, &mut FxHashSet::default());
        let starts_with_identifier =
            check_starts_with_identifier(bundle, id, &mut FxHashSet::default());

        tracing::trace!(
            element = %bundle.element(id),
            first_possible = first_possible.len(),
            first_required = first_required.len(),
            starts_with_identifier,
            "built lookup cache"
        );

        Self {
            first_possible,
            first_required,
            starts_with_identifier,
        }
    }

    /// Token types that can legally begin a match
    pub fn first_possible_tokens(&self) -> &FxHashSet<TokenTypeId> {
        &self.first_possible
    }

    /// Token types every match must begin with (empty when not fixed)
    pub fn first_required_tokens(&self) -> &FxHashSet<TokenTypeId> {
        &self.first_required
    }

    pub fn could_start_with(&self, token: TokenTypeId) -> bool {
        self.first_possible.contains(&token)
    }

    pub fn should_start_with(&self, token: TokenTypeId) -> bool {
        self.first_required.contains(&token)
    }

    /// Whether a match can begin with an identifier-shaped token
    pub fn starts_with_identifier(&self) -> bool {
        self.starts_with_identifier
    }
}

fn collect_first_possible(
    bundle: &GrammarBundle,
    id: ElementId,
    visited: &mut FxHashSet<ElementId>,
    bucket: &mut FxHashSet<TokenTypeId>,
) {
    if !visited.insert(id) {
        return;
    }
    let element = bundle.element(id);
    if let Some(cache) = element.lookup.get() {
        bucket.extend(cache.first_possible.iter().copied());
        return;
    }

    match element.kind() {
        ElementKind::Token { token, .. } => {
            bucket.insert(*token);
        }
        ElementKind::Identifier { .. } => {
            let tokens = bundle.token_types();
            bucket.extend(tokens.identifier_tokens());
            bucket.extend(tokens.suppressible_tokens());
        }
        ElementKind::Sequence { children } => {
            for child in children {
                collect_first_possible(bundle, child.element, visited, bucket);
                if !child.optional {
                    break;
                }
            }
        }
        ElementKind::Wrapper {
            begin,
            content,
            repeated,
            ..
        } => {
            collect_first_possible(bundle, *begin, visited, bucket);
            if *repeated {
                collect_first_possible(bundle, content.element, visited, bucket);
            }
        }
        ElementKind::OneOf { children, .. } => {
            for child in children {
                collect_first_possible(bundle, child.element, visited, bucket);
            }
        }
        ElementKind::Iteration { iterated, .. } => {
            collect_first_possible(bundle, *iterated, visited, bucket);
        }
        ElementKind::QualifiedIdentifier { variants, .. } => {
            for first in variants.iter().filter_map(|v| v.first()) {
                collect_first_possible(bundle, *first, visited, bucket);
            }
        }
        ElementKind::Reference { target } => {
            collect_first_possible(bundle, *target, visited, bucket);
        }
    }
}

/// `path` holds the elements on the current descent only, so a rule reached
/// twice through sibling branches is still evaluated on each branch
fn collect_first_required(
    bundle: &GrammarBundle,
    id: ElementId,
    path: &mut FxHashSet<ElementId>,
) -> FxHashSet<TokenTypeId> {
    let element = bundle.element(id);
    if let Some(cache) = element.lookup.get() {
        return cache.first_required.clone();
    }
    if !path.insert(id) {
        return FxHashSet::default();
    }

    let required = match element.kind() {
        ElementKind::Token { token, .. } => std::iter::once(*token).collect(),
        ElementKind::Identifier { .. } => FxHashSet::default(),
        ElementKind::Sequence { children } => match children.first() {
            Some(first) if !first.optional => collect_first_required(bundle, first.element, path),
            _ => FxHashSet::default(),
        },
        ElementKind::Wrapper { repeated: true, .. } => FxHashSet::default(),
        ElementKind::Wrapper { begin, .. } => collect_first_required(bundle, *begin, path),
        ElementKind::OneOf { children, .. } => {
            intersect_all(children.iter().map(|c| c.element), bundle, path)
        }
        ElementKind::Iteration { iterated, .. } => collect_first_required(bundle, *iterated, path),
        ElementKind::QualifiedIdentifier { variants, .. } => intersect_all(
            variants.iter().filter_map(|v| v.first().copied()),
            bundle,
            path,
        ),
        ElementKind::Reference { target } => collect_first_required(bundle, *target, path),
    };

    path.remove(&id);
    required
}

fn intersect_all(
    elements: impl Iterator<Item = ElementId>,
    bundle: &GrammarBundle,
    path: &mut FxHashSet<ElementId>,
) -> FxHashSet<TokenTypeId> {
    let mut result: Option<FxHashSet<TokenTypeId>> = None;
    for element in elements {
        let required = collect_first_required(bundle, element, path);
        result = Some(match result {
            None => required,
            Some(acc) => acc.intersection(&required).copied().collect(),
        });
        if result.as_ref().is_some_and(FxHashSet::is_empty) {
            break;
        }
    }
    result.unwrap_or_default()
}

fn check_starts_with_identifier(
    bundle: &GrammarBundle,
    id: ElementId,
    path: &mut FxHashSet<ElementId>,
) -> bool {
    let element = bundle.element(id);
    if let Some(cache) = element.lookup.get() {
        return cache.starts_with_identifier;
    }
    if !path.insert(id) {
        return false;
    }

    let result = match element.kind() {
        ElementKind::Token { token, .. } => bundle.token_types().get(*token).is_identifier(),
        ElementKind::Identifier { .. } => true,
        ElementKind::Sequence { children } => {
            let mut starts = false;
            for child in children {
                if check_starts_with_identifier(bundle, child.element, path) {
                    starts = true;
                    break;
                }
                if !child.optional {
                    break;
                }
            }
            starts
        }
        ElementKind::Wrapper {
            begin,
            content,
            repeated,
            ..
        } => {
            check_starts_with_identifier(bundle, *begin, path)
                || (*repeated && check_starts_with_identifier(bundle, content.element, path))
        }
        ElementKind::OneOf { children, .. } => children
            .iter()
            .any(|c| check_starts_with_identifier(bundle, c.element, path)),
        ElementKind::Iteration { iterated, .. } => {
            check_starts_with_identifier(bundle, *iterated, path)
        }
        ElementKind::QualifiedIdentifier { variants, .. } => variants
            .iter()
            .filter_map(|v| v.first())
            .any(|first| check_starts_with_identifier(bundle, *first, path)),
        ElementKind::Reference { target } => check_starts_with_identifier(bundle, *target, path),
    };

    path.remove(&id);
    result
}
