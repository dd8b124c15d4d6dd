//! Compiled grammar of one dialect.

use std::sync::Arc;

use indexmap::IndexMap;

use super::ambiguity::{self, AmbiguityWarning};
use super::element::{Element, ElementKind, ElementRef};
use super::lookup::LookupCache;
use crate::base::{ElementId, Name};
use crate::token::TokenTypeBundle;

/// Immutable, fully resolved element arena with rule lookup by name.
///
/// Built once per dialect by [`GrammarBuilder`](super::GrammarBuilder) and
/// shared by reference across every parse. The only state that changes after
/// construction are the per-element lazy caches.
#[derive(Debug)]
pub struct GrammarBundle {
    dialect: Name,
    tokens: Arc<TokenTypeBundle>,
    elements: Vec<Element>,
    rules: IndexMap<Name, ElementId>,
    root: ElementId,
    ambiguities: Vec<AmbiguityWarning>,
}

impl GrammarBundle {
    pub(crate) fn new(
        dialect: Name,
        tokens: Arc<TokenTypeBundle>,
        elements: Vec<Element>,
        rules: IndexMap<Name, ElementId>,
        root: ElementId,
    ) -> Self {
        let mut bundle = Self {
            dialect,
            tokens,
            elements,
            rules,
            root,
            ambiguities: Vec::new(),
        };
        bundle.ambiguities = ambiguity::detect(&bundle);
        bundle
    }

    pub fn dialect(&self) -> &Name {
        &self.dialect
    }

    pub fn token_types(&self) -> &TokenTypeBundle {
        &self.tokens
    }

    /// Get an element by id.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this bundle.
    pub fn element(&self, id: ElementId) -> &Element {
        &self.elements[id.index()]
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Look up the root element of a named rule
    pub fn rule(&self, name: &str) -> Option<ElementId> {
        self.rules.get(name).copied()
    }

    /// Rule names in declaration order
    pub fn rules(&self) -> impl Iterator<Item = (&Name, ElementId)> {
        self.rules.iter().map(|(name, id)| (name, *id))
    }

    /// Default root rule
    pub fn root(&self) -> ElementId {
        self.root
    }

    /// One-of elements whose alternatives share first tokens
    pub fn ambiguities(&self) -> &[AmbiguityWarning] {
        &self.ambiguities
    }

    /// Lookup cache of an element, built on first use
    pub fn lookup(&self, id: ElementId) -> &LookupCache {
        let cell = &self.element(id).lookup;
        if let Some(cache) = cell.get() {
            return cache;
        }
        // Computed outside the cell; a racing thread may store an equivalent
        // value first, in which case ours is discarded.
        let computed = LookupCache::compute(self, id);
        cell.get_or_init(move || computed)
    }

    /// Children of a composite element in parse order.
    ///
    /// Sortable one-of elements are reordered once so alternatives with a
    /// specific first token are tried before identifier-shaped ones. The
    /// sort is stable and the result is memoized, so repeated calls return
    /// the same order.
    pub fn children(&self, id: ElementId) -> &[ElementRef] {
        let element = self.element(id);
        match element.kind() {
            ElementKind::OneOf {
                children,
                sortable: true,
            } => {
                if let Some(sorted) = element.sorted.get() {
                    return sorted;
                }
                let mut sorted = children.clone();
                sorted.sort_by_key(|child| self.lookup(child.element).starts_with_identifier());
                element.sorted.get_or_init(move || sorted.into_boxed_slice())
            }
            ElementKind::OneOf { children, .. } | ElementKind::Sequence { children } => children,
            _ => &[],
        }
    }

    /// Follow reference elements to the element that does the matching
    pub fn resolve(&self, mut id: ElementId) -> ElementId {
        while let ElementKind::Reference { target } = self.element(id).kind() {
            id = *target;
        }
        id
    }
}
