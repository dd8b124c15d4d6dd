//! Load-time ambiguity detection for one-of elements.

use std::fmt;

use indexmap::IndexSet;
use rustc_hash::FxHashMap;

use super::bundle::GrammarBundle;
use super::element::ElementKind;
use crate::base::{ElementId, Name, TokenTypeId};

/// Alternatives of a one-of that can begin with the same token.
///
/// Parsing stays deterministic (alternatives are tried in order); the warning
/// is feedback for grammar authors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmbiguityWarning {
    pub element: ElementId,
    pub name: Name,
    /// Overlapping alternatives, in declaration order
    pub alternatives: Vec<ElementId>,
    /// Token types shared by at least two alternatives
    pub tokens: Vec<TokenTypeId>,
}

impl fmt::Display for AmbiguityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ambiguous one-of elements [{}]", self.name)?;
        for alternative in &self.alternatives {
            write!(f, " {}", alternative)?;
        }
        Ok(())
    }
}

/// Check every one-of of the bundle.
///
/// For sortable one-of elements, an overlap between an identifier-shaped and
/// a non-identifier-shaped alternative is resolved by the sort and not
/// reported.
pub(crate) fn detect(bundle: &GrammarBundle) -> Vec<AmbiguityWarning> {
    let mut warnings = Vec::new();

    for element in bundle.elements() {
        let ElementKind::OneOf { children, sortable } = element.kind() else {
            continue;
        };

        let mut seen: FxHashMap<TokenTypeId, Vec<usize>> = FxHashMap::default();
        let mut alternatives: IndexSet<usize> = IndexSet::new();
        let mut tokens: IndexSet<TokenTypeId> = IndexSet::new();

        for (index, child) in children.iter().enumerate() {
            let cache = bundle.lookup(child.element);
            let mut possible: Vec<_> = cache.first_possible_tokens().iter().copied().collect();
            possible.sort_unstable();
            for token in possible {
                let earlier = seen.entry(token).or_default();
                for &other in earlier.iter() {
                    if *sortable
                        && bundle.lookup(children[other].element).starts_with_identifier()
                            != cache.starts_with_identifier()
                    {
                        continue;
                    }
                    alternatives.insert(other);
                    alternatives.insert(index);
                    tokens.insert(token);
                }
                earlier.push(index);
            }
        }

        if alternatives.is_empty() {
            continue;
        }

        let mut alternatives: Vec<usize> = alternatives.into_iter().collect();
        alternatives.sort_unstable();
        let mut tokens: Vec<TokenTypeId> = tokens.into_iter().collect();
        tokens.sort_unstable();

        let warning = AmbiguityWarning {
            element: element.id(),
            name: element.name().clone(),
            alternatives: alternatives.iter().map(|&i| children[i].element).collect(),
            tokens,
        };
        tracing::warn!(dialect = %bundle.dialect(), "{}", warning);
        warnings.push(warning);
    }

    warnings
}
