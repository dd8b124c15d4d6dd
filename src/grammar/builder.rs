//! Grammar construction
//!
//! Lowers [`ElementDef`] trees into the element arena, resolves rule
//! references by name and validates the result. Construction order of rules
//! is irrelevant: references are patched after every rule has been lowered.

use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxHashSet;

use super::bundle::GrammarBundle;
use super::definition::{ChildDef, ElementDef};
use super::element::{Element, ElementKind, ElementRef};
use super::error::GrammarError;
use crate::base::{ElementId, Name, is_valid_name};
use crate::token::TokenTypeBundle;

/// Collects rule definitions for one dialect and builds a [`GrammarBundle`]
#[derive(Debug)]
pub struct GrammarBuilder {
    dialect: Name,
    tokens: Arc<TokenTypeBundle>,
    rules: Vec<(Name, ElementDef)>,
    root: Option<Name>,
}

impl GrammarBuilder {
    pub fn new(tokens: Arc<TokenTypeBundle>) -> Self {
        Self {
            dialect: tokens.dialect().clone(),
            tokens,
            rules: Vec::new(),
            root: None,
        }
    }

    /// Declare a named rule
    pub fn rule(&mut self, name: impl Into<Name>, def: ElementDef) -> &mut Self {
        self.rules.push((name.into(), def));
        self
    }

    /// Set the default root rule (defaults to the first declared rule)
    pub fn root(&mut self, name: impl Into<Name>) -> &mut Self {
        self.root = Some(name.into());
        self
    }

    /// Lower, resolve and validate every rule
    pub fn build(&self) -> Result<GrammarBundle, GrammarError> {
        if self.rules.is_empty() {
            return Err(GrammarError::NoRules(self.dialect.clone()));
        }

        let mut lowering = Lowering {
            tokens: &self.tokens,
            elements: Vec::new(),
            references: Vec::new(),
            counter: 0,
        };
        let mut rules: IndexMap<Name, ElementId> = IndexMap::with_capacity(self.rules.len());

        for (name, def) in &self.rules {
            if !is_valid_name(name) {
                return Err(GrammarError::InvalidName {
                    kind: "rule",
                    name: name.clone(),
                });
            }
            if rules.contains_key(name) {
                return Err(GrammarError::DuplicateRule(name.clone()));
            }
            lowering.counter = 0;
            let id = lowering.lower(name, def, None, true)?;
            rules.insert(name.clone(), id);
        }

        let Lowering {
            mut elements,
            references,
            ..
        } = lowering;

        for (id, rule, reference) in references {
            let target = rules
                .get(&reference)
                .copied()
                .ok_or(GrammarError::UnresolvedReference { rule, reference })?;
            elements[id.index()].kind = ElementKind::Reference { target };
        }

        let root = match &self.root {
            Some(name) => rules
                .get(name)
                .copied()
                .ok_or_else(|| GrammarError::UnknownRoot(name.clone()))?,
            None => rules[0],
        };

        for (name, id) in &rules {
            check_left_recursion(&elements, name, *id)?;
        }

        tracing::info!(
            dialect = %self.dialect,
            rules = rules.len(),
            elements = elements.len(),
            "built grammar bundle"
        );

        Ok(GrammarBundle::new(
            self.dialect.clone(),
            Arc::clone(&self.tokens),
            elements,
            rules,
            root,
        ))
    }
}

struct Lowering<'a> {
    tokens: &'a TokenTypeBundle,
    elements: Vec<Element>,
    /// Reference elements awaiting their target: (element, rule, target rule)
    references: Vec<(ElementId, Name, Name)>,
    counter: usize,
}

impl Lowering<'_> {
    /// Reserve an arena slot so children can point at their parent
    fn reserve(&mut self, rule: &Name, parent: Option<ElementId>, is_root: bool) -> ElementId {
        let id = ElementId::new(self.elements.len());
        let name = if is_root {
            rule.clone()
        } else {
            self.counter += 1;
            Name::new(format!("{}#{}", rule, self.counter))
        };
        let rule = is_root.then(|| rule.clone());
        let placeholder = ElementKind::Sequence {
            children: Vec::new(),
        };
        self.elements
            .push(Element::new(id, name, rule, placeholder, parent));
        id
    }

    fn lower(
        &mut self,
        rule: &Name,
        def: &ElementDef,
        parent: Option<ElementId>,
        is_root: bool,
    ) -> Result<ElementId, GrammarError> {
        let id = self.reserve(rule, parent, is_root);

        let kind = match def {
            ElementDef::Token {
                token,
                text,
                flavor,
            } => ElementKind::Token {
                token: self.tokens.resolve(token)?,
                text: text.clone(),
                flavor: *flavor,
            },
            ElementDef::Identifier {
                kind,
                alias,
                object_type,
            } => ElementKind::Identifier {
                kind: *kind,
                alias: *alias,
                object_type: object_type.clone(),
            },
            ElementDef::Sequence(children) => {
                if children.is_empty() {
                    return Err(GrammarError::Empty {
                        kind: "sequence",
                        rule: rule.clone(),
                    });
                }
                ElementKind::Sequence {
                    children: self.lower_children(rule, children, id)?,
                }
            }
            ElementDef::Wrapper {
                begin,
                content,
                end,
                repeated,
            } => ElementKind::Wrapper {
                begin: self.lower(rule, &ElementDef::token(begin.clone()), Some(id), false)?,
                content: self.lower_child(rule, content, id)?,
                end: self.lower(rule, &ElementDef::token(end.clone()), Some(id), false)?,
                repeated: *repeated,
            },
            ElementDef::OneOf { children, sortable } => {
                if children.is_empty() {
                    return Err(GrammarError::Empty {
                        kind: "one-of",
                        rule: rule.clone(),
                    });
                }
                ElementKind::OneOf {
                    children: self.lower_children(rule, children, id)?,
                    sortable: *sortable,
                }
            }
            ElementDef::Iteration {
                iterated,
                separator,
            } => {
                let iterated = self.lower(rule, iterated, Some(id), false)?;
                let separator = match separator {
                    Some(token) => {
                        Some(self.lower(rule, &ElementDef::token(token.clone()), Some(id), false)?)
                    }
                    None => None,
                };
                ElementKind::Iteration {
                    iterated,
                    separator,
                }
            }
            ElementDef::QualifiedIdentifier {
                variants,
                separator,
            } => {
                if variants.is_empty() || variants.iter().any(Vec::is_empty) {
                    return Err(GrammarError::Empty {
                        kind: "qualified-identifier variant",
                        rule: rule.clone(),
                    });
                }
                let mut lowered = Vec::with_capacity(variants.len());
                for variant in variants {
                    let mut parts = Vec::with_capacity(variant.len());
                    for part in variant {
                        if !matches!(
                            part,
                            ElementDef::Identifier { .. } | ElementDef::Token { .. }
                        ) {
                            return Err(GrammarError::invalid(
                                rule.clone(),
                                "qualified identifier parts must be identifiers or tokens",
                            ));
                        }
                        parts.push(self.lower(rule, part, Some(id), false)?);
                    }
                    lowered.push(parts);
                }
                ElementKind::QualifiedIdentifier {
                    variants: lowered,
                    separator: self.lower(
                        rule,
                        &ElementDef::token(separator.clone()),
                        Some(id),
                        false,
                    )?,
                }
            }
            ElementDef::Reference(target) => {
                if !is_valid_name(target) {
                    return Err(GrammarError::InvalidName {
                        kind: "rule",
                        name: target.clone(),
                    });
                }
                self.references.push((id, rule.clone(), target.clone()));
                ElementKind::Reference { target: id }
            }
        };

        self.elements[id.index()].kind = kind;
        Ok(id)
    }

    fn lower_child(
        &mut self,
        rule: &Name,
        child: &ChildDef,
        parent: ElementId,
    ) -> Result<ElementRef, GrammarError> {
        Ok(ElementRef {
            element: self.lower(rule, &child.def, Some(parent), false)?,
            optional: child.optional,
            version: child.version,
        })
    }

    fn lower_children(
        &mut self,
        rule: &Name,
        children: &[ChildDef],
        parent: ElementId,
    ) -> Result<Vec<ElementRef>, GrammarError> {
        children
            .iter()
            .map(|child| self.lower_child(rule, child, parent))
            .collect()
    }
}

/// Elements that may be entered at the same token position as `element`
fn leading(element: &Element) -> Vec<ElementId> {
    match &element.kind {
        ElementKind::Sequence { children } => {
            let mut leading = Vec::new();
            for child in children {
                leading.push(child.element);
                if !child.optional {
                    break;
                }
            }
            leading
        }
        ElementKind::OneOf { children, .. } => children.iter().map(|c| c.element).collect(),
        ElementKind::Iteration { iterated, .. } => vec![*iterated],
        ElementKind::Reference { target } => vec![*target],
        // Repeated delimiters are optional, so the content may come first
        ElementKind::Wrapper {
            content,
            repeated: true,
            ..
        } => vec![content.element],
        ElementKind::Token { .. }
        | ElementKind::Identifier { .. }
        | ElementKind::Wrapper { .. }
        | ElementKind::QualifiedIdentifier { .. } => Vec::new(),
    }
}

/// A rule that can re-enter itself without consuming a token would recurse
/// forever at parse time
fn check_left_recursion(
    elements: &[Element],
    rule: &Name,
    root: ElementId,
) -> Result<(), GrammarError> {
    let mut visited = FxHashSet::default();
    let mut stack: Vec<ElementId> = leading(&elements[root.index()]);

    while let Some(id) = stack.pop() {
        let element = &elements[id.index()];
        if let ElementKind::Reference { target } = element.kind
            && target == root
        {
            return Err(GrammarError::LeftRecursion {
                rule: rule.clone(),
                via: element.name.clone(),
            });
        }
        if id == root || !visited.insert(id) {
            continue;
        }
        stack.extend(leading(element));
    }
    Ok(())
}
