//! Grammar model
//!
//! A dialect grammar is an arena of [`Element`]s addressed by [`ElementId`].
//! Rules are built from declarative [`ElementDef`] trees by the
//! [`GrammarBuilder`], which resolves every name up front: a
//! [`GrammarBundle`] never contains a dangling reference.
//!
//! Each element lazily owns a [`LookupCache`] with its first-possible and
//! first-required token sets. Caches and the sorted order of sortable one-of
//! elements are computed once and are safe to race on from many threads.
//!
//! [`ElementId`]: crate::base::ElementId

mod ambiguity;
mod builder;
mod bundle;
mod definition;
mod element;
mod error;
mod lookup;
mod registry;

pub use ambiguity::AmbiguityWarning;
pub use builder::GrammarBuilder;
pub use bundle::GrammarBundle;
pub use definition::{ChildDef, ElementDef};
pub use element::{Element, ElementKind, ElementRef, IdentifierKind, NodeKind};
pub use error::GrammarError;
pub use lookup::LookupCache;
pub use registry::GrammarRegistry;
