//! Process-wide store of loaded dialect grammars.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use super::bundle::GrammarBundle;
use super::error::GrammarError;
use crate::base::Name;

/// Loaded grammar bundles keyed by dialect name.
///
/// Readers never block each other. A bundle is built outside the lock, so
/// two threads racing to load the same dialect may both build it; the first
/// one stored wins and the other is dropped.
#[derive(Debug, Default)]
pub struct GrammarRegistry {
    bundles: RwLock<FxHashMap<Name, Arc<GrammarBundle>>>,
}

impl GrammarRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, dialect: &str) -> Option<Arc<GrammarBundle>> {
        self.bundles.read().get(dialect).cloned()
    }

    /// Store a bundle under its dialect name, replacing any previous one
    pub fn insert(&self, bundle: GrammarBundle) -> Arc<GrammarBundle> {
        let bundle = Arc::new(bundle);
        let previous = self
            .bundles
            .write()
            .insert(bundle.dialect().clone(), Arc::clone(&bundle));
        if previous.is_some() {
            tracing::debug!(dialect = %bundle.dialect(), "replaced grammar bundle");
        }
        bundle
    }

    /// Get the bundle of `dialect`, building it with `build` if absent
    pub fn get_or_build<F>(&self, dialect: &str, build: F) -> Result<Arc<GrammarBundle>, GrammarError>
    where
        F: FnOnce() -> Result<GrammarBundle, GrammarError>,
    {
        if let Some(bundle) = self.get(dialect) {
            return Ok(bundle);
        }

        let built = Arc::new(build()?);
        let mut bundles = self.bundles.write();
        let stored = bundles
            .entry(Name::new(dialect))
            .or_insert_with(|| Arc::clone(&built));
        if !Arc::ptr_eq(stored, &built) {
            tracing::trace!(dialect, "discarding concurrently built grammar bundle");
        }
        Ok(Arc::clone(stored))
    }

    pub fn remove(&self, dialect: &str) -> Option<Arc<GrammarBundle>> {
        self.bundles.write().remove(dialect)
    }

    /// Names of every loaded dialect, sorted
    pub fn dialects(&self) -> Vec<Name> {
        let mut dialects: Vec<Name> = self.bundles.read().keys().cloned().collect();
        dialects.sort();
        dialects
    }
}
