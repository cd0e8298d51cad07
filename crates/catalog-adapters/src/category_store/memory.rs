//! In-memory category oracle.

use std::{
    collections::BTreeSet,
    sync::{Arc, RwLock},
};

use catalog_core::{
    application::{ApplicationError, ports::CategoryGateway},
    domain::CategoryId,
    error::CatalogResult,
};

/// Thread-safe set of known category ids.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCategoryStore {
    inner: Arc<RwLock<BTreeSet<CategoryId>>>,
}

impl InMemoryCategoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that knows exactly `ids`.
    pub fn with_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CategoryId>,
    {
        Self {
            inner: Arc::new(RwLock::new(ids.into_iter().map(Into::into).collect())),
        }
    }

    /// Register a category id. Returns `false` if it was already known.
    pub fn insert(&self, id: impl Into<CategoryId>) -> CatalogResult<bool> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.insert(id.into()))
    }

    /// All known ids, sorted.
    pub fn list(&self) -> CatalogResult<Vec<CategoryId>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.iter().cloned().collect())
    }
}

impl CategoryGateway for InMemoryCategoryStore {
    fn exists_by_ids(&self, ids: &[CategoryId]) -> CatalogResult<Vec<CategoryId>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(ids.iter().filter(|id| inner.contains(*id)).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_only_known_ids_in_request_order() {
        let store = InMemoryCategoryStore::with_ids(["a", "c"]);

        let found = store
            .exists_by_ids(&["c", "b", "a"].map(CategoryId::from))
            .unwrap();

        assert_eq!(found, ["c", "a"].map(CategoryId::from));
    }

    #[test]
    fn insert_reports_new_ids() {
        let store = InMemoryCategoryStore::new();

        assert!(store.insert("a").unwrap());
        assert!(!store.insert("a").unwrap());
        assert_eq!(store.list().unwrap(), [CategoryId::from("a")]);
    }

    #[test]
    fn empty_store_knows_nothing() {
        let store = InMemoryCategoryStore::new();
        assert!(store.exists_by_ids(&[CategoryId::from("a")]).unwrap().is_empty());
    }
}
