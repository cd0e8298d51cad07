//! In-memory genre store.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use catalog_core::{
    application::{ApplicationError, ports::GenreGateway},
    domain::{Genre, GenreId, Pagination, SearchQuery},
    error::CatalogResult,
};
use tracing::trace;

use crate::search;

/// Thread-safe in-memory genre store.
///
/// Clones share the same map, so one store can back several use cases.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGenreStore {
    inner: Arc<RwLock<HashMap<GenreId, Genre>>>,
}

impl InMemoryGenreStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with `genres`.
    pub fn from_genres(genres: impl IntoIterator<Item = Genre>) -> Self {
        let map = genres
            .into_iter()
            .map(|genre| (genre.id().clone(), genre))
            .collect();
        Self {
            inner: Arc::new(RwLock::new(map)),
        }
    }

    /// Copy of every stored genre, in no particular order.
    pub fn snapshot(&self) -> CatalogResult<Vec<Genre>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.values().cloned().collect())
    }

    /// Get the number of genres.
    pub fn len(&self) -> CatalogResult<usize> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.len())
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> CatalogResult<bool> {
        Ok(self.len()? == 0)
    }

    fn upsert(&self, genre: &Genre) -> CatalogResult<Genre> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.insert(genre.id().clone(), genre.clone());
        trace!(genre_id = %genre.id(), "Genre stored");
        Ok(genre.clone())
    }
}

impl GenreGateway for InMemoryGenreStore {
    fn create(&self, genre: &Genre) -> CatalogResult<Genre> {
        self.upsert(genre)
    }

    fn update(&self, genre: &Genre) -> CatalogResult<Genre> {
        self.upsert(genre)
    }

    fn find_by_id(&self, id: &GenreId) -> CatalogResult<Option<Genre>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.get(id).cloned())
    }

    fn delete_by_id(&self, id: &GenreId) -> CatalogResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.remove(id);
        Ok(())
    }

    fn find_all(&self, query: &SearchQuery) -> CatalogResult<Pagination<Genre>> {
        search::paginate(self.snapshot()?, query)
    }
}
