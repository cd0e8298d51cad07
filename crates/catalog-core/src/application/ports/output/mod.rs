//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the use cases need from external systems.
//! The `catalog-adapters` crate provides implementations. Calls are
//! synchronous and treated as blocking; the core never retries them.

use crate::domain::{CategoryId, Genre, GenreId, Pagination, SearchQuery};
use crate::error::CatalogResult;

/// Port for genre persistence.
///
/// Implemented by:
/// - `catalog_adapters::InMemoryGenreStore` (testing, embedding)
/// - `catalog_adapters::JsonFileStore` (CLI)
#[cfg_attr(test, mockall::automock)]
pub trait GenreGateway: Send + Sync {
    /// Persist a new genre and return the stored state.
    fn create(&self, genre: &Genre) -> CatalogResult<Genre>;

    /// Persist changes to an existing genre and return the stored state.
    fn update(&self, genre: &Genre) -> CatalogResult<Genre>;

    /// Look a genre up by id. `Ok(None)` when absent.
    fn find_by_id(&self, id: &GenreId) -> CatalogResult<Option<Genre>>;

    /// Delete by id. Deleting an unknown id succeeds and does nothing.
    fn delete_by_id(&self, id: &GenreId) -> CatalogResult<()>;

    /// One page of genres matching the query.
    fn find_all(&self, query: &SearchQuery) -> CatalogResult<Pagination<Genre>>;
}

/// Port answering "which of these categories exist?".
///
/// Implemented by:
/// - `catalog_adapters::InMemoryCategoryStore`
/// - `catalog_adapters::JsonFileStore`
#[cfg_attr(test, mockall::automock)]
pub trait CategoryGateway: Send + Sync {
    /// The subset of `ids` that exist. Order is not significant.
    fn exists_by_ids(&self, ids: &[CategoryId]) -> CatalogResult<Vec<CategoryId>>;
}
