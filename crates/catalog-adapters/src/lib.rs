//! Infrastructure adapters for the catalog.
//!
//! This crate implements the ports defined in `catalog-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod category_store;
pub mod genre_store;
pub mod json_file;
mod search;

// Re-export commonly used adapters
pub use category_store::InMemoryCategoryStore;
pub use genre_store::InMemoryGenreStore;
pub use json_file::{CatalogSnapshot, JsonFileStore};
