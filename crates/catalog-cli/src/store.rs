//! Wiring from configuration to concrete store adapters.

use std::path::PathBuf;

use tracing::debug;

use catalog_adapters::{InMemoryCategoryStore, InMemoryGenreStore, JsonFileStore};
use catalog_core::{
    application::ports::{CategoryGateway, GenreGateway},
    domain::CategoryId,
};

use crate::{
    cli::GlobalArgs,
    config::{AppConfig, StorageBackend},
    error::CliResult,
};

/// The stores backing one CLI invocation.
///
/// Both variants are cheap to clone and clones share state, so each use case
/// can own its own boxed handle.
#[derive(Debug, Clone)]
pub enum Stores {
    Memory {
        genres: InMemoryGenreStore,
        categories: InMemoryCategoryStore,
    },
    File(JsonFileStore),
}

impl Stores {
    /// Open the configured backend. `--data-file` forces the file backend.
    pub fn open(global: &GlobalArgs, config: &AppConfig) -> CliResult<Self> {
        match (&global.data_file, config.storage.backend) {
            (Some(path), _) => Self::file(path.clone()),
            (None, StorageBackend::File) => Self::file(config.storage.data_file.clone()),
            (None, StorageBackend::Memory) => {
                debug!("Using in-memory stores");
                Ok(Self::Memory {
                    genres: InMemoryGenreStore::new(),
                    categories: InMemoryCategoryStore::new(),
                })
            }
        }
    }

    fn file(path: PathBuf) -> CliResult<Self> {
        debug!(path = %path.display(), "Using JSON file store");
        Ok(Self::File(JsonFileStore::open(path)?))
    }

    pub fn genres(&self) -> Box<dyn GenreGateway> {
        match self {
            Self::Memory { genres, .. } => Box::new(genres.clone()),
            Self::File(store) => Box::new(store.clone()),
        }
    }

    pub fn categories(&self) -> Box<dyn CategoryGateway> {
        match self {
            Self::Memory { categories, .. } => Box::new(categories.clone()),
            Self::File(store) => Box::new(store.clone()),
        }
    }

    /// Register a category id. Returns `false` if it was already known.
    pub fn add_category(&self, id: &str) -> CliResult<bool> {
        let added = match self {
            Self::Memory { categories, .. } => categories.insert(id)?,
            Self::File(store) => store.add_category(id)?,
        };
        Ok(added)
    }

    pub fn list_categories(&self) -> CliResult<Vec<CategoryId>> {
        let ids = match self {
            Self::Memory { categories, .. } => categories.list()?,
            Self::File(store) => store.categories()?,
        };
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use tempfile::TempDir;

    fn global(data_file: Option<PathBuf>) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: true,
            config: None,
            data_file,
            output_format: OutputFormat::Plain,
        }
    }

    #[test]
    fn data_file_flag_selects_file_backend() {
        let dir = TempDir::new().unwrap();
        let mut config = AppConfig::default();
        config.storage.backend = StorageBackend::Memory;

        let stores = Stores::open(&global(Some(dir.path().join("c.json"))), &config).unwrap();

        assert!(matches!(stores, Stores::File(_)));
    }

    #[test]
    fn memory_backend_keeps_categories_for_the_invocation() {
        let mut config = AppConfig::default();
        config.storage.backend = StorageBackend::Memory;
        let stores = Stores::open(&global(None), &config).unwrap();

        assert!(stores.add_category("c1").unwrap());
        assert!(!stores.add_category("c1").unwrap());
        assert_eq!(stores.list_categories().unwrap(), [CategoryId::from("c1")]);
        assert_eq!(
            stores
                .categories()
                .exists_by_ids(&[CategoryId::from("c1")])
                .unwrap()
                .len(),
            1
        );
    }
}
