//! JSON file store - the CLI's persistent backend.
//!
//! The whole catalog (genres and known category ids) lives in one JSON
//! document. It is read once on open and served from memory. A mutation is
//! written to disk first and only then applied in memory, so a failed write
//! leaves every clone of the store seeing the previous state.

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use catalog_core::{
    application::{
        ApplicationError,
        ports::{CategoryGateway, GenreGateway},
    },
    domain::{CategoryId, Genre, GenreId, Pagination, SearchQuery},
    error::{CatalogError, CatalogResult},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::{InMemoryCategoryStore, InMemoryGenreStore};

/// On-disk document layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub categories: Vec<CategoryId>,
}

impl CatalogSnapshot {
    fn put_genre(&mut self, genre: &Genre) {
        match self.genres.iter_mut().find(|g| g.id() == genre.id()) {
            Some(slot) => *slot = genre.clone(),
            None => self.genres.push(genre.clone()),
        }
    }

    fn remove_genre(&mut self, id: &GenreId) {
        self.genres.retain(|g| g.id() != id);
    }

    fn put_category(&mut self, id: &CategoryId) {
        if let Err(at) = self.categories.binary_search(id) {
            self.categories.insert(at, id.clone());
        }
    }
}

#[derive(Debug, Error)]
enum SnapshotError {
    #[error("I/O failure: {0}")]
    Io(#[from] io::Error),

    #[error("invalid catalog document: {0}")]
    Json(#[from] serde_json::Error),
}

impl SnapshotError {
    fn at(self, path: &Path) -> CatalogError {
        ApplicationError::Persistence {
            path: path.to_path_buf(),
            reason: self.to_string(),
        }
        .into()
    }
}

/// Genre store and category oracle backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: Arc<PathBuf>,
    genres: InMemoryGenreStore,
    categories: InMemoryCategoryStore,
    write_lock: Arc<Mutex<()>>,
}

impl JsonFileStore {
    /// Open the document at `path`. A missing file is an empty catalog; it
    /// is created on the first write.
    pub fn open(path: impl Into<PathBuf>) -> CatalogResult<Self> {
        let path = path.into();
        let snapshot = Self::read(&path).map_err(|e| e.at(&path))?;

        debug!(
            path = %path.display(),
            genres = snapshot.genres.len(),
            categories = snapshot.categories.len(),
            "Catalog loaded"
        );

        Ok(Self {
            genres: InMemoryGenreStore::from_genres(snapshot.genres),
            categories: InMemoryCategoryStore::with_ids(snapshot.categories),
            path: Arc::new(path),
            write_lock: Arc::new(Mutex::new(())),
        })
    }

    /// Create an empty document at `path` unless one already exists.
    ///
    /// Returns `true` when a file was written.
    pub fn initialize(path: &Path) -> CatalogResult<bool> {
        if path.exists() {
            return Ok(false);
        }
        Self::write(path, &CatalogSnapshot::default()).map_err(|e| e.at(path))?;
        info!(path = %path.display(), "Catalog file created");
        Ok(true)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Register a category id and persist. Returns `false` if it was known.
    pub fn add_category(&self, id: impl Into<CategoryId>) -> CatalogResult<bool> {
        let id = id.into();
        if self.categories.list()?.contains(&id) {
            return Ok(false);
        }
        self.commit(
            |snapshot| snapshot.put_category(&id),
            || self.categories.insert(id.clone()),
        )
    }

    /// All known category ids, sorted.
    pub fn categories(&self) -> CatalogResult<Vec<CategoryId>> {
        self.categories.list()
    }

    /// Current state as it would be written to disk.
    pub fn snapshot(&self) -> CatalogResult<CatalogSnapshot> {
        let mut genres = self.genres.snapshot()?;
        genres.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.id().cmp(b.id()))
        });
        Ok(CatalogSnapshot {
            saved_at: Some(Utc::now()),
            genres,
            categories: self.categories.list()?,
        })
    }

    /// Write the current state with `edit` applied, then run `apply` to make
    /// the same change in memory. Memory is untouched if the write fails.
    fn commit<T>(
        &self,
        edit: impl FnOnce(&mut CatalogSnapshot),
        apply: impl FnOnce() -> CatalogResult<T>,
    ) -> CatalogResult<T> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| ApplicationError::StoreLockError)?;
        let mut snapshot = self.snapshot()?;
        edit(&mut snapshot);
        Self::write(&self.path, &snapshot).map_err(|e| e.at(&self.path))?;
        debug!(path = %self.path.display(), genres = snapshot.genres.len(), "Catalog saved");
        apply()
    }

    fn read(path: &Path) -> Result<CatalogSnapshot, SnapshotError> {
        match fs::read_to_string(path) {
            Ok(content) if content.trim().is_empty() => Ok(CatalogSnapshot::default()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(CatalogSnapshot::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Write through a sibling temp file and rename, so a crash never
    /// leaves a half-written document.
    fn write(path: &Path, snapshot: &CatalogSnapshot) -> Result<(), SnapshotError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(snapshot)?;
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, json)?;
        fs::rename(&staging, path)?;
        Ok(())
    }
}

impl GenreGateway for JsonFileStore {
    fn create(&self, genre: &Genre) -> CatalogResult<Genre> {
        self.commit(|s| s.put_genre(genre), || self.genres.create(genre))
    }

    fn update(&self, genre: &Genre) -> CatalogResult<Genre> {
        self.commit(|s| s.put_genre(genre), || self.genres.update(genre))
    }

    fn find_by_id(&self, id: &GenreId) -> CatalogResult<Option<Genre>> {
        self.genres.find_by_id(id)
    }

    fn delete_by_id(&self, id: &GenreId) -> CatalogResult<()> {
        if self.genres.find_by_id(id)?.is_none() {
            return Ok(());
        }
        self.commit(|s| s.remove_genre(id), || self.genres.delete_by_id(id))
    }

    fn find_all(&self, query: &SearchQuery) -> CatalogResult<Pagination<Genre>> {
        self.genres.find_all(query)
    }
}

impl CategoryGateway for JsonFileStore {
    fn exists_by_ids(&self, ids: &[CategoryId]) -> CatalogResult<Vec<CategoryId>> {
        self.categories.exists_by_ids(ids)
    }
}
