//! List Genres - one page of lightweight views.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{
    application::ports::GenreGateway,
    domain::{Genre, Pagination, SearchQuery},
    error::CatalogResult,
};

/// Listing view of a genre; omits `updated_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreListOutput {
    pub id: String,
    pub name: String,
    pub is_active: bool,
    pub categories: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Genre> for GenreListOutput {
    fn from(genre: Genre) -> Self {
        Self {
            id: genre.id().to_string(),
            name: genre.name().to_string(),
            is_active: genre.is_active(),
            categories: genre
                .categories()
                .iter()
                .map(|id| id.as_str().to_string())
                .collect(),
            created_at: genre.created_at(),
            deleted_at: genre.deleted_at(),
        }
    }
}

pub struct ListGenresUseCase {
    gateway: Box<dyn GenreGateway>,
}

impl ListGenresUseCase {
    pub fn new(gateway: Box<dyn GenreGateway>) -> Self {
        Self { gateway }
    }

    /// Fetch one page. Filtering, sorting and paging are the store's job.
    #[instrument(skip_all, fields(page = query.page, per_page = query.per_page, sort = %query.sort))]
    pub fn execute(&self, query: SearchQuery) -> CatalogResult<Pagination<GenreListOutput>> {
        let page = self.gateway.find_all(&query)?;
        debug!(total = page.total, returned = page.items.len(), "Genres listed");
        Ok(page.map(GenreListOutput::from))
    }
}
