//! Get Genre by id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{
    application::ports::GenreGateway,
    domain::{DomainError, Genre, GenreId},
    error::CatalogResult,
};

/// Full view of a stored genre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreOutput {
    pub id: String,
    pub name: String,
    pub is_active: bool,
    pub categories: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<&Genre> for GenreOutput {
    fn from(genre: &Genre) -> Self {
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
            updated_at: genre.updated_at(),
            deleted_at: genre.deleted_at(),
        }
    }
}

pub struct GetGenreByIdUseCase {
    gateway: Box<dyn GenreGateway>,
}

impl GetGenreByIdUseCase {
    pub fn new(gateway: Box<dyn GenreGateway>) -> Self {
        Self { gateway }
    }

    #[instrument(skip_all, fields(genre_id = %id))]
    pub fn execute(&self, id: &str) -> CatalogResult<GenreOutput> {
        let id = GenreId::from(id);
        let genre = self
            .gateway
            .find_by_id(&id)?
            .ok_or_else(|| DomainError::not_found(Genre::ENTITY, &id))?;

        debug!("Genre loaded");
        Ok(GenreOutput::from(&genre))
    }
}
