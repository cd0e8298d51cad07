//! Create Genre - validate, check category references, persist.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use super::support::{store_failure, to_category_ids, validate_categories};
use crate::{
    application::ports::{CategoryGateway, GenreGateway},
    domain::{DomainError, Genre, Notification},
    error::CatalogResult,
};

/// Input for [`CreateGenreUseCase`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGenreCommand {
    pub name: Option<String>,
    pub is_active: bool,
    pub categories: Vec<String>,
}

impl CreateGenreCommand {
    /// Build a command; a missing active flag means active.
    pub fn with(name: Option<&str>, is_active: Option<bool>, categories: Vec<String>) -> Self {
        Self {
            name: name.map(str::to_owned),
            is_active: is_active.unwrap_or(true),
            categories,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGenreOutput {
    pub id: String,
}

impl From<&Genre> for CreateGenreOutput {
    fn from(genre: &Genre) -> Self {
        Self {
            id: genre.id().to_string(),
        }
    }
}

pub struct CreateGenreUseCase {
    category_gateway: Box<dyn CategoryGateway>,
    gateway: Box<dyn GenreGateway>,
}

impl CreateGenreUseCase {
    pub fn new(category_gateway: Box<dyn CategoryGateway>, gateway: Box<dyn GenreGateway>) -> Self {
        Self {
            category_gateway,
            gateway,
        }
    }

    /// Create a genre.
    ///
    /// Referential errors are collected first, then the aggregate's field
    /// errors; if either produced anything, all of them are returned in one
    /// validation failure and the store is not called.
    #[instrument(skip_all, fields(categories = command.categories.len()))]
    pub fn execute(&self, command: CreateGenreCommand) -> CatalogResult<CreateGenreOutput> {
        let categories = to_category_ids(&command.categories);
        let mut notification = Notification::create();

        notification.append_all(validate_categories(
            self.category_gateway.as_ref(),
            &categories,
        )?);
        let genre = notification
            .capture(|| Genre::new_genre(command.name.as_deref(), command.is_active))?;

        let mut genre = match genre {
            Some(genre) if !notification.has_error() => genre,
            _ => {
                warn!(errors = notification.len(), "Genre rejected");
                return Err(
                    DomainError::validation("Could not create Aggregate Genre", notification)
                        .into(),
                );
            }
        };

        genre.add_categories(categories);

        let created = self
            .gateway
            .create(&genre)
            .map_err(|e| store_failure("Could not persist Genre", e))?;

        info!(genre_id = %created.id(), "Genre created");
        Ok(CreateGenreOutput::from(&created))
    }
}
