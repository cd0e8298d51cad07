//! Update Genre - load, re-validate, check category references, persist.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use super::support::{store_failure, to_category_ids, validate_categories};
use crate::{
    application::ports::{CategoryGateway, GenreGateway},
    domain::{DomainError, Genre, GenreId, Notification},
    error::CatalogResult,
};

/// Input for [`UpdateGenreUseCase`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateGenreCommand {
    pub id: String,
    pub name: Option<String>,
    pub is_active: bool,
    pub categories: Vec<String>,
}

impl UpdateGenreCommand {
    /// Build a command; a missing active flag means active.
    pub fn with(
        id: impl Into<String>,
        name: Option<&str>,
        is_active: Option<bool>,
        categories: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.map(str::to_owned),
            is_active: is_active.unwrap_or(true),
            categories,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateGenreOutput {
    pub id: String,
}

impl From<&Genre> for UpdateGenreOutput {
    fn from(genre: &Genre) -> Self {
        Self {
            id: genre.id().to_string(),
        }
    }
}

pub struct UpdateGenreUseCase {
    category_gateway: Box<dyn CategoryGateway>,
    gateway: Box<dyn GenreGateway>,
}

impl UpdateGenreUseCase {
    pub fn new(category_gateway: Box<dyn CategoryGateway>, gateway: Box<dyn GenreGateway>) -> Self {
        Self {
            category_gateway,
            gateway,
        }
    }

    /// Update an existing genre.
    ///
    /// An unknown id fails with not-found before anything else runs. The
    /// category list replaces the stored one; it is not appended to.
    #[instrument(skip_all, fields(genre_id = %command.id, categories = command.categories.len()))]
    pub fn execute(&self, command: UpdateGenreCommand) -> CatalogResult<UpdateGenreOutput> {
        let id = GenreId::from(command.id.as_str());
        let mut genre = self
            .gateway
            .find_by_id(&id)?
            .ok_or_else(|| DomainError::not_found(Genre::ENTITY, &id))?;

        let categories = to_category_ids(&command.categories);
        let mut notification = Notification::create();

        notification.append_all(validate_categories(
            self.category_gateway.as_ref(),
            &categories,
        )?);
        notification.capture(|| {
            genre
                .update(command.name.as_deref(), command.is_active, Some(categories))
                .map(|_| ())
        })?;

        if notification.has_error() {
            warn!(errors = notification.len(), "Genre update rejected");
            return Err(DomainError::validation(
                format!("Could not update Genre ({})", id),
                notification,
            )
            .into());
        }

        let updated = self
            .gateway
            .update(&genre)
            .map_err(|e| store_failure("Could not persist Genre", e))?;

        info!("Genre updated");
        Ok(UpdateGenreOutput::from(&updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{
        ApplicationError,
        ports::{MockCategoryGateway, MockGenreGateway},
    };
    use crate::domain::CategoryId;
    use crate::error::CatalogError;

    fn use_case(categories: MockCategoryGateway, genres: MockGenreGateway) -> UpdateGenreUseCase {
        UpdateGenreUseCase::new(Box::new(categories), Box::new(genres))
    }

    fn messages(err: &CatalogError) -> Vec<String> {
        err.notification()
            .expect("validation failure")
            .errors()
            .iter()
            .map(|e| e.message().to_string())
            .collect()
    }

    fn strings(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn stored_genre() -> Genre {
        let mut genre = Genre::new_genre(Some("acao"), true).unwrap();
        genre.add_category(CategoryId::from("old"));
        genre
    }

    fn genres_holding(genre: Genre) -> MockGenreGateway {
        let mut genres = MockGenreGateway::new();
        let id = genre.id().clone();
        genres
            .expect_find_by_id()
            .withf(move |candidate: &GenreId| *candidate == id)
            .times(1)
            .returning(move |_| Ok(Some(genre.clone())));
        genres
    }

    #[test]
    fn updates_genre_and_replaces_categories() {
        let existing = stored_genre();
        let id = existing.id().to_string();
        let created_at = existing.created_at();
        let updated_before = existing.updated_at();

        let mut categories = MockCategoryGateway::new();
        categories
            .expect_exists_by_ids()
            .times(1)
            .returning(|ids| Ok(ids.to_vec()));

        let mut genres = genres_holding(existing);
        genres
            .expect_update()
            .withf(move |g: &Genre| {
                g.name() == "Ação"
                    && !g.is_active()
                    && g.categories() == ["123", "456"].map(CategoryId::from).as_slice()
                    && g.created_at() == created_at
                    && g.updated_at() >= updated_before
            })
            .times(1)
            .returning(|g| Ok(g.clone()));

        let output = use_case(categories, genres)
            .execute(UpdateGenreCommand::with(
                id.clone(),
                Some("Ação"),
                Some(false),
                strings(&["123", "456"]),
            ))
            .unwrap();

        assert_eq!(output.id, id);
    }

    #[test]
    fn unknown_id_is_not_found_and_never_updates() {
        let mut categories = MockCategoryGateway::new();
        categories.expect_exists_by_ids().never();
        let mut genres = MockGenreGateway::new();
        genres.expect_find_by_id().times(1).returning(|_| Ok(None));
        genres.expect_update().never();

        let err = use_case(categories, genres)
            .execute(UpdateGenreCommand::with(
                "123",
                Some("Ação"),
                Some(true),
                strings(&["1"]),
            ))
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Genre with ID 123 was not found");
    }

    #[test]
    fn invalid_name_is_rejected_before_persistence() {
        let existing = stored_genre();
        let id = existing.id().to_string();
        let mut genres = genres_holding(existing);
        genres.expect_update().never();

        let err = use_case(MockCategoryGateway::new(), genres)
            .execute(UpdateGenreCommand::with(id.clone(), None, Some(true), vec![]))
            .unwrap_err();

        assert_eq!(messages(&err), ["'name' should not be null"]);
        assert!(err.to_string().starts_with(&format!("Could not update Genre ({id})")));
    }

    #[test]
    fn missing_categories_and_invalid_name_are_reported_together() {
        let existing = stored_genre();
        let id = existing.id().to_string();

        let mut categories = MockCategoryGateway::new();
        categories
            .expect_exists_by_ids()
            .times(1)
            .returning(|_| Ok(vec![]));
        let mut genres = genres_holding(existing);
        genres.expect_update().never();

        let err = use_case(categories, genres)
            .execute(UpdateGenreCommand::with(
                id,
                Some(""),
                Some(true),
                strings(&["123", "456"]),
            ))
            .unwrap_err();

        assert_eq!(
            messages(&err),
            [
                "Some categories could not be found: 123,456",
                "'name' should not be empty"
            ]
        );
    }

    #[test]
    fn store_failure_is_wrapped_as_validation_failure() {
        let existing = stored_genre();
        let id = existing.id().to_string();
        let mut genres = genres_holding(existing);
        genres.expect_update().times(1).returning(|_| {
            Err(ApplicationError::StoreFailure {
                reason: "Gateway error".into(),
            }
            .into())
        });

        let err = use_case(MockCategoryGateway::new(), genres)
            .execute(UpdateGenreCommand::with(id, Some("Ação"), Some(true), vec![]))
            .unwrap_err();

        assert_eq!(messages(&err), ["Store operation failed: Gateway error"]);
    }

    #[test]
    fn find_failure_propagates_unwrapped() {
        let mut genres = MockGenreGateway::new();
        genres
            .expect_find_by_id()
            .returning(|_| Err(ApplicationError::StoreLockError.into()));
        genres.expect_update().never();

        let err = use_case(MockCategoryGateway::new(), genres)
            .execute(UpdateGenreCommand::with("1", Some("Ação"), Some(true), vec![]))
            .unwrap_err();

        assert_eq!(err, CatalogError::Application(ApplicationError::StoreLockError));
    }
}
