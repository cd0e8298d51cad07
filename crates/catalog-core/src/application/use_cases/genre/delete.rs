//! Delete Genre by id.

use tracing::{info, instrument};

use crate::{application::ports::GenreGateway, domain::GenreId, error::CatalogResult};

pub struct DeleteGenreUseCase {
    gateway: Box<dyn GenreGateway>,
}

impl DeleteGenreUseCase {
    pub fn new(gateway: Box<dyn GenreGateway>) -> Self {
        Self { gateway }
    }

    /// Delete a genre. Deleting an unknown id is not an error.
    #[instrument(skip_all, fields(genre_id = %id))]
    pub fn execute(&self, id: &str) -> CatalogResult<()> {
        self.gateway.delete_by_id(&GenreId::from(id))?;
        info!("Genre deleted");
        Ok(())
    }
}
