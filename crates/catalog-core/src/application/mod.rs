//! Application layer for the catalog.
//!
//! This layer contains:
//! - **Use cases**: orchestration of genre create/update/get/delete/list
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but holds no business
//! rules itself. Field rules live in `crate::domain`; the only check done here
//! is referential (do the requested categories exist?).

pub mod error;
pub mod ports;
pub mod use_cases;

pub use use_cases::genre::{
    CreateGenreCommand, CreateGenreOutput, CreateGenreUseCase, DeleteGenreUseCase,
    GenreListOutput, GenreOutput, GetGenreByIdUseCase, ListGenresUseCase, UpdateGenreCommand,
    UpdateGenreOutput, UpdateGenreUseCase,
};

// Re-export port traits (for adapter implementation)
pub use ports::{CategoryGateway, GenreGateway};

pub use error::ApplicationError;
