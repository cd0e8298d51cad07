//! Genre use cases.
//!
//! Create and Update merge two independent error sources into one report:
//! the referential check against the category oracle runs first, then the
//! aggregate's own field rules. Nothing reaches the store unless the merged
//! report is empty.

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
mod support;
pub mod update;

pub use create::{CreateGenreCommand, CreateGenreOutput, CreateGenreUseCase};
pub use delete::DeleteGenreUseCase;
pub use get::{GenreOutput, GetGenreByIdUseCase};
pub use list::{GenreListOutput, ListGenresUseCase};
pub use update::{UpdateGenreCommand, UpdateGenreOutput, UpdateGenreUseCase};
