//! Catalog Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the catalog
//! administration tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          catalog-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │            Use Cases                    │
//! │  (Create/Update/Get/Delete/List Genre)  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: GenreGateway, Categories)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   catalog-adapters (Infrastructure)     │
//! │  (InMemoryGenreStore, JsonFileStore)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Genre, Notification, GenreValidator)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use catalog_core::application::{CreateGenreCommand, CreateGenreUseCase};
//!
//! // Gateways are injected by the caller (see `catalog-adapters`).
//! let use_case = CreateGenreUseCase::new(categories, genres);
//! let output = use_case
//!     .execute(CreateGenreCommand::with(Some("Action"), Some(true), vec!["123".into()]))
//!     .unwrap();
//! println!("created {}", output.id);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CreateGenreCommand, CreateGenreUseCase, DeleteGenreUseCase, GetGenreByIdUseCase,
        ListGenresUseCase, UpdateGenreCommand, UpdateGenreUseCase,
        ports::{CategoryGateway, GenreGateway},
    };
    pub use crate::domain::{
        CategoryId, Direction, Genre, GenreId, Notification, Pagination, SearchQuery,
        ValidationError,
    };
    pub use crate::error::{CatalogError, CatalogResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
