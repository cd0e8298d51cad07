//! Core domain layer for the catalog.
//!
//! This module contains pure business logic with no I/O. Persistence and
//! category lookups are reached through ports (traits) defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No logging**: Observability belongs to the application and CLI layers
//! - **Validated aggregates**: `Genre` can only be built through factories
//!   that run the field validator first
//! - **Accumulated errors**: validation writes into a `Notification` instead
//!   of stopping at the first failure
pub mod entities;
pub mod error;
pub mod pagination;
pub mod validation;
pub mod value_objects;

pub use entities::genre::Genre;
pub use error::{DomainError, ErrorCategory};
pub use pagination::{DEFAULT_PER_PAGE, DEFAULT_SORT, Direction, Pagination, SearchQuery};
pub use validation::{GenreValidator, Notification, ValidationError};
pub use value_objects::{CategoryId, GenreId};
