//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `catalog-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by use cases, implemented by infrastructure
//!   - `GenreGateway`: genre persistence and search
//!   - `CategoryGateway`: category existence oracle
//!
//! - **Driving (Input) Ports**: the use case structs themselves, called by the CLI

pub mod output;

pub use output::{CategoryGateway, GenreGateway};

#[cfg(test)]
pub use output::{MockCategoryGateway, MockGenreGateway};
