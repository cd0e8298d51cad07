//! Genre store adapters.

mod memory;

pub use memory::InMemoryGenreStore;
