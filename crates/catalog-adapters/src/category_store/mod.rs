//! Category oracle adapters.

mod memory;

pub use memory::InMemoryCategoryStore;
