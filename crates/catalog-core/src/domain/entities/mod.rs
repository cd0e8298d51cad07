pub mod genre;

pub use crate::domain::DomainError;
pub use genre::Genre;
