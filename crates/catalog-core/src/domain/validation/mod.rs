//! Validation primitives.
//!
//! Rules never fail fast: they append to a [`Notification`], and the caller
//! decides what to do once every source has reported.

pub mod notification;
pub mod validator;

pub use notification::{Notification, ValidationError};
pub use validator::{GenreValidator, NAME_MAX_LENGTH, NAME_MIN_LENGTH};
