//! Command handlers, one module per top-level subcommand.
//!
//! Handlers translate arguments into use-case inputs, run them and render
//! the result. No business rules live here.

pub mod category;
pub mod completions;
pub mod config;
pub mod genre;
pub mod init;
