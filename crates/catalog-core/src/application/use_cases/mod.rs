//! Use cases - orchestrate the domain and the driven ports.
//!
//! Each use case is a small struct holding the gateways it needs, with a
//! single `execute` entry point.

pub mod genre;
