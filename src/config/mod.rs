//! Configuration module
//!
//! Provides types and parsing for the optional `sprites.toml` file.

pub mod loader;
pub mod schema;

pub use schema::*;
