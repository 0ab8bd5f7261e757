//! # User Infrastructure
//!
//! Storage adapters for the user repository port.

pub mod database;

pub use database::{create_pool, ensure_schema, InMemoryUserRepository, PgUserRepository};
