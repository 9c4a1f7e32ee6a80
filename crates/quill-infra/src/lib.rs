//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//! Posts are persisted through SeaORM; PostgreSQL and SQLite are both
//! supported, selected by the connection URL.

pub mod database;

pub use database::{DatabaseConfig, SeaOrmPostRepository, connect};
