//! Custodia Database — SurrealDB connection management, schema, and
//! implementations of the `custodia-core` store and provider traits.
//!
//! This crate provides:
//! - Connection management ([`DbConfig`], [`DbManager`])
//! - Schema initialization and migrations ([`run_migrations`])
//! - Repository implementations ([`repository`])
//! - A SurrealDB-backed identity provider stand-in ([`provider`])
//! - Error types ([`DbError`])

mod connection;
mod error;
pub mod provider;
pub mod repository;
mod schema;

pub use connection::{DbConfig, DbManager};
pub use error::DbError;
pub use schema::{run_migrations, schema_v1};
