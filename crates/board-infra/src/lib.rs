//! # Board Infrastructure
//!
//! Concrete implementations of the repository ports defined in `board-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL persistence via SeaORM
//!
//! Without `postgres` only the in-memory repositories are built.

pub mod database;

// Re-exports - In-Memory
pub use database::{InMemoryPostRepository, InMemoryUserRepository};

// Re-exports - PostgreSQL
#[cfg(feature = "postgres")]
pub use database::{PostgresPostRepository, PostgresUserRepository};
