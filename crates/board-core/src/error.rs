//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A referenced entity does not exist. The message is client-facing.
    #[error("{0}")]
    NotFound(&'static str),

    #[error(transparent)]
    Repository(#[from] RepoError),
}

impl DomainError {
    pub const NO_SUCH_USER: &'static str = "There is no such user.";
    pub const NO_SUCH_POST: &'static str = "There is no such post.";

    pub fn no_such_user() -> Self {
        Self::NotFound(Self::NO_SUCH_USER)
    }

    pub fn no_such_post() -> Self {
        Self::NotFound(Self::NO_SUCH_POST)
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
