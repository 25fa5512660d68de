//! Application state - shared across all handlers.

use std::sync::Arc;

use board_core::ports::{PostRepository, UserRepository};
use board_infra::{InMemoryPostRepository, InMemoryUserRepository};

#[cfg(feature = "postgres")]
use board_infra::database::connect;
#[cfg(feature = "postgres")]
use board_infra::{PostgresPostRepository, PostgresUserRepository};
#[cfg(feature = "postgres")]
use migration::{Migrator, MigratorTrait};
#[cfg(feature = "postgres")]
use sea_orm::DatabaseConnection;

use crate::config::AppConfig;
use crate::services::{PostService, UserService};

/// Failures that stop the server from starting.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("failed to apply migrations: {0}")]
    Migration(String),
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
    pub posts: PostService,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    ///
    /// An unreachable database falls back to the in-memory store. A database
    /// that is reachable but cannot be migrated aborts startup.
    pub async fn new(config: &AppConfig) -> Result<Self, StartupError> {
        #[cfg(feature = "postgres")]
        {
            if let Some(db_config) = &config.database {
                match connect(db_config).await {
                    Ok(conn) => return Self::from_connection(conn, config.run_migrations).await,
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            }
        }

        #[cfg(not(feature = "postgres"))]
        {
            let _ = config;
            tracing::info!("Running without postgres feature - using in-memory repositories");
        }

        Ok(Self::in_memory())
    }

    /// State over PostgreSQL, optionally migrating the schema first.
    #[cfg(feature = "postgres")]
    pub async fn from_connection(
        conn: DatabaseConnection,
        run_migrations: bool,
    ) -> Result<Self, StartupError> {
        if run_migrations {
            Migrator::up(&conn, None)
                .await
                .map_err(|e| StartupError::Migration(e.to_string()))?;
            tracing::info!("Migrations applied");
        }

        tracing::info!("Application state initialized (PostgreSQL)");
        Ok(Self::from_repositories(
            Arc::new(PostgresUserRepository::new(conn.clone())),
            Arc::new(PostgresPostRepository::new(conn)),
        ))
    }

    /// State over the in-memory repositories.
    pub fn in_memory() -> Self {
        Self::from_repositories(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryPostRepository::new()),
        )
    }

    pub fn from_repositories(
        user_repo: Arc<dyn UserRepository>,
        post_repo: Arc<dyn PostRepository>,
    ) -> Self {
        Self {
            users: UserService::new(user_repo.clone()),
            posts: PostService::new(post_repo, user_repo),
        }
    }
}
