//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::{AuthorRepository, PostRepository};
use quill_infra::database::memory::{InMemoryAuthorRepository, InMemoryPostRepository};
use quill_infra::database::{DatabaseConfig, DatabaseConnections};

#[cfg(feature = "postgres")]
use quill_infra::database::{PostgresAuthorRepository, PostgresPostRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub authors: Arc<dyn AuthorRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub db: Option<Arc<DatabaseConnections>>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let (db, authors, posts): (
            Option<Arc<DatabaseConnections>>,
            Arc<dyn AuthorRepository>,
            Arc<dyn PostRepository>,
        ) = {
            if let Some(config) = db_config {
                match DatabaseConnections::init(config).await {
                    Ok(connections) => {
                        let conn = Arc::new(connections);
                        let authors = Arc::new(PostgresAuthorRepository::new(conn.main.clone()));
                        let posts = Arc::new(PostgresPostRepository::new(conn.main.clone()));
                        (Some(conn), authors, posts)
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory repositories.",
                            e
                        );
                        (
                            None,
                            Arc::new(InMemoryAuthorRepository::new()),
                            Arc::new(InMemoryPostRepository::new()),
                        )
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running with in-memory repositories.");
                (
                    None,
                    Arc::new(InMemoryAuthorRepository::new()),
                    Arc::new(InMemoryPostRepository::new()),
                )
            }
        };

        #[cfg(not(feature = "postgres"))]
        let (db, authors, posts): (
            Option<Arc<DatabaseConnections>>,
            Arc<dyn AuthorRepository>,
            Arc<dyn PostRepository>,
        ) = {
            tracing::info!("Running without postgres feature - using in-memory repositories");
            (
                None,
                Arc::new(InMemoryAuthorRepository::new()),
                Arc::new(InMemoryPostRepository::new()),
            )
        };

        tracing::info!("Application state initialized");

        Self { authors, posts, db }
    }
}
