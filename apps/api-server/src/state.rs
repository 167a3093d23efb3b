//! Application state - shared across all handlers.

use std::sync::Arc;

use myblog_core::ports::PasswordService;
use myblog_core::services::{CreationService, QueryService};
use myblog_infra::{Argon2PasswordService, PasswordHashConfig, Repositories};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub creation: CreationService,
    pub query: QueryService,
}

impl AppState {
    /// Wire the services over an existing repository set.
    pub fn from_parts(repos: Repositories, passwords: Arc<dyn PasswordService>) -> Self {
        Self {
            creation: CreationService::new(
                repos.authors.clone(),
                repos.categories.clone(),
                repos.blogs.clone(),
                passwords,
            ),
            query: QueryService::new(repos.authors, repos.categories, repos.blogs),
        }
    }

    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let passwords = password_service(&config.password_hash);

        #[cfg(feature = "postgres")]
        let repos = {
            if let Some(db_config) = &config.database {
                match myblog_infra::database::connect(db_config).await {
                    Ok(conn) => {
                        if config.run_migrations {
                            run_migrations(&conn).await;
                        }
                        Repositories::postgres(Arc::new(conn))
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        Repositories::in_memory()
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Repositories::in_memory()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let repos = {
            tracing::info!("Running without postgres feature - using in-memory repositories");
            Repositories::in_memory()
        };

        tracing::info!("Application state initialized");

        Self::from_parts(repos, passwords)
    }
}

fn password_service(config: &PasswordHashConfig) -> Arc<dyn PasswordService> {
    match Argon2PasswordService::new(config) {
        Ok(service) => Arc::new(service),
        Err(e) => {
            tracing::error!("{}. Falling back to default Argon2id parameters.", e);
            Arc::new(Argon2PasswordService::default())
        }
    }
}

#[cfg(feature = "postgres")]
async fn run_migrations(conn: &myblog_infra::database::DbConn) {
    use migration::{Migrator, MigratorTrait};

    match Migrator::up(conn, None).await {
        Ok(()) => tracing::info!("Database migrations applied"),
        Err(e) => tracing::error!("Failed to apply migrations: {}", e),
    }
}
