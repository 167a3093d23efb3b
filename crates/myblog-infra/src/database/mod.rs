//! Persistence: connection management and repository implementations.

mod connections;
mod memory;

#[cfg(feature = "postgres")]
mod postgres_base;
#[cfg(feature = "postgres")]
pub mod postgres_repo;

#[cfg(feature = "postgres")]
pub mod entity;

use std::sync::Arc;

use myblog_core::ports::{AuthorRepository, BlogRepository, CategoryRepository};

pub use connections::DatabaseConfig;
pub use memory::{
    InMemoryAuthorRepository, InMemoryBlogRepository, InMemoryCategoryRepository, InMemoryStore,
};

#[cfg(feature = "postgres")]
pub use connections::connect;
#[cfg(feature = "postgres")]
pub use sea_orm::DbConn;
#[cfg(feature = "postgres")]
pub use postgres_repo::{
    PostgresAuthorRepository, PostgresBlogRepository, PostgresCategoryRepository,
};

/// The repository set the services are built from.
#[derive(Clone)]
pub struct Repositories {
    pub authors: Arc<dyn AuthorRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub blogs: Arc<dyn BlogRepository>,
}

impl Repositories {
    /// Repositories over a fresh in-memory store.
    pub fn in_memory() -> Self {
        let store = InMemoryStore::new();
        Self {
            authors: Arc::new(store.authors()),
            categories: Arc::new(store.categories()),
            blogs: Arc::new(store.blogs()),
        }
    }

    /// Repositories over a PostgreSQL connection pool.
    #[cfg(feature = "postgres")]
    pub fn postgres(db: Arc<DbConn>) -> Self {
        Self {
            authors: Arc::new(PostgresAuthorRepository::new(db.clone())),
            categories: Arc::new(PostgresCategoryRepository::new(db.clone())),
            blogs: Arc::new(PostgresBlogRepository::new(db)),
        }
    }
}
