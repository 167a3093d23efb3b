//! # MyBlog Infrastructure
//!
//! Concrete implementations of the ports defined in `myblog-core`:
//! repositories (PostgreSQL via SeaORM, or in-memory) and Argon2
//! credential hashing.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external services, in-memory store only
//! - `postgres` - PostgreSQL repositories via SeaORM

pub mod auth;
pub mod database;

pub use auth::{Argon2PasswordService, PasswordHashConfig};
pub use database::{DatabaseConfig, InMemoryStore, Repositories};
