//! # MyBlog Core
//!
//! The domain layer of the blog backend.
//! Entities, the error taxonomy, the ports that infrastructure implements,
//! and the creation and query services built on top of them.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::{DomainError, RepoError, ValidationErrors};
