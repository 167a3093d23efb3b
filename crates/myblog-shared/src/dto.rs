//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to create a blog post.
///
/// Every field is optional at the wire level so that missing fields are
/// reported as validation errors rather than parse failures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateBlogRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<Uuid>,
    pub category: Option<Uuid>,
    #[serde(default)]
    pub is_published: bool,
}

/// Request to create an author.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateAuthorRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub contact_info: String,
}

/// Request to create a category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: Option<String>,
    #[serde(default)]
    pub description: String,
}

/// Lookup of a single post; the id travels in the body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlogLookupRequest {
    pub id: Option<String>,
}

/// A blog post as rendered to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    /// Author display name.
    pub author: String,
    pub category: Uuid,
    pub is_published: bool,
    pub publish_date: DateTime<Utc>,
}

/// Response to a successful blog creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogCreatedResponse {
    pub message: String,
    pub blog: BlogResponse,
}

/// An author as rendered to clients. Never carries the password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorResponse {
    pub id: Uuid,
    pub username: String,
    pub bio: String,
    pub contact_info: String,
    pub num_blogs: u64,
}

/// A category as rendered to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub num_blogs: u64,
}

/// One row of the top-authors leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopAuthorResponse {
    pub username: String,
    pub num_posts: u64,
}

/// The most popular category in the trailing window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopularCategoryResponse {
    pub name: String,
    pub description: String,
    pub num_blogs: u64,
}
