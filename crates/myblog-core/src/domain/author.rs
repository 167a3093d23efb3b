use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Longest accepted username, in characters.
pub const USERNAME_MAX_LEN: usize = 150;

/// Author entity - a user who writes blog posts.
///
/// Only the Argon2 hash of the password is ever held; it is skipped on
/// serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub bio: String,
    pub contact_info: String,
    pub created_at: DateTime<Utc>,
}

impl Author {
    /// Create a new author from an already hashed password.
    pub fn new(username: String, password_hash: String, bio: String, contact_info: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            password_hash,
            bio,
            contact_info,
            created_at: Utc::now(),
        }
    }
}

/// Untrusted input for author creation.
#[derive(Debug, Clone, Default)]
pub struct NewAuthor {
    pub username: Option<String>,
    pub password: Option<String>,
    pub bio: String,
    pub contact_info: String,
}

/// An author together with the number of blogs they wrote.
#[derive(Debug, Clone)]
pub struct AuthorWithCount {
    pub author: Author,
    pub num_blogs: u64,
}
