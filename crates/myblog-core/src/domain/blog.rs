use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Longest accepted blog title, in characters.
pub const TITLE_MAX_LEN: usize = 200;

/// Blog entity - a single post, either published or a draft.
///
/// `publish_date` is stamped once at creation and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author_id: Uuid,
    pub category_id: Uuid,
    pub is_published: bool,
    pub publish_date: DateTime<Utc>,
}

impl Blog {
    /// Create a new blog post stamped with the current time.
    pub fn new(
        title: String,
        content: String,
        author_id: Uuid,
        category_id: Uuid,
        status: PublishStatus,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            author_id,
            category_id,
            is_published: status.is_published(),
            publish_date: Utc::now(),
        }
    }

    pub fn status(&self) -> PublishStatus {
        PublishStatus::from_flag(self.is_published)
    }
}

/// Publication state of a blog post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PublishStatus {
    Published,
    Draft,
}

impl PublishStatus {
    pub fn from_flag(is_published: bool) -> Self {
        if is_published {
            PublishStatus::Published
        } else {
            PublishStatus::Draft
        }
    }

    pub fn is_published(self) -> bool {
        matches!(self, PublishStatus::Published)
    }

    /// Message returned to the client after a post is created.
    pub fn creation_message(self) -> &'static str {
        match self {
            PublishStatus::Published => "Blog post has been published successfully.",
            PublishStatus::Draft => "Blog post has been saved as a draft.",
        }
    }
}

/// Untrusted input for blog creation.
#[derive(Debug, Clone, Default)]
pub struct NewBlog {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
    pub is_published: bool,
}

/// A blog post joined with its author's display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogWithAuthor {
    pub blog: Blog,
    pub author_username: String,
}

/// Result of a successful blog creation.
#[derive(Debug, Clone)]
pub struct CreatedBlog {
    pub post: BlogWithAuthor,
    pub message: &'static str,
}
