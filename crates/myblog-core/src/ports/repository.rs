use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{
    Author, AuthorPostCount, Blog, BlogWithAuthor, Category, CategoryBlogCount, PublishStatus,
    TrailingWindow,
};
use crate::error::RepoError;

/// Generic repository trait for lookup and creation.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Persist a new entity.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;
}

/// Author repository.
#[async_trait]
pub trait AuthorRepository: BaseRepository<Author, Uuid> {
    async fn find_by_username(&self, username: &str) -> Result<Option<Author>, RepoError>;

    /// Number of blogs written by the author, all time.
    async fn count_blogs(&self, author_id: Uuid) -> Result<u64, RepoError>;

    /// Authors ranked by the number of posts dated inside `window`.
    ///
    /// Ordered by count descending, then username ascending. Authors with no
    /// posts in the window rank last with a count of zero.
    async fn top_by_post_count(
        &self,
        window: &TrailingWindow,
        limit: u64,
    ) -> Result<Vec<AuthorPostCount>, RepoError>;
}

/// Category repository.
#[async_trait]
pub trait CategoryRepository: BaseRepository<Category, Uuid> {
    /// Number of blogs filed under the category, all time.
    async fn count_blogs(&self, category_id: Uuid) -> Result<u64, RepoError>;

    /// The category with the most posts dated inside `window`.
    ///
    /// Returns `None` when no category has a post in the window.
    async fn most_popular(
        &self,
        window: &TrailingWindow,
    ) -> Result<Option<CategoryBlogCount>, RepoError>;
}

/// Blog repository.
#[async_trait]
pub trait BlogRepository: BaseRepository<Blog, Uuid> {
    /// All posts in the given state, newest first.
    async fn list_by_status(&self, status: PublishStatus)
    -> Result<Vec<BlogWithAuthor>, RepoError>;

    async fn find_with_author(&self, id: Uuid) -> Result<Option<BlogWithAuthor>, RepoError>;
}
