//! Read-side queries: listings, lookups and trailing-window leaderboards.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{
    AuthorPostCount, BlogWithAuthor, CategoryBlogCount, PublishStatus, TrailingWindow,
};
use crate::error::DomainError;
use crate::ports::{AuthorRepository, BlogRepository, CategoryRepository};

/// Size of the top-authors leaderboard.
pub const TOP_AUTHORS_LIMIT: u64 = 3;

/// Answers the fixed read queries of the blog.
#[derive(Clone)]
pub struct QueryService {
    authors: Arc<dyn AuthorRepository>,
    categories: Arc<dyn CategoryRepository>,
    blogs: Arc<dyn BlogRepository>,
}

impl QueryService {
    pub fn new(
        authors: Arc<dyn AuthorRepository>,
        categories: Arc<dyn CategoryRepository>,
        blogs: Arc<dyn BlogRepository>,
    ) -> Self {
        Self {
            authors,
            categories,
            blogs,
        }
    }

    /// Published posts, newest first.
    pub async fn list_published_posts(&self) -> Result<Vec<BlogWithAuthor>, DomainError> {
        Ok(self.blogs.list_by_status(PublishStatus::Published).await?)
    }

    /// Draft posts, newest first.
    pub async fn list_drafts(&self) -> Result<Vec<BlogWithAuthor>, DomainError> {
        Ok(self.blogs.list_by_status(PublishStatus::Draft).await?)
    }

    pub async fn get_post_by_id(&self, id: Uuid) -> Result<BlogWithAuthor, DomainError> {
        self.blogs
            .find_with_author(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "Blog",
                id,
            })
    }

    /// The three most prolific authors over the 180 days ending at `now`.
    pub async fn top_authors(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<AuthorPostCount>, DomainError> {
        let window = TrailingWindow::ending_at(now);
        Ok(self
            .authors
            .top_by_post_count(&window, TOP_AUTHORS_LIMIT)
            .await?)
    }

    /// The category with the most posts over the 180 days ending at `now`.
    pub async fn popular_category(
        &self,
        now: DateTime<Utc>,
    ) -> Result<CategoryBlogCount, DomainError> {
        let window = TrailingWindow::ending_at(now);
        self.categories
            .most_popular(&window)
            .await?
            .ok_or(DomainError::NothingInWindow {
                days: window.days(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Author, Blog, Category};
    use crate::error::RepoError;
    use crate::ports::BaseRepository;
    use async_trait::async_trait;

    /// A store with no rows at all.
    struct EmptyStore;

    #[async_trait]
    impl BaseRepository<Author, Uuid> for EmptyStore {
        async fn find_by_id(&self, _id: Uuid) -> Result<Option<Author>, RepoError> {
            Ok(None)
        }

        async fn insert(&self, entity: Author) -> Result<Author, RepoError> {
            Ok(entity)
        }
    }

    #[async_trait]
    impl AuthorRepository for EmptyStore {
        async fn find_by_username(&self, _username: &str) -> Result<Option<Author>, RepoError> {
            Ok(None)
        }

        async fn count_blogs(&self, _author_id: Uuid) -> Result<u64, RepoError> {
            Ok(0)
        }

        async fn top_by_post_count(
            &self,
            _window: &TrailingWindow,
            _limit: u64,
        ) -> Result<Vec<AuthorPostCount>, RepoError> {
            Ok(Vec::new())
        }
    }

    #[async_trait]
    impl BaseRepository<Category, Uuid> for EmptyStore {
        async fn find_by_id(&self, _id: Uuid) -> Result<Option<Category>, RepoError> {
            Ok(None)
        }

        async fn insert(&self, entity: Category) -> Result<Category, RepoError> {
            Ok(entity)
        }
    }

    #[async_trait]
    impl CategoryRepository for EmptyStore {
        async fn count_blogs(&self, _category_id: Uuid) -> Result<u64, RepoError> {
            Ok(0)
        }

        async fn most_popular(
            &self,
            _window: &TrailingWindow,
        ) -> Result<Option<CategoryBlogCount>, RepoError> {
            Ok(None)
        }
    }

    #[async_trait]
    impl BaseRepository<Blog, Uuid> for EmptyStore {
        async fn find_by_id(&self, _id: Uuid) -> Result<Option<Blog>, RepoError> {
            Ok(None)
        }

        async fn insert(&self, entity: Blog) -> Result<Blog, RepoError> {
            Ok(entity)
        }
    }

    #[async_trait]
    impl BlogRepository for EmptyStore {
        async fn list_by_status(
            &self,
            _status: PublishStatus,
        ) -> Result<Vec<BlogWithAuthor>, RepoError> {
            Err(RepoError::Connection("refused".to_string()))
        }

        async fn find_with_author(&self, _id: Uuid) -> Result<Option<BlogWithAuthor>, RepoError> {
            Ok(None)
        }
    }

    fn service() -> QueryService {
        let store = Arc::new(EmptyStore);
        QueryService::new(store.clone(), store.clone(), store)
    }

    #[tokio::test]
    async fn test_popular_category_without_posts_is_not_found() {
        let err = service().popular_category(Utc::now()).await.unwrap_err();

        assert!(matches!(err, DomainError::NothingInWindow { days: 180 }));
        assert_eq!(err.to_string(), "No blogs found in the last 180 days.");
    }

    #[tokio::test]
    async fn test_unknown_post_is_not_found() {
        let id = Uuid::new_v4();
        let err = service().get_post_by_id(id).await.unwrap_err();

        assert!(matches!(
            err,
            DomainError::NotFound { entity_type: "Blog", id: missing } if missing == id
        ));
    }

    #[tokio::test]
    async fn test_store_failure_is_internal() {
        let err = service().list_drafts().await.unwrap_err();

        assert!(matches!(err, DomainError::Internal(_)));
    }
}
