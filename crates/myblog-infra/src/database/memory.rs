//! In-memory repositories - used when no database is configured, and in tests.
//!
//! All three repositories share one set of tables behind an async `RwLock`,
//! so joins and aggregates see a consistent snapshot.
//! Note: data is lost on process restart.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use myblog_core::domain::{
    Author, AuthorPostCount, Blog, BlogWithAuthor, Category, CategoryBlogCount, PublishStatus,
    TrailingWindow,
};
use myblog_core::error::RepoError;
use myblog_core::ports::{AuthorRepository, BaseRepository, BlogRepository, CategoryRepository};

#[derive(Default)]
struct Tables {
    authors: HashMap<Uuid, Author>,
    categories: HashMap<Uuid, Category>,
    blogs: HashMap<Uuid, Blog>,
}

impl Tables {
    fn with_author(&self, blog: &Blog) -> Option<BlogWithAuthor> {
        self.authors.get(&blog.author_id).map(|author| BlogWithAuthor {
            blog: blog.clone(),
            author_username: author.username.clone(),
        })
    }
}

type SharedTables = Arc<RwLock<Tables>>;

/// Handle to the shared in-memory tables.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: SharedTables,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn authors(&self) -> InMemoryAuthorRepository {
        InMemoryAuthorRepository {
            tables: self.tables.clone(),
        }
    }

    pub fn categories(&self) -> InMemoryCategoryRepository {
        InMemoryCategoryRepository {
            tables: self.tables.clone(),
        }
    }

    pub fn blogs(&self) -> InMemoryBlogRepository {
        InMemoryBlogRepository {
            tables: self.tables.clone(),
        }
    }
}

/// In-memory author repository.
pub struct InMemoryAuthorRepository {
    tables: SharedTables,
}

/// In-memory category repository.
pub struct InMemoryCategoryRepository {
    tables: SharedTables,
}

/// In-memory blog repository.
pub struct InMemoryBlogRepository {
    tables: SharedTables,
}

#[async_trait]
impl BaseRepository<Author, Uuid> for InMemoryAuthorRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Author>, RepoError> {
        Ok(self.tables.read().await.authors.get(&id).cloned())
    }

    async fn insert(&self, entity: Author) -> Result<Author, RepoError> {
        let mut tables = self.tables.write().await;

        if tables.authors.contains_key(&entity.id) {
            return Err(RepoError::Constraint("duplicate author id".to_string()));
        }
        if tables
            .authors
            .values()
            .any(|a| a.username == entity.username)
        {
            return Err(RepoError::Constraint("duplicate username".to_string()));
        }

        tables.authors.insert(entity.id, entity.clone());
        Ok(entity)
    }
}

#[async_trait]
impl AuthorRepository for InMemoryAuthorRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<Author>, RepoError> {
        let tables = self.tables.read().await;
        Ok(tables
            .authors
            .values()
            .find(|a| a.username == username)
            .cloned())
    }

    async fn count_blogs(&self, author_id: Uuid) -> Result<u64, RepoError> {
        let tables = self.tables.read().await;
        Ok(tables
            .blogs
            .values()
            .filter(|b| b.author_id == author_id)
            .count() as u64)
    }

    async fn top_by_post_count(
        &self,
        window: &TrailingWindow,
        limit: u64,
    ) -> Result<Vec<AuthorPostCount>, RepoError> {
        let tables = self.tables.read().await;

        let mut counts: HashMap<Uuid, u64> = HashMap::new();
        for blog in tables.blogs.values() {
            if window.contains(blog.publish_date) {
                *counts.entry(blog.author_id).or_default() += 1;
            }
        }

        let mut ranked: Vec<AuthorPostCount> = tables
            .authors
            .values()
            .map(|a| AuthorPostCount {
                username: a.username.clone(),
                num_posts: counts.get(&a.id).copied().unwrap_or(0),
            })
            .collect();

        ranked.sort_by(AuthorPostCount::rank_cmp);
        ranked.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        Ok(ranked)
    }
}

#[async_trait]
impl BaseRepository<Category, Uuid> for InMemoryCategoryRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, RepoError> {
        Ok(self.tables.read().await.categories.get(&id).cloned())
    }

    async fn insert(&self, entity: Category) -> Result<Category, RepoError> {
        let mut tables = self.tables.write().await;

        if tables.categories.contains_key(&entity.id) {
            return Err(RepoError::Constraint("duplicate category id".to_string()));
        }

        tables.categories.insert(entity.id, entity.clone());
        Ok(entity)
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn count_blogs(&self, category_id: Uuid) -> Result<u64, RepoError> {
        let tables = self.tables.read().await;
        Ok(tables
            .blogs
            .values()
            .filter(|b| b.category_id == category_id)
            .count() as u64)
    }

    async fn most_popular(
        &self,
        window: &TrailingWindow,
    ) -> Result<Option<CategoryBlogCount>, RepoError> {
        let tables = self.tables.read().await;

        let mut counts: HashMap<Uuid, u64> = HashMap::new();
        for blog in tables.blogs.values() {
            if window.contains(blog.publish_date) {
                *counts.entry(blog.category_id).or_default() += 1;
            }
        }

        Ok(counts
            .into_iter()
            .filter_map(|(id, num_blogs)| {
                tables.categories.get(&id).map(|c| CategoryBlogCount {
                    id,
                    name: c.name.clone(),
                    description: c.description.clone(),
                    num_blogs,
                })
            })
            .min_by(CategoryBlogCount::rank_cmp))
    }
}

#[async_trait]
impl BaseRepository<Blog, Uuid> for InMemoryBlogRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Blog>, RepoError> {
        Ok(self.tables.read().await.blogs.get(&id).cloned())
    }

    async fn insert(&self, entity: Blog) -> Result<Blog, RepoError> {
        let mut tables = self.tables.write().await;

        if tables.blogs.contains_key(&entity.id) {
            return Err(RepoError::Constraint("duplicate blog id".to_string()));
        }
        if !tables.authors.contains_key(&entity.author_id) {
            return Err(RepoError::Constraint("unknown author".to_string()));
        }
        if !tables.categories.contains_key(&entity.category_id) {
            return Err(RepoError::Constraint("unknown category".to_string()));
        }

        tables.blogs.insert(entity.id, entity.clone());
        Ok(entity)
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn list_by_status(
        &self,
        status: PublishStatus,
    ) -> Result<Vec<BlogWithAuthor>, RepoError> {
        let tables = self.tables.read().await;

        let mut posts: Vec<BlogWithAuthor> = tables
            .blogs
            .values()
            .filter(|b| b.status() == status)
            .filter_map(|b| tables.with_author(b))
            .collect();

        posts.sort_by(|a, b| {
            b.blog
                .publish_date
                .cmp(&a.blog.publish_date)
                .then_with(|| b.blog.id.cmp(&a.blog.id))
        });
        Ok(posts)
    }

    async fn find_with_author(&self, id: Uuid) -> Result<Option<BlogWithAuthor>, RepoError> {
        let tables = self.tables.read().await;
        Ok(tables.blogs.get(&id).and_then(|b| tables.with_author(b)))
    }
}
