//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, IntoCondition, Order};
use sea_orm::{
    ColumnTrait, DbConn, EntityTrait, FromQueryResult, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Select, prelude::DateTimeWithTimeZone,
};
use uuid::Uuid;

use myblog_core::domain::{
    Author, AuthorPostCount, BlogWithAuthor, CategoryBlogCount, PublishStatus, TrailingWindow,
};
use myblog_core::error::RepoError;
use myblog_core::ports::{AuthorRepository, BlogRepository, CategoryRepository};

use super::entity::author::{self, Entity as AuthorEntity};
use super::entity::blog::{self, Entity as BlogEntity};
use super::entity::category::{self, Entity as CategoryEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL author repository.
pub type PostgresAuthorRepository = PostgresBaseRepository<AuthorEntity>;

/// PostgreSQL category repository.
pub type PostgresCategoryRepository = PostgresBaseRepository<CategoryEntity>;

/// PostgreSQL blog repository.
pub type PostgresBlogRepository = PostgresBaseRepository<BlogEntity>;

#[derive(Debug, FromQueryResult)]
struct AuthorPostCountRow {
    username: String,
    num_posts: i64,
}

#[derive(Debug, FromQueryResult)]
struct CategoryBlogCountRow {
    id: Uuid,
    name: String,
    description: String,
    num_blogs: i64,
}

fn window_bounds(window: &TrailingWindow) -> (DateTimeWithTimeZone, DateTimeWithTimeZone) {
    (window.start.into(), window.end.into())
}

fn non_negative(count: i64) -> u64 {
    u64::try_from(count).unwrap_or(0)
}

async fn count_blogs_where(db: &DbConn, column: blog::Column, id: Uuid) -> Result<u64, RepoError> {
    BlogEntity::find()
        .filter(column.eq(id))
        .count(db)
        .await
        .map_err(map_db_err)
}

fn join_author(rows: Vec<(blog::Model, Option<author::Model>)>) -> Vec<BlogWithAuthor> {
    rows.into_iter()
        .filter_map(|(blog, author)| {
            author.map(|a| BlogWithAuthor {
                blog: blog.into(),
                author_username: a.username,
            })
        })
        .collect()
}

/// Authors ranked by posts inside `window`.
///
/// The window goes in the join condition, not WHERE, so authors without
/// recent posts survive the LEFT JOIN with a count of zero. Names compare
/// in byte order regardless of the database locale.
pub(crate) fn top_authors_query(window: &TrailingWindow, limit: u64) -> Select<AuthorEntity> {
    let (start, end) = window_bounds(window);
    let num_posts = Expr::col((BlogEntity, blog::Column::Id)).count();

    let in_window = author::Relation::Blog.def().on_condition(move |_left, right| {
        Expr::col((right, blog::Column::PublishDate))
            .between(start, end)
            .into_condition()
    });

    AuthorEntity::find()
        .select_only()
        .column(author::Column::Username)
        .column_as(num_posts.clone(), "num_posts")
        .join(JoinType::LeftJoin, in_window)
        .group_by(author::Column::Id)
        .group_by(author::Column::Username)
        .order_by_desc(num_posts)
        .order_by(Expr::cust(r#""authors"."username" COLLATE "C""#), Order::Asc)
        .limit(limit)
}

/// The single category with the most posts inside `window`.
pub(crate) fn popular_category_query(window: &TrailingWindow) -> Select<CategoryEntity> {
    let (start, end) = window_bounds(window);
    let num_blogs = Expr::col((BlogEntity, blog::Column::Id)).count();

    CategoryEntity::find()
        .select_only()
        .column(category::Column::Id)
        .column(category::Column::Name)
        .column(category::Column::Description)
        .column_as(num_blogs.clone(), "num_blogs")
        .join(JoinType::InnerJoin, category::Relation::Blog.def())
        .filter(blog::Column::PublishDate.between(start, end))
        .group_by(category::Column::Id)
        .group_by(category::Column::Name)
        .group_by(category::Column::Description)
        .order_by_desc(num_blogs)
        .order_by(Expr::cust(r#""categories"."name" COLLATE "C""#), Order::Asc)
        .order_by_asc(category::Column::Id)
        .limit(1)
}

#[async_trait]
impl AuthorRepository for PostgresAuthorRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<Author>, RepoError> {
        tracing::debug!(username, "Finding author by username");

        let result = AuthorEntity::find()
            .filter(author::Column::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn count_blogs(&self, author_id: Uuid) -> Result<u64, RepoError> {
        count_blogs_where(&self.db, blog::Column::AuthorId, author_id).await
    }

    async fn top_by_post_count(
        &self,
        window: &TrailingWindow,
        limit: u64,
    ) -> Result<Vec<AuthorPostCount>, RepoError> {
        let rows = top_authors_query(window, limit)
            .into_model::<AuthorPostCountRow>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(rows = rows.len(), "Ranked authors by post count");

        Ok(rows
            .into_iter()
            .map(|row| AuthorPostCount {
                username: row.username,
                num_posts: non_negative(row.num_posts),
            })
            .collect())
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn count_blogs(&self, category_id: Uuid) -> Result<u64, RepoError> {
        count_blogs_where(&self.db, blog::Column::CategoryId, category_id).await
    }

    async fn most_popular(
        &self,
        window: &TrailingWindow,
    ) -> Result<Option<CategoryBlogCount>, RepoError> {
        let row = popular_category_query(window)
            .into_model::<CategoryBlogCountRow>()
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(|row| CategoryBlogCount {
            id: row.id,
            name: row.name,
            description: row.description,
            num_blogs: non_negative(row.num_blogs),
        }))
    }
}

#[async_trait]
impl BlogRepository for PostgresBlogRepository {
    async fn list_by_status(
        &self,
        status: PublishStatus,
    ) -> Result<Vec<BlogWithAuthor>, RepoError> {
        let rows = BlogEntity::find()
            .filter(blog::Column::IsPublished.eq(status.is_published()))
            .find_also_related(AuthorEntity)
            .order_by_desc(blog::Column::PublishDate)
            .order_by_desc(blog::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(join_author(rows))
    }

    async fn find_with_author(&self, id: Uuid) -> Result<Option<BlogWithAuthor>, RepoError> {
        let row = BlogEntity::find_by_id(id)
            .find_also_related(AuthorEntity)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.and_then(|row| join_author(vec![row]).pop()))
    }
}
