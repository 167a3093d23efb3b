//! Blog post handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use myblog_core::domain::{BlogWithAuthor, NewBlog};
use myblog_shared::dto::{BlogCreatedResponse, BlogLookupRequest, BlogResponse, CreateBlogRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

pub(crate) fn blog_response(post: BlogWithAuthor) -> BlogResponse {
    let BlogWithAuthor {
        blog,
        author_username,
    } = post;

    BlogResponse {
        id: blog.id,
        title: blog.title,
        content: blog.content,
        author: author_username,
        category: blog.category_id,
        is_published: blog.is_published,
        publish_date: blog.publish_date,
    }
}

fn blog_list(posts: Vec<BlogWithAuthor>) -> Vec<BlogResponse> {
    posts.into_iter().map(blog_response).collect()
}

/// POST /api/blogs
pub async fn create_blog(
    state: web::Data<AppState>,
    body: web::Json<CreateBlogRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let created = state
        .creation
        .create_blog(NewBlog {
            title: req.title,
            content: req.content,
            author_id: req.author,
            category_id: req.category,
            is_published: req.is_published,
        })
        .await?;

    tracing::info!(
        blog_id = %created.post.blog.id,
        published = created.post.blog.is_published,
        "Blog post created"
    );

    Ok(HttpResponse::Created().json(BlogCreatedResponse {
        message: created.message.to_string(),
        blog: blog_response(created.post),
    }))
}

/// GET /api/blogs
pub async fn list_published(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.query.list_published_posts().await?;
    Ok(HttpResponse::Ok().json(blog_list(posts)))
}

/// GET /api/blogs/drafts
pub async fn list_drafts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let drafts = state.query.list_drafts().await?;
    Ok(HttpResponse::Ok().json(blog_list(drafts)))
}

/// POST /api/blogs/detail - the id is read from the JSON body.
pub async fn get_post(
    state: web::Data<AppState>,
    body: web::Json<BlogLookupRequest>,
) -> AppResult<HttpResponse> {
    let raw = body
        .into_inner()
        .id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::BadRequest("ID not provided".to_string()))?;

    let id = Uuid::parse_str(&raw)
        .map_err(|_| AppError::BadRequest(format!("Invalid ID: {}", raw)))?;

    let post = state.query.get_post_by_id(id).await?;
    Ok(HttpResponse::Ok().json(blog_response(post)))
}
