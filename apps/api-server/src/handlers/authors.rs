//! Author handlers.

use actix_web::{HttpResponse, web};

use myblog_core::domain::NewAuthor;
use myblog_shared::dto::{AuthorResponse, CreateAuthorRequest, TopAuthorResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/authors
pub async fn create_author(
    state: web::Data<AppState>,
    body: web::Json<CreateAuthorRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let created = state
        .creation
        .create_author(NewAuthor {
            username: req.username,
            password: req.password,
            bio: req.bio,
            contact_info: req.contact_info,
        })
        .await?;

    tracing::info!(author_id = %created.author.id, "Author created");

    let author = created.author;
    Ok(HttpResponse::Created().json(AuthorResponse {
        id: author.id,
        username: author.username,
        bio: author.bio,
        contact_info: author.contact_info,
        num_blogs: created.num_blogs,
    }))
}

/// GET /api/authors/top
pub async fn top_authors(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let top = state.query.top_authors(chrono::Utc::now()).await?;

    let body: Vec<TopAuthorResponse> = top
        .into_iter()
        .map(|row| TopAuthorResponse {
            username: row.username,
            num_posts: row.num_posts,
        })
        .collect();

    Ok(HttpResponse::Ok().json(body))
}
