//! Category handlers.

use actix_web::{HttpResponse, web};

use myblog_core::domain::NewCategory;
use myblog_shared::dto::{CategoryResponse, CreateCategoryRequest, PopularCategoryResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/categories
pub async fn create_category(
    state: web::Data<AppState>,
    body: web::Json<CreateCategoryRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let created = state
        .creation
        .create_category(NewCategory {
            name: req.name,
            description: req.description,
        })
        .await?;

    let category = created.category;
    Ok(HttpResponse::Created().json(CategoryResponse {
        id: category.id,
        name: category.name,
        description: category.description,
        num_blogs: created.num_blogs,
    }))
}

/// GET /api/categories/popular
pub async fn popular_category(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let popular = state.query.popular_category(chrono::Utc::now()).await?;

    Ok(HttpResponse::Ok().json(PopularCategoryResponse {
        name: popular.name,
        description: popular.description,
        num_blogs: popular.num_blogs,
    }))
}
