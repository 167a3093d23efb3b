//! HTTP handlers and route configuration.

mod authors;
mod blogs;
mod categories;
mod health;

use actix_web::web;

use crate::middleware::error::json_error_handler;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health::health_check))
                .service(
                    web::scope("/blogs")
                        .route("", web::post().to(blogs::create_blog))
                        .route("", web::get().to(blogs::list_published))
                        .route("/drafts", web::get().to(blogs::list_drafts))
                        .route("/detail", web::post().to(blogs::get_post)),
                )
                .service(
                    web::scope("/authors")
                        .route("", web::post().to(authors::create_author))
                        .route("/top", web::get().to(authors::top_authors)),
                )
                .service(
                    web::scope("/categories")
                        .route("", web::post().to(categories::create_category))
                        .route("/popular", web::get().to(categories::popular_category)),
                ),
        );
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, http::StatusCode, test};
    use serde_json::{Value, json};

    use myblog_infra::{Argon2PasswordService, PasswordHashConfig, Repositories};

    use super::*;
    use crate::state::AppState;

    fn test_state() -> AppState {
        let passwords = Argon2PasswordService::new(&PasswordHashConfig {
            memory_kib: 8,
            iterations: 1,
            parallelism: 1,
        })
        .unwrap();
        AppState::from_parts(Repositories::in_memory(), Arc::new(passwords))
    }

    macro_rules! app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state))
                    .configure(configure_routes),
            )
            .await
        };
    }

    macro_rules! post_json {
        ($app:expr, $uri:expr, $body:expr) => {{
            let req = test::TestRequest::post()
                .uri($uri)
                .set_json($body)
                .to_request();
            test::call_service(&$app, req).await
        }};
    }

    macro_rules! get {
        ($app:expr, $uri:expr) => {{
            let req = test::TestRequest::get().uri($uri).to_request();
            test::call_service(&$app, req).await
        }};
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = app!(test_state());

        let resp = get!(app, "/api/health");
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
    }

    #[actix_web::test]
    async fn test_blog_lifecycle() {
        let app = app!(test_state());

        let resp = post_json!(
            app,
            "/api/authors",
            json!({"username": "alice", "password": "s3cret", "bio": "Rustacean"})
        );
        assert_eq!(resp.status(), StatusCode::CREATED);
        let author: Value = test::read_body_json(resp).await;
        assert_eq!(author["num_blogs"], 0);
        assert!(author.get("password").is_none());
        assert!(author.get("password_hash").is_none());

        let resp = post_json!(app, "/api/categories", json!({"name": "Rust"}));
        assert_eq!(resp.status(), StatusCode::CREATED);
        let category: Value = test::read_body_json(resp).await;
        assert_eq!(category["description"], "");

        let resp = post_json!(
            app,
            "/api/blogs",
            json!({
                "title": "Ownership",
                "content": "Borrowing explained",
                "author": author["id"],
                "category": category["id"],
                "is_published": true
            })
        );
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(resp).await;
        assert_eq!(
            created["message"],
            "Blog post has been published successfully."
        );
        assert_eq!(created["blog"]["author"], "alice");

        let resp = post_json!(
            app,
            "/api/blogs",
            json!({
                "title": "Lifetimes",
                "content": "Work in progress",
                "author": author["id"],
                "category": category["id"]
            })
        );
        let draft: Value = test::read_body_json(resp).await;
        assert_eq!(draft["message"], "Blog post has been saved as a draft.");

        let resp = get!(app, "/api/blogs");
        let published: Value = test::read_body_json(resp).await;
        assert_eq!(published.as_array().map(Vec::len), Some(1));
        assert_eq!(published[0]["title"], "Ownership");

        let resp = get!(app, "/api/blogs/drafts");
        let drafts: Value = test::read_body_json(resp).await;
        assert_eq!(drafts.as_array().map(Vec::len), Some(1));
        assert_eq!(drafts[0]["title"], "Lifetimes");
        assert_eq!(drafts[0]["is_published"], false);

        let resp = post_json!(
            app,
            "/api/blogs/detail",
            json!({"id": created["blog"]["id"]})
        );
        assert_eq!(resp.status(), StatusCode::OK);
        let detail: Value = test::read_body_json(resp).await;
        assert_eq!(detail["content"], "Borrowing explained");
        assert_eq!(detail["author"], "alice");
    }

    #[actix_web::test]
    async fn test_create_blog_validation_errors() {
        let app = app!(test_state());

        let resp = post_json!(app, "/api/blogs", json!({"title": "   "}));
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 400);
        assert_eq!(body["errors"]["title"][0], "This field may not be blank.");
        assert_eq!(body["errors"]["content"][0], "This field is required.");
        assert!(body["errors"]["author"].is_array());
        assert!(body["errors"]["category"].is_array());
    }

    #[actix_web::test]
    async fn test_duplicate_username_is_rejected() {
        let app = app!(test_state());
        let author = json!({"username": "alice", "password": "pw"});

        let resp = post_json!(app, "/api/authors", author.clone());
        assert_eq!(resp.status(), StatusCode::CREATED);

        let resp = post_json!(app, "/api/authors", author);
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["errors"]["username"][0],
            "An author with that username already exists."
        );
    }

    #[actix_web::test]
    async fn test_post_lookup_errors() {
        let app = app!(test_state());

        let resp = post_json!(app, "/api/blogs/detail", json!({}));
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "ID not provided");

        let resp = post_json!(app, "/api/blogs/detail", json!({"id": "not-a-uuid"}));
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = post_json!(
            app,
            "/api/blogs/detail",
            json!({"id": uuid::Uuid::new_v4().to_string()})
        );
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let app = app!(test_state());

        let req = test::TestRequest::post()
            .uri("/api/categories")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"name\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 400);
    }

    #[actix_web::test]
    async fn test_rankings() {
        let app = app!(test_state());

        let resp = get!(app, "/api/categories/popular");
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "No blogs found in the last 180 days.");

        let mut author_ids = Vec::new();
        for name in ["carol", "alice", "bob"] {
            let resp = post_json!(
                app,
                "/api/authors",
                json!({"username": name, "password": "pw"})
            );
            let author: Value = test::read_body_json(resp).await;
            author_ids.push(author["id"].clone());
        }

        let resp = post_json!(
            app,
            "/api/categories",
            json!({"name": "Rust", "description": "Systems"})
        );
        let rust: Value = test::read_body_json(resp).await;
        let resp = post_json!(app, "/api/categories", json!({"name": "Go"}));
        let go: Value = test::read_body_json(resp).await;

        // carol: 2 posts in Rust, alice: 1 post in Go, bob: none
        for (author, category) in [(0, &rust), (0, &rust), (1, &go)] {
            let resp = post_json!(
                app,
                "/api/blogs",
                json!({
                    "title": "Post",
                    "content": "Body",
                    "author": author_ids[author],
                    "category": category["id"],
                    "is_published": true
                })
            );
            assert_eq!(resp.status(), StatusCode::CREATED);
        }

        let resp = get!(app, "/api/authors/top");
        assert_eq!(resp.status(), StatusCode::OK);
        let top: Value = test::read_body_json(resp).await;
        assert_eq!(
            top,
            json!([
                {"username": "carol", "num_posts": 2},
                {"username": "alice", "num_posts": 1},
                {"username": "bob", "num_posts": 0}
            ])
        );

        let resp = get!(app, "/api/categories/popular");
        assert_eq!(resp.status(), StatusCode::OK);
        let popular: Value = test::read_body_json(resp).await;
        assert_eq!(
            popular,
            json!({"name": "Rust", "description": "Systems", "num_blogs": 2})
        );
    }
}
