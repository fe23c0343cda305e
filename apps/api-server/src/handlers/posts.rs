//! Post handlers.

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use quill_core::domain::{Post, validation};
use quill_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_response(post: &Post) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        title: post.title.clone(),
        content: post.content.clone(),
        summary: post.summary.clone(),
        category: post.category.clone(),
        created_at: post.created_at.to_rfc3339(),
        updated_at: post.updated_at.to_rfc3339(),
    }
}

/// POST /api/posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Every field runs through its validator before the post is committed.
    let post = Post::new(req.title, req.content, req.summary, req.category)?;

    let saved = state.posts.insert(post).await?;
    tracing::info!(%saved, "Post created");

    Ok(HttpResponse::Created().json(to_response(&saved)))
}

#[derive(Debug, Deserialize)]
pub struct ListPostsQuery {
    pub category: String,
}

/// GET /api/posts?category=Fiction
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let category = query.into_inner().category;
    validation::validate_category(&category)?;

    let posts = state.posts.find_by_category(&category).await?;

    Ok(HttpResponse::Ok().json(posts.iter().map(to_response).collect::<Vec<_>>()))
}

/// GET /api/posts/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post with id {} not found", id)))?;

    Ok(HttpResponse::Ok().json(to_response(&post)))
}

/// PUT /api/posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    let mut post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post with id {} not found", id)))?;

    // Re-assignment re-triggers exactly the validators for the given fields.
    if let Some(title) = req.title {
        post.set_title(title)?;
    }
    if let Some(content) = req.content {
        post.set_content(content)?;
    }
    if let Some(summary) = req.summary {
        post.set_summary(summary)?;
    }
    if let Some(category) = req.category {
        post.set_category(category)?;
    }

    let saved = state.posts.update(post).await?;

    Ok(HttpResponse::Ok().json(to_response(&saved)))
}

/// DELETE /api/posts/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    state.posts.delete(id).await?;
    tracing::info!(post_id = %id, "Post deleted");

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use serde_json::json;

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    macro_rules! test_app {
        () => {{
            let state = AppState::new(None).await;
            test::init_service(
                App::new()
                    .app_data(web::Data::new(state))
                    .configure(configure_routes),
            )
            .await
        }};
    }

    fn valid_body() -> serde_json::Value {
        json!({
            "title": "You Won't Believe These Borrow Checker Tricks",
            "content": "x".repeat(300),
            "summary": "Ten tricks, zero lifetimes harmed.",
            "category": "Non-Fiction",
        })
    }

    #[actix_web::test]
    async fn create_post_happy_path() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(valid_body())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["category"], "Non-Fiction");
    }

    #[actix_web::test]
    async fn non_clickbait_title_is_rejected() {
        let app = test_app!();

        let mut body = valid_body();
        body["title"] = json!("A Measured Discussion of Lifetimes");
        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body["detail"],
            "Title must contain one of the following: Won't Believe, Secret, Top, Guess"
        );
    }

    #[actix_web::test]
    async fn short_content_and_long_summary_are_rejected() {
        let app = test_app!();

        let mut body = valid_body();
        body["content"] = json!("x".repeat(249));
        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(body)
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::BAD_REQUEST
        );

        let mut body = valid_body();
        body["summary"] = json!("s".repeat(251));
        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(body)
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[actix_web::test]
    async fn update_revalidates_only_provided_fields() {
        let app = test_app!();

        let create = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(valid_body())
            .to_request();
        let created: serde_json::Value =
            test::read_body_json(test::call_service(&app, create).await).await;
        let id = created["id"].as_str().unwrap().to_owned();

        let update = test::TestRequest::put()
            .uri(&format!("/api/posts/{}", id))
            .set_json(json!({"category": "Fiction"}))
            .to_request();
        let resp = test::call_service(&app, update).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["category"], "Fiction");
        // Untouched fields survive.
        assert_eq!(body["summary"], "Ten tricks, zero lifetimes harmed.");

        let bad = test::TestRequest::put()
            .uri(&format!("/api/posts/{}", id))
            .set_json(json!({"category": "Novella"}))
            .to_request();
        let resp = test::call_service(&app, bad).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Category must be Fiction or Non-Fiction");
    }

    #[actix_web::test]
    async fn list_filters_by_category_and_validates_it() {
        let app = test_app!();

        let create = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(valid_body())
            .to_request();
        test::call_service(&app, create).await;

        let req = test::TestRequest::get()
            .uri("/api/posts?category=Non-Fiction")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body.as_array().unwrap().len(), 1);

        let empty = test::TestRequest::get()
            .uri("/api/posts?category=Fiction")
            .to_request();
        let body: serde_json::Value =
            test::read_body_json(test::call_service(&app, empty).await).await;
        assert_eq!(body.as_array().unwrap().len(), 0);

        let invalid = test::TestRequest::get()
            .uri("/api/posts?category=Poetry")
            .to_request();
        assert_eq!(
            test::call_service(&app, invalid).await.status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[actix_web::test]
    async fn missing_post_is_404() {
        let app = test_app!();

        let req = test::TestRequest::get()
            .uri(&format!("/api/posts/{}", uuid::Uuid::new_v4()))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NOT_FOUND
        );
    }
}
