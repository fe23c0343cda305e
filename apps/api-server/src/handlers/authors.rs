//! Author handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_core::domain::Author;
use quill_shared::dto::{AuthorResponse, CreateAuthorRequest, UpdateAuthorRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_response(author: &Author) -> AuthorResponse {
    AuthorResponse {
        id: author.id.to_string(),
        name: author.name.clone(),
        phone_number: author.phone_number.clone(),
        created_at: author.created_at.to_rfc3339(),
        updated_at: author.updated_at.to_rfc3339(),
    }
}

/// POST /api/authors
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreateAuthorRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Run the validators before committing. The name check reads all
    // committed names; the storage layer's unique constraint backstops it
    // under concurrency.
    let names = state.authors.list_names().await?;
    let author = Author::new(req.name, req.phone_number, &names)?;

    let saved = state.authors.insert(author).await?;
    tracing::info!(%saved, "Author created");

    Ok(HttpResponse::Created().json(to_response(&saved)))
}

/// GET /api/authors/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let author = state
        .authors
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Author with id {} not found", id)))?;

    Ok(HttpResponse::Ok().json(to_response(&author)))
}

/// PUT /api/authors/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateAuthorRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    let mut author = state
        .authors
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Author with id {} not found", id)))?;

    if let Some(name) = req.name {
        // Check against every *other* author, so keeping one's own name is
        // not a collision.
        let other_names: Vec<String> = state
            .authors
            .list_names()
            .await?
            .into_iter()
            .filter(|existing| existing != &author.name)
            .collect();
        author.rename(name, &other_names)?;
    }
    if let Some(phone_number) = req.phone_number {
        author.set_phone_number(phone_number)?;
    }

    let saved = state.authors.update(author).await?;

    Ok(HttpResponse::Ok().json(to_response(&saved)))
}

/// DELETE /api/authors/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    state.authors.delete(id).await?;
    tracing::info!(author_id = %id, "Author deleted");

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

    #[actix_web::test]
    async fn create_author_happy_path() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/api/authors")
            .set_json(json!({"name": "Ada Palmer", "phone_number": "5551234567"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["name"], "Ada Palmer");
        assert!(body["id"].as_str().is_some());
    }

    #[actix_web::test]
    async fn duplicate_name_fails_on_the_second_create() {
        let app = test_app!();

        let first = test::TestRequest::post()
            .uri("/api/authors")
            .set_json(json!({"name": "Ada Palmer", "phone_number": "5551234567"}))
            .to_request();
        assert_eq!(
            test::call_service(&app, first).await.status(),
            StatusCode::CREATED
        );

        let second = test::TestRequest::post()
            .uri("/api/authors")
            .set_json(json!({"name": "Ada Palmer", "phone_number": "5559876543"}))
            .to_request();
        let resp = test::call_service(&app, second).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Author name must be unique");
    }

    #[actix_web::test]
    async fn seven_digit_phone_number_is_rejected() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/api/authors")
            .set_json(json!({"name": "Ada Palmer", "phone_number": "5551234"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Phone number must be 10 digits");
    }

    #[actix_web::test]
    async fn update_keeps_own_name_and_revalidates_phone() {
        let app = test_app!();

        let create = test::TestRequest::post()
            .uri("/api/authors")
            .set_json(json!({"name": "Ada Palmer", "phone_number": "5551234567"}))
            .to_request();
        let created: serde_json::Value =
            test::read_body_json(test::call_service(&app, create).await).await;
        let id = created["id"].as_str().unwrap().to_owned();

        // Same name, new number: allowed.
        let update = test::TestRequest::put()
            .uri(&format!("/api/authors/{}", id))
            .set_json(json!({"name": "Ada Palmer", "phone_number": "5550000000"}))
            .to_request();
        let resp = test::call_service(&app, update).await;
        assert_eq!(resp.status(), StatusCode::OK);

        // Bad number: rejected, record intact.
        let bad = test::TestRequest::put()
            .uri(&format!("/api/authors/{}", id))
            .set_json(json!({"phone_number": "nope"}))
            .to_request();
        assert_eq!(
            test::call_service(&app, bad).await.status(),
            StatusCode::BAD_REQUEST
        );

        let get = test::TestRequest::get()
            .uri(&format!("/api/authors/{}", id))
            .to_request();
        let body: serde_json::Value =
            test::read_body_json(test::call_service(&app, get).await).await;
        assert_eq!(body["phone_number"], "5550000000");
    }

    #[actix_web::test]
    async fn missing_author_is_404_and_delete_is_204() {
        let app = test_app!();

        let req = test::TestRequest::get()
            .uri(&format!("/api/authors/{}", uuid::Uuid::new_v4()))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NOT_FOUND
        );

        let create = test::TestRequest::post()
            .uri("/api/authors")
            .set_json(json!({"name": "Ada Palmer", "phone_number": "5551234567"}))
            .to_request();
        let created: serde_json::Value =
            test::read_body_json(test::call_service(&app, create).await).await;
        let id = created["id"].as_str().unwrap().to_owned();

        let delete = test::TestRequest::delete()
            .uri(&format!("/api/authors/{}", id))
            .to_request();
        assert_eq!(
            test::call_service(&app, delete).await.status(),
            StatusCode::NO_CONTENT
        );

        // A freed name can be re-used.
        let again = test::TestRequest::post()
            .uri("/api/authors")
            .set_json(json!({"name": "Ada Palmer", "phone_number": "5551234567"}))
            .to_request();
        assert_eq!(
            test::call_service(&app, again).await.status(),
            StatusCode::CREATED
        );
    }
}
