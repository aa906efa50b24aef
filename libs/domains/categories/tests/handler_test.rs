//! Handler tests for the Categories domain
//!
//! These tests drive the real router over the in-memory repository and
//! verify request decoding, status codes, and response bodies.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use domain_categories::*;
use http_body_util::BodyExt;
use serde_json::json;
use test_utils::TestDataBuilder;
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    let repository = InMemoryCategoryRepository::new();
    let images = ImageStore::new(std::env::temp_dir().join("comercio-test-images"));
    let service = CategoryService::new(repository, images);
    handlers::router(service)
}

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn text_body(body: Body) -> String {
    let bytes = body.collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn test_create_category_returns_201_with_assigned_id() {
    let app = app();
    let builder = TestDataBuilder::from_test_name("category_create_201");

    let response = app
        .oneshot(post_json("/", json!({ "name": builder.name("category", "main") })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let category: Category = json_body(response.into_body()).await;
    assert!(category.id >= 1);
    assert_eq!(category.name, builder.name("category", "main"));
}

#[tokio::test]
async fn test_create_category_rejects_blank_name() {
    let app = app();

    let response = app
        .oneshot(post_json("/", json!({ "name": "" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_categories_with_no_records_returns_empty_list() {
    let app = app();

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let categories: Vec<Category> = json_body(response.into_body()).await;
    assert!(categories.is_empty());
}

#[tokio::test]
async fn test_get_missing_category_returns_404_with_id_in_message() {
    let app = app();

    let request = Request::builder().uri("/99").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = text_body(response.into_body()).await;
    assert!(body.contains("Não foi encontrada Categoria com o id 99"));
}

#[tokio::test]
async fn test_category_lifecycle_create_get_delete_get() {
    let app = app();

    // Create
    let response = app
        .clone()
        .oneshot(post_json("/", json!({ "name": "Beverages" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Category = json_body(response.into_body()).await;

    // Get
    let request = Request::builder()
        .uri(format!("/{}", created.id))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: Category = json_body(response.into_body()).await;
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, "Beverages");

    // Delete: 200 with empty body
    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/{}", created.id))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(text_body(response.into_body()).await.is_empty());

    // Get after delete: 404 with the id-bearing message
    let request = Request::builder()
        .uri(format!("/{}", created.id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = text_body(response.into_body()).await;
    assert!(body.contains(&format!("Não foi encontrada Categoria com o id {}", created.id)));
}

#[tokio::test]
async fn test_delete_is_idempotent_in_observable_effect() {
    let app = app();

    let response = app
        .clone()
        .oneshot(post_json("/", json!({ "name": "Padaria" })))
        .await
        .unwrap();
    let created: Category = json_body(response.into_body()).await;

    let delete = |id: i32| {
        Request::builder()
            .method("DELETE")
            .uri(format!("/{}", id))
            .body(Body::empty())
            .unwrap()
    };

    let first = app.clone().oneshot(delete(created.id)).await.unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app.oneshot(delete(created.id)).await.unwrap();
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
    assert!(text_body(second.into_body()).await.is_empty());
}

#[tokio::test]
async fn test_category_dto_roundtrip() {
    let app = app();

    // Create via DTO
    let response = app
        .clone()
        .oneshot(post_json("/dto", json!({ "id": 0, "name": "Hortifruti" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: CategoryDto = json_body(response.into_body()).await;
    assert!(created.id >= 1);

    // Get DTO view
    let request = Request::builder()
        .uri(format!("/dto/{}", created.id))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let dto: CategoryDto = json_body(response.into_body()).await;
    assert_eq!(dto.name, "Hortifruti");

    // DTO view of a missing id is an explicit 404
    let request = Request::builder()
        .uri("/dto/12345")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_category_replaces_fields() {
    let app = app();

    let response = app
        .clone()
        .oneshot(post_json("/", json!({ "name": "Bebidas" })))
        .await
        .unwrap();
    let created: Category = json_body(response.into_body()).await;

    let mut updated = created.clone();
    updated.name = "Bebidas Geladas".to_string();
    updated.description = Some("Sucos e refrigerantes".to_string());

    let request = Request::builder()
        .method("PUT")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&updated).unwrap()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let returned: Category = json_body(response.into_body()).await;
    assert_eq!(returned.id, created.id);
    assert_eq!(returned.name, "Bebidas Geladas");
    assert_eq!(returned.description.as_deref(), Some("Sucos e refrigerantes"));
}

#[tokio::test]
async fn test_create_category_with_image_multipart() {
    let app = app();

    let boundary = "category-test-boundary";
    let payload = json!({ "name": "Congelados" }).to_string();
    let body = format!(
        "--{b}\r\n\
         Content-Disposition: form-data; name=\"categoria\"\r\n\r\n\
         {payload}\r\n\
         --{b}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"foto.png\"\r\n\
         Content-Type: image/png\r\n\r\n\
         fake-png-bytes\r\n\
         --{b}--\r\n",
        b = boundary,
        payload = payload
    );

    let request = Request::builder()
        .method("POST")
        .uri("/com-foto")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(Body::from(body))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let category: Category = json_body(response.into_body()).await;
    assert_eq!(category.name, "Congelados");
    let image = category.image.expect("image reference should be stored");
    assert!(image.contains("foto.png"));
}

#[tokio::test]
async fn test_create_category_with_image_missing_part_is_processing_error() {
    let app = app();

    let boundary = "category-test-boundary";
    let body = format!(
        "--{b}\r\n\
         Content-Disposition: form-data; name=\"categoria\"\r\n\r\n\
         {{\"name\":\"Sem foto\"}}\r\n\
         --{b}--\r\n",
        b = boundary
    );

    let request = Request::builder()
        .method("POST")
        .uri("/com-foto")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(Body::from(body))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
