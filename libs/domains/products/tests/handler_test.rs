//! Handler tests for the Products domain
//!
//! These tests drive the real router over the in-memory repository and
//! verify request decoding, status codes, and response bodies.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::json;
use test_utils::TestDataBuilder;
use tower::ServiceExt; // For oneshot()

const CATEGORY_ID: i32 = 1;

async fn app() -> Router {
    let repository = InMemoryProductRepository::new();
    repository.add_category(CATEGORY_ID).await;
    let service = ProductService::new(repository);
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

fn create_payload(builder: &TestDataBuilder, suffix: &str) -> serde_json::Value {
    json!({
        "sku": builder.sku(suffix),
        "name": builder.name("product", suffix),
        "price": 24.9,
        "stock_quantity": 10,
        "category_id": CATEGORY_ID
    })
}

#[tokio::test]
async fn test_list_products_with_no_records_returns_404() {
    let app = app().await;

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = text_body(response.into_body()).await;
    assert!(body.contains("Nenhum produto encontrado."));
}

#[tokio::test]
async fn test_create_product_returns_201_with_assigned_id() {
    let app = app().await;
    let builder = TestDataBuilder::from_test_name("product_create_201");

    let response = app
        .oneshot(post_json("/", create_payload(&builder, "main")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let product: Product = json_body(response.into_body()).await;
    assert!(product.id >= 1);
    assert_eq!(product.sku, builder.sku("main"));
}

#[tokio::test]
async fn test_create_product_with_unknown_category_is_rejected() {
    let app = app().await;
    let builder = TestDataBuilder::from_test_name("product_unknown_category");

    let mut payload = create_payload(&builder, "orphan");
    payload["category_id"] = json!(999);

    let response = app.oneshot(post_json("/", payload)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = text_body(response.into_body()).await;
    assert!(body.contains("Não foi encontrada Categoria com o id 999"));
}

#[tokio::test]
async fn test_create_product_with_duplicate_sku_conflicts() {
    let app = app().await;
    let builder = TestDataBuilder::from_test_name("product_duplicate_sku");

    let response = app
        .clone()
        .oneshot(post_json("/", create_payload(&builder, "dup")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let mut second = create_payload(&builder, "dup");
    second["name"] = json!("Outro nome");
    let response = app.oneshot(post_json("/", second)).await.unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_get_missing_product_returns_404_with_id_in_message() {
    let app = app().await;

    let request = Request::builder().uri("/55").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = text_body(response.into_body()).await;
    assert!(body.contains("Não foi encontrado Produto com o id 55"));
}

#[tokio::test]
async fn test_get_missing_product_dto_uses_its_own_message() {
    let app = app().await;

    let request = Request::builder()
        .uri("/dto/55")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = text_body(response.into_body()).await;
    assert!(body.contains("Não foi encontrado Produto com o id = 55."));
}

#[tokio::test]
async fn test_product_dto_roundtrip() {
    let app = app().await;
    let builder = TestDataBuilder::from_test_name("product_dto");

    let response = app
        .clone()
        .oneshot(post_json(
            "/dto",
            json!({
                "id": 0,
                "sku": builder.sku("dto"),
                "name": builder.name("product", "dto"),
                "price": 9.5,
                "category_id": CATEGORY_ID
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: ProductDto = json_body(response.into_body()).await;
    assert!(created.id >= 1);

    let request = Request::builder()
        .uri(format!("/dto/{}", created.id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let dto: ProductDto = json_body(response.into_body()).await;
    assert_eq!(dto.sku, builder.sku("dto"));
}

#[tokio::test]
async fn test_sku_stub_rejects_blank_and_accepts_filled() {
    let app = app().await;

    // Blank sku violates the constraint
    let request = Request::builder()
        .uri("/query?sku=")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = text_body(response.into_body()).await;
    assert!(body.contains("O sku deve ser preenchido."));

    // Missing sku is rejected by the extractor
    let request = Request::builder()
        .uri("/query")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // A filled sku answers the fixed 100-class empty response
    let request = Request::builder()
        .uri("/query?sku=CAFE-500G")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONTINUE);
    assert!(text_body(response.into_body()).await.is_empty());
}

#[tokio::test]
async fn test_id_stub_validates_numeric_presence() {
    let app = app().await;

    // Missing id is rejected by the extractor
    let request = Request::builder()
        .uri("/request")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Non-numeric id is rejected by the extractor
    let request = Request::builder()
        .uri("/request?id=abc")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let request = Request::builder()
        .uri("/request?id=7")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONTINUE);
}

#[tokio::test]
async fn test_stub_endpoints_have_no_persistence_side_effects() {
    let app = app().await;

    for _ in 0..3 {
        let request = Request::builder()
            .uri("/query?sku=CAFE-500G")
            .body(Body::empty())
            .unwrap();
        app.clone().oneshot(request).await.unwrap();

        let request = Request::builder()
            .uri("/request?id=7")
            .body(Body::empty())
            .unwrap();
        app.clone().oneshot(request).await.unwrap();
    }

    // Stored data is unchanged: the table is still empty
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_product_replaces_fields() {
    let app = app().await;
    let builder = TestDataBuilder::from_test_name("product_update");

    let response = app
        .clone()
        .oneshot(post_json("/", create_payload(&builder, "upd")))
        .await
        .unwrap();
    let created: Product = json_body(response.into_body()).await;

    let mut updated = created.clone();
    updated.price = 19.9;
    updated.stock_quantity = 3;

    let request = Request::builder()
        .method("PUT")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&updated).unwrap()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let returned: Product = json_body(response.into_body()).await;
    assert_eq!(returned.id, created.id);
    assert_eq!(returned.price, 19.9);
    assert_eq!(returned.stock_quantity, 3);
}

#[tokio::test]
async fn test_delete_product_by_id_messages_and_idempotence() {
    let app = app().await;
    let builder = TestDataBuilder::from_test_name("product_delete");

    let response = app
        .clone()
        .oneshot(post_json("/", create_payload(&builder, "del")))
        .await
        .unwrap();
    let created: Product = json_body(response.into_body()).await;

    let delete = |id: i32| {
        Request::builder()
            .method("DELETE")
            .uri(format!("/{}", id))
            .body(Body::empty())
            .unwrap()
    };

    let first = app.clone().oneshot(delete(created.id)).await.unwrap();
    assert_eq!(first.status(), StatusCode::OK);
    let body = text_body(first.into_body()).await;
    assert!(body.contains(&format!(
        "O Produto de id = {} foi excluído com sucesso.",
        created.id
    )));

    let second = app.oneshot(delete(created.id)).await.unwrap();
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
    let body = text_body(second.into_body()).await;
    assert!(body.contains("Não foi possível excluir."));
}

#[tokio::test]
async fn test_delete_product_by_entity_uses_embedded_id() {
    let app = app().await;
    let builder = TestDataBuilder::from_test_name("product_delete_entity");

    let response = app
        .clone()
        .oneshot(post_json("/", create_payload(&builder, "ent")))
        .await
        .unwrap();
    let created: Product = json_body(response.into_body()).await;

    let request = Request::builder()
        .method("DELETE")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&created).unwrap()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let request = Request::builder()
        .uri(format!("/{}", created.id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
