use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use axum_helpers::ValidatedJson;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, IdQuery, Product, ProductDto, SkuQuery};
use crate::repository::ProductRepository;
use crate::service::ProductService;

pub const TAG: &str = "Produto";

/// OpenAPI documentation for the Product API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        get_product_dto,
        get_product,
        check_sku_query,
        check_id_request,
        create_product,
        create_product_dto,
        update_product,
        delete_product,
        delete_product_by_id,
    ),
    components(schemas(Product, ProductDto, CreateProduct)),
    tags(
        (name = TAG, description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the product router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route(
            "/",
            get(list_products)
                .post(create_product)
                .put(update_product)
                .delete(delete_product),
        )
        .route("/dto", post(create_product_dto))
        .route("/dto/{id}", get(get_product_dto))
        .route("/query", get(check_sku_query))
        .route("/request", get(check_id_request))
        .route("/{id}", get(get_product).delete(delete_product_by_id))
        .with_state(shared_service)
}

/// List all products.
///
/// By convention an empty table is reported as 404, not as an empty list.
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "List of products", body = Vec<Product>),
        (status = 404, description = "No products stored")
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.list_products().await?;

    if products.is_empty() {
        return Err(ProductError::NoneFound);
    }
    Ok(Json(products))
}

/// Get a product by id, projected to its DTO shape
#[utoipa::path(
    get,
    path = "/dto/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductDto),
        (status = 404, description = "No product with the given id")
    )
)]
async fn get_product_dto<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<i32>,
) -> ProductResult<Json<ProductDto>> {
    let dto = service.get_product_dto(id).await?;
    Ok(Json(dto))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "No product with the given id")
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<i32>,
) -> ProductResult<Json<Product>> {
    let product = service.get_product(id).await?;
    Ok(Json(product))
}

/// SKU validation stub.
///
/// Checks the `sku` query parameter is present and non-blank, performs no
/// lookup, and answers 100 Continue with an empty body.
#[utoipa::path(
    get,
    path = "/query",
    tag = TAG,
    params(SkuQuery),
    responses(
        (status = 100, description = "Constraint satisfied; no lookup performed"),
        (status = 400, description = "Blank or missing sku")
    )
)]
async fn check_sku_query<R: ProductRepository>(
    State(_service): State<Arc<ProductService<R>>>,
    Query(query): Query<SkuQuery>,
) -> ProductResult<StatusCode> {
    if query.sku.trim().is_empty() {
        return Err(ProductError::Validation(
            "O sku deve ser preenchido.".to_string(),
        ));
    }
    Ok(StatusCode::CONTINUE)
}

/// Id validation stub.
///
/// The extractor rejects a missing or non-numeric `id` with 400; nothing
/// else is checked and no lookup is performed.
#[utoipa::path(
    get,
    path = "/request",
    tag = TAG,
    params(IdQuery),
    responses(
        (status = 100, description = "Constraint satisfied; no lookup performed"),
        (status = 400, description = "Missing or non-numeric id")
    )
)]
async fn check_id_request<R: ProductRepository>(
    State(_service): State<Arc<ProductService<R>>>,
    Query(_query): Query<IdQuery>,
) -> ProductResult<StatusCode> {
    Ok(StatusCode::CONTINUE)
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created successfully", body = Product),
        (status = 400, description = "Invalid payload or unknown category"),
        (status = 409, description = "Duplicate sku")
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Create a new product from its DTO shape
#[utoipa::path(
    post,
    path = "/dto",
    tag = TAG,
    request_body = ProductDto,
    responses(
        (status = 201, description = "Product created successfully", body = ProductDto)
    )
)]
async fn create_product_dto<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Json(dto): Json<ProductDto>,
) -> ProductResult<impl IntoResponse> {
    let created = service.create_product_dto(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a product
#[utoipa::path(
    put,
    path = "",
    tag = TAG,
    request_body = Product,
    responses(
        (status = 200, description = "Product updated successfully", body = Product),
        (status = 404, description = "No product with the embedded id")
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Json(input): Json<Product>,
) -> ProductResult<Json<Product>> {
    let product = service.update_product(input).await?;
    Ok(Json(product))
}

/// Delete a product, resolved by the id embedded in the submitted entity
#[utoipa::path(
    delete,
    path = "",
    tag = TAG,
    request_body = Product,
    responses(
        (status = 200, description = "Product deleted", body = String),
        (status = 404, description = "No product with the embedded id", body = String)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Json(input): Json<Product>,
) -> ProductResult<(StatusCode, String)> {
    delete_product_response(&service, input.id).await
}

/// Delete a product by id
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product deleted", body = String),
        (status = 404, description = "No product with the given id", body = String)
    )
)]
async fn delete_product_by_id<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<i32>,
) -> ProductResult<(StatusCode, String)> {
    delete_product_response(&service, id).await
}

async fn delete_product_response<R: ProductRepository>(
    service: &ProductService<R>,
    id: i32,
) -> ProductResult<(StatusCode, String)> {
    match service.delete_product(id).await {
        Ok(()) => Ok((
            StatusCode::OK,
            format!("O Produto de id = {} foi excluído com sucesso.", id),
        )),
        Err(ProductError::NotFound(_)) => Ok((
            StatusCode::NOT_FOUND,
            format!(
                "Não foi possível excluir. O Produto de id = {} não foi encontrado.",
                id
            ),
        )),
        Err(e) => Err(e),
    }
}
