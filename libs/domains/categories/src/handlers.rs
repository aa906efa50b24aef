use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use axum_helpers::ValidatedJson;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{CategoryError, CategoryResult};
use crate::models::{Category, CategoryDto, CreateCategory};
use crate::repository::CategoryRepository;
use crate::service::CategoryService;

pub const TAG: &str = "Categoria";

/// OpenAPI documentation for the Category API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_categories,
        get_category_dto,
        get_category,
        create_category,
        create_category_dto,
        create_category_with_image,
        update_category,
        delete_category,
    ),
    components(schemas(Category, CategoryDto, CreateCategory)),
    tags(
        (name = TAG, description = "Category management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the category router with all HTTP endpoints
pub fn router<R: CategoryRepository + 'static>(service: CategoryService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route(
            "/",
            get(list_categories)
                .post(create_category)
                .put(update_category),
        )
        .route("/dto", post(create_category_dto))
        .route("/dto/{id}", get(get_category_dto))
        .route("/com-foto", post(create_category_with_image))
        .route("/{id}", get(get_category).delete(delete_category))
        .with_state(shared_service)
}

/// List all categories
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "List of categories", body = Vec<Category>)
    )
)]
async fn list_categories<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
) -> CategoryResult<Json<Vec<Category>>> {
    let categories = service.list_categories().await?;
    Ok(Json(categories))
}

/// Get a category by id, projected to its DTO shape
#[utoipa::path(
    get,
    path = "/dto/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Category found", body = CategoryDto),
        (status = 404, description = "No category with the given id")
    )
)]
async fn get_category_dto<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    Path(id): Path<i32>,
) -> CategoryResult<Json<CategoryDto>> {
    let dto = service.get_category_dto(id).await?;
    Ok(Json(dto))
}

/// Get a category by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Category found", body = Category),
        (status = 404, description = "No category with the given id")
    )
)]
async fn get_category<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    Path(id): Path<i32>,
) -> CategoryResult<Json<Category>> {
    let category = service.get_category(id).await?;
    Ok(Json(category))
}

/// Create a new category
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateCategory,
    responses(
        (status = 201, description = "Category created successfully", body = Category),
        (status = 400, description = "Invalid payload")
    )
)]
async fn create_category<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateCategory>,
) -> CategoryResult<impl IntoResponse> {
    let category = service.create_category(input).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// Create a new category from its DTO shape
#[utoipa::path(
    post,
    path = "/dto",
    tag = TAG,
    request_body = CategoryDto,
    responses(
        (status = 201, description = "Category created successfully", body = CategoryDto)
    )
)]
async fn create_category_dto<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    Json(dto): Json<CategoryDto>,
) -> CategoryResult<impl IntoResponse> {
    let created = service.create_category_dto(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Create a new category with an image.
///
/// Accepts two multipart parts: `categoria` (JSON text describing the
/// category) and `file` (the image binary). Any processing failure maps
/// to an internal error.
#[utoipa::path(
    post,
    path = "/com-foto",
    tag = TAG,
    responses(
        (status = 201, description = "Category created successfully", body = Category),
        (status = 500, description = "Processing error")
    )
)]
async fn create_category_with_image<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    mut multipart: Multipart,
) -> CategoryResult<impl IntoResponse> {
    let mut payload: Option<String> = None;
    let mut file: Option<(String, axum::body::Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| CategoryError::Internal(format!("invalid multipart request: {}", e)))?
    {
        let part_name = field.name().map(str::to_string);
        match part_name.as_deref() {
            Some("categoria") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| CategoryError::Internal(format!("invalid multipart part: {}", e)))?;
                payload = Some(text);
            }
            Some("file") => {
                let file_name = field.file_name().unwrap_or("imagem").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| CategoryError::Internal(format!("invalid multipart part: {}", e)))?;
                file = Some((file_name, data));
            }
            _ => {}
        }
    }

    let payload = payload
        .ok_or_else(|| CategoryError::Internal("multipart part 'categoria' is required".to_string()))?;
    let (file_name, data) = file
        .ok_or_else(|| CategoryError::Internal("multipart part 'file' is required".to_string()))?;

    let category = service
        .create_category_with_image(&payload, &file_name, &data)
        .await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// Update a category
#[utoipa::path(
    put,
    path = "",
    tag = TAG,
    request_body = Category,
    responses(
        (status = 200, description = "Category updated successfully", body = Category),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "No category with the embedded id")
    )
)]
async fn update_category<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    ValidatedJson(input): ValidatedJson<Category>,
) -> CategoryResult<Json<Category>> {
    let category = service.update_category(input).await?;
    Ok(Json(category))
}

/// Delete a category by id.
///
/// Responds with an empty body: 200 when the record existed, 404 otherwise.
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Category deleted"),
        (status = 404, description = "No category with the given id")
    )
)]
async fn delete_category<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    Path(id): Path<i32>,
) -> CategoryResult<(StatusCode, String)> {
    match service.delete_category(id).await {
        Ok(()) => Ok((StatusCode::OK, String::new())),
        Err(CategoryError::NotFound(_)) => Ok((StatusCode::NOT_FOUND, String::new())),
        Err(e) => Err(e),
    }
}
