use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use axum_helpers::ValidatedJson;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{SupplierError, SupplierResult};
use crate::models::{CreateSupplier, Supplier, SupplierDto};
use crate::registry_models::{AddressRecord, CompanyRecord};
use crate::repository::SupplierRepository;
use crate::service::SupplierService;

pub const TAG: &str = "Fornecedor";

/// OpenAPI documentation for the Supplier API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_suppliers,
        lookup_company,
        lookup_address,
        get_supplier_dto,
        get_supplier,
        create_supplier,
        create_supplier_dto,
        update_supplier,
        delete_supplier,
        delete_supplier_by_id,
    ),
    components(schemas(Supplier, SupplierDto, CreateSupplier, CompanyRecord, AddressRecord)),
    tags(
        (name = TAG, description = "Supplier management and registry lookup endpoints")
    )
)]
pub struct ApiDoc;

/// Create the supplier router with all HTTP endpoints
pub fn router<R: SupplierRepository + 'static>(service: SupplierService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route(
            "/",
            get(list_suppliers)
                .post(create_supplier)
                .put(update_supplier)
                .delete(delete_supplier),
        )
        .route("/cnpj/{cnpj}", get(lookup_company))
        .route("/cep/{cep}", get(lookup_address))
        .route("/dto", post(create_supplier_dto))
        .route("/dto/{id}", get(get_supplier_dto))
        .route("/{id}", get(get_supplier).delete(delete_supplier_by_id))
        .with_state(shared_service)
}

/// List all suppliers.
///
/// By convention an empty table is reported as 404, not as an empty list.
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "List of suppliers", body = Vec<Supplier>),
        (status = 404, description = "No suppliers stored")
    )
)]
async fn list_suppliers<R: SupplierRepository>(
    State(service): State<Arc<SupplierService<R>>>,
) -> SupplierResult<Json<Vec<Supplier>>> {
    let suppliers = service.list_suppliers().await?;

    if suppliers.is_empty() {
        return Err(SupplierError::NoneFound);
    }
    Ok(Json(suppliers))
}

/// Look up company data in the taxpayer registry by CNPJ
#[utoipa::path(
    get,
    path = "/cnpj/{cnpj}",
    tag = TAG,
    params(
        ("cnpj" = String, Path, description = "Tax identifier to consult")
    ),
    responses(
        (status = 200, description = "Company record found", body = CompanyRecord),
        (status = 404, description = "No data for the given CNPJ")
    )
)]
async fn lookup_company<R: SupplierRepository>(
    State(service): State<Arc<SupplierService<R>>>,
    Path(cnpj): Path<String>,
) -> SupplierResult<Json<CompanyRecord>> {
    let record = service.lookup_company(&cnpj).await?;
    Ok(Json(record))
}

/// Look up address data in the postal registry by CEP
#[utoipa::path(
    get,
    path = "/cep/{cep}",
    tag = TAG,
    params(
        ("cep" = String, Path, description = "Postal code to consult")
    ),
    responses(
        (status = 200, description = "Address record found", body = AddressRecord),
        (status = 404, description = "No data for the given CEP")
    )
)]
async fn lookup_address<R: SupplierRepository>(
    State(service): State<Arc<SupplierService<R>>>,
    Path(cep): Path<String>,
) -> SupplierResult<Json<AddressRecord>> {
    let record = service.lookup_address(&cep).await?;
    Ok(Json(record))
}

/// Get a supplier by id, projected to its DTO shape
#[utoipa::path(
    get,
    path = "/dto/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Supplier id")
    ),
    responses(
        (status = 200, description = "Supplier found", body = SupplierDto),
        (status = 404, description = "No supplier with the given id")
    )
)]
async fn get_supplier_dto<R: SupplierRepository>(
    State(service): State<Arc<SupplierService<R>>>,
    Path(id): Path<i32>,
) -> SupplierResult<Json<SupplierDto>> {
    let dto = service.get_supplier_dto(id).await?;
    Ok(Json(dto))
}

/// Get a supplier by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Supplier id")
    ),
    responses(
        (status = 200, description = "Supplier found", body = Supplier),
        (status = 404, description = "No supplier with the given id")
    )
)]
async fn get_supplier<R: SupplierRepository>(
    State(service): State<Arc<SupplierService<R>>>,
    Path(id): Path<i32>,
) -> SupplierResult<Json<Supplier>> {
    let supplier = service.get_supplier(id).await?;
    Ok(Json(supplier))
}

/// Create a new supplier
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateSupplier,
    responses(
        (status = 201, description = "Supplier created successfully", body = Supplier),
        (status = 400, description = "Invalid payload"),
        (status = 409, description = "Duplicate cnpj")
    )
)]
async fn create_supplier<R: SupplierRepository>(
    State(service): State<Arc<SupplierService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateSupplier>,
) -> SupplierResult<impl IntoResponse> {
    let supplier = service.create_supplier(input).await?;
    Ok((StatusCode::CREATED, Json(supplier)))
}

/// Create a new supplier from its DTO shape
#[utoipa::path(
    post,
    path = "/dto",
    tag = TAG,
    request_body = SupplierDto,
    responses(
        (status = 201, description = "Supplier created successfully", body = SupplierDto)
    )
)]
async fn create_supplier_dto<R: SupplierRepository>(
    State(service): State<Arc<SupplierService<R>>>,
    Json(dto): Json<SupplierDto>,
) -> SupplierResult<impl IntoResponse> {
    let created = service.create_supplier_dto(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a supplier
#[utoipa::path(
    put,
    path = "",
    tag = TAG,
    request_body = Supplier,
    responses(
        (status = 200, description = "Supplier updated successfully", body = Supplier),
        (status = 404, description = "No supplier with the embedded id")
    )
)]
async fn update_supplier<R: SupplierRepository>(
    State(service): State<Arc<SupplierService<R>>>,
    Json(input): Json<Supplier>,
) -> SupplierResult<Json<Supplier>> {
    let supplier = service.update_supplier(input).await?;
    Ok(Json(supplier))
}

/// Delete a supplier, resolved by the id embedded in the submitted entity
#[utoipa::path(
    delete,
    path = "",
    tag = TAG,
    request_body = Supplier,
    responses(
        (status = 200, description = "Supplier deleted", body = String),
        (status = 404, description = "No supplier with the embedded id", body = String)
    )
)]
async fn delete_supplier<R: SupplierRepository>(
    State(service): State<Arc<SupplierService<R>>>,
    Json(input): Json<Supplier>,
) -> SupplierResult<(StatusCode, String)> {
    delete_supplier_response(&service, input.id).await
}

/// Delete a supplier by id
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Supplier id")
    ),
    responses(
        (status = 200, description = "Supplier deleted", body = String),
        (status = 404, description = "No supplier with the given id", body = String)
    )
)]
async fn delete_supplier_by_id<R: SupplierRepository>(
    State(service): State<Arc<SupplierService<R>>>,
    Path(id): Path<i32>,
) -> SupplierResult<(StatusCode, String)> {
    delete_supplier_response(&service, id).await
}

async fn delete_supplier_response<R: SupplierRepository>(
    service: &SupplierService<R>,
    id: i32,
) -> SupplierResult<(StatusCode, String)> {
    match service.delete_supplier(id).await {
        Ok(()) => Ok((
            StatusCode::OK,
            format!("O Fornecedor de id = {} foi excluído com sucesso.", id),
        )),
        Err(SupplierError::NotFound(_)) => Ok((
            StatusCode::NOT_FOUND,
            format!(
                "Não foi possível excluir. O Fornecedor de id = {} não foi encontrado.",
                id
            ),
        )),
        Err(e) => Err(e),
    }
}
