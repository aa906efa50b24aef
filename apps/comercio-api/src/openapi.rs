//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the comercio API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Comercio API",
        version = "0.1.0",
        description = "CRUD backend for categories, suppliers and products, \
                       with taxpayer (CNPJ) and postal-code (CEP) registry lookups",
        license(name = "MIT")
    ),
    nest(
        (path = "/categoria", api = domain_categories::ApiDoc),
        (path = "/fornecedor", api = domain_suppliers::ApiDoc),
        (path = "/produto", api = domain_products::ApiDoc)
    ),
    tags(
        (name = "Categoria", description = "Category endpoints"),
        (name = "Fornecedor", description = "Supplier endpoints"),
        (name = "Produto", description = "Product endpoints")
    )
)]
pub struct ApiDoc;
