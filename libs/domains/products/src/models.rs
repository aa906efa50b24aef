use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier, assigned at creation
    pub id: i32,
    /// Stock keeping unit (unique business key)
    pub sku: String,
    /// Product name
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Current stock quantity
    pub stock_quantity: i32,
    /// Owning category; must exist at creation time
    pub category_id: i32,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Reduced wire projection of a Product
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductDto {
    pub id: i32,
    pub sku: String,
    pub name: String,
    pub price: f64,
    pub category_id: i32,
}

/// DTO for creating a new product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, message = "O sku deve ser preenchido."))]
    pub sku: String,
    #[validate(length(min = 1, message = "O nome deve ser preenchido."))]
    pub name: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub stock_quantity: i32,
    pub category_id: i32,
}

/// Query parameters of the SKU validation stub
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct SkuQuery {
    pub sku: String,
}

/// Query parameters of the id validation stub
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct IdQuery {
    pub id: i32,
}

impl Product {
    /// Build a product from a CreateProduct DTO and an assigned id
    pub fn new(input: CreateProduct, id: i32) -> Self {
        let now = Utc::now();
        Self {
            id,
            sku: input.sku,
            name: input.name,
            price: input.price,
            stock_quantity: input.stock_quantity,
            category_id: input.category_id,
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            sku: product.sku,
            name: product.name,
            price: product.price,
            category_id: product.category_id,
        }
    }
}

impl From<ProductDto> for CreateProduct {
    fn from(dto: ProductDto) -> Self {
        Self {
            sku: dto.sku,
            name: dto.name,
            price: dto.price,
            stock_quantity: 0,
            category_id: dto.category_id,
        }
    }
}
