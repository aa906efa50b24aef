use std::sync::Arc;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductDto};
use crate::repository::ProductRepository;

/// Service layer for Product business logic
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all products
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    /// Get a product by id
    pub async fn get_product(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Get a product by id, projected to its DTO shape
    pub async fn get_product_dto(&self, id: i32) -> ProductResult<ProductDto> {
        self.repository
            .get_by_id(id)
            .await?
            .map(Into::into)
            .ok_or(ProductError::DtoNotFound(id))
    }

    /// Create a new product from a validated payload.
    ///
    /// The referenced category must exist at creation time.
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        if !self.repository.category_exists(input.category_id).await? {
            return Err(ProductError::UnknownCategory(input.category_id));
        }

        self.repository.create(input).await
    }

    /// Create a product from its DTO projection
    pub async fn create_product_dto(&self, dto: ProductDto) -> ProductResult<ProductDto> {
        let created = self.repository.create(dto.into()).await?;
        Ok(created.into())
    }

    /// Update a product; the id embedded in the payload must exist
    pub async fn update_product(&self, input: Product) -> ProductResult<Product> {
        self.repository.update(input).await
    }

    /// Delete a product by id
    pub async fn delete_product(&self, id: i32) -> ProductResult<()> {
        let deleted = self.repository.delete_by_id(id).await?;

        if !deleted {
            return Err(ProductError::NotFound(id));
        }

        Ok(())
    }
}
