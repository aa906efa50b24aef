use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product};

/// Repository trait for Product persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Create a new product
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Get a product by id
    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// List all products
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Update an existing product, resolved by the embedded id
    async fn update(&self, input: Product) -> ProductResult<Product>;

    /// Delete a product by id; returns whether a record was removed
    async fn delete_by_id(&self, id: i32) -> ProductResult<bool>;

    /// Check if a product with the given sku exists
    async fn exists_by_sku(&self, sku: &str) -> ProductResult<bool>;

    /// Check if the referenced category exists
    async fn category_exists(&self, category_id: i32) -> ProductResult<bool>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<i32, Product>>>,
    known_categories: Arc<RwLock<HashSet<i32>>>,
    next_id: Arc<AtomicI32>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a category id so `category_exists` can resolve it
    pub async fn add_category(&self, category_id: i32) {
        self.known_categories.write().await.insert(category_id);
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        // sku is the unique business key
        if products.values().any(|p| p.sku == input.sku) {
            return Err(ProductError::DuplicateSku(input.sku));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let product = Product::new(input, id);
        products.insert(id, product.clone());

        tracing::info!(product_id = id, "Created product");
        Ok(product)
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;

        let mut result: Vec<Product> = products.values().cloned().collect();
        result.sort_by_key(|p| p.id);

        Ok(result)
    }

    async fn update(&self, input: Product) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        let product = products
            .get_mut(&input.id)
            .ok_or(ProductError::NotFound(input.id))?;

        product.sku = input.sku;
        product.name = input.name;
        product.price = input.price;
        product.stock_quantity = input.stock_quantity;
        product.category_id = input.category_id;
        product.updated_at = chrono::Utc::now();
        let updated = product.clone();

        tracing::info!(product_id = input.id, "Updated product");
        Ok(updated)
    }

    async fn delete_by_id(&self, id: i32) -> ProductResult<bool> {
        let mut products = self.products.write().await;

        if products.remove(&id).is_some() {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn exists_by_sku(&self, sku: &str) -> ProductResult<bool> {
        let products = self.products.read().await;
        Ok(products.values().any(|p| p.sku == sku))
    }

    async fn category_exists(&self, category_id: i32) -> ProductResult<bool> {
        let categories = self.known_categories.read().await;
        Ok(categories.contains(&category_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(sku: &str) -> CreateProduct {
        CreateProduct {
            sku: sku.to_string(),
            name: "Café torrado 500g".to_string(),
            price: 24.9,
            stock_quantity: 10,
            category_id: 1,
        }
    }

    #[tokio::test]
    async fn test_create_and_get_product() {
        let repo = InMemoryProductRepository::new();

        let product = repo.create(input("CAFE-500G")).await.unwrap();
        let fetched = repo.get_by_id(product.id).await.unwrap();

        assert!(fetched.is_some());
        assert_eq!(fetched.unwrap().sku, "CAFE-500G");
    }

    #[tokio::test]
    async fn test_duplicate_sku_is_rejected() {
        let repo = InMemoryProductRepository::new();

        repo.create(input("CAFE-500G")).await.unwrap();
        let result = repo.create(input("CAFE-500G")).await;

        assert!(matches!(result, Err(ProductError::DuplicateSku(_))));
    }

    #[tokio::test]
    async fn test_category_exists_reflects_registered_ids() {
        let repo = InMemoryProductRepository::new();

        assert!(!repo.category_exists(1).await.unwrap());
        repo.add_category(1).await;
        assert!(repo.category_exists(1).await.unwrap());
    }
}
