use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{CategoryError, CategoryResult};
use crate::models::{Category, CreateCategory};

/// Repository trait for Category persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Create a new category
    async fn create(&self, input: CreateCategory) -> CategoryResult<Category>;

    /// Get a category by id
    async fn get_by_id(&self, id: i32) -> CategoryResult<Option<Category>>;

    /// List all categories
    async fn list(&self) -> CategoryResult<Vec<Category>>;

    /// Update an existing category, resolved by the embedded id
    async fn update(&self, input: Category) -> CategoryResult<Category>;

    /// Delete a category by id; returns whether a record was removed
    async fn delete_by_id(&self, id: i32) -> CategoryResult<bool>;
}

/// In-memory implementation of CategoryRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryCategoryRepository {
    categories: Arc<RwLock<HashMap<i32, Category>>>,
    next_id: Arc<AtomicI32>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn create(&self, input: CreateCategory) -> CategoryResult<Category> {
        let mut categories = self.categories.write().await;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let category = Category::new(input, id);
        categories.insert(id, category.clone());

        tracing::info!(category_id = id, "Created category");
        Ok(category)
    }

    async fn get_by_id(&self, id: i32) -> CategoryResult<Option<Category>> {
        let categories = self.categories.read().await;
        Ok(categories.get(&id).cloned())
    }

    async fn list(&self) -> CategoryResult<Vec<Category>> {
        let categories = self.categories.read().await;

        let mut result: Vec<Category> = categories.values().cloned().collect();
        result.sort_by_key(|c| c.id);

        Ok(result)
    }

    async fn update(&self, input: Category) -> CategoryResult<Category> {
        let mut categories = self.categories.write().await;

        let category = categories
            .get_mut(&input.id)
            .ok_or(CategoryError::NotFound(input.id))?;

        category.name = input.name;
        category.description = input.description;
        category.image = input.image;
        category.updated_at = chrono::Utc::now();
        let updated = category.clone();

        tracing::info!(category_id = input.id, "Updated category");
        Ok(updated)
    }

    async fn delete_by_id(&self, id: i32) -> CategoryResult<bool> {
        let mut categories = self.categories.write().await;

        if categories.remove(&id).is_some() {
            tracing::info!(category_id = id, "Deleted category");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str) -> CreateCategory {
        CreateCategory {
            name: name.to_string(),
            description: None,
            image: None,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryCategoryRepository::new();

        let first = repo.create(input("Bebidas")).await.unwrap();
        let second = repo.create(input("Padaria")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_create_and_get_category() {
        let repo = InMemoryCategoryRepository::new();

        let category = repo.create(input("Bebidas")).await.unwrap();
        let fetched = repo.get_by_id(category.id).await.unwrap();

        assert!(fetched.is_some());
        assert_eq!(fetched.unwrap().name, "Bebidas");
    }

    #[tokio::test]
    async fn test_update_missing_category_errors() {
        let repo = InMemoryCategoryRepository::new();

        let ghost = Category::new(input("Fantasma"), 99);
        let result = repo.update(ghost).await;

        assert!(matches!(result, Err(CategoryError::NotFound(99))));
    }

    #[tokio::test]
    async fn test_delete_missing_returns_false() {
        let repo = InMemoryCategoryRepository::new();
        assert!(!repo.delete_by_id(42).await.unwrap());
    }
}
