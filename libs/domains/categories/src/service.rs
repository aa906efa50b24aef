use std::sync::Arc;
use validator::Validate;

use crate::error::{CategoryError, CategoryResult};
use crate::models::{Category, CategoryDto, CreateCategory};
use crate::repository::CategoryRepository;
use crate::storage::ImageStore;

/// Service layer for Category business logic
pub struct CategoryService<R: CategoryRepository> {
    repository: Arc<R>,
    images: ImageStore,
}

impl<R: CategoryRepository> Clone for CategoryService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            images: self.images.clone(),
        }
    }
}

impl<R: CategoryRepository> CategoryService<R> {
    pub fn new(repository: R, images: ImageStore) -> Self {
        Self {
            repository: Arc::new(repository),
            images,
        }
    }

    /// List all categories; an empty list is a valid result
    pub async fn list_categories(&self) -> CategoryResult<Vec<Category>> {
        self.repository.list().await
    }

    /// Get a category by id
    pub async fn get_category(&self, id: i32) -> CategoryResult<Category> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(CategoryError::NotFound(id))
    }

    /// Get a category by id, projected to its DTO shape
    pub async fn get_category_dto(&self, id: i32) -> CategoryResult<CategoryDto> {
        Ok(self.get_category(id).await?.into())
    }

    /// Create a new category from a validated payload
    pub async fn create_category(&self, input: CreateCategory) -> CategoryResult<Category> {
        input
            .validate()
            .map_err(|e| CategoryError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Create a category from its DTO projection
    pub async fn create_category_dto(&self, dto: CategoryDto) -> CategoryResult<CategoryDto> {
        let created = self.repository.create(dto.into()).await?;
        Ok(created.into())
    }

    /// Create a category from a raw JSON payload plus an uploaded image.
    ///
    /// The payload arrives as the text part of a multipart request; any
    /// processing failure (bad JSON, image store I/O) surfaces as an
    /// internal error.
    pub async fn create_category_with_image(
        &self,
        payload: &str,
        file_name: &str,
        data: &[u8],
    ) -> CategoryResult<Category> {
        let mut input: CreateCategory = serde_json::from_str(payload)
            .map_err(|e| CategoryError::Internal(format!("invalid category payload: {}", e)))?;

        let stored = self
            .images
            .save(file_name, data)
            .await
            .map_err(|e| CategoryError::Internal(format!("failed to store image: {}", e)))?;
        input.image = Some(stored);

        self.repository.create(input).await
    }

    /// Update a category; the id embedded in the payload must exist
    pub async fn update_category(&self, input: Category) -> CategoryResult<Category> {
        input
            .validate()
            .map_err(|e| CategoryError::Validation(e.to_string()))?;

        self.repository.update(input).await
    }

    /// Delete a category by id
    pub async fn delete_category(&self, id: i32) -> CategoryResult<()> {
        let deleted = self.repository.delete_by_id(id).await?;

        if !deleted {
            return Err(CategoryError::NotFound(id));
        }

        Ok(())
    }
}
