use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Category entity - a product grouping
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct Category {
    /// Unique identifier, assigned at creation
    pub id: i32,
    /// Category name
    #[validate(length(min = 1, message = "O nome deve ser preenchido."))]
    pub name: String,
    /// Category description
    pub description: Option<String>,
    /// Stored image reference, set by the image-upload endpoint
    pub image: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Reduced wire projection of a Category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
}

/// DTO for creating a new category
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCategory {
    #[validate(length(min = 1, message = "O nome deve ser preenchido."))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl Category {
    /// Build a category from a CreateCategory DTO and an assigned id
    pub fn new(input: CreateCategory, id: i32) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: input.name,
            description: input.description,
            image: input.image,
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}

impl From<CategoryDto> for CreateCategory {
    fn from(dto: CategoryDto) -> Self {
        Self {
            name: dto.name,
            description: None,
            image: None,
        }
    }
}
