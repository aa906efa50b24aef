use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Não foi encontrado Produto com o id {0}")]
    NotFound(i32),

    // The DTO view uses a different message text; kept separate for wire
    // compatibility.
    #[error("Não foi encontrado Produto com o id = {0}.")]
    DtoNotFound(i32),

    #[error("Nenhum produto encontrado.")]
    NoneFound,

    #[error("Produto com o sku '{0}' já existe")]
    DuplicateSku(String),

    #[error("Não foi encontrada Categoria com o id {0}")]
    UnknownCategory(i32),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => {
                AppError::NotFound(format!("Não foi encontrado Produto com o id {}", id))
            }
            ProductError::DtoNotFound(id) => {
                AppError::NotFound(format!("Não foi encontrado Produto com o id = {}.", id))
            }
            ProductError::NoneFound => {
                AppError::NotFound("Nenhum produto encontrado.".to_string())
            }
            ProductError::DuplicateSku(sku) => {
                AppError::Conflict(format!("Produto com o sku '{}' já existe", sku))
            }
            ProductError::UnknownCategory(id) => {
                AppError::BadRequest(format!("Não foi encontrada Categoria com o id {}", id))
            }
            ProductError::Validation(msg) => AppError::BadRequest(msg),
            ProductError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
