use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

use crate::registry_client::RegistryError;

#[derive(Debug, Error)]
pub enum SupplierError {
    #[error("Não foi encontrado Fornecedor com o id {0}")]
    NotFound(i32),

    #[error("Nenhum fornecedor encontrado.")]
    NoneFound,

    #[error("Não foram encontrados dados para o CNPJ informado")]
    CnpjDataNotFound,

    #[error("Não foram encontrados dados para o CEP informado")]
    CepDataNotFound,

    #[error("Fornecedor com o cnpj '{0}' já existe")]
    DuplicateCnpj(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Registry error: {0}")]
    Registry(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type SupplierResult<T> = Result<T, SupplierError>;

/// Convert SupplierError to AppError for standardized error responses
impl From<SupplierError> for AppError {
    fn from(err: SupplierError) -> Self {
        match err {
            SupplierError::NotFound(id) => {
                AppError::NotFound(format!("Não foi encontrado Fornecedor com o id {}", id))
            }
            SupplierError::NoneFound => {
                AppError::NotFound("Nenhum fornecedor encontrado.".to_string())
            }
            SupplierError::CnpjDataNotFound => AppError::NotFound(
                "Não foram encontrados dados para o CNPJ informado".to_string(),
            ),
            SupplierError::CepDataNotFound => AppError::NotFound(
                "Não foram encontrados dados para o CEP informado".to_string(),
            ),
            SupplierError::DuplicateCnpj(cnpj) => {
                AppError::Conflict(format!("Fornecedor com o cnpj '{}' já existe", cnpj))
            }
            SupplierError::Validation(msg) => AppError::BadRequest(msg),
            SupplierError::Registry(msg) => AppError::InternalServerError(msg),
            SupplierError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl From<RegistryError> for SupplierError {
    fn from(err: RegistryError) -> Self {
        SupplierError::Registry(err.to_string())
    }
}

impl IntoResponse for SupplierError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
