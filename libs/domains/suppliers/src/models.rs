use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use utoipa::ToSchema;
use validator::Validate;

/// A CNPJ is 14 digits, bare or formatted as NN.NNN.NNN/NNNN-NN
static CNPJ_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{14}|\d{2}\.\d{3}\.\d{3}/\d{4}-\d{2})$").unwrap());

/// Custom validator for the supplier tax identifier
fn validate_cnpj(cnpj: &str) -> Result<(), validator::ValidationError> {
    if !CNPJ_FORMAT.is_match(cnpj) {
        return Err(validator::ValidationError::new("invalid_cnpj"));
    }
    Ok(())
}

/// Supplier entity
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Supplier {
    /// Unique identifier, assigned at creation
    pub id: i32,
    /// Tax identifier (unique business key)
    pub cnpj: String,
    /// Legal company name
    pub company_name: String,
    /// Trade name
    pub trade_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub district: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Reduced wire projection of a Supplier
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SupplierDto {
    pub id: i32,
    pub cnpj: String,
    pub company_name: String,
    pub city: Option<String>,
    pub state: Option<String>,
}

/// DTO for creating a new supplier
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateSupplier {
    #[validate(custom(function = validate_cnpj))]
    pub cnpj: String,
    #[validate(length(min = 1, message = "A razão social deve ser preenchida."))]
    pub company_name: String,
    #[serde(default)]
    pub trade_name: Option<String>,
    #[serde(default)]
    #[validate(email)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
}

impl Supplier {
    /// Build a supplier from a CreateSupplier DTO and an assigned id
    pub fn new(input: CreateSupplier, id: i32) -> Self {
        let now = Utc::now();
        Self {
            id,
            cnpj: input.cnpj,
            company_name: input.company_name,
            trade_name: input.trade_name,
            email: input.email,
            phone: input.phone,
            street: input.street,
            number: input.number,
            district: input.district,
            city: input.city,
            state: input.state,
            postal_code: input.postal_code,
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<Supplier> for SupplierDto {
    fn from(supplier: Supplier) -> Self {
        Self {
            id: supplier.id,
            cnpj: supplier.cnpj,
            company_name: supplier.company_name,
            city: supplier.city,
            state: supplier.state,
        }
    }
}

impl From<SupplierDto> for CreateSupplier {
    fn from(dto: SupplierDto) -> Self {
        Self {
            cnpj: dto.cnpj,
            company_name: dto.company_name,
            trade_name: None,
            email: None,
            phone: None,
            street: None,
            number: None,
            district: None,
            city: dto.city,
            state: dto.state,
            postal_code: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(cnpj: &str) -> CreateSupplier {
        CreateSupplier {
            cnpj: cnpj.to_string(),
            company_name: "Distribuidora Sol Ltda".to_string(),
            trade_name: None,
            email: None,
            phone: None,
            street: None,
            number: None,
            district: None,
            city: None,
            state: None,
            postal_code: None,
        }
    }

    #[test]
    fn test_bare_cnpj_is_accepted() {
        assert!(input("45997418000153").validate().is_ok());
    }

    #[test]
    fn test_formatted_cnpj_is_accepted() {
        assert!(input("45.997.418/0001-53").validate().is_ok());
    }

    #[test]
    fn test_short_cnpj_is_rejected() {
        assert!(input("4599741800015").validate().is_err());
    }

    #[test]
    fn test_non_numeric_cnpj_is_rejected() {
        assert!(input("4599741800015x").validate().is_err());
    }

    #[test]
    fn test_blank_company_name_is_rejected() {
        let mut bad = input("45997418000153");
        bad.company_name = String::new();
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_invalid_email_is_rejected() {
        let mut bad = input("45997418000153");
        bad.email = Some("not-an-email".to_string());
        assert!(bad.validate().is_err());
    }
}
