//! Wire shapes of the two external registries.
//!
//! Both structs mirror the registries' raw JSON, Portuguese keys included.
//! Every field defaults on decode so the registries' sentinel "not found"
//! payloads still parse.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Company record returned by the taxpayer registry, keyed by CNPJ.
///
/// The registry reports absence with `{"status": "ERROR", "message": ...}`
/// instead of an HTTP error.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompanyRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub cnpj: String,
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub fantasia: Option<String>,
    #[serde(default)]
    pub abertura: Option<String>,
    #[serde(default)]
    pub situacao: Option<String>,
    #[serde(default)]
    pub tipo: Option<String>,
    #[serde(default)]
    pub natureza_juridica: Option<String>,
    #[serde(default)]
    pub logradouro: Option<String>,
    #[serde(default)]
    pub numero: Option<String>,
    #[serde(default)]
    pub complemento: Option<String>,
    #[serde(default)]
    pub bairro: Option<String>,
    #[serde(default)]
    pub municipio: Option<String>,
    #[serde(default)]
    pub uf: Option<String>,
    #[serde(default)]
    pub cep: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub telefone: Option<String>,
}

impl CompanyRecord {
    /// The registry's "no data for this CNPJ" sentinel
    pub fn is_error(&self) -> bool {
        self.status.as_deref() == Some("ERROR")
    }
}

/// Address record returned by the postal registry, keyed by CEP.
///
/// The registry reports absence with `{"erro": true}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddressRecord {
    #[serde(default)]
    pub erro: bool,
    #[serde(default)]
    pub cep: Option<String>,
    #[serde(default)]
    pub logradouro: Option<String>,
    #[serde(default)]
    pub complemento: Option<String>,
    #[serde(default)]
    pub bairro: Option<String>,
    #[serde(default)]
    pub localidade: Option<String>,
    #[serde(default)]
    pub uf: Option<String>,
    #[serde(default)]
    pub ddd: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_sentinel_parses_without_company_fields() {
        let record: CompanyRecord =
            serde_json::from_str(r#"{"status":"ERROR","message":"CNPJ inválido"}"#).unwrap();
        assert!(record.is_error());
        assert!(record.cnpj.is_empty());
    }

    #[test]
    fn test_address_error_sentinel_parses() {
        let record: AddressRecord = serde_json::from_str(r#"{"erro":true}"#).unwrap();
        assert!(record.erro);
        assert!(record.cep.is_none());
    }
}
