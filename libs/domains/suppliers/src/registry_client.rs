//! Clients for the two external registries.
//!
//! Lookups are plain synchronous awaits with no retry or timeout policy;
//! a registry's "not found" sentinel maps to `Ok(None)`, while transport
//! and decode faults surface as [`RegistryError`].

use reqwest::{header, Client, StatusCode};
use thiserror::Error;
use tracing::debug;

use crate::registry_models::{AddressRecord, CompanyRecord};

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("registry request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Api(String),
}

/// Client for the taxpayer (CNPJ) and postal-code (CEP) registries.
pub struct RegistryClient {
    client: Client,
    cnpj_base_url: String,
    cep_base_url: String,
}

impl RegistryClient {
    pub const DEFAULT_CNPJ_BASE_URL: &'static str = "https://receitaws.com.br/v1";
    pub const DEFAULT_CEP_BASE_URL: &'static str = "https://viacep.com.br/ws";

    pub fn new() -> Self {
        Self::with_base_urls(Self::DEFAULT_CNPJ_BASE_URL, Self::DEFAULT_CEP_BASE_URL)
    }

    /// Build a client against non-default registry endpoints (used by the
    /// application configuration and by tests).
    pub fn with_base_urls(
        cnpj_base_url: impl Into<String>,
        cep_base_url: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            cnpj_base_url: cnpj_base_url.into(),
            cep_base_url: cep_base_url.into(),
        }
    }

    /// Look up a company record by tax identifier.
    ///
    /// Punctuation in the identifier is stripped before the call. Returns
    /// `Ok(None)` when the registry has no data for it.
    pub async fn lookup_company(&self, cnpj: &str) -> Result<Option<CompanyRecord>, RegistryError> {
        let digits: String = cnpj.chars().filter(|c| c.is_ascii_digit()).collect();
        let url = format!("{}/cnpj/{}", self.cnpj_base_url, digits);
        debug!(%url, "Consulting taxpayer registry");

        let response = self
            .client
            .get(&url)
            .header(header::USER_AGENT, "comercio-api")
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(RegistryError::Api(format!(
                "taxpayer registry returned {}",
                response.status()
            )));
        }

        let record: CompanyRecord = response.json().await?;
        if record.is_error() {
            return Ok(None);
        }
        Ok(Some(record))
    }

    /// Look up an address record by postal code.
    ///
    /// Returns `Ok(None)` when the registry has no data for it.
    pub async fn lookup_address(&self, cep: &str) -> Result<Option<AddressRecord>, RegistryError> {
        let digits: String = cep.chars().filter(|c| c.is_ascii_digit()).collect();
        let url = format!("{}/{}/json/", self.cep_base_url, digits);
        debug!(%url, "Consulting postal registry");

        let response = self
            .client
            .get(&url)
            .header(header::USER_AGENT, "comercio-api")
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(RegistryError::Api(format!(
                "postal registry returned {}",
                response.status()
            )));
        }

        let record: AddressRecord = response.json().await?;
        if record.erro {
            return Ok(None);
        }
        Ok(Some(record))
    }
}

impl Default for RegistryClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn client(server: &MockServer) -> RegistryClient {
        RegistryClient::with_base_urls(server.url("/v1"), server.url("/ws"))
    }

    #[tokio::test]
    async fn test_lookup_company_returns_record_and_strips_punctuation() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/cnpj/45997418000153");
                then.status(200).json_body(serde_json::json!({
                    "status": "OK",
                    "cnpj": "45.997.418/0001-53",
                    "nome": "Distribuidora Sol Ltda",
                    "municipio": "São Paulo",
                    "uf": "SP"
                }));
            })
            .await;

        let record = client(&server)
            .lookup_company("45.997.418/0001-53")
            .await
            .unwrap()
            .expect("record should be present");

        mock.assert_async().await;
        assert_eq!(record.nome, "Distribuidora Sol Ltda");
        assert_eq!(record.uf.as_deref(), Some("SP"));
    }

    #[tokio::test]
    async fn test_lookup_company_error_sentinel_is_absence() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/cnpj/00000000000000");
                then.status(200)
                    .json_body(serde_json::json!({"status": "ERROR", "message": "CNPJ inválido"}));
            })
            .await;

        let result = client(&server).lookup_company("00000000000000").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_lookup_company_http_404_is_absence() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/cnpj/11111111111111");
                then.status(404);
            })
            .await;

        let result = client(&server).lookup_company("11111111111111").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_lookup_company_server_fault_is_an_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/cnpj/22222222222222");
                then.status(500);
            })
            .await;

        let result = client(&server).lookup_company("22222222222222").await;
        assert!(matches!(result, Err(RegistryError::Api(_))));
    }

    #[tokio::test]
    async fn test_lookup_address_returns_record() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/ws/01001000/json/");
                then.status(200).json_body(serde_json::json!({
                    "cep": "01001-000",
                    "logradouro": "Praça da Sé",
                    "bairro": "Sé",
                    "localidade": "São Paulo",
                    "uf": "SP"
                }));
            })
            .await;

        let record = client(&server)
            .lookup_address("01001-000")
            .await
            .unwrap()
            .expect("record should be present");

        assert_eq!(record.localidade.as_deref(), Some("São Paulo"));
    }

    #[tokio::test]
    async fn test_lookup_address_erro_sentinel_is_absence() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/ws/99999999/json/");
                then.status(200).json_body(serde_json::json!({"erro": true}));
            })
            .await;

        let result = client(&server).lookup_address("99999999").await.unwrap();
        assert!(result.is_none());
    }
}
