use std::sync::Arc;
use validator::Validate;

use crate::error::{SupplierError, SupplierResult};
use crate::models::{CreateSupplier, Supplier, SupplierDto};
use crate::registry_client::RegistryClient;
use crate::registry_models::{AddressRecord, CompanyRecord};
use crate::repository::SupplierRepository;

/// Service layer for Supplier business logic and registry lookups
pub struct SupplierService<R: SupplierRepository> {
    repository: Arc<R>,
    registry: Arc<RegistryClient>,
}

impl<R: SupplierRepository> Clone for SupplierService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<R: SupplierRepository> SupplierService<R> {
    pub fn new(repository: R, registry: RegistryClient) -> Self {
        Self {
            repository: Arc::new(repository),
            registry: Arc::new(registry),
        }
    }

    /// List all suppliers
    pub async fn list_suppliers(&self) -> SupplierResult<Vec<Supplier>> {
        self.repository.list().await
    }

    /// Get a supplier by id
    pub async fn get_supplier(&self, id: i32) -> SupplierResult<Supplier> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(SupplierError::NotFound(id))
    }

    /// Get a supplier by id, projected to its DTO shape
    pub async fn get_supplier_dto(&self, id: i32) -> SupplierResult<SupplierDto> {
        Ok(self.get_supplier(id).await?.into())
    }

    /// Look up a company record in the taxpayer registry by CNPJ
    pub async fn lookup_company(&self, cnpj: &str) -> SupplierResult<CompanyRecord> {
        self.registry
            .lookup_company(cnpj)
            .await?
            .ok_or(SupplierError::CnpjDataNotFound)
    }

    /// Look up an address record in the postal registry by CEP
    pub async fn lookup_address(&self, cep: &str) -> SupplierResult<AddressRecord> {
        self.registry
            .lookup_address(cep)
            .await?
            .ok_or(SupplierError::CepDataNotFound)
    }

    /// Create a new supplier from a validated payload
    pub async fn create_supplier(&self, input: CreateSupplier) -> SupplierResult<Supplier> {
        input
            .validate()
            .map_err(|e| SupplierError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Create a supplier from its DTO projection
    pub async fn create_supplier_dto(&self, dto: SupplierDto) -> SupplierResult<SupplierDto> {
        let created = self.repository.create(dto.into()).await?;
        Ok(created.into())
    }

    /// Update a supplier; the id embedded in the payload must exist
    pub async fn update_supplier(&self, input: Supplier) -> SupplierResult<Supplier> {
        self.repository.update(input).await
    }

    /// Delete a supplier by id
    pub async fn delete_supplier(&self, id: i32) -> SupplierResult<()> {
        let deleted = self.repository.delete_by_id(id).await?;

        if !deleted {
            return Err(SupplierError::NotFound(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockSupplierRepository;

    fn service(repository: MockSupplierRepository) -> SupplierService<MockSupplierRepository> {
        SupplierService::new(repository, RegistryClient::new())
    }

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

    #[tokio::test]
    async fn test_create_rejects_malformed_cnpj_without_touching_repository() {
        // No expectations: any repository call would panic the test
        let service = service(MockSupplierRepository::new());

        let result = service.create_supplier(input("123")).await;

        assert!(matches!(result, Err(SupplierError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_supplier_maps_absence_to_not_found() {
        let mut repository = MockSupplierRepository::new();
        repository
            .expect_get_by_id()
            .with(mockall::predicate::eq(42))
            .returning(|_| Ok(None));

        let service = service(repository);
        let result = service.get_supplier(42).await;

        assert!(matches!(result, Err(SupplierError::NotFound(42))));
    }

    #[tokio::test]
    async fn test_delete_missing_supplier_maps_to_not_found() {
        let mut repository = MockSupplierRepository::new();
        repository.expect_delete_by_id().returning(|_| Ok(false));

        let service = service(repository);
        let result = service.delete_supplier(9).await;

        assert!(matches!(result, Err(SupplierError::NotFound(9))));
    }
}
