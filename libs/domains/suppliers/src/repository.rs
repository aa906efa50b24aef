use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{SupplierError, SupplierResult};
use crate::models::{CreateSupplier, Supplier};

/// Repository trait for Supplier persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SupplierRepository: Send + Sync {
    /// Create a new supplier
    async fn create(&self, input: CreateSupplier) -> SupplierResult<Supplier>;

    /// Get a supplier by id
    async fn get_by_id(&self, id: i32) -> SupplierResult<Option<Supplier>>;

    /// List all suppliers
    async fn list(&self) -> SupplierResult<Vec<Supplier>>;

    /// Update an existing supplier, resolved by the embedded id
    async fn update(&self, input: Supplier) -> SupplierResult<Supplier>;

    /// Delete a supplier by id; returns whether a record was removed
    async fn delete_by_id(&self, id: i32) -> SupplierResult<bool>;

    /// Check if a supplier with the given cnpj exists
    async fn exists_by_cnpj(&self, cnpj: &str) -> SupplierResult<bool>;
}

/// In-memory implementation of SupplierRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemorySupplierRepository {
    suppliers: Arc<RwLock<HashMap<i32, Supplier>>>,
    next_id: Arc<AtomicI32>,
}

impl InMemorySupplierRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SupplierRepository for InMemorySupplierRepository {
    async fn create(&self, input: CreateSupplier) -> SupplierResult<Supplier> {
        let mut suppliers = self.suppliers.write().await;

        // cnpj is the unique business key
        if suppliers.values().any(|s| s.cnpj == input.cnpj) {
            return Err(SupplierError::DuplicateCnpj(input.cnpj));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let supplier = Supplier::new(input, id);
        suppliers.insert(id, supplier.clone());

        tracing::info!(supplier_id = id, "Created supplier");
        Ok(supplier)
    }

    async fn get_by_id(&self, id: i32) -> SupplierResult<Option<Supplier>> {
        let suppliers = self.suppliers.read().await;
        Ok(suppliers.get(&id).cloned())
    }

    async fn list(&self) -> SupplierResult<Vec<Supplier>> {
        let suppliers = self.suppliers.read().await;

        let mut result: Vec<Supplier> = suppliers.values().cloned().collect();
        result.sort_by_key(|s| s.id);

        Ok(result)
    }

    async fn update(&self, input: Supplier) -> SupplierResult<Supplier> {
        let mut suppliers = self.suppliers.write().await;

        let supplier = suppliers
            .get_mut(&input.id)
            .ok_or(SupplierError::NotFound(input.id))?;

        supplier.cnpj = input.cnpj;
        supplier.company_name = input.company_name;
        supplier.trade_name = input.trade_name;
        supplier.email = input.email;
        supplier.phone = input.phone;
        supplier.street = input.street;
        supplier.number = input.number;
        supplier.district = input.district;
        supplier.city = input.city;
        supplier.state = input.state;
        supplier.postal_code = input.postal_code;
        supplier.updated_at = chrono::Utc::now();
        let updated = supplier.clone();

        tracing::info!(supplier_id = input.id, "Updated supplier");
        Ok(updated)
    }

    async fn delete_by_id(&self, id: i32) -> SupplierResult<bool> {
        let mut suppliers = self.suppliers.write().await;

        if suppliers.remove(&id).is_some() {
            tracing::info!(supplier_id = id, "Deleted supplier");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn exists_by_cnpj(&self, cnpj: &str) -> SupplierResult<bool> {
        let suppliers = self.suppliers.read().await;
        Ok(suppliers.values().any(|s| s.cnpj == cnpj))
    }
}
