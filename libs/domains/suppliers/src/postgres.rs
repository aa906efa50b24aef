use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::{
    entity,
    error::{SupplierError, SupplierResult},
    models::{CreateSupplier, Supplier},
    repository::SupplierRepository,
};

/// PostgreSQL implementation of SupplierRepository
pub struct PgSupplierRepository {
    db: DatabaseConnection,
}

impl PgSupplierRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SupplierRepository for PgSupplierRepository {
    async fn create(&self, input: CreateSupplier) -> SupplierResult<Supplier> {
        // cnpj is the unique business key
        if self.exists_by_cnpj(&input.cnpj).await? {
            return Err(SupplierError::DuplicateCnpj(input.cnpj));
        }

        let active_model: entity::ActiveModel = input.into();

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| SupplierError::Internal(format!("Database error: {}", e)))?;

        tracing::info!(supplier_id = model.id, "Created supplier");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> SupplierResult<Option<Supplier>> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SupplierError::Internal(format!("Database error: {}", e)))?;

        Ok(model.map(|m| m.into()))
    }

    async fn list(&self) -> SupplierResult<Vec<Supplier>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SupplierError::Internal(format!("Database error: {}", e)))?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn update(&self, input: Supplier) -> SupplierResult<Supplier> {
        let model = entity::Entity::find_by_id(input.id)
            .one(&self.db)
            .await
            .map_err(|e| SupplierError::Internal(format!("Database error: {}", e)))?
            .ok_or(SupplierError::NotFound(input.id))?;

        let mut active_model: entity::ActiveModel = model.into();
        active_model.cnpj = Set(input.cnpj);
        active_model.company_name = Set(input.company_name);
        active_model.trade_name = Set(input.trade_name);
        active_model.email = Set(input.email);
        active_model.phone = Set(input.phone);
        active_model.street = Set(input.street);
        active_model.number = Set(input.number);
        active_model.district = Set(input.district);
        active_model.city = Set(input.city);
        active_model.state = Set(input.state);
        active_model.postal_code = Set(input.postal_code);
        active_model.updated_at = Set(chrono::Utc::now().into());

        let updated = active_model
            .update(&self.db)
            .await
            .map_err(|e| SupplierError::Internal(format!("Database error: {}", e)))?;

        tracing::info!(supplier_id = updated.id, "Updated supplier");
        Ok(updated.into())
    }

    async fn delete_by_id(&self, id: i32) -> SupplierResult<bool> {
        let result = entity::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SupplierError::Internal(format!("Database error: {}", e)))?;

        if result.rows_affected > 0 {
            tracing::info!(supplier_id = id, "Deleted supplier");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn exists_by_cnpj(&self, cnpj: &str) -> SupplierResult<bool> {
        let exists = entity::Entity::find()
            .filter(entity::Column::Cnpj.eq(cnpj))
            .one(&self.db)
            .await
            .map_err(|e| SupplierError::Internal(format!("Database error: {}", e)))?
            .is_some();

        Ok(exists)
    }
}
