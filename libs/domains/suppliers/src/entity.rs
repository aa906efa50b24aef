use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::models::{CreateSupplier, Supplier};

/// Sea-ORM entity for the suppliers table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "suppliers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub cnpj: String,
    pub company_name: String,
    pub trade_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub district: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from Sea-ORM Model to domain Supplier
impl From<Model> for Supplier {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            cnpj: model.cnpj,
            company_name: model.company_name,
            trade_name: model.trade_name,
            email: model.email,
            phone: model.phone,
            street: model.street,
            number: model.number,
            district: model.district,
            city: model.city,
            state: model.state,
            postal_code: model.postal_code,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

// Conversion from domain CreateSupplier to Sea-ORM ActiveModel
impl From<CreateSupplier> for ActiveModel {
    fn from(input: CreateSupplier) -> Self {
        let now = chrono::Utc::now();
        ActiveModel {
            id: NotSet,
            cnpj: Set(input.cnpj),
            company_name: Set(input.company_name),
            trade_name: Set(input.trade_name),
            email: Set(input.email),
            phone: Set(input.phone),
            street: Set(input.street),
            number: Set(input.number),
            district: Set(input.district),
            city: Set(input.city),
            state: Set(input.state),
            postal_code: Set(input.postal_code),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
    }
}
