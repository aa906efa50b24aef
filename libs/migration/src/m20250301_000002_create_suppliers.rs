use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Suppliers::Table)
                    .if_not_exists()
                    .col(pk_auto(Suppliers::Id))
                    .col(string(Suppliers::Cnpj))
                    .col(string(Suppliers::CompanyName))
                    .col(string_null(Suppliers::TradeName))
                    .col(string_null(Suppliers::Email))
                    .col(string_null(Suppliers::Phone))
                    .col(string_null(Suppliers::Street))
                    .col(string_null(Suppliers::Number))
                    .col(string_null(Suppliers::District))
                    .col(string_null(Suppliers::City))
                    .col(string_null(Suppliers::State))
                    .col(string_null(Suppliers::PostalCode))
                    .col(
                        timestamp_with_time_zone(Suppliers::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Suppliers::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // cnpj is the unique business key
        manager
            .create_index(
                Index::create()
                    .name("idx_suppliers_cnpj")
                    .table(Suppliers::Table)
                    .col(Suppliers::Cnpj)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Suppliers::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Suppliers {
    Table,
    Id,
    Cnpj,
    CompanyName,
    TradeName,
    Email,
    Phone,
    Street,
    Number,
    District,
    City,
    State,
    PostalCode,
    CreatedAt,
    UpdatedAt,
}
