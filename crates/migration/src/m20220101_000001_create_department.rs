//! Create `department` table.
//!
//! Codes come from a fixed allow-list enforced in the service layer, so the
//! column is a plain short varchar primary key.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Department::Table)
                    .if_not_exists()
                    .col(string_len(Department::Code, 10).primary_key())
                    .col(string_len(Department::Name, 100).unique_key().not_null())
                    .col(integer(Department::Floor).not_null())
                    .col(text(Department::Description).not_null().default(""))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Department::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Department { Table, Code, Name, Floor, Description }
