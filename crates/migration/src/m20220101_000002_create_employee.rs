//! Create `employee` table with FK to `department`.
//!
//! Carries the soft-delete marker; deleting an employee sets `deleted_at`
//! instead of removing the row.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employee::Table)
                    .if_not_exists()
                    .col(pk_auto(Employee::Id))
                    .col(string_len(Employee::Name, 100).not_null())
                    // No unique index on email: uniqueness is enforced among
                    // active rows only, and a soft-deleted row may keep an
                    // email that a later employee reuses.
                    .col(string_len(Employee::Email, 100).not_null())
                    .col(string_len(Employee::PhoneNumber, 20).not_null())
                    .col(date(Employee::Dob).not_null())
                    .col(string_len(Employee::Major, 100).not_null())
                    .col(string_len(Employee::City, 100).not_null())
                    .col(string_len(Employee::Department, 10).not_null())
                    // Explicitly define nullable deleted_at to avoid conflicting NULL/NOT NULL
                    .col(ColumnDef::new(Employee::DeletedAt).date().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_department")
                            .from(Employee::Table, Employee::Department)
                            .to(Department::Table, Department::Code)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employee::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Employee { Table, Id, Name, Email, PhoneNumber, Dob, Major, City, Department, DeletedAt }

#[derive(DeriveIden)]
enum Department { Table, Code }
