//! Migrator registering entity migrations in dependency order.
//! `department` must exist before `employee` (FK on `employee.department`).
pub use sea_orm_migration::prelude::*;

mod m20220101_000001_create_department;
mod m20220101_000002_create_employee;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20220101_000001_create_department::Migration),
            Box::new(m20220101_000002_create_employee::Migration),
        ]
    }
}
