#![cfg(test)]
use migration::MigratorTrait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tokio::sync::OnceCell;

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<()> = OnceCell::const_new();

pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    // Run migrations exactly once, with a throwaway connection
    MIGRATED
        .get_or_init(|| async {
            let db = models::db::connect().await.expect("connect db for migration");
            migration::Migrator::up(&db, None).await.expect("migrate up");
            drop(db);
        })
        .await;

    // Return a fresh connection for the current test's runtime
    let db = models::db::connect().await?;
    Ok(db)
}

/// Reclaim a department code shared between test runs: hard-delete its
/// employees (the FK blocks the department delete otherwise), then the row.
pub async fn reset_department(db: &DatabaseConnection, code: &str) -> Result<(), anyhow::Error> {
    models::employee::Entity::delete_many()
        .filter(models::employee::Column::Department.eq(code))
        .exec(db)
        .await?;
    models::department::Entity::delete_by_id(code).exec(db).await?;
    Ok(())
}
