use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use tracing::{info, instrument};

use models::department::{self, DepartmentUpdate, NewDepartment};
use models::employee;

use crate::errors::ServiceError;
use crate::lookup::DepartmentLookup;

/// Business rules for departments: code allow-list, name uniqueness, and the
/// referential block on delete.
pub struct DepartmentService {
    db: DatabaseConnection,
}

impl DepartmentService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a department. The code must come from the fixed allow-list and
    /// the display name must be unused; neither check reaches the store when
    /// the code is invalid.
    #[instrument(skip(self, dep), fields(code = %dep.code))]
    pub async fn create(&self, dep: NewDepartment) -> Result<department::Model, ServiceError> {
        if !department::is_valid_code(&dep.code) {
            return Err(ServiceError::Validation("invalid department code".into()));
        }
        if department::exists_by_name(&self.db, &dep.name, None).await? {
            return Err(ServiceError::AlreadyExists("department already exists".into()));
        }
        let created = department::create(&self.db, &dep).await?;
        info!(code = %created.code, "department created");
        Ok(created)
    }

    /// All departments; an empty store yields an empty list.
    pub async fn list(&self) -> Result<Vec<department::Model>, ServiceError> {
        Ok(department::list(&self.db).await?)
    }

    pub async fn get_by_code(&self, code: &str) -> Result<department::Model, ServiceError> {
        department::find_by_code(&self.db, code)
            .await?
            .ok_or_else(|| ServiceError::not_found("department"))
    }

    /// Overwrite name/floor/description. The code is immutable, so there is
    /// no allow-list re-check here.
    pub async fn update(
        &self,
        code: &str,
        patch: DepartmentUpdate,
    ) -> Result<department::Model, ServiceError> {
        Ok(department::update(&self.db, code, &patch).await?)
    }

    /// Delete a department, refused while any active employee references it.
    #[instrument(skip(self))]
    pub async fn delete(&self, code: &str) -> Result<(), ServiceError> {
        let mapped = employee::count_by_department(&self.db, code).await?;
        if mapped > 0 {
            return Err(ServiceError::Conflict("department has employees mapped".into()));
        }
        department::delete(&self.db, code).await?;
        info!(code, "department deleted");
        Ok(())
    }
}

#[async_trait]
impl DepartmentLookup for DepartmentService {
    async fn department_by_code(
        &self,
        code: &str,
    ) -> Result<Option<department::Model>, ServiceError> {
        Ok(department::find_by_code(&self.db, code).await?)
    }
}
