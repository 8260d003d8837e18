use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tracing::{info, instrument};

use models::department;
use models::employee::{self, EmployeeFilter, EmployeeUpdate, NewEmployee};

use crate::errors::ServiceError;
use crate::lookup::DepartmentLookup;

/// Business rules for employees. Department checks go through the
/// `DepartmentLookup` capability rather than department storage directly.
pub struct EmployeeService<L: DepartmentLookup> {
    db: DatabaseConnection,
    departments: Arc<L>,
}

impl<L: DepartmentLookup> EmployeeService<L> {
    pub fn new(db: DatabaseConnection, departments: Arc<L>) -> Self {
        Self { db, departments }
    }

    /// Allow-list first, then referential existence. An invalid code never
    /// reaches the lookup.
    async fn ensure_department(&self, code: &str) -> Result<(), ServiceError> {
        if !department::is_valid_code(code) {
            return Err(ServiceError::Validation("invalid department".into()));
        }
        if self.departments.department_by_code(code).await?.is_none() {
            return Err(ServiceError::NotFound("department does not exist".into()));
        }
        Ok(())
    }

    #[instrument(skip(self, emp), fields(department = %emp.department))]
    pub async fn create(&self, emp: NewEmployee) -> Result<employee::Model, ServiceError> {
        self.ensure_department(&emp.department).await?;
        if employee::exists_by_email(&self.db, &emp.email, None).await? {
            return Err(ServiceError::AlreadyExists("email already exists".into()));
        }
        let created = employee::create(&self.db, &emp).await?;
        info!(id = created.id, "employee created");
        Ok(created)
    }

    /// Filtered listing. A department predicate that is invalid or has no
    /// matching row fails with not-found; no predicates returns every active
    /// employee.
    pub async fn find(&self, filter: EmployeeFilter) -> Result<Vec<employee::Model>, ServiceError> {
        if let Some(ref code) = filter.department {
            let exists = department::is_valid_code(code)
                && self.departments.department_by_code(code).await?.is_some();
            if !exists {
                return Err(ServiceError::NotFound("department does not exist".into()));
            }
        }
        Ok(employee::find(&self.db, &filter).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<employee::Model, ServiceError> {
        employee::find_by_id(&self.db, id)
            .await?
            .ok_or_else(|| ServiceError::not_found("employee"))
    }

    /// Partial update: only provided fields overwrite. A provided department
    /// gets the same checks as create; a provided email must be unique among
    /// active employees excluding this row.
    pub async fn update(
        &self,
        id: i32,
        patch: EmployeeUpdate,
    ) -> Result<employee::Model, ServiceError> {
        if let Some(ref code) = patch.department {
            self.ensure_department(code).await?;
        }
        if let Some(ref email) = patch.email {
            if employee::exists_by_email(&self.db, email, Some(id)).await? {
                return Err(ServiceError::AlreadyExists("email already exists".into()));
            }
        }
        Ok(employee::update(&self.db, id, &patch).await?)
    }

    /// Soft delete. Repeating the call fails with not-found: the deleted
    /// state is terminal.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        employee::soft_delete(&self.db, id).await?;
        info!(id, "employee soft-deleted");
        Ok(())
    }
}
