use async_trait::async_trait;

use crate::errors::ServiceError;

/// Capability consumed by the employee service to verify that a department
/// row exists, without coupling to department storage internals.
#[async_trait]
pub trait DepartmentLookup: Send + Sync {
    async fn department_by_code(
        &self,
        code: &str,
    ) -> Result<Option<models::department::Model>, ServiceError>;
}
