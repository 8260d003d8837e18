use thiserror::Error;

/// Data-access errors. A missing row (`NotFound`) is a distinct domain signal
/// and must stay distinguishable from a driver/connectivity failure (`Db`).
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
}
