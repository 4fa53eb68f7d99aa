//! Service layer coordinating catalog queries against the backend.

use thiserror::Error;

use crate::forms::FormError;

pub mod fallback;
pub mod products;
pub mod search;

/// Errors surfaced to the HTTP layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The caller sent something it can fix (e.g. an empty query).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Every path to the backend failed.
    #[error("upstream unavailable")]
    UpstreamUnavailable,

    #[error("not found")]
    NotFound,
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<FormError> for ServiceError {
    fn from(val: FormError) -> Self {
        match val {
            FormError::MissingQuery => {
                ServiceError::InvalidRequest("Search query is required".to_string())
            }
            FormError::Validation(errors) => {
                ServiceError::InvalidRequest(format!("Invalid parameters: {errors}"))
            }
        }
    }
}
