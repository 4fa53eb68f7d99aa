use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Unexpected status: {0}")]
    UnexpectedStatus(u16),

    #[error("Backend reported failure: {0}")]
    Unsuccessful(String),

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<reqwest::Error> for RepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return RepositoryError::UnexpectedStatus(status.as_u16());
        }

        if err.is_decode() {
            return RepositoryError::Malformed(format!("Failed to decode body: {err}"));
        }

        if err.is_builder() {
            return RepositoryError::Unexpected(format!("Failed to build request: {err}"));
        }

        RepositoryError::ConnectionError(format!("Request failed: {err}"))
    }
}
