//! Query-string forms backing the catalog routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod products;
pub mod search;

#[derive(Debug, Error)]
/// Errors that can occur when processing query parameters.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("search query is required")]
    MissingQuery,
}

/// Parses a positive integer, treating anything else as absent.
pub(crate) fn parse_positive(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|value| *value >= 1)
}

/// Parses a finite number, treating anything else as absent.
pub(crate) fn parse_number(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

/// Trims a text parameter, treating blank values as absent.
pub(crate) fn non_blank(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
