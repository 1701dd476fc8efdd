//! Form definitions backing the member routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod members;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid query string: {0}")]
    InvalidQuery(String),

    #[error("invalid sort key: {0}")]
    InvalidSortKey(String),

    #[error("invalid sort direction: {0}")]
    InvalidSortDirection(String),
}
