//! Service layer sitting between HTTP handlers and repositories.

use thiserror::Error;

use crate::pagination::PageRequestError;
use crate::repository::errors::RepositoryError;

#[cfg(feature = "server")]
pub mod api;
pub mod predicates;
pub mod search;

/// Errors surfaced by services. Nothing is recovered locally.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Search criteria failed validation.
    #[error("invalid search criteria: {0}")]
    InvalidCriteria(String),

    /// Offset or limit out of range; raised before any query runs.
    #[error("inconsistent page request: {0}")]
    InconsistentPageRequest(#[from] PageRequestError),

    /// Incoming form could not be parsed or validated.
    #[error("form error: {0}")]
    Form(String),

    /// Read or count query failed.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
