//! Business logic services

pub mod analysis_service;
pub mod project_service;
pub mod requirement_service;

pub use analysis_service::AnalysisService;

use crate::store::StoreError;
use thiserror::Error;

/// Maximum accepted requirement text length, in characters
pub const MAX_TEXT_LEN: usize = 5000;

/// Maximum accepted project name / requirement title length
pub const MAX_NAME_LEN: usize = 200;

/// Errors surfaced by service operations
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Invalid(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => Self::NotFound(err.to_string()),
            StoreError::DuplicateName(_) => Self::Conflict(err.to_string()),
            other => Self::Store(other),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
