//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// ResourceId validation error
    #[error("ResourceId cannot be empty")]
    ResourceIdEmpty,
}

/// Errors related to create request validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required creation fields are missing or empty
    #[error("{0} are required")]
    MissingRequiredFields(&'static str),
}

/// Errors related to resource repository operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No record with the requested id exists in the store
    #[error("{0} not found")]
    NotFound(&'static str),
}
