//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

/// A field value rejected at assignment time.
///
/// The `Display` output is the user-facing message and is meant to be
/// surfaced unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All authors must have a name.")]
    MissingName,

    #[error("Duplicate names are not allowed.")]
    DuplicateName,

    #[error("Phone number must be equal to 10 digits")]
    PhoneLength,

    #[error("Post must have a title")]
    MissingTitle,

    #[error("Post must contain one or more from {required:?}")]
    NotClickbait { required: &'static [&'static str] },

    #[error("Content length must be at least {min} characters")]
    ContentTooShort { min: usize },

    #[error("Summary length cannot be greater than or equal to {max} characters")]
    SummaryTooLong { max: usize },

    #[error("Category must be either Fiction or Non-Fiction.")]
    InvalidCategory,
}

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: Uuid },

    #[error(transparent)]
    Repository(#[from] RepoError),
}

impl DomainError {
    /// True when the failure came from a rejected field value.
    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::Validation(_))
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
