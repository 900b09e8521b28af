//! Validation errors for material request bodies

use thiserror::Error;

use super::material::MaterialField;

/// Result type for model validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Rejected request content. Always a client error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is absent or blank on create
    #[error("Name and description are required (missing: {0})")]
    Required(MaterialField),

    /// A field is present on update but blank
    #[error("Field '{0}' must not be empty")]
    Blank(MaterialField),

    /// Update body names no assignable field
    #[error("No fields to update")]
    NoFields,
}
