//! Error types for the form viewer

use thiserror::Error;

/// Result type for viewer operations
pub type Result<T> = std::result::Result<T, ViewerError>;

/// Errors that can occur while building or driving a form
#[derive(Debug, Error)]
pub enum ViewerError {
    /// The schema could not be imported
    #[error(transparent)]
    Schema(#[from] formkit_schema::SchemaError),

    /// Form data must be a JSON object (or null)
    #[error("form data must be an object, found {found}")]
    InvalidData { found: String },

    /// Field not found by id
    #[error("field not found: {id}")]
    FieldNotFound { id: String },

    /// The field does not hold a data value
    #[error("field '{id}' is not an input")]
    NotAnInput { id: String },

    /// A changed value does not fit the field type
    #[error("invalid value for field '{id}': {message}")]
    InvalidValue { id: String, message: String },
}

impl ViewerError {
    /// Create an invalid value error
    pub fn invalid_value(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            id: id.into(),
            message: message.into(),
        }
    }
}
