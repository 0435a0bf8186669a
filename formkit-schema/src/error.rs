//! Error types for the form schema model

use thiserror::Error;

/// Result type for schema operations
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Errors that can occur while importing or editing a form schema
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Field not found by id
    #[error("field not found: {id}")]
    FieldNotFound { id: String },

    /// Two fields share the same id
    #[error("duplicate field id: {id}")]
    DuplicateId { id: String },

    /// Two keyed fields share the same key
    #[error("duplicate field key: {key}")]
    DuplicateKey { key: String },

    /// The schema root is not a `default` container
    #[error("schema root must have type 'default', found '{found}'")]
    InvalidRoot { found: String },

    /// An edit path could not be applied to a field
    #[error("invalid property path '{path}': {message}")]
    InvalidPath { path: String, message: String },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl SchemaError {
    /// Create an invalid path error
    pub fn invalid_path(path: &[&str], message: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.join("."),
            message: message.into(),
        }
    }
}
