//! Error types for the properties panel

use thiserror::Error;

/// Result type for panel operations
pub type Result<T> = std::result::Result<T, PanelError>;

/// Errors returned by panel interactions
#[derive(Debug, Error)]
pub enum PanelError {
    /// The panel has no selected field
    #[error("no form field selected")]
    NoSelection,

    /// No entry with this id is rendered for the selected field
    #[error("unknown entry: {id}")]
    UnknownEntry { id: String },

    /// No list group with this id is rendered for the selected field
    #[error("unknown group: {id}")]
    UnknownGroup { id: String },

    /// No list item with this id is rendered for the selected field
    #[error("unknown item: {id}")]
    UnknownItem { id: String },

    /// The input was rejected by the entry's validator; no edit was made
    #[error("{message}")]
    Validation { entry: String, message: String },

    /// Building an edit value failed in the schema layer
    #[error(transparent)]
    Schema(#[from] formkit_schema::SchemaError),
}

impl PanelError {
    /// Create a validation error for `entry`
    pub fn validation(entry: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            entry: entry.into(),
            message: message.into(),
        }
    }

    /// The inline message to show next to the entry, if this is a validation error
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Validation { message, .. } => Some(message),
            _ => None,
        }
    }
}
