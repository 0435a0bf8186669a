//! Error types for the playground

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Result type for playground operations
pub type Result<T> = std::result::Result<T, PlaygroundError>;

/// Errors raised by the playground and the CLI commands built on it
#[derive(Debug, Error)]
pub enum PlaygroundError {
    #[error(transparent)]
    Schema(#[from] formkit_schema::SchemaError),

    #[error(transparent)]
    Panel(#[from] formkit_panel::PanelError),

    #[error(transparent)]
    Viewer(#[from] formkit_viewer::ViewerError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A dropped or loaded file did not parse
    #[error("failed to parse {format} form file: {message}")]
    Parse { format: String, message: String },

    /// Form data must be an object
    #[error("form data must be an object")]
    InvalidData,

    /// Reading or writing a form file failed
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Output serialization failed
    #[error("failed to render output: {0}")]
    Render(String),

    /// No schema file was given on the command line or in the configuration
    #[error("no schema given; pass --schema or set `schema` in formkit.toml")]
    MissingSchema,

    /// The playground was destroyed
    #[error("playground has been destroyed")]
    Destroyed,
}

impl PlaygroundError {
    /// Create an IO error for `path`
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PlaygroundError::Parse {
            format: "json".into(),
            message: "expected value at line 1 column 1".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to parse json form file: expected value at line 1 column 1"
        );
    }

    #[test]
    fn test_wrapped_errors_are_transparent() {
        let err: PlaygroundError = formkit_panel::PanelError::NoSelection.into();
        assert_eq!(err.to_string(), "no form field selected");
    }
}
