//! Form file formats

use std::fmt;
use std::path::Path;

use clap::ValueEnum;
use formkit_schema::Field;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{PlaygroundError, Result};

/// Serialization format of schema and data files, and of CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    #[default]
    Json,
    Yaml,
}

impl FileFormat {
    /// Format implied by the extension of `path`; JSON when unknown.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => FileFormat::Yaml,
            _ => FileFormat::Json,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileFormat::Json => "json",
            FileFormat::Yaml => "yaml",
        }
    }

    /// Parse a schema document.
    pub fn parse_schema(&self, contents: &str) -> Result<Field> {
        self.parse(contents)
    }

    /// Parse an arbitrary document, such as form data.
    pub fn parse_value(&self, contents: &str) -> Result<Value> {
        self.parse(contents)
    }

    fn parse<T: serde::de::DeserializeOwned>(&self, contents: &str) -> Result<T> {
        let parsed = match self {
            FileFormat::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
            FileFormat::Yaml => serde_yaml_ng::from_str(contents).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| PlaygroundError::Parse {
            format: self.as_str().to_string(),
            message,
        })
    }

    /// Render `value` in this format, ending with a newline.
    pub fn render<T: Serialize>(&self, value: &T) -> Result<String> {
        let rendered = match self {
            FileFormat::Json => serde_json::to_string_pretty(value)
                .map(|json| json + "\n")
                .map_err(|e| e.to_string()),
            FileFormat::Yaml => serde_yaml_ng::to_string(value).map_err(|e| e.to_string()),
        };
        rendered.map_err(PlaygroundError::Render)
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
