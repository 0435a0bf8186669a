//! CLI definition for the formkit command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::ConfigOverrides;
use crate::format::FileFormat;

/// formkit - inspect, edit and submit form schemas from the command line.
///
/// Schema and data files may be JSON or YAML; the format follows the file
/// extension.
#[derive(Parser, Debug)]
#[command(name = "formkit")]
#[command(version)]
#[command(about = "Inspect, edit and submit form schemas")]
#[command(
    long_about = "formkit loads a form schema (and optional data), then renders the \
    properties panel of a field, applies panel edits, or renders and submits the form.\n\n\
    Defaults can be set in formkit.toml or formkit.yaml in the working directory.\n\n\
    Environment variables:\n  \
    FORMKIT_SCHEMA      Default schema file\n  \
    FORMKIT_DATA        Default data file\n  \
    FORMKIT_FORMAT      Output format (json or yaml)\n  \
    FORMKIT_LOG_FILTER  Log filter used when --debug and RUST_LOG are unset"
)]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Form schema file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub schema: Option<PathBuf>,

    /// Form data file
    #[arg(long, global = true, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<FileFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            format: self.format,
            schema: self.schema.clone(),
            data: self.data.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the properties panel of a field, or the placeholder without --field
    Inspect {
        /// Field id
        #[arg(long)]
        field: Option<String>,
    },

    /// Set a properties panel entry of a field
    Set {
        /// Field id
        #[arg(long)]
        field: String,
        /// Entry id (e.g. label, key, valuesSource, minLength)
        #[arg(long)]
        entry: String,
        /// New value, as typed into the entry
        #[arg(long, allow_hyphen_values = true)]
        value: String,
        /// Write the edited schema back to the schema file
        #[arg(long)]
        write: bool,
    },

    /// Append an item to a list group (staticValues or customValues)
    AddItem {
        /// Field id
        #[arg(long)]
        field: String,
        /// Group id
        #[arg(long)]
        group: String,
        /// Write the edited schema back to the schema file
        #[arg(long)]
        write: bool,
    },

    /// Remove a list item, such as Select_1-staticValues-0
    RemoveItem {
        /// Field id
        #[arg(long)]
        field: String,
        /// Item id
        #[arg(long)]
        item: String,
        /// Write the edited schema back to the schema file
        #[arg(long)]
        write: bool,
    },

    /// Show the visible fields of the form with their values and options
    Render,

    /// Validate the form data and print the submission
    Submit,
}
