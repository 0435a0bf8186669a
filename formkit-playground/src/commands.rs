//! Command implementations behind the `formkit` binary.

use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

use crate::cli::{Cli, Commands};
use crate::config::PlaygroundConfig;
use crate::error::{PlaygroundError, Result};
use crate::format::FileFormat;
use crate::playground::{Playground, PlaygroundOptions};

/// Run the parsed command and return what should be printed to stdout.
pub async fn run(cli: &Cli, config: &PlaygroundConfig) -> Result<String> {
    let schema_path = config.schema.as_deref().ok_or(PlaygroundError::MissingSchema)?;
    let mut playground = open(schema_path, config.data.as_deref()).await?;
    let format = config.format;

    match &cli.command {
        Commands::Inspect { field } => {
            playground.select(field.as_deref())?;
            format.render(&playground.panel_view())
        }
        Commands::Set {
            field,
            entry,
            value,
            write,
        } => {
            playground.select(Some(field))?;
            playground.set_entry_value(entry, Value::String(value.clone()))?;
            finish_edit(&playground, schema_path, *write, format).await
        }
        Commands::AddItem {
            field,
            group,
            write,
        } => {
            playground.select(Some(field))?;
            playground.add_item(group)?;
            finish_edit(&playground, schema_path, *write, format).await
        }
        Commands::RemoveItem { field, item, write } => {
            playground.select(Some(field))?;
            playground.remove_item(item)?;
            finish_edit(&playground, schema_path, *write, format).await
        }
        Commands::Render => format.render(&playground.form()?.fields()),
        Commands::Submit => {
            let submission = playground.submit()?;
            debug!(valid = submission.is_valid(), "submitted");
            format.render(&submission)
        }
    }
}

async fn open(schema_path: &Path, data_path: Option<&Path>) -> Result<Playground> {
    let contents = tokio::fs::read_to_string(schema_path)
        .await
        .map_err(|e| PlaygroundError::io(schema_path, e))?;
    let schema = FileFormat::from_path(schema_path).parse_schema(&contents)?;
    let mut playground = Playground::new(PlaygroundOptions::new(schema))?;
    if let Some(data_path) = data_path {
        playground.load_data(data_path).await?;
    }
    Ok(playground)
}

/// Print the edited field, writing the schema back first when asked.
async fn finish_edit(
    playground: &Playground,
    schema_path: &Path,
    write: bool,
    format: FileFormat,
) -> Result<String> {
    if write {
        playground.save_schema(schema_path).await?;
        info!(path = %schema_path.display(), "schema written");
    }
    format.render(&playground.selection())
}
