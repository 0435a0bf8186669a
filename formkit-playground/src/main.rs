//! formkit CLI
//!
//! Commands:
//! - `formkit inspect [--field ID]`: Show the properties panel of a field
//! - `formkit set --field ID --entry E --value V [--write]`: Edit a panel entry
//! - `formkit add-item --field ID --group G [--write]`: Append a list item
//! - `formkit remove-item --field ID --item I [--write]`: Remove a list item
//! - `formkit render`: Show the visible fields of the form
//! - `formkit submit`: Validate the data and print the submission
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error

use anyhow::Context;
use clap::Parser;

use formkit_playground::{commands, logging, Cli, PlaygroundConfig};

async fn run(cli: &Cli) -> anyhow::Result<String> {
    let cwd = std::env::current_dir().context("cannot read the working directory")?;
    let config = PlaygroundConfig::load(&cwd, &cli.overrides())?;
    logging::init_tracing(cli.debug, config.log_filter.as_deref());
    Ok(commands::run(cli, &config).await?)
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let exit_code = match run(&cli).await {
        Ok(output) => {
            print!("{output}");
            0
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            1
        }
    };

    std::process::exit(exit_code);
}
