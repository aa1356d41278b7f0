//! taxtrack - TaxTrack command-line client
//!
//! # Examples
//!
//! ```bash
//! # Sign in (session is kept in .taxtrack/session.json)
//! taxtrack login --username jdoe --password hunter2
//!
//! # Search clients on the server
//! taxtrack search smith --pretty
//!
//! # Sign a pending document
//! taxtrack documents sign 1
//! ```

use tt_cli::{App, Cli, CliResult, logger};

use std::process::ExitCode;

use clap::Parser;
use log::debug;
use serde_json::Value;
use tt_config::Config;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let pretty = cli.pretty;

    match run(cli).await {
        Ok(value) => {
            let output = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            debug!("{e}");
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<Value> {
    let mut config = Config::load()?;
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    let app = App::from_config(&config)?;
    app.run(cli.command).await
}
