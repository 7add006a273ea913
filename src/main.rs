//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `cdn_inference` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Dispatch to the HTTP service or a one-shot check
//!
//! All core functionality is implemented in the library crate.

use std::net::SocketAddr;
use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use cdn_inference::initialization::init_logger_with;
use cdn_inference::{start_server, Command, Config, InferenceEngine, InputError, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; flags and real environment variables still apply
    let _ = dotenvy::dotenv();

    let opt = Opt::parse();
    let config = Config::from(&opt);

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let engine = InferenceEngine::new(&config).context("Failed to initialize inference engine")?;

    match opt.command {
        Command::Serve { bind, port } => {
            let addr = SocketAddr::new(bind, port);
            start_server(addr, Arc::new(engine)).await
        }
        Command::Check { domain } => match engine.infer(&domain).await {
            Ok(report) => {
                let json = report
                    .to_json_pretty()
                    .context("Failed to serialize report")?;
                println!("{json}");
                Ok(())
            }
            Err(InputError::MissingDomain) => {
                eprintln!("{}", InputError::MissingDomain);
                process::exit(2);
            }
        },
    }
}
