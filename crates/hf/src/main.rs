mod config;

use clap::{Parser, Subcommand};
use config::{ConfigError, ServeConfig};
use hf_core::error::StoreError;
use hf_db::store::DbStore;
use std::process::ExitCode;
use thiserror::Error;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hf", about = "Collects repository webhook events and serves the latest ones")]
struct Cli {
    /// Emit logs as JSON lines.
    #[arg(long, global = true, env = "HOOKFEED_LOG_JSON")]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server.
    Serve(ServeConfig),
    /// Print the OpenAPI document.
    Openapi,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is normal outside development.
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let result = match cli.command {
        Command::Serve(config) => serve(config).await,
        Command::Openapi => {
            println!("{}", hf_serve::openapi::generate_spec());
            Ok(())
        }
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "fatal");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn serve(config: ServeConfig) -> Result<(), AppError> {
    config.ensure_db_dir()?;
    let addr = config.socket_addr();
    let store = DbStore::open(&config.db_path)?;
    let state = hf_serve::AppState::new(store);

    hf_serve::serve(state.clone(), addr, shutdown_signal()).await?;

    match state.into_store() {
        Some(store) => store.close()?,
        None => warn!("event store still in use at shutdown, skipping close"),
    }
    info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
