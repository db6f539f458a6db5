//! Task manager API server binary.
//!
//! This binary creates the concrete database implementation and passes it
//! to the API server. The API layer remains agnostic of the storage backend.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;
use crud_trio::api::{self, Config, ServerError};
use crud_trio::db::{DbError, SqliteTaskManagerDatabase, TaskManagerDatabase};
use miette::Diagnostic;
use thiserror::Error;
use tracing::info;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Database error: {0}")]
    #[diagnostic(code(crud_trio::binary::database))]
    Database(#[from] DbError),

    #[error("Failed to create data directory: {0}")]
    #[diagnostic(code(crud_trio::binary::io))]
    Io(#[from] std::io::Error),

    #[error("API server error: {0}")]
    #[diagnostic(code(crud_trio::binary::api))]
    Api(#[from] ServerError),
}

#[derive(Parser)]
#[command(name = "taskmanager-api")]
#[command(author, version, about = "Task manager API server", long_about = None)]
struct Cli {
    /// Host address to bind to [env: CRUD_HOST, default: 0.0.0.0]
    #[arg(long)]
    host: Option<IpAddr>,

    /// Port to listen on [env: CRUD_PORT, default: 8000]
    #[arg(short, long)]
    port: Option<u16>,

    /// Database file path
    #[arg(long, default_value = "taskmanager.db")]
    db: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), BinaryError> {
    let cli = Cli::parse();
    api::init_tracing();

    let mut config = Config::new();
    if let Some(host) = cli.host {
        config = config.with_host(host);
    }
    if let Some(port) = cli.port {
        config = config.with_port(port);
    }

    info!(path = %cli.db.display(), "opening database");

    // Ensure parent directory exists
    if let Some(parent) = cli.db.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let db = SqliteTaskManagerDatabase::open(&cli.db).await?;

    // Run migrations before starting the server
    db.migrate().await?;
    info!("database migrations complete");

    api::run_task_manager(config, db).await?;

    Ok(())
}
