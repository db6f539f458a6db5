//! Item store API server binary.
//!
//! Items live in memory only and are lost when the process exits.

use std::net::IpAddr;

use clap::Parser;
use crud_trio::api::{self, Config, ServerError};
use crud_trio::db::ItemStore;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("API server error: {0}")]
    #[diagnostic(code(crud_trio::binary::api))]
    Api(#[from] ServerError),
}

#[derive(Parser)]
#[command(name = "items-api")]
#[command(author, version, about = "In-memory item store API server", long_about = None)]
struct Cli {
    /// Host address to bind to [env: CRUD_HOST, default: 0.0.0.0]
    #[arg(long)]
    host: Option<IpAddr>,

    /// Port to listen on [env: CRUD_PORT, default: 8000]
    #[arg(short, long)]
    port: Option<u16>,
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

    api::run_items(config, ItemStore::new()).await?;

    Ok(())
}
