//! HTTP layer shared by the three services.
//!
//! Each service module (`items`, `library`, `task_manager`) builds its own
//! router; this module owns configuration, tracing setup and the serve loop.

/// Build routes with generic database type.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over a database trait. It applies the turbofish operator automatically.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = axum::Router::new();
        $(
            let router = router.route($path, axum::routing::$method($($handler)::+::<$D>));
        )*
        router
    }};
}

mod error;
mod extract;
mod params;
mod state;
mod system;

pub mod items;
pub mod library;
pub mod task_manager;

#[cfg(test)]
pub(crate) mod test_support;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use axum::Router;
use miette::Diagnostic;
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::db::{ItemStore, LibraryDatabase, TaskManagerDatabase};

pub use error::{ApiError, ErrorResponse};
pub use extract::{ApiJson, ApiPath, ApiQuery};
pub use params::PageParams;
pub use state::AppState;

/// Environment variable overriding the bind address.
pub const HOST_ENV: &str = "CRUD_HOST";
/// Environment variable overriding the listen port.
pub const PORT_ENV: &str = "CRUD_PORT";

/// API server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8000,
        }
    }
}

impl Config {
    /// Defaults overridden by `CRUD_HOST` / `CRUD_PORT` when they hold valid values.
    pub fn new() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var(HOST_ENV)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.host),
            port: std::env::var(PORT_ENV)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
        }
    }

    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Errors raised while starting or running a server.
#[derive(Error, Diagnostic, Debug)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    #[diagnostic(
        code(crud_trio::api::bind),
        help("Is another service already listening on this port? Try --port.")
    )]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    #[diagnostic(code(crud_trio::api::serve))]
    Serve(#[from] std::io::Error),
}

/// Initialize tracing subscriber with env filter.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "crud_trio=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// Run the item store service.
pub async fn run_items(config: Config, store: ItemStore) -> Result<(), ServerError> {
    serve(config, items::create_router(AppState::new(store))).await
}

/// Run the library service.
pub async fn run_library<D: LibraryDatabase>(config: Config, db: D) -> Result<(), ServerError> {
    serve(config, library::create_router(AppState::new(db))).await
}

/// Run the task manager service.
pub async fn run_task_manager<D: TaskManagerDatabase>(
    config: Config,
    db: D,
) -> Result<(), ServerError> {
    serve(config, task_manager::create_router(AppState::new(db))).await
}

/// Serve `app` until Ctrl-C.
async fn serve(config: Config, app: Router) -> Result<(), ServerError> {
    let app = app.layer(TraceLayer::new_for_http());

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!("API server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
