//! Employee proxy service.
//!
//! Exposes employee operations over HTTP while every record lives behind a
//! rate-limited upstream employee-data API.
//!
//! # Architecture Overview
//!
//! ```text
//!                         ┌───────────────────────────────────────────────┐
//!                         │                EMPLOYEE PROXY                 │
//!     Client Request      │  ┌─────────┐    ┌─────────────────┐           │
//!     ────────────────────┼─▶│  http   │───▶│ EmployeeService │           │
//!                         │  │ router  │    │  + query engine │           │
//!                         │  └─────────┘    └───────┬─────────┘           │
//!                         │                         ▼                     │
//!                         │                 ┌──────────────┐              │
//!                         │                 │ RetryPolicy  │              │
//!                         │                 │ (429 only)   │              │
//!                         │                 └──────┬───────┘              │
//!                         │                        ▼                      │
//!     Client Response     │  ┌─────────┐    ┌──────────────┐              │
//!     ◀───────────────────┼──│response │◀───│ Upstream     │◀─────────────┼──── Upstream
//!                         │  │ mapping │    │ client       │              │     employee API
//!                         │  └─────────┘    └──────────────┘              │
//!                         └───────────────────────────────────────────────┘
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use employee_proxy::config::{load_config, load_default};
use employee_proxy::http::HttpServer;
use employee_proxy::lifecycle::{signals, Shutdown};
use employee_proxy::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "employee-proxy")]
#[command(about = "HTTP proxy for the upstream employee-data API", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => load_default()?,
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    logging::init_logging(&config.observability)?;

    tracing::info!("employee-proxy v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        config_file = ?cli.config,
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        max_attempts = config.retries.max_attempts,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => metrics::init_metrics(addr)?,
            Err(e) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                error = %e,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    signals::spawn_signal_handler(shutdown.clone());

    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
