//! workroomd - HTTP record service for workrooms
//!
//! Process entry: loads `.env`, parses flags, initializes tracing, creates
//! the database pool, and runs the HTTP server until shutdown.
//!
//! Usage:
//!   workroomd                                # bind 127.0.0.1:8000
//!   workroomd -b 0.0.0.0:9000 --debug
//!   RUST_LOG=workroomd_server=debug workroomd

use std::net::SocketAddr;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use workroomd_server::db::create_pool;
use workroomd_server::http::{run_server, ServerConfig};

#[derive(Parser, Debug)]
#[command(
    name = "workroomd",
    author,
    version,
    about = "HTTP record service for workroom records backed by PostgreSQL"
)]
struct Cli {
    /// Address to bind to (default: 127.0.0.1:8000)
    #[arg(long, short = 'b', default_value = "127.0.0.1:8000")]
    bind: SocketAddr,

    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Enable debug logging (sets RUST_LOG=debug if not already set)
    #[arg(long)]
    debug: bool,
}

/// Initialize tracing with console output
fn init_tracing(debug: bool) -> Result<()> {
    let filter = if debug {
        // Debug mode: set debug level unless RUST_LOG is explicitly set
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug) // Show targets in debug mode
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Make .env visible before clap reads env-backed args
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.debug)?;

    let database_url = cli
        .database_url
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

    tracing::info!("Starting workroomd on {}", cli.bind);

    // Create database pool
    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    // Configure server
    let config = ServerConfig {
        bind_addr: cli.bind,
    };

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
