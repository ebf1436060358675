//! appinfo-server binary entry point
//!
//! Loads configuration, ensures the schema exists, and serves HTTP.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use appinfo_server::db::{create_pool, migrations};
use appinfo_server::http::{run_server, ServerConfig};
use appinfo_server::tracing_setup::{init_tracing, TracingConfig};

/// REST CRUD service for application metadata
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Address to bind to (default: 127.0.0.1:5000)
    #[arg(long, short = 'b', default_value = "127.0.0.1:5000")]
    bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    cors_permissive: bool,

    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before reading DATABASE_URL
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    init_tracing(&TracingConfig { debug: args.debug })?;

    let database_url = args
        .database_url
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

    tracing::info!("Starting appinfo server on {}", args.bind);

    // Create database pool; unreachable database is fatal here
    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    // Ensure the app_info table exists
    migrations::run(&pool)
        .await
        .context("Failed to ensure schema")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
