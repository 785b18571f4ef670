//! KingFace backend server binary
//!
//! Loads configuration from flags, `.env` and the environment, opens the
//! database pool, runs migrations, and serves the API until shutdown.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use kingface_server::config::AppConfig;
use kingface_server::db::{create_pool, migrations};
use kingface_server::http::{run_server, ServerConfig};

#[derive(Parser, Debug)]
#[command(
    name = "kingface-server",
    version,
    about = "KingFace social backend - wallet login, posts, and the KFTL like economy"
)]
struct Args {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:8001")]
    bind: SocketAddr,

    /// Postgres connection string (overrides DATABASE_URL)
    #[arg(long)]
    database_url: Option<String>,

    /// Maximum connections in the database pool
    #[arg(long, default_value = "5")]
    max_connections: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .init();

    let args = Args::parse();

    let database_url = args
        .database_url
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .context("DATABASE_URL not set. Set via --database-url or the DATABASE_URL env var")?;

    let config = AppConfig::from_env();

    let pool = create_pool(&database_url, args.max_connections)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    let server_config = ServerConfig {
        bind_addr: args.bind,
    };

    tracing::info!("Starting kingface-server on {}", args.bind);

    run_server(pool, config, server_config)
        .await
        .context("Server error")?;

    Ok(())
}
