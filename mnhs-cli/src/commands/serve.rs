//! HTTP server command
//!
//! Runs the JSON API and the browser page over the same database settings
//! the other subcommands use.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use mnhs_core::Database;
use mnhs_server::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

/// Run the HTTP server until Ctrl+C / SIGTERM
pub async fn run_serve(db: Database, args: ServeArgs) -> Result<()> {
    tracing::info!("Starting mnhs server on {}", args.bind);

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    run_server(Arc::new(db), config)
        .await
        .context("Server error")?;

    Ok(())
}
