//! HTTP server serving the bazar storefront.

mod config;
mod routes;
mod source;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::ServerConfig;
use crate::routes::{handle_request, AppState};

#[derive(Parser, Debug)]
#[command(name = "bazar-server", about = "Storefront HTTP server", version)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "bazar.toml")]
    config: PathBuf,

    /// Listen address, overriding the config file.
    #[arg(short, long)]
    listen: Option<String>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "bazar_server=debug,info"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let mut config = ServerConfig::load(&cli.config)?;
    if let Some(listen) = cli.listen {
        config.listen_addr = listen;
    }

    info!(products_url = %config.products_url, "loaded configuration");

    let listener = TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    info!("listening on http://{}", config.listen_addr);

    let state = Arc::new(AppState {
        config,
        client: reqwest::Client::new(),
    });

    loop {
        let (stream, peer) = listener.accept().await?;
        let io = TokioIo::new(stream);
        let state = Arc::clone(&state);

        tokio::task::spawn(async move {
            let service = service_fn(move |req| handle_request(Arc::clone(&state), req));
            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                error!(%peer, "error serving connection: {err:?}");
            }
        });
    }
}
