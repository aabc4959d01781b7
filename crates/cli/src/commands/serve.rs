//! Serve command implementation
//!
//! This module implements the `classwork serve` command, which builds the
//! catalogs once and serves them over HTTP until Ctrl+C or SIGTERM.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use classwork_adapters::{HttpServer, ServerConfig};
use classwork_catalog::CatalogSet;
use tokio::signal;
use tracing::{error, info};

/// Arguments for the serve command
pub struct ServeArgs {
    /// Host to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Optional JSON seed file replacing the built-in catalogs
    pub seed: Option<PathBuf>,
}

/// Execute the serve command
pub async fn execute_serve_command(args: ServeArgs) -> Result<()> {
    let catalogs = load_catalogs(args.seed.as_ref())?;
    info!(
        books = catalogs.books.len(),
        musics = catalogs.musics.len(),
        "Catalogs ready"
    );

    let config = ServerConfig {
        host: args.host,
        port: args.port,
    };

    HttpServer::new(config, Arc::new(catalogs))
        .run(wait_for_shutdown())
        .await
}

/// Built-in catalogs, or the contents of `seed` when given
pub fn load_catalogs(seed: Option<&PathBuf>) -> Result<CatalogSet> {
    match seed {
        Some(path) => CatalogSet::load(path)
            .with_context(|| format!("Failed to load catalog seed file: {}", path.display())),
        None => Ok(CatalogSet::seeded()),
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn wait_for_shutdown() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
