//! HTTP server for the catalog API.
//!
//! Combines the health route and the versioned catalog routes into one axum
//! router and serves it until a shutdown future resolves.

use std::future::Future;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use classwork_catalog::{CatalogSet, API_VERSION};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::routes::{catalog_routes, health_routes, HEALTH_PATH};

/// Default listen port
pub const DEFAULT_PORT: u16 = 8080;

/// Configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host or IP address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// `host:port` form of the listen address
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Catalog API server
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Creates a new [`HttpServer`] serving the given catalogs.
    pub fn new(config: ServerConfig, catalogs: Arc<CatalogSet>) -> Self {
        let router = Self::build_router(catalogs);
        Self { config, router }
    }

    fn build_router(catalogs: Arc<CatalogSet>) -> Router {
        Router::new()
            .merge(health_routes())
            .nest(&format!("/api/{}", API_VERSION), catalog_routes(catalogs))
            .layer(TraceLayer::new_for_http())
    }

    /// Access the configuration associated with this server.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until `shutdown` resolves, then drain open connections.
    pub async fn run<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind((self.config.host.as_str(), self.config.port))
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        let local_addr = listener.local_addr().context("Failed to read listen address")?;
        info!("Catalog API listening on http://{}", local_addr);
        info!("Health check: http://{}{}", local_addr, HEALTH_PATH);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
            .context("HTTP server error")?;

        info!("Catalog API stopped");
        Ok(())
    }
}
