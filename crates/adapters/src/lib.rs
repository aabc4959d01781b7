//! Protocol adapters (HTTP)
//!
//! This crate exposes the read-only catalogs over HTTP with axum. Handlers
//! share one immutable [`classwork_catalog::CatalogSet`] through router state.

pub mod http_server;
pub mod routes;

pub use http_server::{HttpServer, ServerConfig, DEFAULT_PORT};
pub use routes::{catalog_routes, health_routes, HealthResponse, HEALTH_PATH};
