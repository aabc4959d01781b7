//! Catalog and health routes.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use classwork_catalog::{Book, CatalogSet, Music};
use serde::Serialize;

/// Path of the health check, spelled as existing clients expect it
pub const HEALTH_PATH: &str = "/Heathly";

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub message: &'static str,
}

/// Raw query pairs.
///
/// Decoding is lossy and never rejects, so odd query strings cannot turn
/// into an error status.
type QueryPairs = Vec<(String, String)>;

/// Create the catalog routes, to be nested under the API version prefix
pub fn catalog_routes(catalogs: Arc<CatalogSet>) -> Router {
    Router::new()
        .route("/book", get(list_books))
        .route("/music", get(list_music))
        .with_state(catalogs)
}

/// Health check route
pub fn health_routes() -> Router {
    Router::new().route(HEALTH_PATH, get(health_handler))
}

async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse { message: "Healthy" }))
}

async fn list_books(
    State(catalogs): State<Arc<CatalogSet>>,
    Query(params): Query<QueryPairs>,
) -> impl IntoResponse {
    let books: Vec<Book> = catalogs
        .books
        .query(id_param(&params))
        .into_iter()
        .cloned()
        .collect();

    (StatusCode::OK, Json(books))
}

async fn list_music(
    State(catalogs): State<Arc<CatalogSet>>,
    Query(params): Query<QueryPairs>,
) -> impl IntoResponse {
    let musics: Vec<Music> = catalogs
        .musics
        .query(id_param(&params))
        .into_iter()
        .cloned()
        .collect();

    (StatusCode::OK, Json(musics))
}

/// First `id` value in the query, if any
fn id_param(params: &[(String, String)]) -> Option<&str> {
    params
        .iter()
        .find(|(key, _)| key == "id")
        .map(|(_, value)| value.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> QueryPairs {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_id_param() {
        assert_eq!(id_param(&pairs(&[])), None);
        assert_eq!(id_param(&pairs(&[("name", "x")])), None);
        assert_eq!(id_param(&pairs(&[("x", "1"), ("id", "02"), ("id", "03")])), Some("02"));
        assert_eq!(id_param(&pairs(&[("ID", "03")])), None);
    }

    #[test]
    fn test_health_response_serialization() {
        let json = serde_json::to_string(&HealthResponse { message: "Healthy" }).unwrap();
        assert_eq!(json, r#"{"message":"Healthy"}"#);
    }
}
