//! Read-only book and music catalogs
//!
//! This crate defines the catalog record types, the id-indexed [`Catalog`]
//! container and the [`CatalogSet`] that the HTTP adapters serve from. The
//! data is built once at start-up and never mutated afterwards.

pub mod errors;
pub mod records;
pub mod seed;
pub mod store;

pub use errors::CatalogError;
pub use records::{Book, Music, Record};
pub use seed::{seed_books, seed_musics};
pub use store::{Catalog, CatalogSet};

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Version segment of the catalog API paths
pub const API_VERSION: &str = "v1";
