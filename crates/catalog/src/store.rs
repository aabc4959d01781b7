//! Id-indexed catalog storage
//!
//! A [`Catalog`] keeps its records in seed order next to an index from id to
//! positions. Ids are not required to be unique: a lookup returns every
//! matching record, in seed order.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::errors::CatalogError;
use crate::records::{Book, Music, Record};
use crate::seed::{seed_books, seed_musics};
use crate::Result;

/// Immutable collection of records with exact-match id lookup.
#[derive(Debug, Clone)]
pub struct Catalog<T> {
    records: Vec<T>,
    index: HashMap<String, Vec<usize>>,
}

impl<T: Record> Catalog<T> {
    /// Build a catalog, preserving the given order
    pub fn new(records: Vec<T>) -> Self {
        let mut index: HashMap<String, Vec<usize>> = HashMap::new();
        for (position, record) in records.iter().enumerate() {
            index.entry(record.id().to_string()).or_default().push(position);
        }

        Self { records, index }
    }

    /// All records in seed order
    pub fn all(&self) -> &[T] {
        &self.records
    }

    /// Every record whose id equals `id` exactly, in seed order
    pub fn find_by_id(&self, id: &str) -> Vec<&T> {
        match self.index.get(id) {
            Some(positions) => positions.iter().map(|&p| &self.records[p]).collect(),
            None => Vec::new(),
        }
    }

    /// Resolve an optional id filter.
    ///
    /// A missing or empty id selects the whole collection.
    pub fn query(&self, id: Option<&str>) -> Vec<&T> {
        match id.filter(|id| !id.is_empty()) {
            Some(id) => {
                let matches = self.find_by_id(id);
                debug!(id, matches = matches.len(), "catalog lookup");
                matches
            }
            None => self.records.iter().collect(),
        }
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Record> Default for Catalog<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// On-disk shape of a seed file
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SeedFile {
    #[serde(default)]
    books: Vec<Book>,
    #[serde(default)]
    musics: Vec<Music>,
}

/// Every catalog served by the API.
#[derive(Debug, Clone, Default)]
pub struct CatalogSet {
    pub books: Catalog<Book>,
    pub musics: Catalog<Music>,
}

impl CatalogSet {
    /// Catalogs holding the built-in seed data
    pub fn seeded() -> Self {
        Self {
            books: Catalog::new(seed_books()),
            musics: Catalog::new(seed_musics()),
        }
    }

    /// Parse catalogs from a JSON document `{"books": [...], "musics": [...]}`
    pub fn from_json(json: &str) -> Result<Self> {
        let seed: SeedFile = serde_json::from_str(json)?;
        Ok(Self {
            books: Catalog::new(seed.books),
            musics: Catalog::new(seed.musics),
        })
    }

    /// Load catalogs from a JSON seed file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| CatalogError::IoError {
            path: path.to_path_buf(),
            source,
        })?;

        let set = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            books = set.books.len(),
            musics = set.musics.len(),
            "Loaded catalog seed file"
        );
        Ok(set)
    }
}
