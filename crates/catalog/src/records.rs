//! Catalog record types.

use serde::{Deserialize, Serialize};

/// Anything that can be looked up by a string id.
pub trait Record {
    /// The record's id, compared by exact string equality
    fn id(&self) -> &str;
}

/// A book in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub name: String,
    /// Serialized as `Author` for compatibility with existing clients
    #[serde(rename = "Author")]
    pub author: String,
    pub price: f64,
}

impl Book {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        author: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            author: author.into(),
            price,
        }
    }
}

impl Record for Book {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A music track in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Music {
    pub id: String,
    pub name: String,
    pub singer: String,
}

impl Music {
    pub fn new(id: impl Into<String>, name: impl Into<String>, singer: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            singer: singer.into(),
        }
    }
}

impl Record for Music {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_json_field_names() {
        let book = Book::new("03", "Sasaki to Miyano", "Shō Harusono", 185.0);
        let json = serde_json::to_value(&book).unwrap();

        assert_eq!(json["id"], "03");
        assert_eq!(json["name"], "Sasaki to Miyano");
        assert_eq!(json["Author"], "Shō Harusono");
        assert_eq!(json["price"], 185.0);
        assert!(json.get("author").is_none());
    }

    #[test]
    fn test_music_json_field_names() {
        let music = Music::new("04", "Golden", "HUNTR/X");
        let json = serde_json::to_string(&music).unwrap();
        assert_eq!(json, r#"{"id":"04","name":"Golden","singer":"HUNTR/X"}"#);
    }

    #[test]
    fn test_book_deserializes_capitalized_author() {
        let book: Book = serde_json::from_str(
            r#"{"id":"09","name":"Blue Period","Author":"Tsubasa Yamaguchi","price":99.5}"#,
        )
        .unwrap();
        assert_eq!(book.author, "Tsubasa Yamaguchi");
        assert_eq!(book.id(), "09");
    }
}
