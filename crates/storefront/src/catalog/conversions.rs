//! Wire-record types and their conversion into domain [`Book`]s.
//!
//! The catalog source is tolerant JSON: `author`, `category`, and
//! `publisher` arrive as either a plain string or a nested name-bearing
//! record; `category` may be keyed `genre`; `reviewCount` may be keyed
//! `reviews`; ids are strings or numbers; most fields can be missing
//! entirely. All of that tolerance lives here, at the ingestion boundary.

use serde::Deserialize;

use nexus_core::{BookId, Price};

use super::types::Book;

/// A field that arrives as either `"Frank Herbert"` or `{"name": "Frank Herbert"}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum TextOrNamed {
    Text(String),
    Named { name: String },
}

impl TextOrNamed {
    fn into_string(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Named { name } => name,
        }
    }
}

/// A book record as the catalog endpoint emits it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawBook {
    id: BookId,
    title: String,
    author: Option<TextOrNamed>,
    #[serde(alias = "genre")]
    category: Option<TextOrNamed>,
    publisher: Option<TextOrNamed>,
    price: Option<Price>,
    original_price: Option<Price>,
    discount: Option<f64>,
    rating: Option<f64>,
    #[serde(alias = "reviews")]
    review_count: Option<u64>,
    cover_image: Option<String>,
    stock: Option<u32>,
    #[serde(default)]
    bestseller: bool,
}

/// Resolve a raw record into the canonical [`Book`] shape.
pub(crate) fn convert_book(raw: RawBook) -> Book {
    Book {
        id: raw.id,
        title: raw.title,
        author: raw.author.map(TextOrNamed::into_string).unwrap_or_default(),
        category: raw
            .category
            .map(TextOrNamed::into_string)
            .unwrap_or_default(),
        publisher: raw.publisher.map(TextOrNamed::into_string),
        price: raw.price.unwrap_or_else(Price::fallback),
        original_price: raw.original_price,
        discount: raw.discount,
        rating: raw.rating,
        review_count: raw.review_count,
        cover_image: raw.cover_image,
        stock: raw.stock,
        bestseller: raw.bestseller,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn ingest(json: &str) -> Book {
        let raw: RawBook = serde_json::from_str(json).unwrap();
        convert_book(raw)
    }

    #[test]
    fn test_full_record() {
        let book = ingest(
            r#"{
                "id": "1",
                "title": "Dune",
                "author": "Frank Herbert",
                "category": "Ciencia Ficción",
                "publisher": "Ace Books",
                "price": 12.50,
                "originalPrice": 15.00,
                "discount": 17,
                "rating": 4.8,
                "reviewCount": 2341,
                "coverImage": "https://covers.example/dune.jpg",
                "stock": 12,
                "bestseller": true
            }"#,
        );
        assert_eq!(book.id.as_str(), "1");
        assert_eq!(book.author, "Frank Herbert");
        assert_eq!(book.category, "Ciencia Ficción");
        assert_eq!(book.publisher.as_deref(), Some("Ace Books"));
        assert_eq!(book.price.display(), "12.50");
        assert_eq!(book.review_count, Some(2341));
        assert!(book.bestseller);
    }

    #[test]
    fn test_nested_author_normalized_to_string() {
        let book = ingest(
            r#"{"id": 2, "title": "Dune Messiah", "author": {"name": "Frank Herbert"}}"#,
        );
        assert_eq!(book.author, "Frank Herbert");
    }

    #[test]
    fn test_nested_category_and_publisher() {
        let book = ingest(
            r#"{
                "id": 3,
                "title": "Fundación",
                "author": "Isaac Asimov",
                "category": {"name": "Ciencia Ficción"},
                "publisher": {"name": "Gnome Press"}
            }"#,
        );
        assert_eq!(book.category, "Ciencia Ficción");
        assert_eq!(book.publisher.as_deref(), Some("Gnome Press"));
    }

    #[test]
    fn test_genre_alias() {
        let book = ingest(r#"{"id": 4, "title": "It", "genre": "Terror"}"#);
        assert_eq!(book.category, "Terror");
    }

    #[test]
    fn test_reviews_alias() {
        let book = ingest(r#"{"id": 5, "title": "It", "reviews": 99}"#);
        assert_eq!(book.review_count, Some(99));
    }

    #[test]
    fn test_missing_price_defaults() {
        let book = ingest(r#"{"id": 6, "title": "Sin precio"}"#);
        assert_eq!(book.price, Price::fallback());
    }

    #[test]
    fn test_numeric_id_normalized() {
        let book = ingest(r#"{"id": 7, "title": "Siete"}"#);
        assert_eq!(book.id.as_str(), "7");
    }

    #[test]
    fn test_minimal_record_fallbacks() {
        let book = ingest(r#"{"id": "x", "title": "Minimal"}"#);
        assert_eq!(book.author, "");
        assert_eq!(book.category, "");
        assert_eq!(book.publisher, None);
        assert_eq!(book.cover_image, None);
        assert_eq!(book.stock, None);
        assert!(!book.bestseller);
    }
}
