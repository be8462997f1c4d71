//! Domain types for the book catalog.
//!
//! These types provide a clean, canonical shape separate from the raw wire
//! records in [`super::conversions`]. Every tolerant/optional source field is
//! resolved exactly once at ingestion; nothing here ever branches on wire
//! shape again.

use serde::{Deserialize, Serialize};

use nexus_core::{BookId, Price};

/// Placeholder glyph shown when a book carries no cover image.
pub const COVER_PLACEHOLDER: &str = "📕";

/// A book in the catalog.
///
/// Immutable snapshot as received from the catalog source; the stores never
/// mutate book fields locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Book ID (unique within a catalog snapshot).
    pub id: BookId,
    /// Display title.
    pub title: String,
    /// Author display name, normalized to a plain string at ingestion.
    /// Empty when the source omitted it.
    pub author: String,
    /// Category name, normalized like `author`. Empty means uncategorized;
    /// uncategorized books never appear in the derived category list.
    pub category: String,
    /// Publisher display name, when the source carries one.
    pub publisher: Option<String>,
    /// Current price. Sources that omit a price ingest as 19.99.
    pub price: Price,
    /// Pre-discount price, display only.
    pub original_price: Option<Price>,
    /// Discount percentage, display only.
    pub discount: Option<f64>,
    /// Average review rating.
    pub rating: Option<f64>,
    /// Number of reviews behind the rating.
    pub review_count: Option<u64>,
    /// Cover image URI.
    pub cover_image: Option<String>,
    /// Orderable-quantity upper bound, when the source tracks stock.
    /// Informational: the cart does not enforce it.
    pub stock: Option<u32>,
    /// Bestseller badge flag.
    pub bestseller: bool,
}

impl Book {
    /// The cover image URI, or the placeholder glyph when there is none.
    #[must_use]
    pub fn cover_display(&self) -> &str {
        self.cover_image.as_deref().unwrap_or(COVER_PLACEHOLDER)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn book_without_cover() -> Book {
        Book {
            id: BookId::new("1"),
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            category: "Ciencia Ficción".to_string(),
            publisher: None,
            price: Price::fallback(),
            original_price: None,
            discount: None,
            rating: None,
            review_count: None,
            cover_image: None,
            stock: None,
            bestseller: false,
        }
    }

    #[test]
    fn test_cover_falls_back_to_placeholder() {
        assert_eq!(book_without_cover().cover_display(), COVER_PLACEHOLDER);
    }

    #[test]
    fn test_cover_uses_image_when_present() {
        let mut book = book_without_cover();
        book.cover_image = Some("https://covers.example/dune.jpg".to_string());
        assert_eq!(book.cover_display(), "https://covers.example/dune.jpg");
    }
}
