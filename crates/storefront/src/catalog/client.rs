//! Catalog REST client implementation.
//!
//! Plain unauthenticated GET requests against the configured catalog
//! endpoint via `reqwest`. No retry, no caching, no configured timeout; a
//! caller that wants a deadline wraps the future itself.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use nexus_core::BookId;

use crate::config::CatalogConfig;

use super::CatalogError;
use super::conversions::{RawBook, convert_book};
use super::types::Book;

/// Client for the catalog read endpoint.
///
/// Cheap to clone; all clones share one connection pool. The client holds no
/// catalog state - fetched books live in
/// [`CatalogStore`](super::CatalogStore).
#[derive(Debug, Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

#[derive(Debug)]
struct CatalogClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new catalog client.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.clone(),
            }),
        }
    }

    /// Execute a GET request and parse the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, CatalogError> {
        let response = self.inner.client.get(url).send().await?;
        let status = response.status();

        // Read the body as text first for better error diagnostics
        let body = response.text().await?;

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(url.to_string()));
        }

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(200).collect::<String>(),
                "Catalog endpoint returned non-success status"
            );
            return Err(CatalogError::Status {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %body.chars().take(200).collect::<String>(),
                    "Failed to parse catalog response"
                );
                Err(CatalogError::Parse(e))
            }
        }
    }

    /// Fetch the full catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the endpoint answers with a
    /// non-success status, or the body is not a JSON array of book records.
    #[instrument(skip(self))]
    pub async fn fetch_all(&self) -> Result<Vec<Book>, CatalogError> {
        let raw: Vec<RawBook> = self.get_json(&self.inner.base_url).await?;

        debug!(count = raw.len(), "Fetched catalog");
        Ok(raw.into_iter().map(convert_book).collect())
    }

    /// Fetch a single book by id.
    ///
    /// Always round-trips to the endpoint - the locally held catalog is
    /// never consulted, so the result reflects the source of truth even when
    /// the bulk catalog is stale.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when the endpoint answers 404, and
    /// the usual transport/parse errors otherwise.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn fetch_by_id(&self, id: &BookId) -> Result<Book, CatalogError> {
        let url = format!("{}/{id}", self.inner.base_url);
        let raw: RawBook = self.get_json(&url).await?;

        Ok(convert_book(raw))
    }
}
