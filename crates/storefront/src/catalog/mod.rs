//! Catalog state: the fetched book list and its filter queries.
//!
//! # Architecture
//!
//! - [`CatalogClient`] does the HTTP work and hands back plain results.
//! - [`CatalogStore`] owns the held catalog, the load lifecycle, and the
//!   pure filter queries the catalog screen renders from.
//!
//! A failed fetch never throws past this module: it becomes a held
//! human-readable message ([`CatalogStore::error`]) and the previous catalog
//! stays in place. There is no retry and no backoff.

mod client;
mod conversions;
mod types;

pub use client::CatalogClient;
pub use types::{Book, COVER_PLACEHOLDER};

use thiserror::Error;
use tracing::debug;

/// The synthetic category entry that matches every book.
pub const ALL_CATEGORIES: &str = "Todos";

/// Errors that can occur when reading from the catalog endpoint.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Endpoint answered with a non-success status.
    #[error("Unexpected status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Body snippet for diagnostics.
        body: String,
    },
}

/// Proof that a load was started against the store's current lifetime.
///
/// Minted by [`CatalogStore::begin_load`] and redeemed by
/// [`CatalogStore::finish_load`]. A token minted before
/// [`CatalogStore::cancel_pending`] is stale and its result is discarded -
/// this is the guard that keeps a fetch resolving after its screen went away
/// from mutating state the screen no longer owns.
#[derive(Debug)]
#[must_use = "a load that is never finished leaves the store loading forever"]
pub struct LoadToken {
    epoch: u64,
}

/// Holds the fetched catalog; answers filter queries.
#[derive(Debug, Default)]
pub struct CatalogStore {
    books: Vec<Book>,
    error: Option<String>,
    pending: usize,
    epoch: u64,
}

impl CatalogStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The held catalog, in source order.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// The display message of the most recent failed load, if any.
    /// Cleared by the next successful load.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True while at least one load is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.pending > 0
    }

    // =========================================================================
    // Load lifecycle
    // =========================================================================

    /// Record that a fetch has been started.
    ///
    /// Starting a second load while one is in flight is allowed; each
    /// resolves independently, in completion order. Tokens are only
    /// invalidated by [`Self::cancel_pending`].
    pub fn begin_load(&mut self) -> LoadToken {
        self.pending += 1;
        LoadToken { epoch: self.epoch }
    }

    /// Apply the result of a fetch started with [`Self::begin_load`].
    ///
    /// On success the held catalog is replaced wholesale (no incremental
    /// merge) and any held error is cleared. On failure the previous catalog
    /// is preserved and the error's display message is held for the UI.
    ///
    /// Returns `false` when the token is stale - the result is discarded and
    /// the store is left untouched.
    pub fn finish_load(
        &mut self,
        token: LoadToken,
        result: Result<Vec<Book>, CatalogError>,
    ) -> bool {
        if token.epoch != self.epoch {
            debug!("Discarding catalog load that outlived its consumer");
            return false;
        }

        self.pending = self.pending.saturating_sub(1);
        match result {
            Ok(books) => {
                self.books = books;
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e.to_string());
            }
        }
        true
    }

    /// Invalidate every outstanding [`LoadToken`].
    ///
    /// Called when the consuming screen unmounts or the store is handed to a
    /// new screen; in-flight fetches then resolve into nothing.
    pub fn cancel_pending(&mut self) {
        self.epoch += 1;
        self.pending = 0;
    }

    /// Fetch the catalog and apply the result in one step.
    ///
    /// Convenience for callers that keep the store alive across the await;
    /// callers that may go away mid-fetch use the
    /// [`begin_load`](Self::begin_load)/[`finish_load`](Self::finish_load)
    /// pair directly.
    pub async fn refresh(&mut self, client: &CatalogClient) {
        let token = self.begin_load();
        let result = client.fetch_all().await;
        self.finish_load(token, result);
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Filter the held catalog by search text and category.
    ///
    /// A book matches when its category equals `category` (or `category` is
    /// [`ALL_CATEGORIES`]) and its title or author contains `query`
    /// case-insensitively. An empty query matches everything. Input order is
    /// preserved; there is no ranking and no pagination.
    #[must_use]
    pub fn filter(&self, query: &str, category: &str) -> Vec<&Book> {
        let query = query.to_lowercase();

        self.books
            .iter()
            .filter(|book| category == ALL_CATEGORIES || book.category == category)
            .filter(|book| {
                query.is_empty()
                    || book.title.to_lowercase().contains(&query)
                    || book.author.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// The distinct categories present in the held catalog, in first-seen
    /// order, prefixed with the synthetic [`ALL_CATEGORIES`] entry.
    ///
    /// Uncategorized books (empty category) contribute no entry.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut categories = vec![ALL_CATEGORIES];
        for book in &self.books {
            if !book.category.is_empty() && !categories.contains(&book.category.as_str()) {
                categories.push(&book.category);
            }
        }
        categories
    }
}
