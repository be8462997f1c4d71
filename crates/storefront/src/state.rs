//! Application state shared across views.
//!
//! One `AppState` is constructed by the UI shell at startup and handed to
//! views by reference - stores are explicit fields here, never framework
//! context or hidden singletons. Because the stores are mutable and the app
//! runs on a single-threaded UI event loop, the state is plainly owned and
//! borrowed, not shared behind `Arc`.
//!
//! This module also hosts the UI-side event handlers that compose stores
//! with policy: the authentication gate on adding to the cart lives here,
//! not inside [`CartStore`].

use nexus_core::BookId;

use crate::cart::CartStore;
use crate::catalog::{Book, CatalogClient, CatalogStore};
use crate::config::StorefrontConfig;
use crate::error::{AppError, Result};
use crate::session::SessionStore;

/// Application state owning the configuration, the catalog client, and the
/// three stores.
#[derive(Debug)]
pub struct AppState {
    config: StorefrontConfig,
    catalog_client: CatalogClient,
    catalog: CatalogStore,
    cart: CartStore,
    session: SessionStore,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let catalog_client = CatalogClient::new(&config.catalog);

        Self {
            config,
            catalog_client,
            catalog: CatalogStore::new(),
            cart: CartStore::new(),
            session: SessionStore::new(),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Get a reference to the catalog client.
    #[must_use]
    pub const fn catalog_client(&self) -> &CatalogClient {
        &self.catalog_client
    }

    /// Get a reference to the catalog store.
    #[must_use]
    pub const fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// Get a mutable reference to the catalog store.
    pub const fn catalog_mut(&mut self) -> &mut CatalogStore {
        &mut self.catalog
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Get a mutable reference to the cart store.
    pub const fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    /// Get a reference to the session store.
    #[must_use]
    pub const fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Get a mutable reference to the session store.
    pub const fn session_mut(&mut self) -> &mut SessionStore {
        &mut self.session
    }

    // =========================================================================
    // UI event handlers
    // =========================================================================

    /// Add one copy of `book` to the cart, gated on authentication.
    ///
    /// This is where the anonymous-visitor policy lives;
    /// [`CartStore::add`] itself accepts any caller.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] when no user is logged in.
    pub fn add_to_cart(&mut self, book: Book) -> Result<()> {
        if !self.session.is_authenticated() {
            return Err(AppError::Unauthorized(
                "Inicia sesión para añadir libros al carrito".to_string(),
            ));
        }

        self.cart.add(book);
        Ok(())
    }

    /// Complete the purchase: produce the confirmation message and empty the
    /// cart.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] when the cart is empty.
    pub fn checkout(&mut self) -> Result<String> {
        if self.cart.is_empty() {
            return Err(AppError::BadRequest("El carrito está vacío".to_string()));
        }

        let message = format!(
            "Total: ${}\n\nGracias por tu compra en Nexus",
            self.cart.total_display()
        );
        self.cart.clear();
        Ok(message)
    }

    /// Fetch the catalog into the catalog store.
    ///
    /// A failed fetch is absorbed by the store (previous catalog kept, error
    /// message held for display); see [`CatalogStore::refresh`].
    pub async fn load_catalog(&mut self) {
        self.catalog.refresh(&self.catalog_client).await;
    }

    /// Fetch a single book for the detail view.
    ///
    /// Always round-trips to the catalog endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Catalog`] when the fetch fails or the book does
    /// not exist.
    pub async fn book_detail(&self, id: &BookId) -> Result<Book> {
        Ok(self.catalog_client.fetch_by_id(id).await?)
    }
}
