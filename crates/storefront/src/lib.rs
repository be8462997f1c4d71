//! Nexus Storefront library.
//!
//! The logical core of the Nexus mobile bookstore: catalog fetching and
//! filtering, the shopping cart, and the session state. Screens, navigation,
//! and styling live in the UI layer, which calls into this crate.
//!
//! # Architecture
//!
//! State is held in three explicit stores - [`catalog::CatalogStore`],
//! [`cart::CartStore`], [`session::SessionStore`] - owned by a single
//! [`state::AppState`] that the UI shell constructs and hands to views by
//! reference. There are no hidden singletons.
//!
//! All store operations are synchronous and never block; the only
//! asynchronous operations are the two [`catalog::CatalogClient`] network
//! calls. The crate assumes the single-threaded cooperative scheduling of a
//! UI event loop, so no interior locking is used anywhere.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod session;
pub mod state;
