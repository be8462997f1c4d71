//! Nexus Core - Shared types library.
//!
//! This crate provides common types used across all Nexus components:
//! - `storefront` - The storefront logic library (catalog, cart, session)
//! - `integration-tests` - Cross-crate flow tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe book ids and prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
