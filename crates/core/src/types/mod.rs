//! Core types for Nexus.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;

pub use id::BookId;
pub use price::{Price, display_2dp};
