//! Shopping cart state.
//!
//! The cart is an insertion-ordered sequence of lines, one per book id.
//! Every operation here is synchronous, total, and infallible: invalid input
//! clamps (quantity below 1 removes the line) instead of erroring.
//!
//! # Authentication boundary
//!
//! `CartStore` does NOT check authentication. Whether an anonymous visitor
//! may add to the cart is UI policy, enforced by the calling layer (see
//! [`AppState::add_to_cart`](crate::state::AppState::add_to_cart)). Tests
//! against this store alone must not expect unauthenticated adds to be
//! rejected.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use nexus_core::BookId;

use crate::catalog::Book;

/// Item counts above this render as the capped badge string.
const BADGE_CAP: u64 = 9;

/// One (book, quantity) pairing within the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Snapshot of the book at the time it was added.
    pub book: Book,
    /// Number of copies; always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// Line subtotal: price × quantity, unrounded.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.book.price * self.quantity
    }
}

/// Holds the cart and computes its derived totals.
///
/// Lines keep insertion order, which is also display order. The cart lives
/// for the process lifetime only; `clear` (after checkout) or process exit
/// ends it.
#[derive(Debug, Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The cart lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct lines (not copies).
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add one copy of `book` to the cart.
    ///
    /// If a line for `book.id` already exists its quantity is incremented;
    /// otherwise a new line is appended. Book fields are stored as-is -
    /// author normalization already happened at catalog ingestion.
    pub fn add(&mut self, book: Book) {
        self.add_quantity(book, 1);
    }

    /// Add `quantity` copies of `book` to the cart.
    ///
    /// A quantity of 0 is a no-op.
    pub fn add_quantity(&mut self, book: Book, quantity: u32) {
        if quantity == 0 {
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|line| line.book.id == book.id) {
            line.quantity += quantity;
        } else {
            self.lines.push(CartLine { book, quantity });
        }
    }

    /// Remove the line for `id`, if present. Absent ids are a no-op.
    pub fn remove(&mut self, id: &BookId) {
        self.lines.retain(|line| &line.book.id != id);
    }

    /// Set the quantity of the line for `id`.
    ///
    /// A quantity below 1 removes the line entirely - the decrement control
    /// in the cart walks quantities down to zero and expects the line to
    /// disappear without confirmation. Absent ids are a no-op.
    pub fn set_quantity(&mut self, id: &BookId, quantity: i64) {
        if quantity < 1 {
            self.remove(id);
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|line| &line.book.id == id) {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    // =========================================================================
    // Derived totals
    // =========================================================================

    /// Sum of price × quantity over all lines, unrounded.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// The total rendered with exactly 2 decimal places.
    #[must_use]
    pub fn total_display(&self) -> String {
        nexus_core::display_2dp(self.total())
    }

    /// Sum of quantities over all lines (not the line count).
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Badge text for the cart tab: the exact count, capped at `"9+"` for
    /// counts above 9. The underlying [`item_count`](Self::item_count) stays
    /// exact.
    #[must_use]
    pub fn badge_text(&self) -> String {
        let count = self.item_count();
        if count > BADGE_CAP {
            "9+".to_string()
        } else {
            count.to_string()
        }
    }
}
