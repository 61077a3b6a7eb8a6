//! In-memory cart and favorites state.
//!
//! Scoped to a single page session: nothing here touches storage, and the
//! state is gone on reload. That volatility is deliberate. All mutation is
//! synchronous and single-owner.

use std::collections::HashSet;

use lilies_core::{ItemId, Money};

use crate::catalog::Catalog;

/// One line in the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartLine {
    pub item_id: ItemId,
    /// Always at least 1; a line that would drop to 0 is removed instead.
    pub quantity: u32,
}

/// The shopping cart plus the favorites set.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    favorites: HashSet<ItemId>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one of `item_id`: increments an existing line, otherwise appends
    /// a new line with quantity 1.
    pub fn add(&mut self, item_id: ItemId) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.item_id == item_id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                item_id,
                quantity: 1,
            });
        }
    }

    /// Drop the line for `item_id` entirely, regardless of quantity.
    pub fn remove(&mut self, item_id: ItemId) {
        self.lines.retain(|l| l.item_id != item_id);
    }

    /// Add `delta` to the line's quantity. A result of zero or less drops
    /// the line; there is no upper bound. A missing line is a no-op.
    pub fn update_quantity(&mut self, item_id: ItemId, delta: i32) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.item_id == item_id) {
            let updated = i64::from(line.quantity) + i64::from(delta);
            if updated <= 0 {
                self.remove(item_id);
            } else {
                line.quantity = u32::try_from(updated).unwrap_or(u32::MAX);
            }
        }
    }

    /// Flip membership of `item_id` in the favorites set. Returns whether
    /// the item is a favorite afterwards.
    pub fn toggle_favorite(&mut self, item_id: ItemId) -> bool {
        if self.favorites.remove(&item_id) {
            false
        } else {
            self.favorites.insert(item_id);
            true
        }
    }

    /// Whether `item_id` is currently a favorite.
    #[must_use]
    pub fn is_favorite(&self, item_id: ItemId) -> bool {
        self.favorites.contains(&item_id)
    }

    /// The cart lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Total units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of unit price times quantity over all lines.
    ///
    /// A pure derived value, recomputed on every call. Lines whose id is no
    /// longer in the catalog contribute nothing.
    #[must_use]
    pub fn subtotal(&self, catalog: &Catalog) -> Money {
        self.lines
            .iter()
            .filter_map(|l| catalog.get(l.item_id).map(|item| item.price.times(l.quantity)))
            .sum()
    }

    /// Subtotal plus the flat delivery fee.
    #[must_use]
    pub fn total_with_delivery(&self, catalog: &Catalog, delivery_fee: Money) -> Money {
        self.subtotal(catalog) + delivery_fee
    }
}
