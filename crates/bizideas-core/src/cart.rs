//! # Cart
//!
//! The ordered, identifier-unique collection of bundles a visitor intends
//! to buy.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Front-end Action        Store Operation          Cart Change           │
//! │  ────────────────        ───────────────          ───────────           │
//! │                                                                         │
//! │  Click price button ───► add_to_cart() ─────────► push(entry)          │
//! │                                                   (skip if present)     │
//! │                                                                         │
//! │  "Купить за ..." ──────► buy_selected() ────────► push(entry)          │
//! │                                                                         │
//! │  Click "Удалить" ──────► remove_from_cart() ────► retain(id != x)      │
//! │                                                                         │
//! │  Open cart sheet ──────► cart_totals() ─────────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Bundles are bought once: there is no quantity. Adding an item that is
//! already in the cart changes nothing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Item, ItemId};

/// An item in the shopping cart.
///
/// ## Snapshot
/// Title and price are copied from the item when it is added, so the cart
/// sheet renders without going back to the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartEntry {
    pub item_id: ItemId,
    pub title: String,
    pub price: Money,
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartEntry {
    /// Creates a cart entry from a catalog item.
    pub fn from_item(item: &Item) -> Self {
        CartEntry {
            item_id: item.id,
            title: item.title.clone(),
            price: item.price,
            added_at: Utc::now(),
        }
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Entries are unique by `item_id`
/// - Entries keep insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Appends `item` unless an entry with the same id is already present.
    ///
    /// Returns true if the cart changed.
    pub fn add_item(&mut self, item: &Item) -> bool {
        if self.contains(item.id) {
            return false;
        }
        self.entries.push(CartEntry::from_item(item));
        true
    }

    /// Removes the entry with `item_id`, if any.
    ///
    /// Returns true if the cart changed.
    pub fn remove_item(&mut self, item_id: ItemId) -> bool {
        let initial_len = self.entries.len();
        self.entries.retain(|e| e.item_id != item_id);
        self.entries.len() != initial_len
    }

    /// Entries in the order they were added.
    #[inline]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn contains(&self, item_id: ItemId) -> bool {
        self.entries.iter().any(|e| e.item_id == item_id)
    }

    /// Returns the number of bundles in the cart.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact sum of every entry's price. Zero for an empty cart.
    pub fn total_price(&self) -> Money {
        self.entries.iter().map(|e| e.price).sum()
    }
}

/// Cart badge and summary line data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub item_count: usize,
    pub total_price: Money,
}

impl CartTotals {
    /// The sheet description: `Корзина пуста` or `2 товаров на сумму 27 000 ₽`.
    pub fn summary(&self) -> String {
        self.summary_with(&self.total_price.to_string())
    }

    /// Same as [`summary`](Self::summary), with the total already
    /// formatted by the caller (custom currency or separator).
    pub fn summary_with(&self, formatted_total: &str) -> String {
        if self.item_count == 0 {
            "Корзина пуста".to_string()
        } else {
            format!("{} товаров на сумму {}", self.item_count, formatted_total)
        }
    }
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_price: cart.total_price(),
        }
    }
}
