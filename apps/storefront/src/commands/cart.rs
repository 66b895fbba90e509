//! # Cart Commands
//!
//! The cart sheet: add, remove, show, and the pay button.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                        │
//! │  │  Empty   │────►│ In Cart  │────►│   Pay    │                        │
//! │  │  Cart    │     │          │     │ (summary │                        │
//! │  └──────────┘     └──────────┘     │   only)  │                        │
//! │       ▲                │           └──────────┘                        │
//! │       │           add_to_cart                                          │
//! │       │           remove_from_cart                                     │
//! │       │           buy_selected (detail.rs)                             │
//! │       │                │                                                │
//! │       └────────────────┘  (last item removed)                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each item appears at most once; adding it again changes nothing.

use std::sync::Arc;

use bizideas_core::{Cart, CartEntry, CartTotals, ItemId};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{ConfigState, SessionState};

/// Cart response including entries and totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub entries: Vec<CartEntry>,
    pub totals: CartTotals,
    /// Sheet description, e.g. `2 товаров на сумму 27 000 ₽`
    pub summary: String,
    pub formatted_total: String,
}

impl CartResponse {
    pub fn build(cart: &Cart, config: &ConfigState) -> Self {
        let totals = CartTotals::from(cart);
        let formatted_total = config.format_price(totals.total_price);
        CartResponse {
            entries: cart.entries().to_vec(),
            summary: totals.summary_with(&formatted_total),
            formatted_total,
            totals,
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(session: &SessionState, config: &ConfigState) -> CartResponse {
    debug!("get_cart command");
    session.with_store(|s| CartResponse::build(s.cart(), config))
}

/// Adds a catalog item to the cart.
///
/// ## Behavior
/// - Already in cart: nothing changes
/// - Title and price are copied into the entry when it is added
///
/// ## Errors
/// - `NOT_FOUND` if `item_id` is not in the catalog
pub fn add_to_cart(
    session: &SessionState,
    config: &ConfigState,
    item_id: ItemId,
) -> Result<CartResponse, ApiError> {
    session.with_store_mut(|s| -> Result<CartResponse, ApiError> {
        let catalog = Arc::clone(s.catalog());
        let item = catalog.require(item_id)?;
        let added = s.add_to_cart(item);

        debug!(item_id = %item_id, added, "add_to_cart command");
        Ok(CartResponse::build(s.cart(), config))
    })
}

/// Removes an item from the cart. Ids not in the cart are ignored.
pub fn remove_from_cart(
    session: &SessionState,
    config: &ConfigState,
    item_id: ItemId,
) -> CartResponse {
    session.with_store_mut(|s| {
        let removed = s.remove_from_cart(item_id);

        debug!(item_id = %item_id, removed, "remove_from_cart command");
        CartResponse::build(s.cart(), config)
    })
}

/// The pay button.
///
/// Checkout is not wired to anything: the cart is left as it is and the
/// response is the same summary the sheet already shows.
pub fn pay(session: &SessionState, config: &ConfigState) -> CartResponse {
    let response = get_cart(session, config);
    info!(
        session_id = %session.session_id(),
        item_count = response.totals.item_count,
        total = %response.formatted_total,
        "Payment requested, nothing processed"
    );
    response
}
