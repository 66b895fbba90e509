//! # Catalog Store
//!
//! The single state container behind the storefront page: search text,
//! category filter, cart, favorites and the open detail view, plus the
//! views derived from them.
//!
//! ## State and Derived Views
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         CatalogStore                                    │
//! │                                                                         │
//! │  Arc<Catalog> (immutable, shared)                                      │
//! │                                                                         │
//! │  Mutable state               Derived on every read (never stored)      │
//! │  ─────────────               ────────────────────────────────────      │
//! │  search_text      ──┐                                                  │
//! │  category_filter  ──┴──────► filtered_items()                          │
//! │  cart             ─────────► total_price(), cart_totals()              │
//! │  favorite_ids     ─────────► favorite_items(), is_favorite()           │
//! │  selected_item_id ─────────► selected_item(), selected_detail()        │
//! │                                                                         │
//! │  Every mutation that changes state notifies subscribers with a         │
//! │  StoreEvent. No-ops notify nobody.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Unknown Ids
//! `toggle_favorite`, `remove_from_cart`, `select_item` and `add_to_cart`
//! ignore ids that are not in the catalog. Stale references from an old
//! view never corrupt state and never fail.
//!
//! ## Usage
//! ```rust
//! use std::sync::Arc;
//! use bizideas_core::{Catalog, CatalogStore, ItemId};
//!
//! let catalog = Arc::new(Catalog::seed());
//! let mut store = CatalogStore::new(catalog.clone());
//!
//! store.set_search_text("кофе");
//! assert_eq!(store.filtered_items().len(), 1);
//!
//! let coffee = catalog.require(ItemId::new(1)).unwrap();
//! store.add_to_cart(coffee);
//! assert_eq!(store.total_price().units(), 15000);
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cart::{Cart, CartTotals};
use crate::catalog::Catalog;
use crate::filter::ItemFilter;
use crate::money::Money;
use crate::seed::{
    AudienceTrait, LaunchStage, SwotAnalysis, LAUNCH_STAGES, PACKAGE_CONTENTS, SWOT_ANALYSIS,
    TARGET_AUDIENCE,
};
use crate::types::{CategoryFilter, Item, ItemId};

// =============================================================================
// Events
// =============================================================================

/// A state change the store just applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum StoreEvent {
    SearchChanged { search_text: String },
    CategoryChanged { filter: CategoryFilter },
    FavoriteToggled { item_id: ItemId, favorite: bool },
    CartItemAdded { item_id: ItemId },
    CartItemRemoved { item_id: ItemId },
    SelectionChanged { item_id: Option<ItemId> },
}

/// Handle returned by [`CatalogStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&StoreEvent) + Send>;

// =============================================================================
// Views
// =============================================================================

/// Everything the detail sheet shows for the selected item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDetail<'a> {
    pub item: &'a Item,
    pub is_favorite: bool,
    pub in_cart: bool,
    pub package_contents: &'static [&'static str],
    pub swot_analysis: &'static SwotAnalysis,
    pub target_audience: &'static [AudienceTrait],
    pub launch_stages: &'static [LaunchStage],
}

/// Plain copy of the mutable state, for comparisons and debugging.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub search_text: String,
    pub category_filter: CategoryFilter,
    pub cart: Vec<ItemId>,
    pub favorite_ids: Vec<ItemId>,
    pub selected_item_id: Option<ItemId>,
}

// =============================================================================
// Store
// =============================================================================

/// Per-session catalog state.
///
/// ## Ownership
/// One store per session. The catalog is shared through `Arc`; everything
/// else is owned here and changed only through the methods below.
pub struct CatalogStore {
    catalog: Arc<Catalog>,
    search_text: String,
    category_filter: CategoryFilter,
    cart: Cart,
    favorite_ids: BTreeSet<ItemId>,
    selected_item_id: Option<ItemId>,
    created_at: DateTime<Utc>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl CatalogStore {
    /// Creates a store with an empty cart, no favorites, no search text,
    /// the `All` filter and nothing selected.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        CatalogStore {
            catalog,
            search_text: String::new(),
            category_filter: CategoryFilter::All,
            cart: Cart::new(),
            favorite_ids: BTreeSet::new(),
            selected_item_id: None,
            created_at: Utc::now(),
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    // -------------------------------------------------------------------------
    // Subscriptions
    // -------------------------------------------------------------------------

    /// Registers `observer` to be called after every state change.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes a subscription. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let initial_len = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != initial_len
    }

    fn emit(&mut self, event: StoreEvent) {
        for (_, observer) in self.observers.iter_mut() {
            observer(&event);
        }
    }

    // -------------------------------------------------------------------------
    // Search & Filter
    // -------------------------------------------------------------------------

    /// Replaces the search text. Any text is accepted; empty matches all.
    pub fn set_search_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.search_text {
            return false;
        }
        self.search_text = text;
        self.emit(StoreEvent::SearchChanged {
            search_text: self.search_text.clone(),
        });
        true
    }

    /// Replaces the category filter.
    pub fn set_category_filter(&mut self, filter: CategoryFilter) -> bool {
        if filter == self.category_filter {
            return false;
        }
        self.category_filter = filter;
        self.emit(StoreEvent::CategoryChanged { filter });
        true
    }

    /// Catalog items matching the current search text and category filter,
    /// in catalog order.
    pub fn filtered_items(&self) -> Vec<&Item> {
        ItemFilter::new(&self.search_text, self.category_filter).apply(&self.catalog)
    }

    // -------------------------------------------------------------------------
    // Favorites
    // -------------------------------------------------------------------------

    /// Adds `id` to favorites, or removes it if already there.
    ///
    /// Ids outside the catalog are ignored.
    pub fn toggle_favorite(&mut self, id: ItemId) -> bool {
        if !self.catalog.contains(id) {
            return false;
        }

        let favorite = if self.favorite_ids.remove(&id) {
            false
        } else {
            self.favorite_ids.insert(id);
            true
        };

        self.emit(StoreEvent::FavoriteToggled {
            item_id: id,
            favorite,
        });
        true
    }

    pub fn is_favorite(&self, id: ItemId) -> bool {
        self.favorite_ids.contains(&id)
    }

    /// Favorite items in catalog order.
    pub fn favorite_items(&self) -> Vec<&Item> {
        self.catalog
            .iter()
            .filter(|item| self.favorite_ids.contains(&item.id))
            .collect()
    }

    // -------------------------------------------------------------------------
    // Cart
    // -------------------------------------------------------------------------

    /// Appends `item` to the cart unless it is already there.
    ///
    /// The entry is built from the catalog's own record for `item.id`;
    /// items outside the catalog are ignored.
    pub fn add_to_cart(&mut self, item: &Item) -> bool {
        let catalog = Arc::clone(&self.catalog);
        let Some(item) = catalog.get(item.id) else {
            return false;
        };

        if !self.cart.add_item(item) {
            return false;
        }
        self.emit(StoreEvent::CartItemAdded { item_id: item.id });
        true
    }

    /// Removes the cart entry for `id`, if any.
    pub fn remove_from_cart(&mut self, id: ItemId) -> bool {
        if !self.cart.remove_item(id) {
            return false;
        }
        self.emit(StoreEvent::CartItemRemoved { item_id: id });
        true
    }

    pub fn is_in_cart(&self, id: ItemId) -> bool {
        self.cart.contains(id)
    }

    /// Exact sum of the prices in the cart.
    pub fn total_price(&self) -> Money {
        self.cart.total_price()
    }

    pub fn cart_totals(&self) -> CartTotals {
        CartTotals::from(&self.cart)
    }

    // -------------------------------------------------------------------------
    // Detail View
    // -------------------------------------------------------------------------

    /// Opens the detail view for `id`, or closes it with `None`.
    ///
    /// Ids outside the catalog are ignored and the current selection stays.
    pub fn select_item(&mut self, id: Option<ItemId>) -> bool {
        if let Some(id) = id {
            if !self.catalog.contains(id) {
                return false;
            }
        }
        if id == self.selected_item_id {
            return false;
        }
        self.selected_item_id = id;
        self.emit(StoreEvent::SelectionChanged { item_id: id });
        true
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.selected_item_id.and_then(|id| self.catalog.get(id))
    }

    pub fn selected_detail(&self) -> Option<ItemDetail<'_>> {
        self.selected_item().map(|item| ItemDetail {
            item,
            is_favorite: self.is_favorite(item.id),
            in_cart: self.is_in_cart(item.id),
            package_contents: &PACKAGE_CONTENTS,
            swot_analysis: &SWOT_ANALYSIS,
            target_audience: &TARGET_AUDIENCE,
            launch_stages: &LAUNCH_STAGES,
        })
    }

    /// The detail view's buy button: puts the selected item in the cart
    /// and closes the view. Does nothing when no item is selected.
    pub fn buy_selected(&mut self) -> bool {
        let Some(id) = self.selected_item_id else {
            return false;
        };

        let catalog = Arc::clone(&self.catalog);
        let added = match catalog.get(id) {
            Some(item) => self.add_to_cart(item),
            None => false,
        };
        let closed = self.select_item(None);
        added || closed
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn category_filter(&self) -> CategoryFilter {
        self.category_filter
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn favorite_ids(&self) -> &BTreeSet<ItemId> {
        &self.favorite_ids
    }

    pub fn selected_item_id(&self) -> Option<ItemId> {
        self.selected_item_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Category dropdown options: `All`, then every category.
    pub fn categories(&self) -> Vec<CategoryFilter> {
        CategoryFilter::options()
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            search_text: self.search_text.clone(),
            category_filter: self.category_filter,
            cart: self.cart.entries().iter().map(|e| e.item_id).collect(),
            favorite_ids: self.favorite_ids.iter().copied().collect(),
            selected_item_id: self.selected_item_id,
        }
    }
}

impl fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogStore")
            .field("catalog_len", &self.catalog.len())
            .field("search_text", &self.search_text)
            .field("category_filter", &self.category_filter)
            .field("cart", &self.cart)
            .field("favorite_ids", &self.favorite_ids)
            .field("selected_item_id", &self.selected_item_id)
            .field("observers", &self.observers.len())
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use std::sync::Mutex;

    fn test_store() -> CatalogStore {
        CatalogStore::new(Arc::new(Catalog::seed()))
    }

    fn item(store: &CatalogStore, id: u32) -> Item {
        store.catalog().require(ItemId::new(id)).unwrap().clone()
    }

    fn ids(items: &[&Item]) -> Vec<u32> {
        items.iter().map(|i| i.id.get()).collect()
    }

    fn recorded(store: &mut CatalogStore) -> Arc<Mutex<Vec<StoreEvent>>> {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        store.subscribe(move |event| sink.lock().unwrap().push(event.clone()));
        events
    }

    #[test]
    fn test_initial_state() {
        let store = test_store();
        assert_eq!(store.search_text(), "");
        assert_eq!(store.category_filter(), CategoryFilter::All);
        assert!(store.cart().is_empty());
        assert!(store.favorite_ids().is_empty());
        assert_eq!(store.selected_item_id(), None);
        assert_eq!(ids(&store.filtered_items()), vec![1, 2, 3, 4, 5, 6]);
        assert!(store.total_price().is_zero());
    }

    #[test]
    fn test_storefront_scenario() {
        let mut store = test_store();

        store.set_search_text("кофе");
        assert_eq!(ids(&store.filtered_items()), vec![1]);

        store.set_search_text("");
        store.set_category_filter(CategoryFilter::Only(Category::SaaS));
        assert_eq!(ids(&store.filtered_items()), vec![5]);

        let first = item(&store, 1);
        let second = item(&store, 2);
        store.add_to_cart(&first);
        store.add_to_cart(&second);
        assert_eq!(store.total_price(), Money::from_units(27000));

        store.remove_from_cart(ItemId::new(1));
        let cart_ids: Vec<u32> = store.cart().entries().iter().map(|e| e.item_id.get()).collect();
        assert_eq!(cart_ids, vec![2]);
        assert_eq!(store.total_price(), Money::from_units(12000));

        store.toggle_favorite(ItemId::new(3));
        assert_eq!(
            store.favorite_ids().iter().copied().collect::<Vec<_>>(),
            vec![ItemId::new(3)]
        );
        store.toggle_favorite(ItemId::new(3));
        assert!(store.favorite_ids().is_empty());
    }

    #[test]
    fn test_add_to_cart_is_idempotent() {
        let mut store = test_store();
        let coffee = item(&store, 1);

        assert!(store.add_to_cart(&coffee));
        let total = store.total_price();
        assert!(!store.add_to_cart(&coffee));

        assert_eq!(store.cart().item_count(), 1);
        assert_eq!(store.total_price(), total);
    }

    #[test]
    fn test_add_to_cart_uses_catalog_record() {
        let mut store = test_store();
        let mut tampered = item(&store, 4);
        tampered.price = Money::from_units(1);

        assert!(store.add_to_cart(&tampered));
        assert_eq!(store.total_price(), Money::from_units(20000));
    }

    #[test]
    fn test_add_foreign_item_is_noop() {
        let mut store = test_store();
        let mut foreign = item(&store, 1);
        foreign.id = ItemId::new(77);

        assert!(!store.add_to_cart(&foreign));
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_toggle_favorite_is_self_inverse() {
        let mut store = test_store();
        store.toggle_favorite(ItemId::new(2));
        let before = store.favorite_ids().clone();

        store.toggle_favorite(ItemId::new(6));
        store.toggle_favorite(ItemId::new(6));

        assert_eq!(store.favorite_ids(), &before);
    }

    #[test]
    fn test_toggle_unknown_favorite_is_noop() {
        let mut store = test_store();
        assert!(!store.toggle_favorite(ItemId::new(42)));
        assert!(store.favorite_ids().is_empty());
    }

    #[test]
    fn test_favorite_items_follow_catalog_order() {
        let mut store = test_store();
        store.toggle_favorite(ItemId::new(5));
        store.toggle_favorite(ItemId::new(2));
        store.toggle_favorite(ItemId::new(4));

        assert_eq!(ids(&store.favorite_items()), vec![2, 4, 5]);
        assert!(store.is_favorite(ItemId::new(4)));
        assert!(!store.is_favorite(ItemId::new(1)));
    }

    #[test]
    fn test_remove_absent_item_is_noop() {
        let mut store = test_store();
        let school = item(&store, 2);
        store.add_to_cart(&school);

        assert!(!store.remove_from_cart(ItemId::new(1)));
        assert!(!store.remove_from_cart(ItemId::new(99)));
        assert_eq!(store.cart().item_count(), 1);
    }

    #[test]
    fn test_total_price_is_exact_sum() {
        let mut store = test_store();
        let all: Vec<Item> = store.catalog().items().to_vec();
        for item in &all {
            store.add_to_cart(item);
        }

        let expected: i64 = all.iter().map(|i| i.price.units()).sum();
        assert_eq!(store.total_price().units(), expected);
        assert_eq!(expected, 84000);
    }

    #[test]
    fn test_select_then_clear_leaves_other_state() {
        let mut store = test_store();
        store.set_search_text("сервис");
        store.toggle_favorite(ItemId::new(3));
        let coffee = item(&store, 1);
        store.add_to_cart(&coffee);
        let before = store.snapshot();

        store.select_item(Some(ItemId::new(3)));
        assert_eq!(store.selected_item().map(|i| i.id.get()), Some(3));
        store.select_item(None);

        assert_eq!(store.selected_item_id(), None);
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_select_unknown_keeps_selection() {
        let mut store = test_store();
        store.select_item(Some(ItemId::new(2)));

        assert!(!store.select_item(Some(ItemId::new(200))));
        assert_eq!(store.selected_item_id(), Some(ItemId::new(2)));
    }

    #[test]
    fn test_selected_detail() {
        let mut store = test_store();
        assert!(store.selected_detail().is_none());

        store.toggle_favorite(ItemId::new(6));
        store.select_item(Some(ItemId::new(6)));

        let detail = store.selected_detail().unwrap();
        assert_eq!(detail.item.title, "Мобильный груминг");
        assert!(detail.is_favorite);
        assert!(!detail.in_cart);
        assert_eq!(detail.package_contents.len(), 6);
        assert_eq!(detail.swot_analysis.strengths[0], "Высокий спрос на рынке");
        assert_eq!(detail.swot_analysis.threats.len(), 2);
        assert_eq!(detail.target_audience.len(), 4);
        assert_eq!(detail.target_audience[2].value, "города 500K+ населения");
        assert_eq!(detail.launch_stages.len(), 5);
    }

    #[test]
    fn test_buy_selected_adds_and_closes() {
        let mut store = test_store();
        store.select_item(Some(ItemId::new(5)));

        assert!(store.buy_selected());
        assert!(store.is_in_cart(ItemId::new(5)));
        assert_eq!(store.selected_item_id(), None);
        assert_eq!(store.total_price(), Money::from_units(8000));

        // Nothing selected any more
        assert!(!store.buy_selected());
        assert_eq!(store.cart().item_count(), 1);
    }

    #[test]
    fn test_buy_selected_already_in_cart_still_closes() {
        let mut store = test_store();
        let gadgets = item(&store, 3);
        store.add_to_cart(&gadgets);
        store.select_item(Some(ItemId::new(3)));

        assert!(store.buy_selected());
        assert_eq!(store.cart().item_count(), 1);
        assert_eq!(store.selected_item_id(), None);
    }

    #[test]
    fn test_events_fire_once_per_change() {
        let mut store = test_store();
        let events = recorded(&mut store);
        let coffee = item(&store, 1);

        store.set_search_text("кофе");
        store.set_category_filter(CategoryFilter::Only(Category::HoReCa));
        store.toggle_favorite(ItemId::new(1));
        store.add_to_cart(&coffee);
        store.select_item(Some(ItemId::new(1)));
        store.remove_from_cart(ItemId::new(1));

        let events = events.lock().unwrap();
        assert_eq!(
            *events,
            vec![
                StoreEvent::SearchChanged {
                    search_text: "кофе".to_string()
                },
                StoreEvent::CategoryChanged {
                    filter: CategoryFilter::Only(Category::HoReCa)
                },
                StoreEvent::FavoriteToggled {
                    item_id: ItemId::new(1),
                    favorite: true
                },
                StoreEvent::CartItemAdded {
                    item_id: ItemId::new(1)
                },
                StoreEvent::SelectionChanged {
                    item_id: Some(ItemId::new(1))
                },
                StoreEvent::CartItemRemoved {
                    item_id: ItemId::new(1)
                },
            ]
        );
    }

    #[test]
    fn test_noops_do_not_notify() {
        let mut store = test_store();
        let coffee = item(&store, 1);
        store.add_to_cart(&coffee);
        let events = recorded(&mut store);

        store.set_search_text("");
        store.set_category_filter(CategoryFilter::All);
        store.toggle_favorite(ItemId::new(99));
        store.add_to_cart(&coffee);
        store.remove_from_cart(ItemId::new(2));
        store.select_item(None);
        store.select_item(Some(ItemId::new(99)));
        store.buy_selected();

        assert!(events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut store = test_store();
        let events = Arc::new(Mutex::new(0usize));
        let sink = Arc::clone(&events);
        let id = store.subscribe(move |_| *sink.lock().unwrap() += 1);

        store.set_search_text("a");
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set_search_text("b");

        assert_eq!(*events.lock().unwrap(), 1);
    }

    #[test]
    fn test_sessions_are_independent() {
        let catalog = Arc::new(Catalog::seed());
        let mut first = CatalogStore::new(Arc::clone(&catalog));
        let second = CatalogStore::new(catalog);

        first.toggle_favorite(ItemId::new(1));
        first.set_search_text("кофе");

        assert!(second.favorite_ids().is_empty());
        assert_eq!(second.search_text(), "");
    }
}
