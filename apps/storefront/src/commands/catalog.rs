//! # Catalog Commands
//!
//! The item grid: search box, category dropdown and the cards themselves.
//!
//! ## Search Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Search Flow                                  │
//! │                                                                         │
//! │  User types "кофе"                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  set_search(session, config, "кофе")                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌───────────────────────────────────────────┐                         │
//! │  │  Longer than 100 characters?              │──► VALIDATION_ERROR     │
//! │  └───────────────────────────────────────────┘                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.set_search_text ──► StoreEvent::SearchChanged (if changed)      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.filtered_items() ──► Vec<ItemCard>                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Instant;

use bizideas_core::validation::validate_search_query;
use bizideas_core::{CatalogStore, CategoryFilter, Item};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{ConfigState, SessionState};

/// One card in the grid.
///
/// The item's own fields are flattened in, plus what the card needs from
/// the session (heart state, cart badge) and a display price.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCard {
    #[serde(flatten)]
    pub item: Item,
    pub formatted_price: String,
    pub is_favorite: bool,
    pub in_cart: bool,
}

impl ItemCard {
    pub fn build(store: &CatalogStore, item: &Item, config: &ConfigState) -> Self {
        ItemCard {
            item: item.clone(),
            formatted_price: config.format_price(item.price),
            is_favorite: store.is_favorite(item.id),
            in_cart: store.is_in_cart(item.id),
        }
    }
}

/// The grid with the filter that produced it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub items: Vec<ItemCard>,
    pub search_text: String,
    pub category: CategoryFilter,
    /// Items in the whole catalog, for "shown N of M"
    pub total: usize,
}

impl CatalogResponse {
    pub fn build(store: &CatalogStore, config: &ConfigState) -> Self {
        CatalogResponse {
            items: store
                .filtered_items()
                .into_iter()
                .map(|item| ItemCard::build(store, item, config))
                .collect(),
            search_text: store.search_text().to_string(),
            category: store.category_filter(),
            total: store.catalog().len(),
        }
    }
}

/// One dropdown option.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryOption {
    /// Value sent back by `set_category`: `all` or a category label
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Returns the grid for the current search and category.
pub fn list_items(session: &SessionState, config: &ConfigState) -> CatalogResponse {
    let start = Instant::now();
    let response = session.with_store(|s| CatalogResponse::build(s, config));

    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        count = response.items.len(),
        "list_items completed"
    );
    response
}

/// Replaces the search text and returns the new grid.
///
/// ## Errors
/// - `VALIDATION_ERROR` if the text is longer than 100 characters
pub fn set_search(
    session: &SessionState,
    config: &ConfigState,
    text: &str,
) -> Result<CatalogResponse, ApiError> {
    debug!(query = %text, "set_search command");
    validate_search_query(text)?;

    Ok(session.with_store_mut(|s| {
        s.set_search_text(text);
        CatalogResponse::build(s, config)
    }))
}

/// Switches the category dropdown and returns the new grid.
///
/// `value` is `all` or an exact category label such as `HoReCa`.
///
/// ## Errors
/// - `VALIDATION_ERROR` for any other value
pub fn set_category(
    session: &SessionState,
    config: &ConfigState,
    value: &str,
) -> Result<CatalogResponse, ApiError> {
    debug!(category = %value, "set_category command");
    let filter: CategoryFilter = value.parse()?;

    Ok(session.with_store_mut(|s| {
        s.set_category_filter(filter);
        CatalogResponse::build(s, config)
    }))
}

/// Lists dropdown options, `Все категории` first.
pub fn list_categories(session: &SessionState) -> Vec<CategoryOption> {
    session.with_store(|s| {
        let current = s.category_filter();
        s.categories()
            .into_iter()
            .map(|filter| CategoryOption {
                value: filter.label().to_string(),
                label: filter.display_name().to_string(),
                selected: filter == current,
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use bizideas_core::{Catalog, Category, ItemId};
    use std::sync::Arc;

    fn setup() -> (SessionState, ConfigState) {
        (
            SessionState::new(Arc::new(Catalog::seed())),
            ConfigState::default(),
        )
    }

    fn ids(response: &CatalogResponse) -> Vec<u32> {
        response.items.iter().map(|c| c.item.id.get()).collect()
    }

    #[test]
    fn test_list_items_returns_whole_catalog() {
        let (session, config) = setup();
        let response = list_items(&session, &config);

        assert_eq!(ids(&response), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(response.total, 6);
        assert_eq!(response.items[0].formatted_price, "15\u{a0}000 ₽");
        assert!(!response.items[0].is_favorite);
    }

    #[test]
    fn test_set_search_filters_grid() {
        let (session, config) = setup();
        let response = set_search(&session, &config, "кофе").unwrap();

        assert_eq!(ids(&response), vec![1]);
        assert_eq!(response.search_text, "кофе");
        assert_eq!(response.total, 6);
    }

    #[test]
    fn test_set_search_rejects_long_query() {
        let (session, config) = setup();
        let err = set_search(&session, &config, &"а".repeat(101)).unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(session.with_store(|s| s.search_text().to_string()), "");
    }

    #[test]
    fn test_set_category() {
        let (session, config) = setup();
        let response = set_category(&session, &config, "SaaS").unwrap();
        assert_eq!(ids(&response), vec![5]);
        assert_eq!(response.category, CategoryFilter::Only(Category::SaaS));

        let response = set_category(&session, &config, "all").unwrap();
        assert_eq!(response.items.len(), 6);
    }

    #[test]
    fn test_set_category_unknown_label() {
        let (session, config) = setup();
        let err = set_category(&session, &config, "saas").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_cards_reflect_session_state() {
        let (session, config) = setup();
        session.with_store_mut(|s| s.toggle_favorite(ItemId::new(2)));

        let response = list_items(&session, &config);
        assert!(response.items[1].is_favorite);
        assert!(!response.items[1].in_cart);
    }

    #[test]
    fn test_list_categories() {
        let (session, config) = setup();
        set_category(&session, &config, "Образование").unwrap();

        let options = list_categories(&session);
        assert_eq!(options.len(), 7);
        assert_eq!(options[0].value, "all");
        assert_eq!(options[0].label, "Все категории");
        assert!(options.iter().filter(|o| o.selected).count() == 1);
        assert!(options.iter().any(|o| o.selected && o.value == "Образование"));
    }

    #[test]
    fn test_card_serialization_is_flat() {
        let (session, config) = setup();
        let response = list_items(&session, &config);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["items"][0]["id"], 1);
        assert_eq!(json["items"][0]["formattedPrice"], "15\u{a0}000 ₽");
        assert_eq!(json["category"], "all");
        assert_eq!(json["searchText"], "");
    }
}
