//! # Favorites Commands
//!
//! Heart toggles on cards and the favorites sheet.

use bizideas_core::ItemId;
use serde::Serialize;
use tracing::debug;

use crate::commands::catalog::ItemCard;
use crate::state::{ConfigState, SessionState};

/// Favorites sheet: favorite items in catalog order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoritesResponse {
    pub items: Vec<ItemCard>,
    pub count: usize,
}

fn build(session: &SessionState, config: &ConfigState) -> FavoritesResponse {
    session.with_store(|s| {
        let items: Vec<ItemCard> = s
            .favorite_items()
            .into_iter()
            .map(|item| ItemCard::build(s, item, config))
            .collect();
        FavoritesResponse {
            count: items.len(),
            items,
        }
    })
}

/// Flips the heart on `item_id`. Ids outside the catalog are ignored.
pub fn toggle_favorite(
    session: &SessionState,
    config: &ConfigState,
    item_id: ItemId,
) -> FavoritesResponse {
    let changed = session.with_store_mut(|s| s.toggle_favorite(item_id));
    debug!(item_id = %item_id, changed, "toggle_favorite command");
    build(session, config)
}

pub fn get_favorites(session: &SessionState, config: &ConfigState) -> FavoritesResponse {
    debug!("get_favorites command");
    build(session, config)
}
