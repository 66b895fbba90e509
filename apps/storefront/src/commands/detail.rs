//! # Detail Commands
//!
//! The detail sheet opened from a card.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  card click ──► select_item(3) ──► DetailResponse                      │
//! │                                      │                                  │
//! │                     ┌────────────────┼────────────────┐                 │
//! │                     ▼                ▼                ▼                 │
//! │                  heart          "Купить"           close               │
//! │            toggle_favorite    buy_selected      close_detail           │
//! │            (sheet stays)     (cart + close)    (selection = None)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use bizideas_core::seed::{AudienceTrait, LaunchStage, SwotAnalysis};
use bizideas_core::{CatalogStore, ItemId};
use serde::Serialize;
use tracing::debug;

use crate::commands::cart::CartResponse;
use crate::commands::catalog::ItemCard;
use crate::error::ApiError;
use crate::state::{ConfigState, SessionState};

/// Everything the detail sheet renders.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailResponse {
    #[serde(flatten)]
    pub card: ItemCard,
    pub package_contents: &'static [&'static str],
    pub swot_analysis: &'static SwotAnalysis,
    pub target_audience: &'static [AudienceTrait],
    pub launch_stages: &'static [LaunchStage],
}

impl DetailResponse {
    fn current(store: &CatalogStore, config: &ConfigState) -> Option<Self> {
        store.selected_detail().map(|detail| DetailResponse {
            card: ItemCard::build(store, detail.item, config),
            package_contents: detail.package_contents,
            swot_analysis: detail.swot_analysis,
            target_audience: detail.target_audience,
            launch_stages: detail.launch_stages,
        })
    }
}

/// Opens the detail sheet for `item_id`.
///
/// ## Errors
/// - `NOT_FOUND` if `item_id` is not in the catalog; the open sheet, if
///   any, stays as it was
pub fn select_item(
    session: &SessionState,
    config: &ConfigState,
    item_id: ItemId,
) -> Result<DetailResponse, ApiError> {
    debug!(item_id = %item_id, "select_item command");
    session.with_store_mut(|s| -> Result<DetailResponse, ApiError> {
        s.catalog().require(item_id)?;
        s.select_item(Some(item_id));
        DetailResponse::current(s, config)
            .ok_or_else(|| ApiError::internal("Selection did not open"))
    })
}

/// Closes the detail sheet. Returns false if none was open.
pub fn close_detail(session: &SessionState) -> bool {
    let closed = session.with_store_mut(|s| s.select_item(None));
    debug!(closed, "close_detail command");
    closed
}

/// The open detail sheet, if any.
pub fn get_selected(session: &SessionState, config: &ConfigState) -> Option<DetailResponse> {
    session.with_store(|s| DetailResponse::current(s, config))
}

/// The sheet's buy button: adds the selected item to the cart and closes
/// the sheet. With nothing selected the cart is returned unchanged.
pub fn buy_selected(session: &SessionState, config: &ConfigState) -> CartResponse {
    session.with_store_mut(|s| {
        let item_id = s.selected_item_id();
        let changed = s.buy_selected();

        debug!(item_id = ?item_id, changed, "buy_selected command");
        CartResponse::build(s.cart(), config)
    })
}
