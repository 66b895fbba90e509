//! # Storefront Commands Module
//!
//! Every operation the front end can invoke on a session.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (exports)
//! ├── catalog.rs    ◄─── Grid, search, category dropdown
//! ├── cart.rs       ◄─── Cart sheet and the pay button
//! ├── favorites.rs  ◄─── Heart toggles and the favorites sheet
//! └── detail.rs     ◄─── Detail sheet and its buy button
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Front end (console line, or any host that embeds the lib)             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  fn add_to_cart(                                                        │
//! │      session: &SessionState,  ◄── the visitor's store                  │
//! │      config: &ConfigState,    ◄── price formatting                     │
//! │      item_id: ItemId,         ◄── from the request                     │
//! │  ) -> Result<CartResponse, ApiError>                                    │
//! │         │                                                               │
//! │         │ (serde_json, camelCase)                                       │
//! │         ▼                                                               │
//! │  { "entries": [...], "totals": {...}, "summary": "..." }               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands never hold the store lock across calls; each one takes it once
//! through `with_store` / `with_store_mut` and builds its response inside.

pub mod cart;
pub mod catalog;
pub mod detail;
pub mod favorites;

pub use cart::CartResponse;
pub use catalog::{CatalogResponse, CategoryOption, ItemCard};
pub use detail::DetailResponse;
pub use favorites::FavoritesResponse;
