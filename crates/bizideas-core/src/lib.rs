//! # bizideas-core: Pure Catalog Logic for the BizIdeas Storefront
//!
//! This crate holds the state and derivation model behind the storefront
//! page: the catalog, search and category filtering, the cart, favorites
//! and the detail view. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     BizIdeas Storefront Architecture                    │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Display collaborators                           │   │
//! │  │    Catalog grid ──► Detail sheet ──► Cart sheet ──► Favorites  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands / JSON                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 apps/storefront (commands, config)              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bizideas-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐  │   │
//! │  │   │  types   │ │ catalog  │ │   cart   │ │      store       │  │   │
//! │  │   │  Item    │ │ Catalog  │ │   Cart   │ │  CatalogStore    │  │   │
//! │  │   │ Category │ │  seed    │ │ CartEntry│ │  StoreEvent      │  │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE DERIVATIONS                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item, Category, CategoryFilter, Rating)
//! - [`money`] - Whole-unit integer money
//! - [`catalog`] - The immutable, validated item list
//! - [`seed`] - Built-in catalog records and static bundle content
//! - [`filter`] - Search and category predicate
//! - [`cart`] - Identifier-unique cart
//! - [`store`] - Per-session state container with change notification
//! - [`validation`] - Catalog and input validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use bizideas_core::{Catalog, CatalogStore, Category, CategoryFilter};
//!
//! let mut store = CatalogStore::new(Arc::new(Catalog::seed()));
//! store.set_category_filter(CategoryFilter::Only(Category::SaaS));
//!
//! let visible = store.filtered_items();
//! assert_eq!(visible.len(), 1);
//! assert_eq!(visible[0].title, "Сервис личного помощника");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod filter;
pub mod money;
pub mod seed;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartEntry, CartTotals};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use filter::ItemFilter;
pub use money::Money;
pub use store::{CatalogStore, ItemDetail, StoreEvent, StoreSnapshot, SubscriptionId};
pub use types::*;
