//! # State Module
//!
//! Application state for the storefront.
//!
//! ## Why Separate State Types?
//! Each command declares exactly what it needs: catalog commands take the
//! session, price formatting takes the config.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────┐        ┌──────────────────────────┐      │
//! │  │      SessionState        │        │       ConfigState        │      │
//! │  │                          │        │                          │      │
//! │  │  session_id (UUID v4)    │        │  store_name              │      │
//! │  │  Arc<Mutex<CatalogStore>>│        │  currency_symbol         │      │
//! │  │  pending StoreEvents     │        │  catalog_path            │      │
//! │  └──────────────────────────┘        └──────────────────────────┘      │
//! │                                                                         │
//! │  SessionState: one per visitor, exclusive access through the Mutex     │
//! │  ConfigState:  read-only after startup                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::{default_catalog_path, ConfigError, ConfigState, CATALOG_FILE_NAME};
pub use session::SessionState;
