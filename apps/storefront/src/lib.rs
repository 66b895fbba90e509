//! # BizIdeas Storefront Library
//!
//! The storefront application: configuration, per-session state, the
//! command layer and a console front end. All catalog rules live in
//! `bizideas-core`; this crate wires them to input and output.
//!
//! ## Module Organization
//! ```text
//! storefront_lib/
//! ├── lib.rs            ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs        ◄─── State type exports
//! │   ├── session.rs    ◄─── Per-visitor CatalogStore + event queue
//! │   └── config.rs     ◄─── Configuration and catalog loading
//! ├── commands/
//! │   ├── mod.rs        ◄─── Command exports
//! │   ├── catalog.rs    ◄─── Grid, search, categories
//! │   ├── cart.rs       ◄─── Cart sheet, pay
//! │   ├── favorites.rs  ◄─── Favorites
//! │   └── detail.rs     ◄─── Detail sheet, buy
//! ├── console.rs        ◄─── stdin/stdout JSON front end
//! └── error.rs          ◄─── API error type for commands
//! ```

pub mod commands;
pub mod console;
pub mod error;
pub mod state;

use std::io;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{ConfigState, SessionState};

/// Runs the storefront console.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: INFO (DEBUG for our crates), override with RUST_LOG      │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • BIZIDEAS_* environment variables over defaults                    │
/// │                                                                         │
/// │  3. Load Catalog ─────────────────────────────────────────────────────► │
/// │     • Configured JSON file, or the built-in seed                        │
/// │     • Validated once; shared read-only from here on                     │
/// │                                                                         │
/// │  4. Start Session ────────────────────────────────────────────────────► │
/// │     • Fresh CatalogStore, new session id                                │
/// │                                                                         │
/// │  5. Serve stdin until EOF or `quit` ──────────────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    info!("Starting BizIdeas storefront");

    let config = ConfigState::from_env()?;
    info!(
        store = %config.store_name,
        catalog = ?config.catalog_path,
        "Configuration loaded"
    );

    let catalog = Arc::new(config.load_catalog()?);
    info!(items = catalog.len(), "Catalog ready");

    let session = SessionState::new(catalog);

    let stdin = io::stdin();
    let stdout = io::stdout();
    console::run_console(stdin.lock(), stdout.lock(), &session, &config)?;

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages everywhere
/// - `RUST_LOG=bizideas_core=trace` - Narrow to the core crate
/// - Default: INFO, DEBUG for the storefront crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,bizideas=debug,storefront_lib=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
