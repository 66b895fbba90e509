//! # BizIdeas Storefront Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        BizIdeas Storefront                              │
//! │                                                                         │
//! │   stdin ──► console ──► commands ──► SessionState ──► CatalogStore     │
//! │                                                          │              │
//! │   stdout ◄── one JSON reply per line ◄───────────────────┘              │
//! │   stderr ◄── tracing logs                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```text
//! $ printf 'search кофе\nadd 1\ncart\n' | storefront
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    // Setup lives in lib.rs so tests can reach it
    match storefront_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("storefront: {err}");
            ExitCode::FAILURE
        }
    }
}
