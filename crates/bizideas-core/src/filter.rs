//! # Catalog Filtering
//!
//! The search box and the category dropdown, as a pure predicate.
//!
//! ## Match Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  item passes  ⇔  (a) AND (b)                                            │
//! │                                                                         │
//! │  (a) lowercase(search) ⊂ lowercase(title)                              │
//! │        OR lowercase(search) ⊂ lowercase(description)                   │
//! │        (empty search always matches)                                   │
//! │                                                                         │
//! │  (b) filter == All  OR  filter == item.category                        │
//! │                                                                         │
//! │  Result keeps catalog order. Nothing is cached.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::catalog::Catalog;
use crate::types::{CategoryFilter, Item};

/// A prepared search: the lowercased query plus the category filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFilter {
    needle: String,
    category: CategoryFilter,
}

impl ItemFilter {
    pub fn new(search_text: &str, category: CategoryFilter) -> Self {
        ItemFilter {
            needle: search_text.to_lowercase(),
            category,
        }
    }

    /// Returns true if `item` passes both the text and the category test.
    pub fn matches(&self, item: &Item) -> bool {
        self.category.admits(item.category) && self.matches_text(item)
    }

    fn matches_text(&self, item: &Item) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        item.title.to_lowercase().contains(&self.needle)
            || item.description.to_lowercase().contains(&self.needle)
    }

    /// Filters `catalog`, keeping catalog order.
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Item> {
        catalog.iter().filter(|item| self.matches(item)).collect()
    }
}
