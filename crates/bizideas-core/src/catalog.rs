//! # Catalog
//!
//! The fixed, ordered sequence of every item on sale.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Built-in seed ──┐                                                     │
//! │                  ├──► Catalog::new (validate) ──► Arc<Catalog>         │
//! │  catalog.json ───┘                                    │                 │
//! │  (read by the app,                                    ▼                 │
//! │   parsed here)                         shared by every CatalogStore    │
//! │                                                                         │
//! │  After construction the catalog never changes.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::seed::seed_items;
use crate::types::{Category, Item, ItemId};
use crate::validation::validate_items;

/// Immutable, ordered list of catalog items with unique ids.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Builds a catalog after validating every record and id uniqueness.
    ///
    /// ## Example
    /// ```rust
    /// use bizideas_core::catalog::Catalog;
    /// use bizideas_core::seed::seed_items;
    ///
    /// let catalog = Catalog::new(seed_items()).unwrap();
    /// assert_eq!(catalog.len(), 6);
    /// ```
    pub fn new(items: Vec<Item>) -> CoreResult<Self> {
        validate_items(&items)?;
        Ok(Catalog { items })
    }

    /// The built-in six-item catalog.
    pub fn seed() -> Self {
        Catalog {
            items: seed_items(),
        }
    }

    /// Parses a JSON array of items and validates it.
    ///
    /// ## Example
    /// ```rust
    /// use bizideas_core::catalog::Catalog;
    ///
    /// let json = r#"[{
    ///     "id": 7, "title": "Мини-пекарня", "description": "Пекарня у дома",
    ///     "price": 9000, "rating": 4.4, "reviews": 12, "category": "HoReCa",
    ///     "image": "", "investment": "1-2 млн ₽", "payback": "9-12 мес"
    /// }]"#;
    /// let catalog = Catalog::from_json(json).unwrap();
    /// assert_eq!(catalog.items()[0].title, "Мини-пекарня");
    /// ```
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let items: Vec<Item> = serde_json::from_str(json)?;
        Catalog::new(items)
    }

    /// All items in catalog order.
    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Iterates items in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up an item by id.
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Looks up an item by id, failing with `ItemNotFound`.
    pub fn require(&self, id: ItemId) -> CoreResult<&Item> {
        self.get(id).ok_or(CoreError::ItemNotFound(id))
    }

    /// Returns true if an item with `id` exists.
    #[inline]
    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Categories actually used by at least one item, in dropdown order.
    pub fn categories_in_use(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.items.iter().any(|item| item.category == *c))
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::seed()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_seed_catalog_order() {
        let catalog = Catalog::seed();
        let ids: Vec<u32> = catalog.iter().map(|i| i.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_get_and_require() {
        let catalog = Catalog::seed();
        assert_eq!(
            catalog.get(ItemId::new(5)).map(|i| i.title.as_str()),
            Some("Сервис личного помощника")
        );
        assert!(catalog.get(ItemId::new(99)).is_none());
        assert!(matches!(
            catalog.require(ItemId::new(99)),
            Err(CoreError::ItemNotFound(id)) if id == ItemId::new(99)
        ));
        assert!(catalog.contains(ItemId::new(1)));
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let mut items = seed_items();
        items[1].id = ItemId::new(1);
        assert!(matches!(
            Catalog::new(items),
            Err(CoreError::Validation(ValidationError::Duplicate { .. }))
        ));
    }

    #[test]
    fn test_from_json_roundtrips_seed() {
        let json = serde_json::to_string(&Catalog::seed()).unwrap();
        let parsed = Catalog::from_json(&json).unwrap();
        assert_eq!(parsed, Catalog::seed());
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(matches!(
            Catalog::from_json("not json"),
            Err(CoreError::InvalidCatalog(_))
        ));
        // Unknown category label
        let json = r#"[{"id":1,"title":"X","description":"","price":1,"rating":1.0,
            "reviews":0,"category":"saas","image":"","investment":"","payback":""}]"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CoreError::InvalidCatalog(_))
        ));
        // Rating above five stars
        let json = r#"[{"id":1,"title":"X","description":"","price":1,"rating":9.0,
            "reviews":0,"category":"SaaS","image":"","investment":"","payback":""}]"#;
        assert!(Catalog::from_json(json).is_err());
    }

    #[test]
    fn test_categories_in_use() {
        assert_eq!(Catalog::seed().categories_in_use(), Category::ALL.to_vec());

        let items: Vec<Item> = seed_items()
            .into_iter()
            .filter(|i| i.category == Category::SaaS)
            .collect();
        let catalog = Catalog::new(items).unwrap();
        assert_eq!(catalog.categories_in_use(), vec![Category::SaaS]);
    }
}
