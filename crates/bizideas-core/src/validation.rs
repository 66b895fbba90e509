//! # Validation Module
//!
//! Input validation utilities for the storefront.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Catalog construction                                         │
//! │  ├── Every item: title present, price >= 0                             │
//! │  └── Whole catalog: ids unique                                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Command input (storefront app)                               │
//! │  └── Search query length                                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: CatalogStore                                                 │
//! │  └── No validation: unknown ids are silent no-ops                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Ratings are range-checked by the `Rating` type itself.

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::Item;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest title accepted in a catalog record.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Longest search query accepted from the search box.
pub const MAX_SEARCH_QUERY_LENGTH: usize = 100;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates an item title.
///
/// ## Rules
/// - Must not be blank
/// - At most 200 characters
///
/// ## Example
/// ```rust
/// use bizideas_core::validation::validate_title;
///
/// assert!(validate_title("Мобильный груминг").is_ok());
/// assert!(validate_title("   ").is_err());
/// ```
pub fn validate_title(title: &str) -> ValidationResult<()> {
    let title = title.trim();

    if title.is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(ValidationError::TooLong {
            field: "title".to_string(),
            max: MAX_TITLE_LENGTH,
        });
    }

    Ok(())
}

/// Validates a catalog price. Zero is allowed, negative is not.
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a search query typed into the search box.
///
/// The query is not trimmed: matching uses the text exactly as typed.
/// Length is counted in characters, not bytes.
pub fn validate_search_query(query: &str) -> ValidationResult<()> {
    if query.chars().count() > MAX_SEARCH_QUERY_LENGTH {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_SEARCH_QUERY_LENGTH,
        });
    }

    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates a single catalog record.
pub fn validate_item(item: &Item) -> ValidationResult<()> {
    validate_title(&item.title)?;
    validate_price(item.price)?;
    Ok(())
}

/// Validates a full set of catalog records: each record, then id uniqueness.
pub fn validate_items(items: &[Item]) -> ValidationResult<()> {
    let mut seen = HashSet::with_capacity(items.len());

    for item in items {
        validate_item(item)?;

        if !seen.insert(item.id) {
            return Err(ValidationError::Duplicate {
                field: "id".to_string(),
                value: item.id.to_string(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, ItemId, Rating};

    fn test_item(id: u32, title: &str, price: i64) -> Item {
        Item {
            id: ItemId::new(id),
            title: title.to_string(),
            description: format!("Description {}", id),
            price: Money::from_units(price),
            rating: Rating::from_tenths(45).unwrap(),
            reviews: 10,
            category: Category::Services,
            image: String::new(),
            investment: "1 млн ₽".to_string(),
            payback: "12 мес".to_string(),
        }
    }

    #[test]
    fn test_validate_title() {
        assert!(validate_title("Экологичная упаковка").is_ok());
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
        assert!(validate_title(&"Я".repeat(200)).is_ok());
        assert!(validate_title(&"Я".repeat(201)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_units(15000)).is_ok());
        assert!(validate_price(Money::from_units(-1)).is_err());
    }

    #[test]
    fn test_validate_search_query() {
        assert!(validate_search_query("").is_ok());
        assert!(validate_search_query("  кофе  ").is_ok());
        // 100 Cyrillic characters is 200 bytes but still within the limit
        assert!(validate_search_query(&"к".repeat(100)).is_ok());
        assert!(validate_search_query(&"к".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_items_rejects_duplicate_ids() {
        let items = vec![test_item(1, "A", 100), test_item(1, "B", 200)];
        let err = validate_items(&items).unwrap_err();
        assert!(matches!(err, ValidationError::Duplicate { .. }));
        assert_eq!(err.to_string(), "id '1' already exists");
    }

    #[test]
    fn test_validate_items_checks_each_record() {
        let items = vec![test_item(1, "A", 100), test_item(2, "", 200)];
        assert!(matches!(
            validate_items(&items),
            Err(ValidationError::Required { .. })
        ));

        let items = vec![test_item(1, "A", -5)];
        assert!(matches!(
            validate_items(&items),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_items_accepts_valid_set() {
        let items = vec![test_item(1, "A", 100), test_item(2, "B", 0)];
        assert!(validate_items(&items).is_ok());
        assert!(validate_items(&[]).is_ok());
    }
}
