//! # Error Types
//!
//! Domain-specific error types for bizideas-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bizideas-core errors (this file)                                      │
//! │  ├── CoreError        - Catalog and lookup errors                      │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  storefront app errors                                                  │
//! │  ├── ConfigError      - Environment / catalog file problems            │
//! │  └── ApiError         - What the front end sees (serialized)           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Front end              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! Store mutations that reference an unknown item (toggling a favorite,
//! removing from the cart, selecting) are silent no-ops, not errors.
//! Errors only arise while building a catalog or when a caller needs an
//! item that does not exist.

use thiserror::Error;

use crate::types::ItemId;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Item cannot be found in the catalog.
    ///
    /// ## When This Occurs
    /// - A command needs the full `Item` (e.g. add to cart by id)
    /// - The id came from a stale view of an older catalog
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    /// Category label does not match any known category.
    ///
    /// Matching is exact and case-sensitive: `saas` is not `SaaS`.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Catalog JSON could not be parsed.
    #[error("Invalid catalog data: {0}")]
    InvalidCatalog(#[from] serde_json::Error),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Duplicate value (e.g., two catalog items sharing an id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ItemNotFound(ItemId::new(42));
        assert_eq!(err.to_string(), "Item not found: 42");

        let err = CoreError::UnknownCategory("saas".to_string());
        assert_eq!(err.to_string(), "Unknown category: saas");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "title".to_string(),
        };
        assert_eq!(err.to_string(), "title is required");

        let err = ValidationError::Duplicate {
            field: "id".to_string(),
            value: "3".to_string(),
        };
        assert_eq!(err.to_string(), "id '3' already exists");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "title".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
