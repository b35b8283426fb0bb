//! # Error Types
//!
//! Domain-specific error types for warung-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                         Error Types                              │
//! │                                                                  │
//! │  warung-core errors (this file)                                  │
//! │  ├── ItemError        - catalog add/remove failures              │
//! │  ├── StockError       - manual stock adjustment failures         │
//! │  ├── SaleError        - record_sale failures                     │
//! │  └── ValidationError  - input validation failures                │
//! │                                                                  │
//! │  warung-db errors (separate crate)                               │
//! │  └── DbError          - database operation failures, folded      │
//! │                         into the Storage variants below          │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending item name so the caller can message the user
//!    precisely
//! 3. Errors are enum variants, never bare String
//! 4. Every failure path is a no-op on stored state (fail-clean)

use thiserror::Error;

// =============================================================================
// Item Error
// =============================================================================

/// Catalog maintenance failures (`add_item` / `remove_item`).
#[derive(Debug, Error)]
pub enum ItemError {
    /// An item with this exact name already exists. Names are unique across
    /// menus and toppings together, matched case-sensitively.
    #[error("item '{0}' already exists")]
    DuplicateName(String),

    /// The named item does not exist in the catalog.
    #[error("item '{0}' not found")]
    NotFound(String),

    /// Input rejected before touching the catalog.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The storage layer failed. No partial state was left behind.
    #[error("storage error: {0}")]
    Storage(String),
}

// =============================================================================
// Stock Error
// =============================================================================

/// Manual stock adjustment failures (`adjust_stock`).
#[derive(Debug, Error)]
pub enum StockError {
    /// The named item does not exist in the catalog.
    #[error("item '{0}' not found")]
    NotFound(String),

    /// The adjustment would drive the quantity negative.
    ///
    /// ## User Workflow
    /// ```text
    /// Kurangi Stok "Ceker" by 8
    ///      │
    ///      ▼
    /// on hand: 5 → would be -3
    ///      │
    ///      ▼
    /// InsufficientStock { name: "Ceker", available: 5, requested: 8 }
    /// ```
    #[error("insufficient stock for '{name}': available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// The storage layer failed. No partial state was left behind.
    #[error("storage error: {0}")]
    Storage(String),
}

// =============================================================================
// Sale Error
// =============================================================================

/// Sale recording failures (`record_sale`).
///
/// Every variant guarantees the catalog and the sale log are untouched:
/// stock is checked for the whole order before anything is deducted.
#[derive(Debug, Error)]
pub enum SaleError {
    /// The menu dish or a topping name did not resolve in the catalog.
    /// Reported for the first unresolved name in input order.
    #[error("item '{0}' not found")]
    ItemNotFound(String),

    /// An item in the order lacks enough stock to cover it.
    ///
    /// `requested` accounts for topping multiplicity: ordering the same
    /// topping twice at `unit_count = 3` requests 6 units of it.
    #[error("insufficient stock for '{name}': available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// Input rejected before touching the ledger.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The storage layer failed or the commit was lost. No partial state
    /// was left behind.
    #[error("storage error: {0}")]
    Storage(String),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when caller input doesn't meet requirements; they are raised
/// before any business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty after trimming.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., a malformed month prefix).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sale_error_messages() {
        let err = SaleError::InsufficientStock {
            name: "Kerupuk".to_string(),
            available: 1,
            requested: 2,
        };
        assert_eq!(
            err.to_string(),
            "insufficient stock for 'Kerupuk': available 1, requested 2"
        );

        let err = SaleError::ItemNotFound("Seblak Keju".to_string());
        assert_eq!(err.to_string(), "item 'Seblak Keju' not found");
    }

    #[test]
    fn test_item_error_messages() {
        let err = ItemError::DuplicateName("Telur".to_string());
        assert_eq!(err.to_string(), "item 'Telur' already exists");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustBePositive {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must be positive");
    }

    #[test]
    fn test_validation_converts_to_sale_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "unit_count".to_string(),
        };
        let sale_err: SaleError = validation_err.into();
        assert!(matches!(sale_err, SaleError::Validation(_)));
    }
}
