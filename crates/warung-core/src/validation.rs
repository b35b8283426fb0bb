//! # Validation Module
//!
//! Input validation for ledger operations.
//!
//! ## Validation Strategy
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                           │
//! │                                                                  │
//! │  Layer 1: UI                                                     │
//! │  ├── Basic format checks, immediate feedback                     │
//! │           │                                                      │
//! │           ▼                                                      │
//! │  Layer 2: THIS MODULE (called by the ledger before any I/O)      │
//! │           │                                                      │
//! │           ▼                                                      │
//! │  Layer 3: Database                                               │
//! │  ├── UNIQUE(name), CHECK(quantity >= 0)                          │
//! │                                                                  │
//! │  Defense in depth: multiple layers catch different errors        │
//! └──────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_ITEM_NAME_LEN, MAX_ITEM_PRICE, MAX_UNITS_PER_SALE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name and returns the trimmed form that acts as the
/// identity key.
///
/// ## Rules
/// - Must not be empty after trimming whitespace
/// - Must be at most [`MAX_ITEM_NAME_LEN`] characters
/// - Must not contain `','`: sale rows persist their topping list
///   comma-joined, so the separator can never appear in a name or the
///   stored list stops round-tripping
///
/// ## Example
/// ```rust
/// use warung_core::validation::validate_item_name;
///
/// assert_eq!(validate_item_name("  Seblak Ceker ").unwrap(), "Seblak Ceker");
/// assert!(validate_item_name("   ").is_err());
/// assert!(validate_item_name("Kerupuk,Telur").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<&str> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_ITEM_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_ITEM_NAME_LEN,
        });
    }

    if name.contains(',') {
        return Err(ValidationError::InvalidFormat {
            field: "name".to_string(),
            reason: "must not contain ','".to_string(),
        });
    }

    Ok(name)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price: strictly positive, capped at [`MAX_ITEM_PRICE`].
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    if price.amount() > MAX_ITEM_PRICE {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 1,
            max: MAX_ITEM_PRICE,
        });
    }

    Ok(())
}

/// Validates an initial stock quantity: must not be negative.
pub fn validate_initial_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a sale's unit count: 1 up to [`MAX_UNITS_PER_SALE`].
pub fn validate_unit_count(unit_count: i64) -> ValidationResult<()> {
    if unit_count < 1 || unit_count > MAX_UNITS_PER_SALE {
        return Err(ValidationError::OutOfRange {
            field: "unit_count".to_string(),
            min: 1,
            max: MAX_UNITS_PER_SALE,
        });
    }

    Ok(())
}

// =============================================================================
// Month Prefix Validator
// =============================================================================

/// Validates a `YYYY-MM` month prefix used to filter sale queries.
///
/// ## Example
/// ```rust
/// use warung_core::validation::validate_month_prefix;
///
/// assert!(validate_month_prefix("2026-08").is_ok());
/// assert!(validate_month_prefix("2026-13").is_err());
/// assert!(validate_month_prefix("Aug 2026").is_err());
/// ```
pub fn validate_month_prefix(prefix: &str) -> ValidationResult<()> {
    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "month_prefix".to_string(),
        reason: reason.to_string(),
    };

    let bytes = prefix.as_bytes();
    if bytes.len() != 7 || bytes[4] != b'-' {
        return Err(invalid("expected YYYY-MM"));
    }
    if !prefix[..4].bytes().all(|b| b.is_ascii_digit())
        || !prefix[5..].bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid("expected YYYY-MM"));
    }

    let month: u32 = prefix[5..].parse().map_err(|_| invalid("expected YYYY-MM"))?;
    if !(1..=12).contains(&month) {
        return Err(invalid("month must be 01-12"));
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert_eq!(validate_item_name("Seblak Original").unwrap(), "Seblak Original");
        assert_eq!(validate_item_name("  Telur  ").unwrap(), "Telur");

        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
        assert!(validate_item_name(&"a".repeat(200)).is_err());
    }

    #[test]
    fn test_validate_item_name_rejects_comma() {
        // ',' is the stored topping-list separator; a name carrying it
        // would read back as two toppings.
        assert!(validate_item_name("Kerupuk,Telur").is_err());
        assert!(validate_item_name(",").is_err());
        assert!(validate_item_name("Telur ,").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::new(15000)).is_ok());
        assert!(validate_price(Money::new(MAX_ITEM_PRICE)).is_ok());

        assert!(validate_price(Money::zero()).is_err());
        assert!(validate_price(Money::new(-100)).is_err());
        assert!(validate_price(Money::new(MAX_ITEM_PRICE + 1)).is_err());
        assert!(validate_price(Money::new(i64::MAX)).is_err());
    }

    #[test]
    fn test_validate_initial_quantity() {
        assert!(validate_initial_quantity(0).is_ok());
        assert!(validate_initial_quantity(50).is_ok());
        assert!(validate_initial_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_unit_count() {
        assert!(validate_unit_count(1).is_ok());
        assert!(validate_unit_count(100).is_ok());

        assert!(validate_unit_count(0).is_err());
        assert!(validate_unit_count(-3).is_err());
        assert!(validate_unit_count(101).is_err());
    }

    #[test]
    fn test_validate_month_prefix() {
        assert!(validate_month_prefix("2026-01").is_ok());
        assert!(validate_month_prefix("2026-12").is_ok());

        assert!(validate_month_prefix("2026-00").is_err());
        assert!(validate_month_prefix("2026-13").is_err());
        assert!(validate_month_prefix("2026-8").is_err());
        assert!(validate_month_prefix("202608").is_err());
        assert!(validate_month_prefix("abcd-ef").is_err());
        assert!(validate_month_prefix("").is_err());
    }
}
