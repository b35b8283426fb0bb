//! # Domain Types
//!
//! Core domain types for the Warung POS inventory ledger.
//!
//! ## Type Hierarchy
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                             │
//! │                                                                  │
//! │  ┌────────────────┐   ┌────────────────┐   ┌────────────────┐    │
//! │  │     Item       │   │      Sale      │   │ PaymentMethod  │    │
//! │  │  ────────────  │   │  ────────────  │   │  ────────────  │    │
//! │  │  name (key)    │   │  id (UUID)     │   │  Cash          │    │
//! │  │  category      │   │  recorded_at   │   │  EWalletOvo    │    │
//! │  │  price         │   │  menu_name     │   │  EWalletGopay  │    │
//! │  │  quantity      │   │  toppings      │   │  EWalletDana   │    │
//! │  └────────────────┘   │  unit_count    │   │  Qris          │    │
//! │                       │  total_price   │   └────────────────┘    │
//! │                       └────────────────┘                         │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A `Sale` stores item *names*, not live references. Deleting or repricing
//! an item never rewrites sale history.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::TIMESTAMP_FORMAT;

// =============================================================================
// Item Category
// =============================================================================

/// What kind of sellable unit an item is.
///
/// Menu dishes and toppings share one name namespace and one stock pool;
/// the category only drives how the order-entry UI offers them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    /// A seblak dish sold as the base of an order.
    Menu,
    /// An add-on sold per portion alongside a dish.
    Topping,
}

// =============================================================================
// Payment Method
// =============================================================================

/// How a sale was paid.
///
/// The ledger only records the method; QR display for the e-wallet options
/// is the UI layer's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Physical cash payment.
    Cash,
    EWalletOvo,
    EWalletGopay,
    EWalletDana,
    Qris,
}

// =============================================================================
// Stock Level
// =============================================================================

/// Coarse stock classification shown on the stock-management screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    /// Fewer than 10 on hand, restock soon.
    Low,
    /// Fewer than 20 on hand.
    Moderate,
    /// 20 or more on hand.
    Ample,
}

impl StockLevel {
    /// Classifies an on-hand quantity.
    pub const fn classify(quantity: i64) -> Self {
        if quantity < 10 {
            StockLevel::Low
        } else if quantity < 20 {
            StockLevel::Moderate
        } else {
            StockLevel::Ample
        }
    }
}

// =============================================================================
// Item
// =============================================================================

/// A sellable unit in the catalog.
///
/// The trimmed, case-sensitive name is the identity key; names are unique
/// across menus and toppings together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Item {
    /// Unique name, the business key.
    pub name: String,

    /// Menu dish or topping.
    pub category: ItemCategory,

    /// Unit price in whole rupiah.
    pub price: Money,

    /// On-hand quantity. Never negative.
    pub quantity: i64,
}

impl Item {
    /// Returns the stock classification for this item.
    #[inline]
    pub const fn stock_level(&self) -> StockLevel {
        StockLevel::classify(self.quantity)
    }
}

// =============================================================================
// Sale
// =============================================================================

/// One completed, immutable transaction.
///
/// Created exclusively by a successful `record_sale`; never mutated or
/// deleted afterwards. Reporting is read-only over the sale log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Server-assigned completion time, second resolution.
    pub recorded_at: NaiveDateTime,

    /// Name snapshot of the menu dish sold.
    pub menu_name: String,

    /// Name snapshots of toppings, in order. Duplicates are significant:
    /// each occurrence consumed and is credited `unit_count` units.
    pub toppings: Vec<String>,

    /// Number of portions sold. Always at least 1.
    pub unit_count: i64,

    /// How the customer paid.
    pub payment_method: PaymentMethod,

    /// `(price(menu) + Σ price(topping)) × unit_count`, using the prices in
    /// effect at the moment of sale.
    pub total_price: Money,
}

impl Sale {
    /// Formats the timestamp the way it is persisted and reported.
    pub fn timestamp(&self) -> String {
        self.recorded_at.format(TIMESTAMP_FORMAT).to_string()
    }

    /// The `YYYY-MM` grouping key for monthly reporting.
    pub fn month_key(&self) -> String {
        self.recorded_at.format("%Y-%m").to_string()
    }

    /// Serializes a topping list to its stored comma-joined form.
    pub fn join_toppings(toppings: &[String]) -> String {
        toppings.join(",")
    }

    /// Parses the stored comma-joined topping column back into a list.
    ///
    /// An empty column means no toppings, not one empty topping.
    pub fn split_toppings(joined: &str) -> Vec<String> {
        joined
            .split(',')
            .filter(|t| !t.is_empty())
            .map(str::to_owned)
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_sale() -> Sale {
        Sale {
            id: "test".to_owned(),
            recorded_at: NaiveDate::from_ymd_opt(2026, 8, 31)
                .unwrap()
                .and_hms_opt(12, 34, 56)
                .unwrap(),
            menu_name: "Seblak Original".to_owned(),
            toppings: vec!["Kerupuk".to_owned(), "Telur".to_owned()],
            unit_count: 2,
            payment_method: PaymentMethod::Qris,
            total_price: Money::new(44000),
        }
    }

    #[test]
    fn test_stock_level_thresholds() {
        assert_eq!(StockLevel::classify(0), StockLevel::Low);
        assert_eq!(StockLevel::classify(9), StockLevel::Low);
        assert_eq!(StockLevel::classify(10), StockLevel::Moderate);
        assert_eq!(StockLevel::classify(19), StockLevel::Moderate);
        assert_eq!(StockLevel::classify(20), StockLevel::Ample);
    }

    #[test]
    fn test_timestamp_and_month_key() {
        let sale = sample_sale();
        assert_eq!(sale.timestamp(), "2026-08-31 12:34:56");
        assert_eq!(sale.month_key(), "2026-08");
        // Month key is always the timestamp prefix used by LIKE filters.
        assert!(sale.timestamp().starts_with(&sale.month_key()));
    }

    #[test]
    fn test_topping_join_split() {
        let toppings = vec!["Kerupuk".to_owned(), "Kerupuk".to_owned(), "Telur".to_owned()];
        let joined = Sale::join_toppings(&toppings);
        assert_eq!(joined, "Kerupuk,Kerupuk,Telur");
        assert_eq!(Sale::split_toppings(&joined), toppings);
    }

    #[test]
    fn test_empty_topping_column() {
        assert_eq!(Sale::join_toppings(&[]), "");
        assert!(Sale::split_toppings("").is_empty());
    }
}
