//! # warung-core: Pure Business Logic for Warung POS
//!
//! This crate is the **heart** of Warung POS, a point-of-sale system for a
//! street-food stall selling seblak dishes with toppings. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                    Warung POS Architecture                       │
//! │                                                                  │
//! │  ┌────────────────────────────────────────────────────────────┐  │
//! │  │            UI layer (cashier screen, reports)              │  │
//! │  │       order entry ──► payment ──► receipt ──► charts       │  │
//! │  └──────────────────────────────┬─────────────────────────────┘  │
//! │                                 │                                │
//! │  ┌──────────────────────────────▼─────────────────────────────┐  │
//! │  │                 warung-db (Inventory Ledger)               │  │
//! │  │       record_sale, adjust_stock, query_sales, ...          │  │
//! │  └──────────────────────────────┬─────────────────────────────┘  │
//! │                                 │                                │
//! │  ┌──────────────────────────────▼─────────────────────────────┐  │
//! │  │               ★ warung-core (THIS CRATE) ★                 │  │
//! │  │                                                            │  │
//! │  │   ┌─────────┐  ┌─────────┐  ┌──────────┐  ┌────────────┐   │  │
//! │  │   │  types  │  │  money  │  │  report  │  │ validation │   │  │
//! │  │   │  Item   │  │  Money  │  │best-sell │  │   rules    │   │  │
//! │  │   │  Sale   │  │ (rupiah)│  │ monthly  │  │   checks   │   │  │
//! │  │   └─────────┘  └─────────┘  └──────────┘  └────────────┘   │  │
//! │  │                                                            │  │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS       │  │
//! │  └────────────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item, Sale, PaymentMethod, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//! - [`report`] - Pure read-side folds (best sellers, monthly summaries)
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every function is deterministic
//! 2. **Integer Money**: all monetary values are whole rupiah (i64)
//! 3. **Explicit Errors**: all errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ItemError, SaleError, StockError, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum unit count in a single sale.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
/// Matches the cap the cashier's quantity input enforces.
pub const MAX_UNITS_PER_SALE: i64 = 100;

/// Maximum length of an item name, in characters.
pub const MAX_ITEM_NAME_LEN: usize = 100;

/// Maximum unit price, in whole rupiah.
///
/// Matches the cap on the price input, and keeps the per-unit sum of a
/// dish plus its toppings far away from integer overflow.
pub const MAX_ITEM_PRICE: i64 = 1_000_000;

/// Format used for sale timestamps.
///
/// Second resolution, lexicographically sortable, and the first seven
/// characters are the `YYYY-MM` grouping key used by monthly reporting.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
