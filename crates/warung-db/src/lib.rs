//! # warung-db: Storage Layer for Warung POS
//!
//! This crate provides database access for the Warung POS system.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Warung POS Data Flow                             │
//! │                                                                         │
//! │  Caller (cashier session, seed tool, tests)                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     warung-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │InventoryLedger │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │  (ledger.rs)   │    │  (embedded)  │  │   │
//! │  │   │               │    │                │    │              │  │   │
//! │  │   │ SqlitePool    │    │ catalog ops    │    │ 001_initial_ │  │   │
//! │  │   │ Connection    │◄───│ record_sale    │    │ schema.sql   │  │   │
//! │  │   │ Management    │    │ sale queries   │    │              │  │   │
//! │  │   └───────────────┘    └────────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │              warung.db (WAL, foreign keys on)                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`ledger`] - The inventory ledger (catalog + sale log)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use warung_db::{Database, DbConfig};
//! use warung_core::{ItemCategory, Money, PaymentMethod};
//!
//! // Create database with default config (migrations run on open)
//! let config = DbConfig::new("path/to/warung.db");
//! let db = Database::new(config).await?;
//!
//! // Use the ledger
//! let ledger = db.ledger();
//! ledger.add_item("Kerupuk", ItemCategory::Topping, Money::new(3000), 100).await?;
//! let sale = ledger
//!     .record_sale("Seblak Original", &[], 1, PaymentMethod::Cash)
//!     .await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod ledger;
pub mod migrations;
pub mod pool;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use ledger::InventoryLedger;
pub use pool::{Database, DbConfig};
