//! # Inventory Ledger
//!
//! The single owner of the catalog and the append-only sale log. Every
//! mutation goes through the operations here; no other component touches
//! the tables directly.
//!
//! ## Sale Recording
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                  record_sale, one transaction                    │
//! │                                                                  │
//! │  1. RESOLVE                                                      │
//! │     └── menu dish, then each topping occurrence in input order   │
//! │         (first unresolved name fails the call)                   │
//! │                                                                  │
//! │  2. PRE-CHECK, NOT ADJUST                                        │
//! │     └── aggregate required units per distinct name; verify every │
//! │         requirement against on-hand stock BEFORE mutating        │
//! │         anything                                                 │
//! │                                                                  │
//! │  3. DEDUCT                                                       │
//! │     └── guarded UPDATE ... WHERE quantity >= required per line;  │
//! │         a lost race rolls the whole transaction back             │
//! │                                                                  │
//! │  4. APPEND                                                       │
//! │     └── insert the immutable Sale with a server-assigned         │
//! │         second-resolution timestamp, then commit                 │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Checking before mutating means there is no compensating rollback logic:
//! any failure leaves the catalog and the sale log exactly as they were.

use std::collections::BTreeMap;

use chrono::{NaiveDateTime, Timelike, Utc};
use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use warung_core::{
    report, validation, Item, ItemCategory, ItemError, Money, PaymentMethod, Sale, SaleError,
    StockError, TIMESTAMP_FORMAT,
};

/// Repository over the catalog and the sale log.
///
/// Obtained via `Database::ledger()`; cheap to clone and share between
/// cashier sessions.
#[derive(Debug, Clone)]
pub struct InventoryLedger {
    pool: SqlitePool,
}

/// One distinct item in an order being recorded, with its aggregated
/// requirement. Duplicate topping occurrences merge into one line whose
/// `required` covers every occurrence.
struct OrderLine {
    name: String,
    price: Money,
    available: i64,
    required: i64,
}

impl InventoryLedger {
    /// Creates a new InventoryLedger over the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        InventoryLedger { pool }
    }

    /// Begins a write transaction with the write lock taken up front.
    ///
    /// A deferred BEGIN would take a read snapshot first, and upgrading it
    /// under a multi-connection pool can fail with SQLITE_BUSY_SNAPSHOT
    /// (the busy timeout does not cover snapshot upgrades). IMMEDIATE makes
    /// competing writers queue on the busy timeout instead.
    async fn begin_write(&self) -> DbResult<Transaction<'_, Sqlite>> {
        Ok(self.pool.begin_with("BEGIN IMMEDIATE").await?)
    }

    // =========================================================================
    // Catalog Maintenance
    // =========================================================================

    /// Adds an item to the catalog.
    ///
    /// The name is trimmed and must be unique (case-sensitive) across menus
    /// and toppings together; price must be positive and within the price
    /// cap, the initial quantity non-negative.
    ///
    /// ## Errors
    /// * `ItemError::DuplicateName` - the name already exists, nothing changed
    /// * `ItemError::Validation` - input rejected before any I/O
    pub async fn add_item(
        &self,
        name: &str,
        category: ItemCategory,
        price: Money,
        initial_quantity: i64,
    ) -> Result<Item, ItemError> {
        let name = validation::validate_item_name(name)?;
        validation::validate_price(price)?;
        validation::validate_initial_quantity(initial_quantity)?;

        debug!(name = %name, ?category, "Adding catalog item");

        let result = sqlx::query(
            r#"
            INSERT INTO items (name, category, price, quantity)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(name)
        .bind(category)
        .bind(price)
        .bind(initial_quantity)
        .execute(&self.pool)
        .await
        .map_err(DbError::from);

        match result {
            Ok(_) => Ok(Item {
                name: name.to_owned(),
                category,
                price,
                quantity: initial_quantity,
            }),
            Err(DbError::UniqueViolation { .. }) => Err(ItemError::DuplicateName(name.to_owned())),
            Err(err) => Err(err.into()),
        }
    }

    /// Removes an item from the catalog.
    ///
    /// Past sales are untouched: they store name snapshots, not references.
    /// An item with sale history may be removed.
    pub async fn remove_item(&self, name: &str) -> Result<(), ItemError> {
        debug!(name = %name, "Removing catalog item");

        let result = sqlx::query("DELETE FROM items WHERE name = ?1")
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(DbError::from)?;

        if result.rows_affected() == 0 {
            return Err(ItemError::NotFound(name.to_owned()));
        }

        Ok(())
    }

    /// Adjusts an item's stock by `delta` (positive restock, negative
    /// correction) and returns the new quantity.
    ///
    /// ## Errors
    /// * `StockError::NotFound` - no such item
    /// * `StockError::InsufficientStock` - the result would be negative;
    ///   the quantity is left unchanged
    pub async fn adjust_stock(&self, name: &str, delta: i64) -> Result<i64, StockError> {
        debug!(name = %name, delta, "Adjusting stock");

        let mut tx = self.begin_write().await?;

        let current: Option<i64> = sqlx::query_scalar("SELECT quantity FROM items WHERE name = ?1")
            .bind(name)
            .fetch_optional(&mut *tx)
            .await
            .map_err(DbError::from)?;

        let Some(current) = current else {
            return Err(StockError::NotFound(name.to_owned()));
        };

        let Some(new_quantity) = current.checked_add(delta) else {
            return Err(StockError::Storage("quantity overflow".to_owned()));
        };
        if new_quantity < 0 {
            return Err(StockError::InsufficientStock {
                name: name.to_owned(),
                available: current,
                requested: -delta,
            });
        }

        // Guard re-validates at write time in case another writer moved the
        // quantity since the read.
        let result = sqlx::query(
            "UPDATE items SET quantity = quantity + ?2 WHERE name = ?1 AND quantity + ?2 >= 0",
        )
        .bind(name)
        .bind(delta)
        .execute(&mut *tx)
        .await
        .map_err(DbError::from)?;

        if result.rows_affected() == 0 {
            // Cannot happen while we hold the write lock; classify the
            // leftover state rather than guess.
            let refreshed: Option<i64> =
                sqlx::query_scalar("SELECT quantity FROM items WHERE name = ?1")
                    .bind(name)
                    .fetch_optional(&mut *tx)
                    .await
                    .map_err(DbError::from)?;
            return Err(match refreshed {
                None => StockError::NotFound(name.to_owned()),
                Some(available) => StockError::InsufficientStock {
                    name: name.to_owned(),
                    available,
                    requested: -delta,
                },
            });
        }

        tx.commit().await.map_err(DbError::from)?;

        Ok(new_quantity)
    }

    // =========================================================================
    // Sale Recording
    // =========================================================================

    /// Records a completed sale: checks stock for the whole order, deducts
    /// it, and appends the immutable [`Sale`] - all as one indivisible unit.
    ///
    /// Topping occurrences are significant: `["Telur", "Telur"]` with
    /// `unit_count = 3` requires (and deducts) 6 units of Telur.
    ///
    /// The total price is computed here from the prices in effect at the
    /// moment of sale; the ledger, not the caller, is the source of truth.
    ///
    /// ## Errors
    /// Every error leaves catalog and sale log exactly as they were:
    /// * `SaleError::Validation` - unit count out of range
    /// * `SaleError::ItemNotFound` - first unresolved name, in input order
    /// * `SaleError::InsufficientStock` - first uncovered item, in
    ///   first-appearance order
    pub async fn record_sale(
        &self,
        menu_name: &str,
        toppings: &[String],
        unit_count: i64,
        payment_method: PaymentMethod,
    ) -> Result<Sale, SaleError> {
        validation::validate_unit_count(unit_count)?;

        debug!(
            menu = %menu_name,
            toppings = toppings.len(),
            unit_count,
            "Recording sale"
        );

        let mut tx = self.begin_write().await?;

        // Resolve the menu dish, then each topping occurrence in input
        // order. Per-unit price counts every occurrence; the requirement
        // aggregates per distinct name.
        let mut lines: Vec<OrderLine> = Vec::with_capacity(1 + toppings.len());

        let Some((price, available)) = fetch_item_line(&mut tx, menu_name).await? else {
            return Err(SaleError::ItemNotFound(menu_name.to_owned()));
        };
        let mut price_per_unit = price;
        lines.push(OrderLine {
            name: menu_name.to_owned(),
            price,
            available,
            required: unit_count,
        });

        for topping in toppings {
            if let Some(line) = lines.iter_mut().find(|l| &l.name == topping) {
                line.required += unit_count;
                price_per_unit += line.price;
                continue;
            }

            let Some((price, available)) = fetch_item_line(&mut tx, topping).await? else {
                return Err(SaleError::ItemNotFound(topping.clone()));
            };
            price_per_unit += price;
            lines.push(OrderLine {
                name: topping.clone(),
                price,
                available,
                required: unit_count,
            });
        }

        // Pre-check before any mutation: either the whole order is covered
        // or nothing changes.
        for line in &lines {
            if line.available < line.required {
                return Err(SaleError::InsufficientStock {
                    name: line.name.clone(),
                    available: line.available,
                    requested: line.required,
                });
            }
        }

        // Deduct. The WHERE guard re-validates at write time; if another
        // writer won a race since the read, dropping the transaction rolls
        // back any deduction already applied.
        for line in &lines {
            let result = sqlx::query(
                "UPDATE items SET quantity = quantity - ?2 WHERE name = ?1 AND quantity >= ?2",
            )
            .bind(&line.name)
            .bind(line.required)
            .execute(&mut *tx)
            .await
            .map_err(DbError::from)?;

            if result.rows_affected() == 0 {
                // Cannot happen while we hold the write lock, but if it
                // ever does, report what the row actually looks like now.
                let refreshed = fetch_item_line(&mut tx, &line.name).await?;
                return Err(deduction_conflict(&line.name, line.required, refreshed));
            }
        }

        let now = Utc::now().naive_utc();
        let sale = Sale {
            id: Uuid::new_v4().to_string(),
            // Stored at second resolution; truncate so the struct round-trips
            recorded_at: now.with_nanosecond(0).unwrap_or(now),
            menu_name: menu_name.to_owned(),
            toppings: toppings.to_vec(),
            unit_count,
            payment_method,
            total_price: price_per_unit.multiply_units(unit_count),
        };

        sqlx::query(
            r#"
            INSERT INTO sales (
                id, recorded_at, menu_name, toppings,
                unit_count, payment_method, total_price
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(&sale.id)
        .bind(sale.timestamp())
        .bind(&sale.menu_name)
        .bind(Sale::join_toppings(&sale.toppings))
        .bind(sale.unit_count)
        .bind(sale.payment_method)
        .bind(sale.total_price)
        .execute(&mut *tx)
        .await
        .map_err(DbError::from)?;

        tx.commit().await.map_err(DbError::from)?;

        info!(
            sale_id = %sale.id,
            total = %sale.total_price,
            "Sale recorded"
        );

        Ok(sale)
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Lists the catalog, menus before toppings, each group ordered by name.
    pub async fn list_items(&self) -> DbResult<Vec<Item>> {
        let items: Vec<Item> = sqlx::query_as(
            r#"
            SELECT name, category, price, quantity
            FROM items
            ORDER BY category, name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Gets a single item by exact name.
    pub async fn get_item(&self, name: &str) -> DbResult<Option<Item>> {
        let item: Option<Item> = sqlx::query_as(
            r#"
            SELECT name, category, price, quantity
            FROM items
            WHERE name = ?1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    /// Counts catalog items (for diagnostics).
    pub async fn count_items(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Queries the sale log, newest first.
    ///
    /// With a `YYYY-MM` month prefix, only sales from that month are
    /// returned (the stored timestamp format makes this a prefix match).
    pub async fn query_sales(&self, month_prefix: Option<&str>) -> DbResult<Vec<Sale>> {
        let rows: Vec<SaleRow> = match month_prefix {
            Some(prefix) => {
                validation::validate_month_prefix(prefix)?;
                sqlx::query_as(
                    r#"
                    SELECT id, recorded_at, menu_name, toppings,
                           unit_count, payment_method, total_price
                    FROM sales
                    WHERE recorded_at LIKE ?1
                    ORDER BY recorded_at DESC, rowid DESC
                    "#,
                )
                .bind(format!("{prefix}%"))
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as(
                    r#"
                    SELECT id, recorded_at, menu_name, toppings,
                           unit_count, payment_method, total_price
                    FROM sales
                    ORDER BY recorded_at DESC, rowid DESC
                    "#,
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        rows.into_iter().map(Sale::try_from).collect()
    }

    /// Total units sold per product name over the full sale log.
    ///
    /// Menu dishes and topping occurrences are credited independently;
    /// see [`report::best_sellers`] for the fold itself.
    pub async fn best_sellers(&self) -> DbResult<BTreeMap<String, i64>> {
        let sales = self.query_sales(None).await?;
        Ok(report::best_sellers(&sales))
    }
}

/// Classifies a guarded deduction that matched no row: the item was either
/// removed out from under the order or no longer covers the requirement.
fn deduction_conflict(name: &str, required: i64, refreshed: Option<(Money, i64)>) -> SaleError {
    match refreshed {
        None => SaleError::ItemNotFound(name.to_owned()),
        Some((_, available)) => SaleError::InsufficientStock {
            name: name.to_owned(),
            available,
            requested: required,
        },
    }
}

/// Fetches `(price, quantity)` for one item inside the sale transaction.
async fn fetch_item_line(
    tx: &mut Transaction<'_, Sqlite>,
    name: &str,
) -> DbResult<Option<(Money, i64)>> {
    let line: Option<(Money, i64)> =
        sqlx::query_as("SELECT price, quantity FROM items WHERE name = ?1")
            .bind(name)
            .fetch_optional(&mut **tx)
            .await?;

    Ok(line)
}

// =============================================================================
// Row Mapping
// =============================================================================

/// Raw `sales` row; the topping list and timestamp are stored as TEXT.
#[derive(Debug, sqlx::FromRow)]
struct SaleRow {
    id: String,
    recorded_at: String,
    menu_name: String,
    toppings: String,
    unit_count: i64,
    payment_method: PaymentMethod,
    total_price: Money,
}

impl TryFrom<SaleRow> for Sale {
    type Error = DbError;

    fn try_from(row: SaleRow) -> Result<Self, Self::Error> {
        let recorded_at = NaiveDateTime::parse_from_str(&row.recorded_at, TIMESTAMP_FORMAT)
            .map_err(|e| {
                DbError::Internal(format!(
                    "malformed sale timestamp '{}': {e}",
                    row.recorded_at
                ))
            })?;

        Ok(Sale {
            id: row.id,
            recorded_at,
            menu_name: row.menu_name,
            toppings: Sale::split_toppings(&row.toppings),
            unit_count: row.unit_count,
            payment_method: row.payment_method,
            total_price: row.total_price,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
