//! # Report Module
//!
//! Pure read-side folds over the sale log.
//!
//! Everything here takes a slice of [`Sale`] records and aggregates it;
//! fetching the records (and any filtering by month) is the ledger's job,
//! rendering tables and charts is the UI's job.
//!
//! ## Aggregations
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │   sale log ──┬──► best_sellers     name → total units sold       │
//! │              ├──► top_products     ranked head of best_sellers   │
//! │              ├──► totals           units + revenue of a slice    │
//! │              ├──► monthly_summaries grouped by YYYY-MM           │
//! │              └──► sale_months      distinct months, newest first │
//! └──────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::Sale;

// =============================================================================
// Best Sellers
// =============================================================================

/// Total units sold per product name over the given sales.
///
/// Each sale credits its menu dish with `unit_count`, and each topping
/// *occurrence* with `unit_count`. Toppings are tracked as independently
/// popular products, not just modifiers, so a sale with the topping list
/// `["Telur", "Telur"]` and `unit_count = 3` credits Telur with 6.
pub fn best_sellers(sales: &[Sale]) -> BTreeMap<String, i64> {
    let mut units: BTreeMap<String, i64> = BTreeMap::new();

    for sale in sales {
        *units.entry(sale.menu_name.clone()).or_insert(0) += sale.unit_count;
        for topping in &sale.toppings {
            *units.entry(topping.clone()).or_insert(0) += sale.unit_count;
        }
    }

    units
}

/// One row of the best-seller ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRank {
    pub name: String,
    pub units_sold: i64,
}

/// The top `n` products by units sold, descending.
///
/// Ties break alphabetically so the ranking is deterministic.
pub fn top_products(sales: &[Sale], n: usize) -> Vec<ProductRank> {
    let mut ranking: Vec<ProductRank> = best_sellers(sales)
        .into_iter()
        .map(|(name, units_sold)| ProductRank { name, units_sold })
        .collect();

    // BTreeMap iteration is already name-ascending; a stable sort on units
    // keeps that order within ties.
    ranking.sort_by(|a, b| b.units_sold.cmp(&a.units_sold));
    ranking.truncate(n);
    ranking
}

// =============================================================================
// Revenue Totals
// =============================================================================

/// Units and revenue over a slice of sales (e.g., one month's report).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SalesTotals {
    pub units_sold: i64,
    pub revenue: Money,
}

/// Sums units and revenue over the given sales.
pub fn totals(sales: &[Sale]) -> SalesTotals {
    sales.iter().fold(SalesTotals::default(), |mut acc, sale| {
        acc.units_sold += sale.unit_count;
        acc.revenue += sale.total_price;
        acc
    })
}

// =============================================================================
// Monthly Summaries
// =============================================================================

/// Aggregated units and revenue for one `YYYY-MM` month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// Grouping key, the first seven characters of the sale timestamp.
    pub month: String,
    pub units_sold: i64,
    pub revenue: Money,
}

/// Groups sales by month, newest month first.
pub fn monthly_summaries(sales: &[Sale]) -> Vec<MonthlySummary> {
    let mut by_month: BTreeMap<String, SalesTotals> = BTreeMap::new();

    for sale in sales {
        let entry = by_month.entry(sale.month_key()).or_default();
        entry.units_sold += sale.unit_count;
        entry.revenue += sale.total_price;
    }

    by_month
        .into_iter()
        .rev()
        .map(|(month, t)| MonthlySummary {
            month,
            units_sold: t.units_sold,
            revenue: t.revenue,
        })
        .collect()
}

/// Distinct months with at least one sale, newest first.
///
/// Feeds the month picker on the report screen.
pub fn sale_months(sales: &[Sale]) -> Vec<String> {
    let months: BTreeMap<String, ()> = sales.iter().map(|s| (s.month_key(), ())).collect();
    months.into_keys().rev().collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PaymentMethod;
    use chrono::NaiveDate;

    fn sale(
        day: (i32, u32, u32),
        menu: &str,
        toppings: &[&str],
        unit_count: i64,
        total: i64,
    ) -> Sale {
        Sale {
            id: format!("{}-{}", menu, unit_count),
            recorded_at: NaiveDate::from_ymd_opt(day.0, day.1, day.2)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
            menu_name: menu.to_owned(),
            toppings: toppings.iter().map(|t| t.to_string()).collect(),
            unit_count,
            payment_method: PaymentMethod::Cash,
            total_price: Money::new(total),
        }
    }

    #[test]
    fn test_best_sellers_credits_menu_and_toppings() {
        let sales = vec![
            sale((2026, 8, 1), "Seblak Original", &[], 2, 30000),
            sale((2026, 8, 2), "Seblak Original", &["Kerupuk"], 1, 18000),
        ];

        let units = best_sellers(&sales);
        assert_eq!(units.get("Seblak Original"), Some(&3));
        assert_eq!(units.get("Kerupuk"), Some(&1));
        assert_eq!(units.len(), 2);
    }

    #[test]
    fn test_best_sellers_topping_multiplicity() {
        let sales = vec![sale(
            (2026, 8, 1),
            "Seblak Original",
            &["Telur", "Telur"],
            3,
            69000,
        )];

        let units = best_sellers(&sales);
        assert_eq!(units.get("Telur"), Some(&6));
        assert_eq!(units.get("Seblak Original"), Some(&3));
    }

    #[test]
    fn test_top_products_ranking() {
        let sales = vec![
            sale((2026, 8, 1), "Seblak Ceker", &[], 5, 90000),
            sale((2026, 8, 2), "Seblak Original", &["Sosis"], 5, 100000),
            sale((2026, 8, 3), "Seblak Makaroni", &[], 1, 16000),
        ];

        let top = top_products(&sales, 2);
        assert_eq!(top.len(), 2);
        // Tie at 5 units breaks alphabetically.
        assert_eq!(top[0].name, "Seblak Ceker");
        assert_eq!(top[1].name, "Seblak Original");

        let all = top_products(&sales, 10);
        assert_eq!(all.len(), 4);
        assert_eq!(all.last().unwrap().name, "Seblak Makaroni");
    }

    #[test]
    fn test_totals() {
        let sales = vec![
            sale((2026, 8, 1), "Seblak Original", &[], 2, 30000),
            sale((2026, 8, 2), "Seblak Ceker", &[], 1, 18000),
        ];

        let t = totals(&sales);
        assert_eq!(t.units_sold, 3);
        assert_eq!(t.revenue, Money::new(48000));

        assert_eq!(totals(&[]), SalesTotals::default());
    }

    #[test]
    fn test_monthly_summaries_newest_first() {
        let sales = vec![
            sale((2026, 7, 15), "Seblak Original", &[], 1, 15000),
            sale((2026, 8, 1), "Seblak Original", &[], 2, 30000),
            sale((2026, 8, 20), "Seblak Ceker", &[], 1, 18000),
        ];

        let months = monthly_summaries(&sales);
        assert_eq!(months.len(), 2);
        assert_eq!(months[0].month, "2026-08");
        assert_eq!(months[0].units_sold, 3);
        assert_eq!(months[0].revenue, Money::new(48000));
        assert_eq!(months[1].month, "2026-07");
        assert_eq!(months[1].units_sold, 1);
    }

    #[test]
    fn test_sale_months() {
        let sales = vec![
            sale((2026, 6, 1), "Seblak Original", &[], 1, 15000),
            sale((2026, 8, 1), "Seblak Original", &[], 1, 15000),
            sale((2026, 8, 2), "Seblak Ceker", &[], 1, 18000),
        ];

        assert_eq!(sale_months(&sales), vec!["2026-08", "2026-06"]);
        assert!(sale_months(&[]).is_empty());
    }
}
