//! # Seed Data Generator
//!
//! Populates the database with the stall's starting catalog for
//! development and demos.
//!
//! ## Usage
//! ```bash
//! # Seed the default database file
//! cargo run -p warung-db --bin seed
//!
//! # Specify database path
//! cargo run -p warung-db --bin seed -- --db ./data/warung.db
//! ```
//!
//! ## Seeded Catalog
//! Four seblak dishes and five toppings, priced in whole rupiah:
//! - Menus: Seblak Original, Seblak Kerupuk, Seblak Ceker, Seblak Makaroni
//! - Toppings: Kerupuk, Ceker, Makaroni, Sosis, Telur

use std::env;

use warung_core::{ItemCategory, ItemError, Money};
use warung_db::{Database, DbConfig};

/// The stall's starting catalog: (name, category, price, quantity).
const CATALOG: &[(&str, ItemCategory, i64, i64)] = &[
    ("Seblak Original", ItemCategory::Menu, 15000, 50),
    ("Seblak Kerupuk", ItemCategory::Menu, 12000, 40),
    ("Seblak Ceker", ItemCategory::Menu, 18000, 30),
    ("Seblak Makaroni", ItemCategory::Menu, 16000, 35),
    ("Kerupuk", ItemCategory::Topping, 3000, 100),
    ("Ceker", ItemCategory::Topping, 5000, 50),
    ("Makaroni", ItemCategory::Topping, 4000, 60),
    ("Sosis", ItemCategory::Topping, 5000, 40),
    ("Telur", ItemCategory::Topping, 4000, 30),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./warung_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Warung POS Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./warung_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Warung POS Seed Data Generator");
    println!("=================================");
    println!("Database: {}", db_path);
    println!();

    // Connect to database
    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");
    println!();
    println!("Seeding catalog...");

    let ledger = db.ledger();
    let mut added = 0;
    let mut skipped = 0;

    for &(name, category, price, quantity) in CATALOG {
        match ledger
            .add_item(name, category, Money::new(price), quantity)
            .await
        {
            Ok(item) => {
                println!("  + {:<16} {:>10}  ({} on hand)", item.name, item.price, item.quantity);
                added += 1;
            }
            // Re-running the seed tool against an existing database is fine.
            Err(ItemError::DuplicateName(_)) => {
                println!("  = {:<16} already present, skipped", name);
                skipped += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }

    println!();
    println!("✓ Seed complete: {} added, {} skipped", added, skipped);
    println!("  Catalog size: {} items", ledger.count_items().await?);

    db.close().await;

    Ok(())
}
