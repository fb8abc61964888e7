//! # Seed Data Generator
//!
//! Populates the database with sample products and sales for development.
//!
//! ## Usage
//! ```bash
//! # 40 products, 60 sales (default)
//! cargo run -p tecpa-db --bin seed
//!
//! # Custom amounts
//! cargo run -p tecpa-db --bin seed -- --count 100 --sales 250
//!
//! # Specify database path
//! cargo run -p tecpa-db --bin seed -- --db ./data/stock.db
//! ```
//!
//! ## Generated Data
//! - Products named `{item} {size}` across a handful of categories, each
//!   with a purchase price between $0.99 and $19.99
//! - Sales spread over the last 30 days, totals computed from the unit
//!   price the way the Sales screen does

use chrono::{Duration, Local};
use std::env;
use tecpa_core::{Money, NewProduct};
use tecpa_db::{Database, DbConfig};

/// Product categories for realistic test data
const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Drinks",
        &[
            "Cola",
            "Lemon Soda",
            "Orange Juice",
            "Mineral Water",
            "Iced Tea",
            "Energy Drink",
        ],
    ),
    (
        "Snacks",
        &[
            "Potato Chips",
            "Peanuts",
            "Chocolate Bar",
            "Crackers",
            "Cookies",
            "Popcorn",
        ],
    ),
    (
        "Grocery",
        &[
            "Yerba Mate",
            "Rice",
            "Spaghetti",
            "Sugar",
            "Flour",
            "Sunflower Oil",
        ],
    ),
    (
        "Cleaning",
        &["Dish Soap", "Bleach", "Sponges", "Laundry Powder"],
    ),
];

/// Size variants and their price add-on in cents
const SIZES: &[(&str, i64)] = &[("Small", 0), ("Medium", 150), ("Large", 300), ("Family", 600)];

/// Supplier names, picked round-robin
const SUPPLIERS: &[&str] = &["Distribuidora Norte", "Mayorista Sur", "Acme Wholesale"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 40;
    let mut sales: usize = 60;
    let mut db_path = String::from("./tecpa_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(count);
                    i += 1;
                }
            }
            "--sales" | "-s" => {
                if i + 1 < args.len() {
                    sales = args[i + 1].parse().unwrap_or(sales);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("TecPa Stock Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 40)");
                println!("  -s, --sales <N>    Number of sales to generate (default: 60)");
                println!("  -d, --db <PATH>    Database file path (default: ./tecpa_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 TecPa Stock Seed Data Generator");
    println!("==================================");
    println!("Database: {}", db_path);
    println!("Products: {}", count);
    println!("Sales:    {}", sales);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    // Products
    println!();
    println!("Generating products...");

    let mut generated: Vec<NewProduct> = Vec::with_capacity(count);
    'outer: for (category, items) in CATEGORIES.iter() {
        for item in items.iter() {
            for (size, addon) in SIZES.iter() {
                if generated.len() >= count {
                    break 'outer;
                }
                let product = generate_product(category, item, size, *addon, generated.len());

                if let Err(e) = db.products().create(&product).await {
                    eprintln!("Failed to insert {}: {}", product.name, e);
                    continue;
                }
                generated.push(product);
            }
        }
    }

    println!("✓ Generated {} products", generated.len());

    if generated.is_empty() {
        println!();
        println!("✓ Seed complete!");
        return Ok(());
    }

    // Sales
    println!();
    println!("Generating sales...");

    let now = Local::now().naive_local();
    let mut revenue = Money::zero();
    let mut recorded = 0;

    for n in 0..sales {
        let product = &generated[(n * 7) % generated.len()];
        let quantity = 1 + (n % 5) as i64;
        let total = product.purchase_price.multiply_quantity(quantity);
        let when = now - Duration::days((n % 30) as i64) - Duration::minutes((n * 13 % 600) as i64);

        if let Err(e) = db
            .sales()
            .record_at(&product.name, quantity, total, when)
            .await
        {
            eprintln!("Failed to record sale of {}: {}", product.name, e);
            continue;
        }

        revenue = revenue + total;
        recorded += 1;
    }

    println!("✓ Recorded {} sales totalling {}", recorded, revenue);

    println!();
    println!("Verifying...");
    println!("  Products: {}", db.products().count().await?);
    println!("  Sales:    {}", db.sales().count().await?);

    db.close().await;

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Generates a single product with deterministic sample data.
fn generate_product(category: &str, item: &str, size: &str, price_addon: i64, seed: usize) -> NewProduct {
    // $0.99 - $13.99 base, plus the size add-on
    let base_cents = 99 + ((seed * 37) % 1300) as i64;

    NewProduct {
        name: format!("{} {}", item, size),
        category: category.to_string(),
        supplier: SUPPLIERS[seed % SUPPLIERS.len()].to_string(),
        purchase_price: Money::from_cents(base_cents + price_addon),
    }
}
