//! # Seed Data Generator
//!
//! Populates the database with demo categories and products, then runs a
//! sample checkout so the daily report has something to show.
//!
//! ## Usage
//! ```bash
//! # Seed the default database
//! cargo run -p kasir-db --bin seed
//!
//! # Specify a database path
//! cargo run -p kasir-db --bin seed -- --db ./data/kasir.db
//!
//! # Skip the demo checkout
//! cargo run -p kasir-db --bin seed -- --no-checkout
//! ```
//!
//! Set `RUST_LOG=debug` to watch the repository calls.

use std::env;

use kasir_core::{CheckoutItem, NewCategory, NewProduct};
use kasir_db::{Database, DbConfig};

/// Demo catalogue: (category, description, products as (name, price, stock)).
const CATALOGUE: &[(&str, &str, &[(&str, i64, i64)])] = &[
    (
        "Makanan",
        "Kategori makanan",
        &[
            ("Nasi Goreng", 10800, 20),
            ("Mie Goreng", 9500, 25),
            ("Ayam Bakar", 15000, 12),
            ("Sate Ayam", 13000, 15),
            ("Kerupuk", 1500, 100),
        ],
    ),
    (
        "Minuman",
        "Kategori minuman",
        &[
            ("Teh Botol", 3500, 10),
            ("Es Teh Manis", 3000, 50),
            ("Kopi Tubruk", 5000, 40),
            ("Air Mineral", 2500, 80),
            ("Jus Alpukat", 8000, 18),
        ],
    ),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path: Option<String> = None;
    let mut run_checkout = true;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--no-checkout" => {
                run_checkout = false;
            }
            "--help" | "-h" => {
                println!("Kasir POS Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path");
                println!("                     (default: $KASIR_DB_PATH, or ./kasir.db)");
                println!("      --no-checkout  Seed only, skip the demo checkout");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let config = match db_path {
        Some(path) => DbConfig::new(path),
        None => DbConfig::from_env(),
    };

    println!("Kasir POS Seed Data Generator");
    println!("=============================");
    println!("Database: {}", config.database_path.display());
    println!();

    // Connect to database (runs migrations)
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    // Guard against duplicate seeding
    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Seeding catalogue...");

    let mut first_drink_id = None;
    let mut first_meal_id = None;

    for (category_name, description, products) in CATALOGUE {
        let category = db
            .categories()
            .insert(&NewCategory {
                name: category_name.to_string(),
                description: description.to_string(),
            })
            .await?;

        for (name, price, stock) in *products {
            let product = db
                .products()
                .insert(&NewProduct {
                    name: name.to_string(),
                    price: *price,
                    stock: *stock,
                    category_id: Some(category.id),
                })
                .await?;

            if *category_name == "Minuman" && first_drink_id.is_none() {
                first_drink_id = Some(product.id);
            }
            if *category_name == "Makanan" && first_meal_id.is_none() {
                first_meal_id = Some(product.id);
            }
        }

        println!("  {} ({} products)", category_name, products.len());
    }

    println!();
    println!("✓ Seed complete: {} products", db.products().count().await?);

    if run_checkout {
        if let (Some(drink), Some(meal)) = (first_drink_id, first_meal_id) {
            println!();
            println!("Running demo checkout...");

            let sale = db
                .transactions()
                .checkout(&[
                    CheckoutItem {
                        product_id: drink,
                        quantity: 2,
                    },
                    CheckoutItem {
                        product_id: meal,
                        quantity: 1,
                    },
                ])
                .await?;

            println!("{}", serde_json::to_string_pretty(&sale)?);

            let report = db.transactions().daily_report().await?;
            println!();
            println!(
                "Today: {} sales, {} revenue",
                report.total_sales, report.total_revenue
            );
        }
    }

    db.close().await;

    Ok(())
}
