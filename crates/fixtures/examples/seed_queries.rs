//! Runs the demo queries against the built-in seed catalog, or against a
//! fixture file passed as the first argument.
//!
//! Run with `cargo run --example seed_queries`; set `RUST_LOG=debug` to see
//! the catalog scan instrumentation.

use std::path::Path;

use catalog::{Product, within_budget, within_budget_in_stock};
use fixtures::{demo_catalog, load_catalog};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let catalog = match std::env::args().nth(1) {
        Some(path) => load_catalog(Path::new(&path))?,
        None => demo_catalog(),
    };

    println!("Budget search (price < 12500)...");
    for product in catalog.find_matching(within_budget(12500)) {
        println!("{product}");
    }

    println!("\nBudget and stock search (price < 14000, stock > 5)...");
    for product in catalog.find_matching(within_budget_in_stock(14000, 5)) {
        println!("{product}");
    }

    println!("\nAd-hoc closure search (name contains 'Le')...");
    for product in catalog.find_matching(|p: &Product| p.name().contains("Le")) {
        println!("{product}");
    }

    Ok(())
}
