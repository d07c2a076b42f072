//! Built-in demo seed data.
//!
//! The three-record catalog every example and scenario in this repository is
//! written against. Kept here, outside the core crate, so the query logic
//! never depends on how records are sourced.

use catalog::{Catalog, Product};

/// The demo catalog: three phones, insertion order fixed.
pub fn demo_catalog() -> Catalog {
    let products = [
        ("ZenFone", 12000, 10),
        ("Lenova K Note", 13000, 20),
        ("LeTV", 9500, 3),
    ];

    products
        .into_iter()
        .map(|(name, price, quantity)| {
            // Seed values are static and known-valid
            Product::new(name, price, quantity).expect("demo seed data is valid")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_order_and_contents() {
        let catalog = demo_catalog();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.products()[0].to_string(), "ZenFone:12000:10");
        assert_eq!(catalog.products()[1].to_string(), "Lenova K Note:13000:20");
        assert_eq!(catalog.products()[2].to_string(), "LeTV:9500:3");
    }
}
