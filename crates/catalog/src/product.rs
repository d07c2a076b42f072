//! The product record stored in the catalog.
//!
//! Key Rust concepts demonstrated here:
//! - Private fields with read accessors for immutability after construction
//! - Unsigned integer types encoding "non-negative" at the type level
//! - Derive macros for common traits
//! - Implementing `Display` for a canonical textual form

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// One entry in the catalog: a product with a price and a stock level.
///
/// Fields are private and there are no setters, so a `Product` cannot change
/// after construction. `price` and `quantity_available` are `u32`, which makes
/// the non-negativity constraint a compile-time guarantee rather than a
/// runtime check; the only remaining runtime validation is the non-empty name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    price: u32,
    quantity_available: u32,
}

impl Product {
    /// Build a product, rejecting an empty (or all-whitespace) name.
    pub fn new(
        name: impl Into<String>,
        price: u32,
        quantity_available: u32,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CatalogError::InvalidProduct {
                field: "name".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(Self {
            name,
            price,
            quantity_available,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cost in whole currency units.
    pub fn price(&self) -> u32 {
        self.price
    }

    /// Units currently in stock.
    pub fn quantity_available(&self) -> u32 {
        self.quantity_available
    }
}

/// Canonical display form: `name:price:quantity_available`
impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.name, self.price, self.quantity_available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let product = Product::new("ZenFone", 12000, 10).unwrap();

        assert_eq!(product.name(), "ZenFone");
        assert_eq!(product.price(), 12000);
        assert_eq!(product.quantity_available(), 10);
    }

    #[test]
    fn test_display_format() {
        let product = Product::new("LeTV", 9500, 3).unwrap();
        assert_eq!(product.to_string(), "LeTV:9500:3");
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(Product::new("", 100, 1).is_err());
        assert!(Product::new("   ", 100, 1).is_err());
    }

    #[test]
    fn test_zero_values_allowed() {
        // Non-negative includes zero: a free or out-of-stock product is valid
        let product = Product::new("Freebie", 0, 0).unwrap();
        assert_eq!(product.price(), 0);
        assert_eq!(product.quantity_available(), 0);
    }
}
