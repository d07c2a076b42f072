//! Parser for catalog fixture files.
//!
//! Fixture format, one record per line, matching the canonical display form
//! of a product:
//!
//! ```text
//! # comment lines and blank lines are skipped
//! name:price:quantity_available
//! ```
//!
//! Because `:` is the field separator, product names in fixtures must not
//! contain it.
//!
//! Rust concepts you'll learn here:
//! - String parsing and splitting
//! - Error handling with the `?` operator
//! - Converting between types (parsing strings to numbers)
//! - Working with file I/O

use std::fs;
use std::path::Path;

use catalog::{Catalog, Product};

use crate::error::{FixtureError, Result};

fn parse_field(field: &str, value: &str, line_no: usize) -> Result<u32> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| FixtureError::InvalidValue {
            field: field.to_string(),
            value: value.trim().to_string(),
            line: line_no,
        })
}

/// Parse one fixture line into a product.
///
/// `line_no` is 1-based and only used for error reporting.
pub fn parse_product_line(line: &str, line_no: usize) -> Result<Product> {
    let fields: Vec<&str> = line.split(':').collect();
    if fields.len() != 3 {
        return Err(FixtureError::FieldCountMismatch {
            expected: 3,
            found: fields.len(),
            line: line_no,
        });
    }

    let name = fields[0].trim();
    if name.is_empty() {
        return Err(FixtureError::Parse {
            line: line_no,
            reason: "Missing product name".to_string(),
        });
    }

    let price = parse_field("price", fields[1], line_no)?;
    let quantity = parse_field("quantity_available", fields[2], line_no)?;

    Ok(Product::new(name, price, quantity)?)
}

/// Parse a whole fixture file into records, preserving line order.
pub fn parse_products(path: &Path) -> Result<Vec<Product>> {
    let content = fs::read_to_string(path)?;
    let mut products = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue; // Skip blank lines and comments
        }
        products.push(parse_product_line(trimmed, line_no)?);
    }

    tracing::debug!(
        "Loaded {} products from {}",
        products.len(),
        path.display()
    );
    Ok(products)
}

/// Load a fixture file straight into a catalog.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    Ok(Catalog::new(parse_products(path)?))
}
