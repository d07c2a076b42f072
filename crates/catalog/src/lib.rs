//! # Catalog Crate
//!
//! A predicate-driven query interface over a small in-memory product catalog.
//!
//! ## Main Components
//!
//! - **product**: The immutable `Product` record (name, price, stock)
//! - **predicate**: The `Predicate` trait and the named predicate constructors
//! - **store**: The `Catalog` container and its `find_matching` query
//! - **error**: Error types for record construction
//!
//! ## Example Usage
//!
//! ```
//! use catalog::{Catalog, Product, within_budget, within_budget_in_stock};
//!
//! let catalog = Catalog::new(vec![
//!     Product::new("ZenFone", 12000, 10)?,
//!     Product::new("Lenova K Note", 13000, 20)?,
//!     Product::new("LeTV", 9500, 3)?,
//! ]);
//!
//! // Named predicate constructors for the common conditions...
//! let affordable = catalog.find_matching(within_budget(12500));
//! assert_eq!(affordable.len(), 2);
//!
//! let in_stock = catalog.find_matching(within_budget_in_stock(14000, 5));
//! assert_eq!(in_stock.len(), 2);
//!
//! // ...or any ad-hoc closure over a product
//! let cheap_zen = catalog.find_matching(|p: &Product| p.name().starts_with('Z'));
//! assert_eq!(cheap_zen.len(), 1);
//! # Ok::<(), catalog::CatalogError>(())
//! ```
//!
//! ## Learning Goals
//!
//! This crate demonstrates several key Rust concepts:
//!
//! 1. **Closures as Values**: Selection conditions are plain `Fn` closures,
//!    not a hierarchy of criterion classes
//! 2. **Traits**: A one-method `Predicate` trait with a blanket impl
//! 3. **Ownership and Borrowing**: The catalog owns its records, queries
//!    borrow them and return fresh clones
//! 4. **Error Handling**: Result<T> and a custom error type at the one
//!    fallible boundary (record construction)

// Public modules
pub mod error;
pub mod predicate;
pub mod product;
pub mod store;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use predicate::{Predicate, within_budget, within_budget_in_stock};
pub use product::Product;
pub use store::Catalog;
