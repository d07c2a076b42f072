//! # Fixtures Crate
//!
//! Sources records for a [`catalog::Catalog`]: a line-oriented fixture file
//! parser plus the built-in demo seed. The catalog crate itself has no
//! opinion on where records come from; this crate is that collaborator.
//!
//! ## Main Components
//!
//! - **parser**: Parse `name:price:quantity` fixture files into products
//! - **seed**: The hard-coded three-phone demo catalog
//! - **error**: Error types for fixture loading
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! use catalog::within_budget;
//! use fixtures::load_catalog;
//!
//! let catalog = load_catalog(Path::new("data/catalog.txt"))?;
//! for product in catalog.find_matching(within_budget(12500)) {
//!     println!("{product}");
//! }
//! # Ok::<(), fixtures::FixtureError>(())
//! ```

// Public modules
pub mod error;
pub mod parser;
pub mod seed;

// Re-export commonly used items for convenience
pub use error::{FixtureError, Result};
pub use parser::{load_catalog, parse_product_line, parse_products};
pub use seed::demo_catalog;
