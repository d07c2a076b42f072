//! Error types for the catalog crate.
//!
//! Rust error handling concepts demonstrated:
//! - thiserror for defining custom error types
//! - Enum variants for different error cases
//! - Automatic `Display` and `Error` trait implementations

use thiserror::Error;

/// Errors that can occur when constructing catalog records.
///
/// Queries themselves cannot fail: predicates are total boolean functions,
/// so `find_matching` returns a plain `Vec`, never a `Result`. The only
/// fallible operation in this crate is building a `Product`.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A product field had a value the catalog rejects
    /// (currently: an empty or all-whitespace name)
    #[error("Invalid product {field}: {reason}")]
    InvalidProduct { field: String, reason: String },
}

/// Convenience type alias for Results in this crate
///
/// Rust concept: Type aliases make code more readable
/// Instead of writing `Result<T, CatalogError>` everywhere,
/// we can write `Result<T>`
pub type Result<T> = std::result::Result<T, CatalogError>;
