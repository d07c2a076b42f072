//! The predicate abstraction used to select products.
//!
//! The catalog exposes exactly one query operation, parameterized by a
//! predicate. A predicate is nothing more than a pure boolean function over a
//! product; threshold parameters (budget, stock floor) travel inside the
//! closure rather than as extra arguments to the query.
//!
//! Rust concepts demonstrated here:
//! - A single-method trait as a capability seam
//! - A blanket impl so every `Fn(&Product) -> bool` closure is a predicate
//! - Functions returning closures (`impl Fn`) as named predicate constructors

use crate::product::Product;

/// A pure boolean test over a product.
///
/// Predicates must be total and side-effect-free: they never mutate the
/// product or the catalog, and calling them twice with the same product
/// yields the same answer.
pub trait Predicate {
    fn matches(&self, product: &Product) -> bool;
}

/// Every closure (or fn) from `&Product` to `bool` is a predicate.
///
/// This is the whole mechanism: there is no separate hierarchy of named
/// criterion types to implement, and no ignorable "not applicable" parameters
/// to thread through. A new selection condition is a new closure.
impl<F> Predicate for F
where
    F: Fn(&Product) -> bool,
{
    fn matches(&self, product: &Product) -> bool {
        self(product)
    }
}

/// Products strictly cheaper than `budget`.
pub fn within_budget(budget: u32) -> impl Fn(&Product) -> bool {
    move |product| product.price() < budget
}

/// Products strictly cheaper than `budget` with strictly more than
/// `min_stock` units available.
///
/// Separate constructor, separate signature: a budget-only search has no
/// stock parameter to fill in with a sentinel.
pub fn within_budget_in_stock(budget: u32, min_stock: u32) -> impl Fn(&Product) -> bool {
    move |product| product.price() < budget && product.quantity_available() > min_stock
}
