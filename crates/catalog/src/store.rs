//! The catalog container and its single query operation.
//!
//! Rust concepts demonstrated here:
//! - Ownership: the catalog owns its records, queries borrow them
//! - Generic methods bounded by a trait (`P: Predicate`)
//! - Instrumentation with tracing

use crate::predicate::Predicate;
use crate::product::Product;

/// An ordered, in-memory collection of products.
///
/// The catalog is populated once at construction and never mutated by
/// queries: insertion order is preserved and duplicates are permitted.
/// Where the records come from (fixture file, hard-coded seed) is the
/// caller's concern, not the catalog's.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Borrow the full record sequence, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The one query operation: every product satisfying `predicate`,
    /// in original relative order.
    ///
    /// ## Contract
    /// - Single in-order pass; no reordering, no deduplication
    /// - Returns a new `Vec` of clones; the catalog is never mutated
    /// - An empty result means "no matches", never an error
    /// - Idempotent: the same predicate on an unmutated catalog yields
    ///   identical results
    pub fn find_matching<P: Predicate>(&self, predicate: P) -> Vec<Product> {
        tracing::debug!("Scanning catalog (input count: {})", self.products.len());

        let results: Vec<Product> = self
            .products
            .iter()
            .filter(|product| predicate.matches(product))
            .cloned()
            .collect();

        tracing::debug!("Query complete (matched: {})", results.len());
        results
    }
}

impl FromIterator<Product> for Catalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{within_budget, within_budget_in_stock};

    fn create_test_catalog() -> Catalog {
        Catalog::new(vec![
            Product::new("ZenFone", 12000, 10).unwrap(),
            Product::new("Lenova K Note", 13000, 20).unwrap(),
            Product::new("LeTV", 9500, 3).unwrap(),
        ])
    }

    #[test]
    fn test_budget_query_preserves_order() {
        let catalog = create_test_catalog();

        let results = catalog.find_matching(within_budget(12500));

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name(), "ZenFone");
        assert_eq!(results[1].name(), "LeTV");
    }

    #[test]
    fn test_budget_and_stock_query() {
        let catalog = create_test_catalog();

        let results = catalog.find_matching(within_budget_in_stock(14000, 5));

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name(), "ZenFone");
        assert_eq!(results[1].name(), "Lenova K Note");
    }

    #[test]
    fn test_always_false_predicate_yields_empty() {
        let catalog = create_test_catalog();

        let results = catalog.find_matching(within_budget(1));
        assert!(results.is_empty());
    }

    #[test]
    fn test_query_is_idempotent_and_nonmutating() {
        let catalog = create_test_catalog();
        let before = catalog.clone();

        let predicate = within_budget(12500);
        let first = catalog.find_matching(&predicate);
        let second = catalog.find_matching(&predicate);

        assert_eq!(first, second);
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_duplicates_pass_through() {
        let zen = Product::new("ZenFone", 12000, 10).unwrap();
        let catalog = Catalog::new(vec![zen.clone(), zen.clone()]);

        let results = catalog.find_matching(within_budget(12500));
        assert_eq!(results.len(), 2);
        assert_eq!(results[0], results[1]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();

        assert!(catalog.is_empty());
        assert!(catalog.find_matching(within_budget(u32::MAX)).is_empty());
    }

    #[test]
    fn test_closure_predicate() {
        let catalog = create_test_catalog();

        let results = catalog.find_matching(|p: &Product| p.name().contains("Le"));

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name(), "Lenova K Note");
        assert_eq!(results[1].name(), "LeTV");
    }

    #[test]
    fn test_from_iterator() {
        let catalog: Catalog = create_test_catalog()
            .iter()
            .filter(|p| p.price() < 12500)
            .cloned()
            .collect();

        assert_eq!(catalog.len(), 2);
    }
}
