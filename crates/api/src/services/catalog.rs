//! Read-only projections over the catalog.

use dastak_core::{CategoryId, ProductId};

use crate::models::{Category, Product};
use crate::store::MemStore;

/// Catalog read service.
pub struct CatalogService<'a> {
    store: &'a MemStore,
}

impl<'a> CatalogService<'a> {
    /// Create a new catalog service.
    #[must_use]
    pub const fn new(store: &'a MemStore) -> Self {
        Self { store }
    }

    /// The full category list. Never empty after seeding.
    #[must_use]
    pub fn list_categories(&self) -> Vec<Category> {
        self.store.categories()
    }

    /// The full product list.
    #[must_use]
    pub fn list_products(&self) -> Vec<Product> {
        self.store.products()
    }

    /// Products in one category. Unknown category yields an empty vec.
    #[must_use]
    pub fn products_by_category(&self, category_id: CategoryId) -> Vec<Product> {
        self.store.products_by_category(category_id)
    }

    /// Case-insensitive substring search over name, description and vendor.
    ///
    /// An empty or whitespace-only query yields an empty vec, never the
    /// full catalog: the search surface must not double as "browse all".
    #[must_use]
    pub fn search_products(&self, query: &str) -> Vec<Product> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }
        self.store.search_products(query)
    }

    /// Look up a product. `None` means not found; the route layer decides
    /// how to surface it.
    #[must_use]
    pub fn get_product(&self, id: ProductId) -> Option<Product> {
        self.store.get_product(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dastak_core::FreshId;

    #[test]
    fn test_seeded_catalog_counts() {
        let store = MemStore::seeded();
        let catalog = CatalogService::new(&store);
        assert_eq!(catalog.list_categories().len(), 3);
        assert_eq!(catalog.list_products().len(), 5);
    }

    #[test]
    fn test_empty_and_whitespace_queries_yield_nothing() {
        let store = MemStore::seeded();
        let catalog = CatalogService::new(&store);
        assert!(catalog.search_products("").is_empty());
        assert!(catalog.search_products("   ").is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let store = MemStore::seeded();
        let catalog = CatalogService::new(&store);

        let results = catalog.search_products("BIRYANI");
        assert_eq!(results.len(), 1);
        assert!(results[0].name.to_lowercase().contains("biryani"));
    }

    #[test]
    fn test_search_matches_only_relevant_products() {
        let store = MemStore::seeded();
        let catalog = CatalogService::new(&store);

        for product in catalog.search_products("biryani") {
            let hit = product.name.to_lowercase().contains("biryani")
                || product
                    .description
                    .as_ref()
                    .is_some_and(|d| d.to_lowercase().contains("biryani"))
                || product.vendor.to_lowercase().contains("biryani");
            assert!(hit);
        }
    }

    #[test]
    fn test_unknown_category_yields_empty() {
        let store = MemStore::seeded();
        let catalog = CatalogService::new(&store);
        assert!(catalog.products_by_category(CategoryId::fresh()).is_empty());
    }

    #[test]
    fn test_get_product_absent_is_none() {
        let store = MemStore::seeded();
        let catalog = CatalogService::new(&store);
        assert!(catalog.get_product(ProductId::fresh()).is_none());

        let existing = catalog.list_products()[0].id;
        assert!(catalog.get_product(existing).is_some());
    }
}
