//! Storefront browse view.

use std::collections::HashMap;

use tracing::instrument;

use mark_store_core::CategoryId;

use crate::models::{BrowseQuery, CatalogEntry};
use crate::store::CatalogStore;

/// Read-only catalog queries for the storefront.
pub struct CatalogService<'a> {
    store: &'a CatalogStore,
}

impl<'a> CatalogService<'a> {
    /// Create a new catalog service.
    #[must_use]
    pub const fn new(store: &'a CatalogStore) -> Self {
        Self { store }
    }

    /// List products joined with their category names.
    ///
    /// `q` matches name or description case-insensitively; `category` matches
    /// the resolved category name exactly. Blank filters are ignored. Products
    /// whose category no longer exists are labelled `Unknown`.
    #[instrument(skip(self))]
    #[must_use]
    pub fn browse(&self, query: &BrowseQuery) -> Vec<CatalogEntry> {
        let names: HashMap<CategoryId, String> = self
            .store
            .get_all_categories()
            .into_iter()
            .map(|category| (category.id, category.name))
            .collect();

        let needle = query
            .q
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase);
        let category = query
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty());

        self.store
            .get_all_products()
            .into_iter()
            .map(|product| {
                let name = names.get(&product.category_id).cloned();
                CatalogEntry::new(product, name)
            })
            .filter(|entry| {
                needle.as_ref().is_none_or(|needle| {
                    entry.name.to_lowercase().contains(needle.as_str())
                        || entry.description.to_lowercase().contains(needle.as_str())
                })
            })
            .filter(|entry| category.is_none_or(|c| entry.category_name == c))
            .collect()
    }
}
