//! Category operations.

use mark_store_core::{Category, CategoryId, NewCategory};

use super::CatalogStore;

impl CatalogStore {
    /// List all categories in creation order.
    #[must_use]
    pub fn get_all_categories(&self) -> Vec<Category> {
        self.read().categories.all()
    }

    /// Create a category.
    ///
    /// Duplicate names are accepted.
    pub fn create_category(&self, input: NewCategory) -> Category {
        self.write()
            .categories
            .insert_with(|id| input.into_category(id))
    }

    /// Get a category by ID.
    #[must_use]
    pub fn get_category(&self, id: CategoryId) -> Option<Category> {
        self.read().categories.get(id)
    }

    /// Delete a category. Returns `true` if it existed.
    ///
    /// Products that reference the category are left as they are.
    pub fn delete_category(&self, id: CategoryId) -> bool {
        self.write().categories.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> NewCategory {
        NewCategory {
            name: name.to_string(),
        }
    }

    #[test]
    fn test_create_and_get_category() {
        let store = CatalogStore::new();
        let phones = store.create_category(named("Phones"));

        assert_eq!(phones.id, CategoryId::new(1));
        assert_eq!(store.get_category(phones.id), Some(phones.clone()));
        assert_eq!(store.get_all_categories(), vec![phones]);
    }

    #[test]
    fn test_duplicate_names_are_accepted() {
        let store = CatalogStore::new();
        let a = store.create_category(named("Phones"));
        let b = store.create_category(named("Phones"));

        assert_ne!(a.id, b.id);
        assert_eq!(store.get_all_categories().len(), 2);
    }

    #[test]
    fn test_delete_category_reports_existence() {
        let store = CatalogStore::new();
        let phones = store.create_category(named("Phones"));

        assert!(store.delete_category(phones.id));
        assert!(!store.delete_category(phones.id));
        assert!(!store.delete_category(CategoryId::new(42)));
        assert_eq!(store.get_category(phones.id), None);

        // ids are not reused after a delete
        let next = store.create_category(named("Laptops"));
        assert_eq!(next.id, CategoryId::new(2));
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = CatalogStore::new();
        for name in ["هواتف", "حواسيب", "اكسسوارات"] {
            store.create_category(named(name));
        }
        let names: Vec<String> = store
            .get_all_categories()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, ["هواتف", "حواسيب", "اكسسوارات"]);
    }
}
