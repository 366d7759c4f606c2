//! Product operations.

use mark_store_core::{CategoryId, NewProduct, Product, ProductId, ProductPatch};

use super::CatalogStore;

impl CatalogStore {
    /// List all products in creation order.
    #[must_use]
    pub fn get_all_products(&self) -> Vec<Product> {
        self.read().products.all()
    }

    /// Get a product by ID.
    #[must_use]
    pub fn get_product(&self, id: ProductId) -> Option<Product> {
        self.read().products.get(id)
    }

    /// List products whose `category_id` equals `category_id`.
    ///
    /// Works the same whether or not the category still exists.
    #[must_use]
    pub fn get_products_by_category(&self, category_id: CategoryId) -> Vec<Product> {
        self.read()
            .products
            .filter(|product| product.category_id == category_id)
    }

    /// Create a product. The category reference is stored unchecked.
    pub fn create_product(&self, input: NewProduct) -> Product {
        self.write()
            .products
            .insert_with(|id| input.into_product(id))
    }

    /// Merge `patch` over an existing product and return the result.
    ///
    /// Returns `None` and changes nothing if the product does not exist.
    pub fn update_product(&self, id: ProductId, patch: ProductPatch) -> Option<Product> {
        let mut tables = self.write();
        let product = tables.products.get_mut(id)?;
        product.apply(patch);
        Some(product.clone())
    }

    /// Delete a product. Returns `true` if it existed.
    pub fn delete_product(&self, id: ProductId) -> bool {
        self.write().products.remove(id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use mark_store_core::NewCategory;

    use super::*;

    fn new_product(name: &str, category_id: CategoryId) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            description: format!("{name} description"),
            price: "100.00".parse().unwrap(),
            image: format!("https://img.example/{name}.png"),
            category_id,
        }
    }

    #[test]
    fn test_ids_strictly_increase_across_deletes() {
        let store = CatalogStore::new();
        let category = CategoryId::new(1);
        let mut seen = Vec::new();

        for round in 0..5 {
            let a = store.create_product(new_product(&format!("a{round}"), category));
            let b = store.create_product(new_product(&format!("b{round}"), category));
            assert!(store.delete_product(a.id));
            if round % 2 == 0 {
                assert!(store.delete_product(b.id));
            }
            seen.push(a.id);
            seen.push(b.id);
        }

        assert!(seen.windows(2).all(|w| w[0] < w[1]), "ids must increase: {seen:?}");
        assert_eq!(seen.first(), Some(&ProductId::new(1)));
        assert_eq!(seen.last(), Some(&ProductId::new(10)));
    }

    #[test]
    fn test_get_returns_input_plus_id() {
        let store = CatalogStore::new();
        let input = new_product("X1", CategoryId::new(7));
        let created = store.create_product(input.clone());

        let fetched = store.get_product(created.id).unwrap();
        assert_eq!(fetched, input.into_product(created.id));
    }

    #[test]
    fn test_create_accepts_unknown_category() {
        let store = CatalogStore::new();
        let product = store.create_product(new_product("Orphan", CategoryId::new(999)));
        assert_eq!(store.get_product(product.id), Some(product));
    }

    #[test]
    fn test_update_changes_only_price() {
        let store = CatalogStore::new();
        let created = store.create_product(new_product("X1", CategoryId::new(1)));

        let updated = store
            .update_product(
                created.id,
                ProductPatch {
                    price: Some("19.99".parse().unwrap()),
                    ..ProductPatch::default()
                },
            )
            .unwrap();

        assert_eq!(updated.price.to_string(), "19.99");
        assert_eq!(
            updated,
            Product {
                price: updated.price,
                ..created
            }
        );
        assert_eq!(store.get_product(updated.id), Some(updated));
    }

    #[test]
    fn test_update_unknown_id_mutates_nothing() {
        let store = CatalogStore::new();
        let created = store.create_product(new_product("X1", CategoryId::new(1)));

        let result = store.update_product(
            ProductId::new(42),
            ProductPatch {
                name: Some("ghost".to_string()),
                ..ProductPatch::default()
            },
        );

        assert_eq!(result, None);
        assert_eq!(store.get_all_products(), vec![created]);
    }

    #[test]
    fn test_delete_category_does_not_cascade() {
        let store = CatalogStore::new();
        let phones = store.create_category(NewCategory {
            name: "Phones".to_string(),
        });
        let x1 = store.create_product(new_product("X1", phones.id));
        store.create_product(new_product("Laptop", CategoryId::new(phones.id.as_i32() + 1)));

        let before = store.get_products_by_category(phones.id);
        assert_eq!(before, vec![x1.clone()]);

        assert!(store.delete_category(phones.id));

        let after = store.get_products_by_category(phones.id);
        assert_eq!(after, before);
        assert_eq!(store.get_product(x1.id).unwrap().category_id, phones.id);
    }

    #[test]
    fn test_delete_product() {
        let store = CatalogStore::new();
        let created = store.create_product(new_product("X1", CategoryId::new(1)));

        assert!(store.delete_product(created.id));
        assert!(!store.delete_product(created.id));
        assert_eq!(store.get_product(created.id), None);
        assert!(store.get_all_products().is_empty());
    }
}
