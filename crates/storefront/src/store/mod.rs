//! In-memory catalog store.
//!
//! # Collections
//!
//! - `users` - Customer accounts (append-only)
//! - `categories` - Product categories (create, delete)
//! - `products` - Catalog products (create, partial update, delete)
//! - `reviews` - Customer reviews (append-only, server-stamped)
//!
//! Each collection owns a private id counter that starts at 1 and only moves
//! forward, so ids are never reused after a delete. Records live in an
//! id-keyed `BTreeMap`; since ids grow monotonically, iteration order is
//! insertion order.
//!
//! Nothing is persisted: a fresh [`CatalogStore`] is empty, and the data is
//! gone when the process exits.
//!
//! Operations never fail. Lookups report absence with `Option`, deletes with
//! `bool`, and creates always succeed.

mod categories;
mod products;
mod reviews;
mod users;

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Serialize;

use mark_store_core::{Category, CategoryId, Product, ProductId, Review, ReviewId, User, UserId};

/// One id-keyed collection with its id counter.
#[derive(Debug)]
struct Table<K, V> {
    next_id: i32,
    records: BTreeMap<K, V>,
}

impl<K, V> Default for Table<K, V> {
    fn default() -> Self {
        Self {
            next_id: 1,
            records: BTreeMap::new(),
        }
    }
}

impl<K, V> Table<K, V>
where
    K: Ord + Copy + From<i32>,
    V: Clone,
{
    /// Allocate the next id, build the record for it and store it.
    fn insert_with(&mut self, build: impl FnOnce(K) -> V) -> V {
        let id = K::from(self.next_id);
        self.next_id += 1;
        let record = build(id);
        self.records.insert(id, record.clone());
        record
    }

    fn get(&self, id: K) -> Option<V> {
        self.records.get(&id).cloned()
    }

    fn get_mut(&mut self, id: K) -> Option<&mut V> {
        self.records.get_mut(&id)
    }

    fn remove(&mut self, id: K) -> bool {
        self.records.remove(&id).is_some()
    }

    fn all(&self) -> Vec<V> {
        self.records.values().cloned().collect()
    }

    fn find(&self, predicate: impl Fn(&V) -> bool) -> Option<V> {
        self.records.values().find(|v| predicate(v)).cloned()
    }

    fn filter(&self, predicate: impl Fn(&V) -> bool) -> Vec<V> {
        self.records
            .values()
            .filter(|v| predicate(v))
            .cloned()
            .collect()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

#[derive(Debug, Default)]
struct Tables {
    users: Table<UserId, User>,
    categories: Table<CategoryId, Category>,
    products: Table<ProductId, Product>,
    reviews: Table<ReviewId, Review>,
}

/// Record counts per collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub users: usize,
    pub categories: usize,
    pub products: usize,
    pub reviews: usize,
}

/// The catalog store.
///
/// Cheaply cloneable via `Arc`; clones share the same data. Every operation
/// takes the lock for its own duration only, so each one runs to completion
/// before the next observes the tables.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    inner: Arc<RwLock<Tables>>,
}

impl CatalogStore {
    /// Create a new, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the records in each collection.
    #[must_use]
    pub fn stats(&self) -> StoreStats {
        let tables = self.read();
        StoreStats {
            users: tables.users.len(),
            categories: tables.categories.len(),
            products: tables.products.len(),
            reviews: tables.reviews.len(),
        }
    }

    // A panic while a guard is held cannot leave a table half-written (every
    // mutation is a single map call), so a poisoned lock is still usable.
    fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
