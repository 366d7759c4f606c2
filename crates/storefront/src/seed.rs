//! Catalog seeding from YAML.
//!
//! The store starts empty on every run. A seed file gives it an initial
//! catalog:
//!
//! ```yaml
//! categories:
//!   - name: Phones
//!     products:
//!       - name: X1
//!         description: Flagship phone
//!         price: "100.00"
//!         image: https://cdn.example.com/x1.png
//! users:
//!   - fullName: Ali Hassan Kareem
//!     phoneNumber: "0501234567"
//!     isAdmin: true
//! reviews:
//!   - customerName: Sara
//!     rating: 5
//!     comment: Fast delivery
//! ```
//!
//! The whole file is validated with the API's boundary rules before anything
//! is inserted. Inserts go through the normal store operations, so ids follow
//! file order.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use mark_store_core::{CategoryId, NewCategory, NewProduct, NewReview, NewUser, Price};

use crate::models::RegisterRequest;
use crate::store::CatalogStore;
use crate::validation;

/// Errors loading a seed file.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse seed file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("{} validation errors found: {}", .0.len(), .0.join("; "))]
    Invalid(Vec<String>),
}

/// Parsed seed file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogSeed {
    #[serde(default)]
    pub categories: Vec<CategorySeed>,
    #[serde(default)]
    pub users: Vec<NewUser>,
    #[serde(default)]
    pub reviews: Vec<NewReview>,
}

/// A category with the products filed under it.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategorySeed {
    pub name: String,
    #[serde(default)]
    pub products: Vec<ProductSeed>,
}

/// A product; its category is the enclosing [`CategorySeed`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductSeed {
    pub name: String,
    pub description: String,
    pub price: Price,
    pub image: String,
}

impl ProductSeed {
    fn into_new_product(self, category_id: CategoryId) -> NewProduct {
        NewProduct {
            name: self.name,
            description: self.description,
            price: self.price,
            image: self.image,
            category_id,
        }
    }
}

/// Counts of records inserted by [`apply_seed`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub categories: usize,
    pub products: usize,
    pub users: usize,
    pub reviews: usize,
}

impl CatalogSeed {
    /// Parse a seed document and validate it.
    ///
    /// # Errors
    ///
    /// Returns `SeedError::Parse` for malformed YAML and `SeedError::Invalid`
    /// listing every rule violation.
    pub fn from_yaml(content: &str) -> Result<Self, SeedError> {
        let seed: Self = serde_yaml::from_str(content)?;
        let errors = seed.validate();
        if !errors.is_empty() {
            return Err(SeedError::Invalid(errors));
        }
        Ok(seed)
    }

    /// Check every entry against the API's boundary rules.
    ///
    /// Returns one message per violation; empty means the seed is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (i, category) in self.categories.iter().enumerate() {
            let input = NewCategory {
                name: category.name.clone(),
            };
            if let Err(e) = validation::category(input) {
                errors.push(format!("category {i}: {e}"));
            }

            for (j, product) in category.products.iter().enumerate() {
                // The category id is assigned on insert and not validated.
                let input = product.clone().into_new_product(CategoryId::new(0));
                if let Err(e) = validation::new_product(&input) {
                    errors.push(format!("category {i} product {j}: {e}"));
                }
            }
        }

        for (i, user) in self.users.iter().enumerate() {
            let input = RegisterRequest {
                full_name: user.full_name.clone(),
                phone_number: user.phone_number.clone(),
            };
            if let Err(e) = validation::registration(&input) {
                errors.push(format!("user {i}: {e}"));
            }
        }

        for (i, review) in self.reviews.iter().enumerate() {
            if let Err(e) = validation::review(review.clone()) {
                errors.push(format!("review {i}: {e}"));
            }
        }

        errors
    }

    /// Total number of products across all categories.
    #[must_use]
    pub fn product_count(&self) -> usize {
        self.categories.iter().map(|c| c.products.len()).sum()
    }
}

/// Read, parse and validate a seed file.
///
/// # Errors
///
/// Returns `SeedError::Io` if the file cannot be read, otherwise the errors of
/// [`CatalogSeed::from_yaml`].
pub fn load_seed_file(path: &Path) -> Result<CatalogSeed, SeedError> {
    let content = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    CatalogSeed::from_yaml(&content)
}

/// Insert a validated seed into the store.
pub fn apply_seed(store: &CatalogStore, seed: CatalogSeed) -> SeedSummary {
    let mut summary = SeedSummary::default();

    for category_seed in seed.categories {
        let category = store.create_category(NewCategory {
            name: category_seed.name.trim().to_string(),
        });
        summary.categories += 1;

        for product in category_seed.products {
            store.create_product(product.into_new_product(category.id));
            summary.products += 1;
        }
    }

    for user in seed.users {
        store.create_user(user);
        summary.users += 1;
    }

    for review in seed.reviews {
        store.create_review(NewReview {
            customer_name: review.customer_name.trim().to_string(),
            rating: review.rating,
            comment: review.comment.trim().to_string(),
        });
        summary.reviews += 1;
    }

    info!(
        categories = summary.categories,
        products = summary.products,
        users = summary.users,
        reviews = summary.reviews,
        "Catalog seeded"
    );

    summary
}
