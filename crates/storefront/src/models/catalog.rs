//! Browse view types.

use serde::{Deserialize, Serialize};

use mark_store_core::{CategoryId, Price, Product, ProductId};

/// Label shown for products whose category no longer exists.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Query parameters for `GET /api/products`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsQuery {
    pub category_id: Option<CategoryId>,
}

/// Query parameters for `GET /api/catalog`.
#[derive(Debug, Default, Deserialize)]
pub struct BrowseQuery {
    /// Case-insensitive search over name and description.
    pub q: Option<String>,
    /// Exact category name.
    pub category: Option<String>,
}

/// A product as the storefront displays it: with its category name resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub image: String,
    pub category_id: CategoryId,
    /// Category name, or [`UNKNOWN_CATEGORY`] for an orphaned reference.
    pub category_name: String,
}

impl CatalogEntry {
    /// Pair a product with its resolved category name.
    #[must_use]
    pub fn new(product: Product, category_name: Option<String>) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            image: product.image,
            category_id: product.category_id,
            category_name: category_name.unwrap_or_else(|| UNKNOWN_CATEGORY.to_string()),
        }
    }
}
