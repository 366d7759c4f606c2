//! Catalog management over the storefront API.
//!
//! # Usage
//!
//! ```bash
//! mark-cli catalog categories add Phones
//! mark-cli catalog products add -n X1 -d "Flagship phone" -p 100.00 \
//!     -i https://cdn.example.com/x1.png -c 1
//! mark-cli catalog products set-price 1 89.99
//! mark-cli catalog products list --category-id 1
//! ```
//!
//! # Environment Variables
//!
//! - `MARK_STORE_URL` - Storefront base URL (default: `http://localhost:3000`)

use reqwest::{Client, Method, StatusCode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

use mark_store_core::{
    Category, CategoryId, NewCategory, NewProduct, Price, Product, ProductId, ProductPatch, Review,
};

/// Errors that can occur talking to the storefront.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Base URL cannot be joined with an API path.
    #[error("Invalid storefront URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// HTTP request failed.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Storefront answered with an error status.
    #[error("Storefront returned {status}: {message}")]
    Api { status: StatusCode, message: String },
}

/// Error body returned by the storefront.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Minimal client for the storefront's catalog endpoints.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: Url,
}

impl CatalogClient {
    /// Create a client for the storefront at `base_url`.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    async fn send<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response, CatalogError> {
        let url = self.base_url.join(path)?;
        debug!(%method, %url, "Calling storefront");

        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
        };
        Err(CatalogError::Api { status, message })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let response = self.send::<()>(Method::GET, path, None).await?;
        Ok(response.json().await?)
    }

    async fn write<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, CatalogError> {
        let response = self.send(method, path, Some(body)).await?;
        Ok(response.json().await?)
    }

    async fn delete(&self, path: &str) -> Result<(), CatalogError> {
        self.send::<()>(Method::DELETE, path, None).await?;
        Ok(())
    }

    /// List categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn categories(&self) -> Result<Vec<Category>, CatalogError> {
        self.get("api/categories").await
    }

    /// Create a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the name is rejected.
    pub async fn create_category(&self, name: &str) -> Result<Category, CatalogError> {
        let input = NewCategory {
            name: name.to_string(),
        };
        self.write(Method::POST, "api/categories", &input).await
    }

    /// Delete a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the category does not exist.
    pub async fn delete_category(&self, id: CategoryId) -> Result<(), CatalogError> {
        self.delete(&format!("api/categories/{id}")).await
    }

    /// List products, optionally only those in one category.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn products(
        &self,
        category_id: Option<CategoryId>,
    ) -> Result<Vec<Product>, CatalogError> {
        match category_id {
            Some(id) => self.get(&format!("api/products?categoryId={id}")).await,
            None => self.get("api/products").await,
        }
    }

    /// Create a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the product is rejected.
    pub async fn create_product(&self, input: &NewProduct) -> Result<Product, CatalogError> {
        self.write(Method::POST, "api/products", input).await
    }

    /// Change a product's price.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the product does not exist.
    pub async fn set_price(&self, id: ProductId, price: Price) -> Result<Product, CatalogError> {
        let patch = ProductPatch {
            price: Some(price),
            ..ProductPatch::default()
        };
        self.write(Method::PATCH, &format!("api/products/{id}"), &patch)
            .await
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the product does not exist.
    pub async fn delete_product(&self, id: ProductId) -> Result<(), CatalogError> {
        self.delete(&format!("api/products/{id}")).await
    }

    /// List reviews.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn reviews(&self) -> Result<Vec<Review>, CatalogError> {
        self.get("api/reviews").await
    }
}

// =============================================================================
// Commands
// =============================================================================

/// Log every category.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn list_categories(client: &CatalogClient) -> Result<(), CatalogError> {
    let categories = client.categories().await?;
    for category in &categories {
        info!(id = %category.id, name = %category.name, "Category");
    }
    info!(count = categories.len(), "Categories listed");
    Ok(())
}

/// Create a category.
///
/// # Errors
///
/// Returns an error if the request fails or the name is rejected.
pub async fn add_category(client: &CatalogClient, name: &str) -> Result<(), CatalogError> {
    let category = client.create_category(name).await?;
    info!(id = %category.id, name = %category.name, "Category created");
    Ok(())
}

/// Delete a category. Its products stay in the catalog.
///
/// # Errors
///
/// Returns an error if the request fails or the category does not exist.
pub async fn delete_category(client: &CatalogClient, id: CategoryId) -> Result<(), CatalogError> {
    client.delete_category(id).await?;
    info!(%id, "Category deleted");
    Ok(())
}

/// Log every product, optionally only one category's.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn list_products(
    client: &CatalogClient,
    category_id: Option<CategoryId>,
) -> Result<(), CatalogError> {
    let products = client.products(category_id).await?;
    for product in &products {
        info!(
            id = %product.id,
            name = %product.name,
            price = %product.price,
            category_id = %product.category_id,
            "Product"
        );
    }
    info!(count = products.len(), "Products listed");
    Ok(())
}

/// Create a product.
///
/// # Errors
///
/// Returns an error if the request fails or the product is rejected.
pub async fn add_product(client: &CatalogClient, input: &NewProduct) -> Result<(), CatalogError> {
    let product = client.create_product(input).await?;
    info!(id = %product.id, name = %product.name, "Product created");
    Ok(())
}

/// Change a product's price.
///
/// # Errors
///
/// Returns an error if the request fails or the product does not exist.
pub async fn set_price(
    client: &CatalogClient,
    id: ProductId,
    price: Price,
) -> Result<(), CatalogError> {
    let product = client.set_price(id, price).await?;
    info!(id = %product.id, price = %product.price, "Price updated");
    Ok(())
}

/// Delete a product.
///
/// # Errors
///
/// Returns an error if the request fails or the product does not exist.
pub async fn delete_product(client: &CatalogClient, id: ProductId) -> Result<(), CatalogError> {
    client.delete_product(id).await?;
    info!(%id, "Product deleted");
    Ok(())
}

/// Log every review.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn list_reviews(client: &CatalogClient) -> Result<(), CatalogError> {
    let reviews = client.reviews().await?;
    for review in &reviews {
        info!(
            id = %review.id,
            customer = %review.customer_name,
            rating = review.rating,
            date = %review.date,
            "Review"
        );
    }
    info!(count = reviews.len(), "Reviews listed");
    Ok(())
}
