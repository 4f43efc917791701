//! # Product Repository
//!
//! CRUD calls against `/productos`.
//!
//! ## List Decoding
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    GET /productos                                       │
//! │                                                                         │
//! │  Body is an array?                                                     │
//! │     ├── no  ──► Vec::new()   (the backend had nothing sensible to say) │
//! │     └── yes ──► decode each element                                    │
//! │                  ├── ok   ──► keep                                     │
//! │                  └── fail ──► warn!, skip                              │
//! │                                                                         │
//! │  Numeric fields are decoded leniently (null / "4.5" / junk → number),  │
//! │  so a skipped row is one without a usable `cod`.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde_json::Value;
use tracing::{debug, warn};

use beauty_core::{Product, ProductPayload};

use crate::client::{ensure_success, read_json, ApiClient};
use crate::error::ApiResult;

const COLLECTION: &str = "productos";

/// Repository for product endpoints.
///
/// ## Usage
/// ```rust,ignore
/// let repo = client.products();
///
/// let all = repo.list().await?;
/// let created = repo.create(&payload).await?;
/// repo.delete(created.cod).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    client: ApiClient,
}

impl ProductRepository {
    pub fn new(client: ApiClient) -> Self {
        ProductRepository { client }
    }

    /// Fetches the whole catalog.
    pub async fn list(&self) -> ApiResult<Vec<Product>> {
        let url = self.client.endpoint(COLLECTION)?;
        debug!(%url, "Listing products");

        let response = self.client.http().get(url).send().await?;
        let response = ensure_success(response, None).await?;
        let body: Value = read_json(response).await?;

        let products = decode_list(body);
        debug!(count = products.len(), "Products fetched");
        Ok(products)
    }

    /// Fetches one product by id.
    ///
    /// ## Returns
    /// * `Ok(Product)` - Found
    /// * `Err(ApiError::NotFound)` - Backend answered 404
    pub async fn get(&self, cod: i64) -> ApiResult<Product> {
        let url = self.item_url(cod)?;
        debug!(cod, "Fetching product");

        let response = self.client.http().get(url).send().await?;
        let response = ensure_success(response, Some(cod)).await?;
        read_json(response).await
    }

    /// Creates a product and returns the server's canonical record.
    pub async fn create(&self, payload: &ProductPayload) -> ApiResult<Product> {
        let url = self.client.endpoint(COLLECTION)?;
        debug!(name = %payload.name, "Creating product");

        let response = self.client.http().post(url).json(payload).send().await?;
        let response = ensure_success(response, None).await?;
        let product: Product = read_json(response).await?;

        debug!(cod = product.cod, "Product created");
        Ok(product)
    }

    /// Replaces every field of product `cod`.
    pub async fn update(&self, cod: i64, payload: &ProductPayload) -> ApiResult<Product> {
        let url = self.item_url(cod)?;
        debug!(cod, name = %payload.name, "Updating product");

        let response = self.client.http().put(url).json(payload).send().await?;
        let response = ensure_success(response, Some(cod)).await?;
        read_json(response).await
    }

    /// Deletes product `cod`. The response body is ignored.
    pub async fn delete(&self, cod: i64) -> ApiResult<()> {
        let url = self.item_url(cod)?;
        debug!(cod, "Deleting product");

        let response = self.client.http().delete(url).send().await?;
        ensure_success(response, Some(cod)).await?;
        Ok(())
    }

    fn item_url(&self, cod: i64) -> ApiResult<url::Url> {
        self.client.endpoint(&format!("{COLLECTION}/{cod}"))
    }
}

fn decode_list(body: Value) -> Vec<Product> {
    let Value::Array(items) = body else {
        warn!("GET /productos did not return an array; treating as empty");
        return Vec::new();
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<Product>(item) {
            Ok(product) => Some(product),
            Err(e) => {
                warn!(index, error = %e, "Skipping undecodable product row");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_list_skips_rows_without_cod() {
        let products = decode_list(json!([
            {"cod": 1, "nombre": "Labial", "stock": 3},
            {"nombre": "sin id"},
            {"cod": 2, "nombre": "Rimel", "stock": null}
        ]));

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].cod, 1);
        assert_eq!(products[1].stock, 0);
    }

    #[test]
    fn test_decode_list_non_array_is_empty() {
        assert!(decode_list(json!({"detail": "oops"})).is_empty());
        assert!(decode_list(Value::Null).is_empty());
    }
}
