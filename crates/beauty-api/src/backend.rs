//! # Backend Seam
//!
//! The async trait the console's controller is written against. The HTTP
//! [`ProductRepository`] is the production implementation; tests plug in an
//! in-memory one.

use async_trait::async_trait;

use beauty_core::{Product, ProductPayload};

use crate::error::ApiResult;
use crate::repository::product::ProductRepository;

/// Product CRUD as seen by the controller.
#[async_trait]
pub trait ProductBackend: Send + Sync {
    async fn list_products(&self) -> ApiResult<Vec<Product>>;

    async fn get_product(&self, cod: i64) -> ApiResult<Product>;

    async fn create_product(&self, payload: &ProductPayload) -> ApiResult<Product>;

    async fn update_product(&self, cod: i64, payload: &ProductPayload) -> ApiResult<Product>;

    async fn delete_product(&self, cod: i64) -> ApiResult<()>;
}

#[async_trait]
impl ProductBackend for ProductRepository {
    async fn list_products(&self) -> ApiResult<Vec<Product>> {
        self.list().await
    }

    async fn get_product(&self, cod: i64) -> ApiResult<Product> {
        self.get(cod).await
    }

    async fn create_product(&self, payload: &ProductPayload) -> ApiResult<Product> {
        self.create(payload).await
    }

    async fn update_product(&self, cod: i64, payload: &ProductPayload) -> ApiResult<Product> {
        self.update(cod, payload).await
    }

    async fn delete_product(&self, cod: i64) -> ApiResult<()> {
        self.delete(cod).await
    }
}
