//! In-memory backend and fixtures shared by the unit tests.

use std::sync::Mutex;

use async_trait::async_trait;

use beauty_api::{ApiError, ApiResult, ProductBackend};
use beauty_core::{Product, ProductPayload, ProductStatus};

pub fn product(cod: i64, name: &str) -> Product {
    Product {
        cod,
        name: name.to_string(),
        category: "maquillaje".into(),
        description: String::new(),
        purchase_price: 10.0,
        sale_price: 15.0,
        stock: 3,
        supplier: "Acme".into(),
        status: ProductStatus::Active,
    }
}

/// Behaves like the real backend over a `Vec`, and records every call.
#[derive(Default)]
pub struct FakeBackend {
    products: Mutex<Vec<Product>>,
    calls: Mutex<Vec<String>>,
    fail_next: Mutex<Option<ApiError>>,
}

impl FakeBackend {
    pub fn with_products(products: Vec<Product>) -> Self {
        FakeBackend {
            products: Mutex::new(products),
            ..Self::default()
        }
    }

    /// Makes the next call fail with `err` instead of touching the data.
    pub fn fail_next(&self, err: ApiError) {
        *self.fail_next.lock().unwrap() = Some(err);
    }

    /// Calls made so far, e.g. `["list", "delete 3"]`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, call: String) -> ApiResult<()> {
        self.calls.lock().unwrap().push(call);
        match self.fail_next.lock().unwrap().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn not_found(cod: i64) -> ApiError {
        ApiError::NotFound {
            cod,
            detail: Some(format!("Producto con ID {cod} no encontrado")),
        }
    }
}

#[async_trait]
impl ProductBackend for FakeBackend {
    async fn list_products(&self) -> ApiResult<Vec<Product>> {
        self.record("list".into())?;
        Ok(self.products.lock().unwrap().clone())
    }

    async fn get_product(&self, cod: i64) -> ApiResult<Product> {
        self.record(format!("get {cod}"))?;
        self.products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.cod == cod)
            .cloned()
            .ok_or_else(|| Self::not_found(cod))
    }

    async fn create_product(&self, payload: &ProductPayload) -> ApiResult<Product> {
        self.record(format!("create {}", payload.name))?;
        let mut products = self.products.lock().unwrap();
        let cod = products.iter().map(|p| p.cod).max().unwrap_or(0) + 1;
        let product = payload.clone().into_product(cod);
        products.push(product.clone());
        Ok(product)
    }

    async fn update_product(&self, cod: i64, payload: &ProductPayload) -> ApiResult<Product> {
        self.record(format!("update {cod}"))?;
        let mut products = self.products.lock().unwrap();
        let slot = products
            .iter_mut()
            .find(|p| p.cod == cod)
            .ok_or_else(|| Self::not_found(cod))?;
        *slot = payload.clone().into_product(cod);
        Ok(slot.clone())
    }

    async fn delete_product(&self, cod: i64) -> ApiResult<()> {
        self.record(format!("delete {cod}"))?;
        let mut products = self.products.lock().unwrap();
        let before = products.len();
        products.retain(|p| p.cod != cod);
        if products.len() == before {
            return Err(Self::not_found(cod));
        }
        Ok(())
    }
}
