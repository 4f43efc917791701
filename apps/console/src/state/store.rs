//! # Product Store
//!
//! The console's cached copy of the backend catalog.
//!
//! ## Store Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store Mutations                                      │
//! │                                                                         │
//! │  Completion               Store Change                                 │
//! │  ──────────               ────────────                                 │
//! │                                                                         │
//! │  Loaded(list) ──────────► replace_all(list)   (wholesale)              │
//! │                                                                         │
//! │  Created(p) ────────────► prepend(p)          (head of the table)      │
//! │                                                                         │
//! │  Updated(p) ────────────► replace(p)          (same slot, by cod)      │
//! │                                                                         │
//! │  Deleted(cod) ──────────► remove(cod)                                  │
//! │                                                                         │
//! │  NOTE: Nothing is persisted. A full load always rebuilds the store.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use beauty_core::{compute_stats, InventoryStats, Product};

/// Ordered list of products as last seen from the backend.
#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    products: Vec<Product>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole list (full load).
    pub fn replace_all(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    /// Inserts a freshly created record at the head.
    pub fn prepend(&mut self, product: Product) {
        self.products.insert(0, product);
    }

    /// Replaces the record with the same `cod`, keeping its position.
    ///
    /// Returns `false` when no such record is loaded.
    pub fn replace(&mut self, product: Product) -> bool {
        match self.products.iter_mut().find(|p| p.cod == product.cod) {
            Some(slot) => {
                *slot = product;
                true
            }
            None => false,
        }
    }

    /// Removes the record with `cod`. Returns `false` if it was not loaded.
    pub fn remove(&mut self, cod: i64) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.cod != cod);
        self.products.len() != before
    }

    pub fn find(&self, cod: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.cod == cod)
    }

    /// Row index of `cod` in display order.
    pub fn position(&self, cod: i64) -> Option<usize> {
        self.products.iter().position(|p| p.cod == cod)
    }

    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Dashboard numbers over the current list.
    pub fn stats(&self) -> InventoryStats {
        compute_stats(&self.products)
    }
}
