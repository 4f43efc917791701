//! # Inventory Statistics
//!
//! The three dashboard numbers shown above the product table.
//!
//! ```text
//! ┌──────────────────┬──────────────────┬──────────────────┐
//! │ Total productos  │   Stock total    │   Margen medio   │
//! │       len()      │   Σ stock        │ Σ(venta-compra)/n│
//! └──────────────────┴──────────────────┴──────────────────┘
//! ```
//!
//! Values are kept unrounded; [`format_price`] is the display helper.

use serde::Serialize;

use crate::types::Product;

/// Aggregates over the loaded product list.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct InventoryStats {
    /// Number of products.
    pub total: usize,
    /// Sum of `stock` across all products.
    pub stock: i64,
    /// Mean of `precio_de_venta - precio_de_compra`. Zero for an empty list.
    pub margin: f64,
}

/// Computes [`InventoryStats`] over `products`.
///
/// ## Example
/// ```rust
/// use beauty_core::{compute_stats, InventoryStats};
///
/// assert_eq!(
///     compute_stats(&[]),
///     InventoryStats { total: 0, stock: 0, margin: 0.0 }
/// );
/// ```
pub fn compute_stats(products: &[Product]) -> InventoryStats {
    if products.is_empty() {
        return InventoryStats::default();
    }

    // Saturates at i64::MAX.
    let stock = products
        .iter()
        .fold(0i64, |acc, p| acc.saturating_add(p.stock));
    let total_margin: f64 = products.iter().map(Product::margin).sum();

    InventoryStats {
        total: products.len(),
        stock,
        margin: total_margin / products.len() as f64,
    }
}

/// Formats an amount with two decimals and a dollar sign (`$3.50`).
pub fn format_price(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", -amount)
    } else {
        format!("${:.2}", amount)
    }
}

/// Cuts `text` to `max` characters, marking the cut with `…`.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProductStatus;

    fn product(cod: i64, stock: i64, purchase: f64, sale: f64) -> Product {
        Product {
            cod,
            name: format!("Producto {cod}"),
            category: "test".into(),
            description: String::new(),
            purchase_price: purchase,
            sale_price: sale,
            stock,
            supplier: "Acme".into(),
            status: ProductStatus::Active,
        }
    }

    #[test]
    fn test_empty_list() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.stock, 0);
        assert_eq!(stats.margin, 0.0);
    }

    #[test]
    fn test_two_products() {
        let stats = compute_stats(&[product(1, 3, 10.0, 15.0), product(2, 5, 20.0, 22.0)]);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.stock, 8);
        assert!((stats.margin - 3.5).abs() < 1e-9);
    }

    #[test]
    fn test_stock_sum_saturates() {
        let stats = compute_stats(&[product(1, i64::MAX, 1.0, 2.0), product(2, 1, 1.0, 2.0)]);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.stock, i64::MAX);
    }

    #[test]
    fn test_negative_margin_is_not_clamped() {
        let stats = compute_stats(&[product(1, 0, 10.0, 4.0)]);
        assert!((stats.margin + 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(3.5), "$3.50");
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(1234.567), "$1234.57");
        assert_eq!(format_price(-6.0), "-$6.00");
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("corto", 10), "corto");
        assert_eq!(truncate("Máscara de pestañas", 8), "Máscara…");
        assert_eq!(truncate("sombra de ojos", 6), "sombr…");
    }
}
