//! # Headless Commands
//!
//! Scriptable subcommands that reuse the API client and the statistics
//! aggregator without starting the TUI.
//!
//! ```text
//! beauty-console list [--json]      table or JSON array of products
//! beauty-console get <ID> [--json]  one product
//! beauty-console stats [--json]     Total productos / Stock total / Margen medio
//! beauty-console ping               backend health check
//! ```
//!
//! Output goes to the supplied writer (stdout in production); logs go to
//! stderr so `--json` output stays machine-readable.

use std::io::Write;

use tracing::{debug, info};

use beauty_api::{ApiClient, ProductBackend};
use beauty_core::{compute_stats, format_price, truncate, Product};

use crate::error::AppResult;

/// Prints every product.
pub async fn list<B, W>(backend: &B, json: bool, out: &mut W) -> AppResult<()>
where
    B: ProductBackend + ?Sized,
    W: Write,
{
    let products = backend.list_products().await?;
    debug!(count = products.len(), "Listing products");

    if json {
        serde_json::to_writer_pretty(&mut *out, &products)?;
        writeln!(out)?;
        return Ok(());
    }

    if products.is_empty() {
        writeln!(out, "No hay productos aun. Crea el primero.")?;
        return Ok(());
    }

    write_table_header(out)?;
    for product in &products {
        write_table_row(out, product)?;
    }
    Ok(())
}

/// Prints one product.
pub async fn get<B, W>(backend: &B, cod: i64, json: bool, out: &mut W) -> AppResult<()>
where
    B: ProductBackend + ?Sized,
    W: Write,
{
    let product = backend.get_product(cod).await?;

    if json {
        serde_json::to_writer_pretty(&mut *out, &product)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{}", product.label())?;
    writeln!(out, "  Categoria:   {}", product.category)?;
    writeln!(out, "  Descripcion: {}", product.description)?;
    writeln!(out, "  Compra:      {}", format_price(product.purchase_price))?;
    writeln!(out, "  Venta:       {}", format_price(product.sale_price))?;
    writeln!(out, "  Stock:       {}", product.stock)?;
    writeln!(out, "  Proveedor:   {}", product.supplier)?;
    writeln!(out, "  Estado:      {}", product.status)?;
    Ok(())
}

/// Prints the dashboard numbers.
pub async fn stats<B, W>(backend: &B, json: bool, out: &mut W) -> AppResult<()>
where
    B: ProductBackend + ?Sized,
    W: Write,
{
    let products = backend.list_products().await?;
    let stats = compute_stats(&products);

    if json {
        serde_json::to_writer_pretty(&mut *out, &stats)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "Total productos: {}", stats.total)?;
    writeln!(out, "Stock total:     {}", stats.stock)?;
    writeln!(out, "Margen medio:    {}", format_price(stats.margin))?;
    Ok(())
}

/// Checks the backend answers.
pub async fn ping<W: Write>(client: &ApiClient, out: &mut W) -> AppResult<()> {
    client.ping().await?;
    info!(url = %client.base_url(), "Backend reachable");
    writeln!(out, "pong ({})", client.base_url())?;
    Ok(())
}

fn write_table_header<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(
        out,
        "{:>5}  {:<28}  {:<16}  {:>6}  {:>10}  {:<9}",
        "ID", "Producto", "Categoria", "Stock", "Venta", "Estado"
    )
}

fn write_table_row<W: Write>(out: &mut W, product: &Product) -> std::io::Result<()> {
    writeln!(
        out,
        "{:>5}  {:<28}  {:<16}  {:>6}  {:>10}  {:<9}",
        product.cod,
        truncate(&product.name, 28),
        truncate(&product.category, 16),
        product.stock,
        format_price(product.sale_price),
        product.status
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{product, FakeBackend};

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[tokio::test]
    async fn test_list_table() {
        let backend = FakeBackend::with_products(vec![product(1, "Labial"), product(2, "Rimel")]);
        let mut buf = Vec::new();

        list(&backend, false, &mut buf).await.unwrap();

        let text = output(buf);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Producto"));
        assert!(lines[1].contains("Labial"));
        assert!(lines[2].contains("$15.00"));
    }

    #[tokio::test]
    async fn test_list_empty_message() {
        let backend = FakeBackend::default();
        let mut buf = Vec::new();
        list(&backend, false, &mut buf).await.unwrap();
        assert_eq!(output(buf).trim(), "No hay productos aun. Crea el primero.");
    }

    #[tokio::test]
    async fn test_list_json_uses_wire_names() {
        let backend = FakeBackend::with_products(vec![product(1, "Labial")]);
        let mut buf = Vec::new();

        list(&backend, true, &mut buf).await.unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["nombre"], "Labial");
        assert_eq!(value[0]["precio_de_venta"], 15.0);
    }

    #[tokio::test]
    async fn test_get_not_found_propagates() {
        let backend = FakeBackend::default();
        let mut buf = Vec::new();
        let err = get(&backend, 9, false, &mut buf).await.unwrap_err();
        assert_eq!(err.to_string(), "Producto con ID 9 no encontrado");
    }

    #[tokio::test]
    async fn test_stats_output() {
        let mut a = product(1, "a");
        a.stock = 3;
        a.purchase_price = 10.0;
        a.sale_price = 15.0;
        let mut b = product(2, "b");
        b.stock = 5;
        b.purchase_price = 20.0;
        b.sale_price = 22.0;
        let backend = FakeBackend::with_products(vec![a, b]);
        let mut buf = Vec::new();

        stats(&backend, false, &mut buf).await.unwrap();

        let text = output(buf);
        assert!(text.contains("Total productos: 2"));
        assert!(text.contains("Stock total:     8"));
        assert!(text.contains("Margen medio:    $3.50"));
    }
}
