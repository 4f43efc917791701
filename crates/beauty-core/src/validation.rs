//! # Validation Module
//!
//! Turns raw form text into typed request payloads.
//!
//! ## Normalization Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Draft → Payload                                     │
//! │                                                                         │
//! │  nombre, categoria, proveedor ── trim ── empty? ──► Required            │
//! │  descripcion ──────────────────── trim (may be empty)                   │
//! │  precio_de_compra, precio_de_venta ── parse f64 ── NaN/inf? ─► Invalid │
//! │                                                 └─ < 0?     ─► Negative │
//! │  stock ──────────────────────── parse i64 ── fails? ──► InvalidNumber   │
//! │                                             └─ < 0? ──► Negative        │
//! │  estado ─────────────────────── trim ── empty? ──► "Activo"             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Numbers are parsed strictly: a draft that does not parse is rejected here
//! and never reaches the backend.

use crate::error::ValidationError;
use crate::types::{DraftField, ProductDraft, ProductPayload, ProductStatus};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Draft Normalization
// =============================================================================

/// Validates a draft and builds the payload sent to the backend.
///
/// Fields are checked in form order, so the first error reported is the
/// top-most offending field on screen.
pub fn normalize_draft(draft: &ProductDraft) -> ValidationResult<ProductPayload> {
    let name = require_text(DraftField::Name, &draft.name)?;
    let category = require_text(DraftField::Category, &draft.category)?;
    let description = draft.description.trim().to_string();
    let purchase_price = parse_price(DraftField::PurchasePrice, &draft.purchase_price)?;
    let sale_price = parse_price(DraftField::SalePrice, &draft.sale_price)?;
    let stock = parse_stock(DraftField::Stock, &draft.stock)?;
    let supplier = require_text(DraftField::Supplier, &draft.supplier)?;
    let status = normalize_status(&draft.status);

    Ok(ProductPayload {
        name,
        category,
        description,
        purchase_price,
        sale_price,
        stock,
        supplier,
        status,
    })
}

// =============================================================================
// Field Validators
// =============================================================================

/// Trims a text field and rejects it if nothing is left.
pub fn require_text(field: DraftField, value: &str) -> ValidationResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(value.to_string())
}

/// Parses a non-negative, finite price.
///
/// ## Example
/// ```rust
/// use beauty_core::validation::parse_price;
/// use beauty_core::DraftField;
///
/// assert_eq!(parse_price(DraftField::SalePrice, " 3.50 ").unwrap(), 3.5);
/// assert!(parse_price(DraftField::SalePrice, "abc").is_err());
/// assert!(parse_price(DraftField::SalePrice, "-1").is_err());
/// ```
pub fn parse_price(field: DraftField, value: &str) -> ValidationResult<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required { field });
    }

    // f64::from_str accepts "NaN" and "inf"; neither is a price.
    let parsed = trimmed
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
        .ok_or_else(|| ValidationError::InvalidNumber {
            field,
            value: trimmed.to_string(),
        })?;

    if parsed < 0.0 {
        return Err(ValidationError::Negative { field });
    }
    Ok(parsed)
}

/// Parses a non-negative integer stock count.
pub fn parse_stock(field: DraftField, value: &str) -> ValidationResult<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required { field });
    }

    let parsed = trimmed
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidNumber {
            field,
            value: trimmed.to_string(),
        })?;

    if parsed < 0 {
        return Err(ValidationError::Negative { field });
    }
    Ok(parsed)
}

/// Blank `estado` becomes `Activo`.
pub fn normalize_status(value: &str) -> ProductStatus {
    ProductStatus::from(value.trim())
}

/// Parses the id typed into the search box.
///
/// ## Rules
/// - Empty input is `Required` (the caller shows "Introduce un ID para buscar.")
/// - Must be an integer >= 1
pub fn parse_product_id(value: &str) -> ValidationResult<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::InvalidId {
            value: String::new(),
        });
    }

    match trimmed.parse::<i64>() {
        Ok(id) if id >= 1 => Ok(id),
        _ => Err(ValidationError::InvalidId {
            value: trimmed.to_string(),
        }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
